//! The embedded exercise catalog. One module per body region, in the
//! order regions appear on the intake form. Entries are reference
//! data: loaded once, read-only for the life of the process.

mod ankle_foot;
mod elbow_wrist;
mod hip;
mod knee;
mod lower_back;
mod neck;
mod shoulder;

use std::sync::LazyLock;

use motus_core::models::Exercise;

static CATALOG: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    let mut entries = Vec::new();
    entries.extend(lower_back::exercises());
    entries.extend(neck::exercises());
    entries.extend(shoulder::exercises());
    entries.extend(knee::exercises());
    entries.extend(hip::exercises());
    entries.extend(ankle_foot::exercises());
    entries.extend(elbow_wrist::exercises());
    entries
});

/// The full catalog, in display order grouped by region.
pub fn all_exercises() -> &'static [Exercise] {
    &CATALOG
}

/// Look up an exercise by ID.
pub fn get_exercise(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.id == id)
}

/// Active exercises tagged with the given body part, ordered by
/// display order.
pub fn exercises_for_body_part(part: &str) -> Vec<&'static Exercise> {
    let part = part.trim().to_lowercase();
    if part.is_empty() {
        return Vec::new();
    }
    let mut matches: Vec<&Exercise> = CATALOG
        .iter()
        .filter(|e| e.active && e.body_parts.iter().any(|tag| tag.contains(&part)))
        .collect();
    matches.sort_by_key(|e| e.display_order);
    matches
}

/// Shorthand for the string-list fields on catalog entries.
pub(crate) fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
