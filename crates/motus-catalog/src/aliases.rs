//! Body-part synonym resolution. Intake forms accept free text, so
//! anatomical and colloquial names are folded onto the catalog's
//! canonical region tags before matching.

/// Alias → canonical region tag. Canonical tags are the lowercase
/// strings used in `Exercise::body_parts`.
const ALIASES: &[(&str, &str)] = &[
    ("lumbar", "lower back"),
    ("lumbar spine", "lower back"),
    ("low back", "lower back"),
    ("tailbone", "lower back"),
    ("cervical", "neck"),
    ("cervical spine", "neck"),
    ("rotator cuff", "shoulder"),
    ("shoulder blade", "shoulder"),
    ("patella", "knee"),
    ("kneecap", "knee"),
    ("achilles", "ankle"),
    ("heel", "foot"),
    ("plantar", "foot"),
    ("forearm", "elbow"),
    ("carpal", "wrist"),
];

/// Resolve a query body-part string to its canonical region tag.
/// Falls back to the lowercased raw input when no alias matches.
pub fn canonical_body_part(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(normalized)
}
