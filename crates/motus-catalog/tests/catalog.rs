use std::collections::HashSet;

use motus_catalog::aliases::canonical_body_part;
use motus_catalog::{all_exercises, exercises_for_body_part, get_exercise};

#[test]
fn catalog_ids_are_unique() {
    let mut seen = HashSet::new();
    for exercise in all_exercises() {
        assert!(seen.insert(exercise.id.as_str()), "duplicate id {}", exercise.id);
    }
}

#[test]
fn pain_limits_stay_on_the_scale() {
    for exercise in all_exercises() {
        assert!(
            exercise.max_pain_level <= 10,
            "{} has max_pain_level {}",
            exercise.id,
            exercise.max_pain_level
        );
    }
}

#[test]
fn every_entry_has_a_body_part_and_dosage_frequency() {
    for exercise in all_exercises() {
        assert!(!exercise.body_parts.is_empty(), "{} has no body parts", exercise.id);
        assert!(
            !exercise.dosage.frequency.is_empty(),
            "{} has no dosage frequency",
            exercise.id
        );
    }
}

#[test]
fn lookup_by_id() {
    let exercise = get_exercise("pendulum_swing").expect("pendulum_swing in catalog");
    assert_eq!(exercise.name, "Pendulum Swing");
    assert!(get_exercise("does_not_exist").is_none());
}

#[test]
fn body_part_search_is_active_only_and_ordered() {
    let knee = exercises_for_body_part("knee");
    assert!(!knee.is_empty());
    for pair in knee.windows(2) {
        assert!(pair[0].display_order <= pair[1].display_order);
    }
    // deep_squat_hold is tagged "knee" but inactive.
    assert!(knee.iter().all(|e| e.id != "deep_squat_hold"));
    assert!(knee.iter().all(|e| e.active));
}

#[test]
fn aliases_fold_onto_canonical_regions() {
    assert_eq!(canonical_body_part("Lumbar"), "lower back");
    assert_eq!(canonical_body_part("  cervical spine "), "neck");
    assert_eq!(canonical_body_part("kneecap"), "knee");
    // No alias: the raw string is its own key, lowercased.
    assert_eq!(canonical_body_part("Knee"), "knee");
    assert_eq!(canonical_body_part("rib cage"), "rib cage");
}
