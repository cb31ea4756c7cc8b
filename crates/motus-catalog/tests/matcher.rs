use motus_catalog::matcher::{
    HIGH_PAIN_THRESHOLD, rank_catalog, safety_filter, score_exercise, weights,
};
use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory, SymptomQuery};

fn exercise(
    id: &str,
    body_parts: &[&str],
    pain_types: &[&str],
    conditions: &[&str],
    difficulty: Difficulty,
    max_pain_level: u8,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        body_parts: body_parts.iter().map(|s| s.to_string()).collect(),
        pain_types: pain_types.iter().map(|s| s.to_string()).collect(),
        conditions: conditions.iter().map(|s| s.to_string()).collect(),
        difficulty,
        category: ExerciseCategory::Stretch,
        dosage: Dosage {
            sets: 2,
            reps: Some(10),
            duration_secs: None,
            frequency: "daily".to_string(),
            hold_secs: None,
            rest_secs: None,
        },
        contraindications: Vec::new(),
        red_flags: Vec::new(),
        progression_tips: Vec::new(),
        max_pain_level,
        display_order: 0,
        active: true,
    }
}

fn query(body_part: &str, pain_level: u8, pain_type: &str, symptoms: &[&str]) -> SymptomQuery {
    SymptomQuery {
        body_part: body_part.to_string(),
        pain_level,
        pain_type: pain_type.to_string(),
        duration: "2 weeks".to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
    }
}

/// Every component awarded, at a pain level where the sum stays in
/// range: 40 + 20 + 15 + 20 + 5 = 100.
#[test]
fn components_sum_to_score() {
    let ex = exercise(
        "a",
        &["lower back"],
        &["dull"],
        &["sciatica"],
        Difficulty::Beginner,
        8,
    );
    let q = query("lower back", 4, "dull", &["sciatica"]);
    let result = score_exercise(&ex, &q);
    let expected = weights::BODY_PART
        + weights::PAIN_TYPE
        + weights::DIFFICULTY_STANDARD
        + weights::PAIN_SAFETY
        + weights::PER_SYMPTOM;
    assert_eq!(result.score as u32, expected);
    assert_eq!(result.score, 100);
    assert_eq!(result.reasons.len(), 5);
}

#[test]
fn score_never_exceeds_100() {
    // High pain + beginner awards the larger difficulty component;
    // with two matched symptoms the raw sum would be 110.
    let ex = exercise(
        "a",
        &["lower back"],
        &["radiating"],
        &["sciatica", "nerve root irritation"],
        Difficulty::Beginner,
        8,
    );
    let q = query(
        "lower back",
        8,
        "radiating",
        &["sciatica", "nerve root irritation"],
    );
    let result = score_exercise(&ex, &q);
    assert_eq!(result.score, 100);
}

#[test]
fn ranked_output_is_sorted_permutation() {
    let catalog = vec![
        exercise("a", &["knee"], &["dull"], &[], Difficulty::Beginner, 8),
        exercise("b", &["hip"], &["sharp"], &[], Difficulty::Advanced, 3),
        exercise("c", &["knee"], &["aching"], &[], Difficulty::Intermediate, 6),
        exercise("d", &["neck"], &["stiffness"], &[], Difficulty::Beginner, 9),
    ];
    let q = query("knee", 5, "dull", &[]);
    let ranked = rank_catalog(&catalog, &q);

    assert_eq!(ranked.len(), catalog.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    let mut ids: Vec<&str> = ranked.iter().map(|r| r.exercise_id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

/// Ties keep catalog order — the sort must be stable.
#[test]
fn ties_keep_catalog_order() {
    let catalog = vec![
        exercise("first", &["knee"], &[], &[], Difficulty::Beginner, 8),
        exercise("second", &["knee"], &[], &[], Difficulty::Beginner, 8),
    ];
    let q = query("knee", 5, "", &[]);
    let ranked = rank_catalog(&catalog, &q);
    assert_eq!(ranked[0].exercise_id, "first");
    assert_eq!(ranked[1].exercise_id, "second");
    assert_eq!(ranked[0].score, ranked[1].score);
}

/// An exercise whose limit is below the reported pain never earns the
/// safety bonus, whatever the other fields do.
#[test]
fn unsafe_exercise_never_gets_safety_bonus() {
    let ex = exercise(
        "a",
        &["knee"],
        &["sharp"],
        &["runner's knee"],
        Difficulty::Beginner,
        4,
    );
    let q = query("knee", 5, "sharp", &["runner's knee"]);
    let with_unsafe_pain = score_exercise(&ex, &q);

    let q_at_limit = query("knee", 4, "sharp", &["runner's knee"]);
    let at_limit = score_exercise(&ex, &q_at_limit);

    assert_eq!(
        at_limit.score as u32 - with_unsafe_pain.score as u32,
        weights::PAIN_SAFETY
    );
    assert!(
        !with_unsafe_pain
            .reasons
            .iter()
            .any(|r| r.contains("pain tolerance"))
    );
}

/// The limit is inclusive: pain exactly at max still earns the bonus.
#[test]
fn safety_bonus_is_inclusive_at_the_limit() {
    let ex = exercise("a", &[], &[], &[], Difficulty::Intermediate, 6);
    let at = score_exercise(&ex, &query("elsewhere", 6, "", &[]));
    let above = score_exercise(&ex, &query("elsewhere", 7, "", &[]));
    assert_eq!(at.score as u32, weights::DIFFICULTY_STANDARD + weights::PAIN_SAFETY);
    assert_eq!(above.score, 0);
}

#[test]
fn body_part_alias_resolves_before_matching() {
    let ex = exercise("a", &["lower back"], &[], &[], Difficulty::Advanced, 0);
    let q = query("lumbar", 9, "", &[]);
    let result = score_exercise(&ex, &q);
    assert_eq!(result.score as u32, weights::BODY_PART);
}

#[test]
fn pain_type_splits_on_commas_and_slashes() {
    let ex = exercise("a", &[], &["burning"], &[], Difficulty::Advanced, 0);
    let q = query("elsewhere", 9, "sharp, shooting / burning", &[]);
    let result = score_exercise(&ex, &q);
    assert_eq!(result.score as u32, weights::PAIN_TYPE);
}

#[test]
fn high_pain_prefers_beginner_difficulty() {
    let beginner = exercise("a", &[], &[], &[], Difficulty::Beginner, 0);
    let advanced = exercise("b", &[], &[], &[], Difficulty::Advanced, 0);
    let q = query("elsewhere", HIGH_PAIN_THRESHOLD, "", &[]);
    assert_eq!(
        score_exercise(&beginner, &q).score as u32,
        weights::DIFFICULTY_HIGH_PAIN
    );
    assert_eq!(score_exercise(&advanced, &q).score, 0);
}

#[test]
fn symptom_bonus_caps_at_two_matches() {
    let ex = exercise(
        "a",
        &[],
        &[],
        &["sciatica", "nerve root irritation", "disc herniation"],
        Difficulty::Advanced,
        0,
    );
    let q = query(
        "elsewhere",
        9,
        "",
        &["sciatica", "nerve root irritation", "disc herniation"],
    );
    let result = score_exercise(&ex, &q);
    assert_eq!(result.score as u32, weights::SYMPTOM_CAP);
}

#[test]
fn duplicate_symptoms_count_once() {
    let ex = exercise("a", &[], &[], &["sciatica"], Difficulty::Advanced, 0);
    let q = query("elsewhere", 9, "", &["sciatica", "Sciatica", " sciatica "]);
    let result = score_exercise(&ex, &q);
    assert_eq!(result.score as u32, weights::PER_SYMPTOM);
}

/// Chronicity is detected but must not change the score (known no-op
/// pending a product decision).
#[test]
fn chronic_duration_does_not_affect_score() {
    let ex = exercise("a", &["knee"], &["dull"], &[], Difficulty::Beginner, 8);
    let mut q = query("knee", 5, "dull", &[]);
    let acute = score_exercise(&ex, &q);
    q.duration = "6 months".to_string();
    let chronic = score_exercise(&ex, &q);
    assert_eq!(acute.score, chronic.score);
}

/// Malformed fields degrade to zero contributions, never a failure.
#[test]
fn empty_query_degrades_to_neutral_scoring() {
    let ex = exercise("a", &["knee"], &["dull"], &[], Difficulty::Advanced, 10);
    let q = SymptomQuery {
        body_part: String::new(),
        pain_level: 0,
        pain_type: String::new(),
        duration: String::new(),
        symptoms: vec![String::new()],
    };
    let result = score_exercise(&ex, &q);
    // Only the safety bonus applies at pain 0.
    assert_eq!(result.score as u32, weights::PAIN_SAFETY);
}

#[test]
fn safety_filter_drops_unsafe_exercises() {
    let catalog = vec![
        exercise("safe", &["knee"], &[], &[], Difficulty::Beginner, 8),
        exercise("unsafe", &["knee"], &[], &[], Difficulty::Beginner, 4),
    ];
    let q = query("knee", 6, "", &[]);
    let ranked = rank_catalog(&catalog, &q);
    assert_eq!(ranked.len(), 2);

    let filtered = safety_filter(ranked, &catalog, q.pain_level);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].exercise_id, "safe");
}
