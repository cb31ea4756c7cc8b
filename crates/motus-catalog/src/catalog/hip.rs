use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory};

use super::strs;

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "glute_bridge".to_string(),
            name: "Glute Bridge".to_string(),
            description: "Lying on your back with knees bent, lift the hips until the \
                          trunk and thighs form a straight line."
                .to_string(),
            body_parts: strs(&["hip", "lower back"]),
            pain_types: strs(&["dull", "aching"]),
            conditions: strs(&["gluteal weakness", "hip osteoarthritis"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(12),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(3),
                rest_secs: Some(45),
            },
            contraindications: strs(&[]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Progress to single-leg bridges"]),
            max_pain_level: 7,
            display_order: 50,
            active: true,
        },
        Exercise {
            id: "figure_four_stretch".to_string(),
            name: "Figure-Four Piriformis Stretch".to_string(),
            description: "Lying on your back, cross one ankle over the opposite knee \
                          and draw that thigh toward the chest."
                .to_string(),
            body_parts: strs(&["hip"]),
            pain_types: strs(&["deep", "radiating"]),
            conditions: strs(&["piriformis syndrome", "sciatica"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Stretch,
            dosage: Dosage {
                sets: 2,
                reps: Some(3),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(30),
                rest_secs: Some(15),
            },
            contraindications: strs(&["recent hip replacement"]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Pull gently; buttock stretch, not knee strain"]),
            max_pain_level: 7,
            display_order: 51,
            active: true,
        },
        Exercise {
            id: "clamshell".to_string(),
            name: "Clamshell".to_string(),
            description: "Side-lying with knees bent and feet together, lift the top \
                          knee without rolling the pelvis back."
                .to_string(),
            body_parts: strs(&["hip"]),
            pain_types: strs(&["aching"]),
            conditions: strs(&["gluteal weakness", "it band syndrome"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(15),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: None,
                rest_secs: Some(45),
            },
            contraindications: strs(&[]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Add a loop band above the knees"]),
            max_pain_level: 6,
            display_order: 52,
            active: true,
        },
    ]
}
