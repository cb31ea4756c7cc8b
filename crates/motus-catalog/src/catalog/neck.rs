use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory};

use super::strs;

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "chin_tuck".to_string(),
            name: "Chin Tuck".to_string(),
            description: "Sitting tall, draw the chin straight back to make a double \
                          chin, lengthening the back of the neck."
                .to_string(),
            body_parts: strs(&["neck"]),
            pain_types: strs(&["aching", "stiffness"]),
            conditions: strs(&["forward head posture", "cervicogenic headache"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Postural,
            dosage: Dosage {
                sets: 3,
                reps: Some(10),
                duration_secs: None,
                frequency: "every 2 hours at a desk".to_string(),
                hold_secs: Some(3),
                rest_secs: None,
            },
            contraindications: strs(&["recent cervical fusion"]),
            red_flags: strs(&["dizziness or visual disturbance with neck movement"]),
            progression_tips: strs(&["Add gentle overpressure with two fingers"]),
            max_pain_level: 8,
            display_order: 20,
            active: true,
        },
        Exercise {
            id: "upper_trap_stretch".to_string(),
            name: "Upper Trapezius Stretch".to_string(),
            description: "Tilt the ear toward one shoulder, using the same-side hand \
                          to add a gentle stretch to the opposite upper trapezius."
                .to_string(),
            body_parts: strs(&["neck", "shoulder"]),
            pain_types: strs(&["tight", "aching"]),
            conditions: strs(&["muscle tension", "whiplash"]),
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
            contraindications: strs(&["cervical instability"]),
            red_flags: strs(&["arm numbness reproduced by the stretch"]),
            progression_tips: strs(&["Breathe out slowly as the stretch deepens"]),
            max_pain_level: 7,
            display_order: 21,
            active: true,
        },
        Exercise {
            id: "scapular_retraction".to_string(),
            name: "Scapular Retraction".to_string(),
            description: "Squeeze the shoulder blades down and together without \
                          shrugging, as if pinching a pencil between them."
                .to_string(),
            body_parts: strs(&["neck", "shoulder"]),
            pain_types: strs(&["aching"]),
            conditions: strs(&["postural strain", "upper crossed syndrome"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Postural,
            dosage: Dosage {
                sets: 3,
                reps: Some(12),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(5),
                rest_secs: Some(30),
            },
            contraindications: strs(&[]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Progress to banded rows once holds feel easy"]),
            max_pain_level: 7,
            display_order: 22,
            active: true,
        },
    ]
}
