use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory};

use super::strs;

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "wrist_extensor_stretch".to_string(),
            name: "Wrist Extensor Stretch".to_string(),
            description: "With the elbow straight and palm down, use the other hand \
                          to bend the wrist downward until the forearm stretches."
                .to_string(),
            body_parts: strs(&["elbow", "wrist"]),
            pain_types: strs(&["aching", "burning"]),
            conditions: strs(&["tennis elbow", "lateral epicondylitis"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Stretch,
            dosage: Dosage {
                sets: 3,
                reps: Some(3),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(30),
                rest_secs: Some(15),
            },
            contraindications: strs(&[]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Add gentle wrist flexion range as pain settles"]),
            max_pain_level: 8,
            display_order: 70,
            active: true,
        },
        Exercise {
            id: "eccentric_wrist_extension".to_string(),
            name: "Eccentric Wrist Extension".to_string(),
            description: "Holding a light weight palm down, lower the wrist slowly \
                          over five seconds, then assist it back up with the other hand."
                .to_string(),
            body_parts: strs(&["elbow", "wrist"]),
            pain_types: strs(&["aching"]),
            conditions: strs(&["tennis elbow", "extensor tendinopathy"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(10),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: None,
                rest_secs: Some(60),
            },
            contraindications: strs(&["acute inflammatory flare"]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Increase the weight in half-kilogram steps"]),
            max_pain_level: 5,
            display_order: 71,
            active: true,
        },
        Exercise {
            id: "median_nerve_glide".to_string(),
            name: "Median Nerve Glide".to_string(),
            description: "With the arm out to the side, alternate between wrist \
                          extension with the head tilted away and wrist flexion with \
                          the head tilted toward the arm."
                .to_string(),
            body_parts: strs(&["wrist", "elbow"]),
            pain_types: strs(&["tingling", "burning", "numbness"]),
            conditions: strs(&["carpal tunnel syndrome", "nerve entrapment"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::NerveGlide,
            dosage: Dosage {
                sets: 2,
                reps: Some(10),
                duration_secs: None,
                frequency: "2x daily".to_string(),
                hold_secs: None,
                rest_secs: Some(30),
            },
            contraindications: strs(&["progressive hand weakness"]),
            red_flags: strs(&["thenar muscle wasting"]),
            progression_tips: strs(&["Keep glides symptom-free; reduce range if tingling lingers"]),
            max_pain_level: 7,
            display_order: 72,
            active: true,
        },
    ]
}
