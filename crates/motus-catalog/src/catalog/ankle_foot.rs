use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory};

use super::strs;

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "ankle_alphabet".to_string(),
            name: "Ankle Alphabet".to_string(),
            description: "With the leg supported, trace the letters of the alphabet \
                          in the air with the big toe."
                .to_string(),
            body_parts: strs(&["ankle"]),
            pain_types: strs(&["stiffness", "aching"]),
            conditions: strs(&["ankle sprain", "post-immobilization stiffness"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Mobility,
            dosage: Dosage {
                sets: 2,
                reps: Some(1),
                duration_secs: None,
                frequency: "3x daily".to_string(),
                hold_secs: None,
                rest_secs: Some(30),
            },
            contraindications: strs(&["suspected fracture"]),
            red_flags: strs(&["inability to bear weight for four steps"]),
            progression_tips: strs(&["Move to standing weight shifts when comfortable"]),
            max_pain_level: 8,
            display_order: 60,
            active: true,
        },
        Exercise {
            id: "calf_raise".to_string(),
            name: "Calf Raise".to_string(),
            description: "Rise slowly onto the balls of both feet, pause, and lower \
                          with control over three seconds."
                .to_string(),
            body_parts: strs(&["ankle", "foot"]),
            pain_types: strs(&["aching", "burning"]),
            conditions: strs(&["achilles tendinopathy", "calf weakness"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(15),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(2),
                rest_secs: Some(60),
            },
            contraindications: strs(&["suspected achilles rupture"]),
            red_flags: strs(&["sudden pop felt in the calf"]),
            progression_tips: strs(&[
                "Progress to single-leg raises",
                "Add a slow eccentric from a step edge",
            ]),
            max_pain_level: 5,
            display_order: 61,
            active: true,
        },
        Exercise {
            id: "single_leg_balance".to_string(),
            name: "Single-Leg Balance".to_string(),
            description: "Stand on one leg near a counter for support, keeping the \
                          arch active and the knee softly bent."
                .to_string(),
            body_parts: strs(&["ankle"]),
            pain_types: strs(&["aching"]),
            conditions: strs(&["ankle sprain", "ankle instability"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Mobility,
            dosage: Dosage {
                sets: 3,
                reps: None,
                duration_secs: Some(30),
                frequency: "daily".to_string(),
                hold_secs: Some(30),
                rest_secs: Some(30),
            },
            contraindications: strs(&[]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Close the eyes or stand on a folded towel"]),
            max_pain_level: 4,
            display_order: 62,
            active: true,
        },
        Exercise {
            id: "plantar_fascia_stretch".to_string(),
            name: "Plantar Fascia Stretch".to_string(),
            description: "Seated with the ankle over the opposite knee, pull the toes \
                          back until a stretch is felt along the arch."
                .to_string(),
            body_parts: strs(&["foot"]),
            pain_types: strs(&["sharp", "stabbing"]),
            conditions: strs(&["plantar fasciitis", "heel pain"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Stretch,
            dosage: Dosage {
                sets: 3,
                reps: Some(3),
                duration_secs: None,
                frequency: "before first steps each morning".to_string(),
                hold_secs: Some(30),
                rest_secs: Some(15),
            },
            contraindications: strs(&[]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Roll the arch over a frozen bottle afterward"]),
            max_pain_level: 8,
            display_order: 63,
            active: true,
        },
    ]
}
