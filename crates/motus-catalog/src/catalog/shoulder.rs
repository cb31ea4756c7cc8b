use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory};

use super::strs;

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "pendulum_swing".to_string(),
            name: "Pendulum Swing".to_string(),
            description: "Leaning forward with the arm hanging relaxed, let gravity \
                          swing it in small circles without muscular effort."
                .to_string(),
            body_parts: strs(&["shoulder"]),
            pain_types: strs(&["sharp", "aching"]),
            conditions: strs(&["rotator cuff strain", "frozen shoulder"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Mobility,
            dosage: Dosage {
                sets: 2,
                reps: None,
                duration_secs: Some(60),
                frequency: "3x daily".to_string(),
                hold_secs: None,
                rest_secs: Some(30),
            },
            contraindications: strs(&["recent dislocation", "unhealed fracture"]),
            red_flags: strs(&["night pain that does not change with position"]),
            progression_tips: strs(&["Widen the circles gradually as pain allows"]),
            max_pain_level: 9,
            display_order: 30,
            active: true,
        },
        Exercise {
            id: "wall_slide".to_string(),
            name: "Wall Slide".to_string(),
            description: "Facing a wall with forearms resting on it, slide the arms \
                          overhead while keeping the shoulder blades relaxed."
                .to_string(),
            body_parts: strs(&["shoulder"]),
            pain_types: strs(&["aching", "pinching"]),
            conditions: strs(&["impingement", "rotator cuff strain"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Mobility,
            dosage: Dosage {
                sets: 3,
                reps: Some(10),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: None,
                rest_secs: Some(45),
            },
            contraindications: strs(&["acute calcific tendinitis flare"]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Step closer to the wall to increase range"]),
            max_pain_level: 6,
            display_order: 31,
            active: true,
        },
        Exercise {
            id: "banded_external_rotation".to_string(),
            name: "Banded External Rotation".to_string(),
            description: "Elbow tucked at the side and bent to ninety degrees, rotate \
                          the forearm outward against a light resistance band."
                .to_string(),
            body_parts: strs(&["shoulder"]),
            pain_types: strs(&["dull", "aching"]),
            conditions: strs(&["rotator cuff strain", "shoulder instability"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(12),
                duration_secs: None,
                frequency: "3x per week".to_string(),
                hold_secs: None,
                rest_secs: Some(60),
            },
            contraindications: strs(&["full-thickness cuff tear awaiting repair"]),
            red_flags: strs(&["sudden loss of active range"]),
            progression_tips: strs(&[
                "Increase band resistance before adding reps",
                "Regress to isometric holds if painful through range",
            ]),
            max_pain_level: 5,
            display_order: 32,
            active: true,
        },
        Exercise {
            id: "sleeper_stretch".to_string(),
            name: "Sleeper Stretch".to_string(),
            description: "Lying on the affected side with the arm at ninety degrees, \
                          gently press the forearm toward the floor."
                .to_string(),
            body_parts: strs(&["shoulder"]),
            pain_types: strs(&["tight", "pinching"]),
            conditions: strs(&["posterior capsule tightness", "impingement"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Stretch,
            dosage: Dosage {
                sets: 3,
                reps: Some(3),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(30),
                rest_secs: Some(15),
            },
            contraindications: strs(&["anterior instability"]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Ease off if pinching moves to the front"]),
            max_pain_level: 5,
            display_order: 33,
            active: true,
        },
    ]
}
