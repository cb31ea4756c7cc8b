use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory};

use super::strs;

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "quad_set".to_string(),
            name: "Quad Set".to_string(),
            description: "Sitting with the leg straight, tighten the thigh muscle and \
                          press the back of the knee toward the floor."
                .to_string(),
            body_parts: strs(&["knee"]),
            pain_types: strs(&["dull", "aching"]),
            conditions: strs(&["patellofemoral pain", "post-surgical weakness"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(10),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(5),
                rest_secs: Some(30),
            },
            contraindications: strs(&[]),
            red_flags: strs(&["rapidly increasing swelling"]),
            progression_tips: strs(&["Progress to straight leg raises"]),
            max_pain_level: 8,
            display_order: 40,
            active: true,
        },
        Exercise {
            id: "straight_leg_raise".to_string(),
            name: "Straight Leg Raise".to_string(),
            description: "Lying on your back with one knee bent, lift the straight leg \
                          to the height of the bent knee with the thigh tight."
                .to_string(),
            body_parts: strs(&["knee", "hip"]),
            pain_types: strs(&["dull"]),
            conditions: strs(&["patellofemoral pain", "quad weakness"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(10),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(3),
                rest_secs: Some(45),
            },
            contraindications: strs(&["acute hip flexor strain"]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Add a light ankle weight after two pain-free weeks"]),
            max_pain_level: 7,
            display_order: 41,
            active: true,
        },
        Exercise {
            id: "wall_sit".to_string(),
            name: "Wall Sit".to_string(),
            description: "Slide down a wall to a partial squat and hold, keeping the \
                          knees behind the toes."
                .to_string(),
            body_parts: strs(&["knee"]),
            pain_types: strs(&["aching"]),
            conditions: strs(&["patellofemoral pain", "patellar tendinopathy"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: None,
                duration_secs: Some(30),
                frequency: "3x per week".to_string(),
                hold_secs: Some(30),
                rest_secs: Some(60),
            },
            contraindications: strs(&["acute meniscal locking"]),
            red_flags: strs(&["giving way under load"]),
            progression_tips: strs(&[
                "Deepen the squat angle gradually",
                "Regress to a higher seat position if the kneecap aches",
            ]),
            max_pain_level: 4,
            display_order: 42,
            active: true,
        },
        Exercise {
            id: "lateral_step_down".to_string(),
            name: "Lateral Step-Down".to_string(),
            description: "Standing on a low step, lower the free heel slowly toward \
                          the floor, controlling the knee over the toes."
                .to_string(),
            body_parts: strs(&["knee"]),
            pain_types: strs(&["sharp", "aching"]),
            conditions: strs(&["patellofemoral pain", "runner's knee"]),
            difficulty: Difficulty::Advanced,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(8),
                duration_secs: None,
                frequency: "3x per week".to_string(),
                hold_secs: None,
                rest_secs: Some(90),
            },
            contraindications: strs(&["unresolved effusion"]),
            red_flags: strs(&[]),
            progression_tips: strs(&["Raise the step height before adding reps"]),
            max_pain_level: 3,
            display_order: 43,
            active: true,
        },
        Exercise {
            id: "deep_squat_hold".to_string(),
            name: "Deep Squat Hold".to_string(),
            description: "Rest in a full-depth squat, heels down, using a doorframe \
                          for balance if needed."
                .to_string(),
            body_parts: strs(&["knee", "hip", "ankle"]),
            pain_types: strs(&["stiffness"]),
            conditions: strs(&["mobility restriction"]),
            difficulty: Difficulty::Advanced,
            category: ExerciseCategory::Mobility,
            dosage: Dosage {
                sets: 3,
                reps: None,
                duration_secs: Some(30),
                frequency: "daily".to_string(),
                hold_secs: Some(30),
                rest_secs: Some(60),
            },
            contraindications: strs(&["meniscal tear", "knee replacement"]),
            red_flags: strs(&[]),
            progression_tips: strs(&[]),
            max_pain_level: 2,
            display_order: 44,
            // Pulled from rotation pending clinical review of deep-flexion
            // loading for the patellofemoral pathway.
            active: false,
        },
    ]
}
