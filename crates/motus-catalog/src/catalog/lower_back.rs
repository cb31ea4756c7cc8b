use motus_core::models::{Difficulty, Dosage, Exercise, ExerciseCategory};

use super::strs;

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "pelvic_tilt".to_string(),
            name: "Pelvic Tilt".to_string(),
            description: "Lying on your back with knees bent, flatten the small of \
                          your back against the floor by gently rocking the pelvis."
                .to_string(),
            body_parts: strs(&["lower back"]),
            pain_types: strs(&["dull", "aching", "stiffness"]),
            conditions: strs(&["nonspecific low back pain", "postural strain"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Mobility,
            dosage: Dosage {
                sets: 2,
                reps: Some(10),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: Some(5),
                rest_secs: Some(30),
            },
            contraindications: strs(&["acute fracture", "recent spinal surgery"]),
            red_flags: strs(&[
                "numbness in the groin or inner thighs",
                "loss of bladder or bowel control",
            ]),
            progression_tips: strs(&[
                "Add a glute bridge once pain-free for a week",
                "Regress to smaller range if symptoms flare",
            ]),
            max_pain_level: 8,
            display_order: 10,
            active: true,
        },
        Exercise {
            id: "cat_cow".to_string(),
            name: "Cat-Cow".to_string(),
            description: "On hands and knees, alternate slowly between arching and \
                          rounding the spine, moving with the breath."
                .to_string(),
            body_parts: strs(&["lower back"]),
            pain_types: strs(&["aching", "stiffness"]),
            conditions: strs(&["nonspecific low back pain", "facet irritation"]),
            difficulty: Difficulty::Beginner,
            category: ExerciseCategory::Mobility,
            dosage: Dosage {
                sets: 2,
                reps: Some(10),
                duration_secs: None,
                frequency: "daily".to_string(),
                hold_secs: None,
                rest_secs: Some(30),
            },
            contraindications: strs(&["wrist injury preventing weight bearing"]),
            red_flags: strs(&["pain radiating below the knee that worsens with movement"]),
            progression_tips: strs(&["Increase range gradually as stiffness eases"]),
            max_pain_level: 7,
            display_order: 11,
            active: true,
        },
        Exercise {
            id: "bird_dog".to_string(),
            name: "Bird Dog".to_string(),
            description: "From hands and knees, extend the opposite arm and leg while \
                          keeping the trunk level, then switch sides."
                .to_string(),
            body_parts: strs(&["lower back"]),
            pain_types: strs(&["dull", "aching"]),
            conditions: strs(&["core weakness", "nonspecific low back pain"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Strengthening,
            dosage: Dosage {
                sets: 3,
                reps: Some(8),
                duration_secs: None,
                frequency: "3x per week".to_string(),
                hold_secs: Some(5),
                rest_secs: Some(60),
            },
            contraindications: strs(&["acute disc herniation with radiating pain"]),
            red_flags: strs(&["sharp catching pain with trunk extension"]),
            progression_tips: strs(&[
                "Slow the tempo before adding holds",
                "Regress to arm-only or leg-only lifts",
            ]),
            max_pain_level: 5,
            display_order: 12,
            active: true,
        },
        Exercise {
            id: "prone_press_up".to_string(),
            name: "Prone Press-Up".to_string(),
            description: "Lying face down, press the upper body up on the hands while \
                          the hips stay on the floor, extending the lower back."
                .to_string(),
            body_parts: strs(&["lower back"]),
            pain_types: strs(&["radiating", "sharp"]),
            conditions: strs(&["disc herniation", "sciatica"]),
            difficulty: Difficulty::Intermediate,
            category: ExerciseCategory::Stretch,
            dosage: Dosage {
                sets: 3,
                reps: Some(10),
                duration_secs: None,
                frequency: "2x daily".to_string(),
                hold_secs: Some(2),
                rest_secs: Some(60),
            },
            contraindications: strs(&["spinal stenosis", "spondylolisthesis"]),
            red_flags: strs(&["leg symptoms spreading further down with repetitions"]),
            progression_tips: strs(&["Stop at the range where leg symptoms centralize"]),
            max_pain_level: 6,
            display_order: 13,
            active: true,
        },
        Exercise {
            id: "sciatic_nerve_glide".to_string(),
            name: "Sciatic Nerve Glide".to_string(),
            description: "Seated, straighten one knee while extending the neck, then \
                          bend both, gliding the nerve without stretching into pain."
                .to_string(),
            body_parts: strs(&["lower back", "hip"]),
            pain_types: strs(&["radiating", "burning", "tingling"]),
            conditions: strs(&["sciatica", "nerve root irritation"]),
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
            contraindications: strs(&["progressive neurological deficit"]),
            red_flags: strs(&["new foot weakness or foot drop"]),
            progression_tips: strs(&["Keep the movement brisk and painless; do not hold"]),
            max_pain_level: 8,
            display_order: 14,
            active: true,
        },
    ]
}
