//! Embedded protocol and phase reference data, plus the phase →
//! routine mapping tables. Built once per process; phase numbers
//! within each protocol are unique and strictly increasing.

use std::collections::HashMap;
use std::sync::LazyLock;

use motus_core::models::{Phase, Protocol, Routine};
use uuid::Uuid;

pub struct ReferenceData {
    pub protocols: Vec<Protocol>,
    /// Routine keyed by (protocol id, phase number) — the primary
    /// mapping.
    pub routines_by_phase_number: HashMap<(Uuid, u32), Routine>,
    /// Routine keyed by the phase's own id — the secondary mapping,
    /// consulted when the primary has no entry.
    pub routines_by_phase_id: HashMap<Uuid, Routine>,
}

static REFERENCE: LazyLock<ReferenceData> = LazyLock::new(build_reference_data);

pub fn reference_data() -> &'static ReferenceData {
    &REFERENCE
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn routine(exercise_ids: &[&str]) -> Routine {
    Routine {
        id: Uuid::new_v4(),
        exercise_ids: exercise_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_reference_data() -> ReferenceData {
    let mut protocols = Vec::new();
    let mut by_phase_number = HashMap::new();
    let mut by_phase_id = HashMap::new();

    // Rotator cuff (shoulder). Phase 3 carries no explicit routine;
    // it resolves through the body-part fallback.
    let shoulder_id = Uuid::new_v4();
    let shoulder_phases = vec![
        Phase {
            id: Uuid::new_v4(),
            phase_number: 1,
            name: "Pain Control & Protected Motion".to_string(),
            description: "Settle irritability and restore gentle pain-free range."
                .to_string(),
            week_start: 1,
            week_end: Some(2),
            goals: strs(&[
                "Reduce resting pain below 3/10",
                "Regain pain-free pendulum motion",
            ]),
            precautions: strs(&[
                "No overhead lifting",
                "Avoid sleeping on the affected side",
            ]),
            progress_criteria: strs(&["Pain-free passive elevation to 120 degrees"]),
        },
        Phase {
            id: Uuid::new_v4(),
            phase_number: 2,
            name: "Progressive Strengthening".to_string(),
            description: "Load the cuff through range with light resistance.".to_string(),
            week_start: 3,
            week_end: Some(6),
            goals: strs(&[
                "Full active range of motion",
                "Tolerate banded rotation without next-day soreness",
            ]),
            precautions: strs(&["Stop any set that reproduces sharp pinching"]),
            progress_criteria: strs(&["Symmetric external rotation strength at the side"]),
        },
        Phase {
            id: Uuid::new_v4(),
            phase_number: 3,
            name: "Return to Function".to_string(),
            description: "Rebuild overhead capacity for work and sport.".to_string(),
            week_start: 7,
            week_end: None,
            goals: strs(&["Return to pre-injury overhead activity"]),
            precautions: strs(&["Progress load no faster than 10% per week"]),
            progress_criteria: strs(&["Pain-free overhead reach under load"]),
        },
    ];
    by_phase_number.insert(
        (shoulder_id, 1),
        routine(&["pendulum_swing", "wall_slide", "scapular_retraction"]),
    );
    by_phase_number.insert(
        (shoulder_id, 2),
        routine(&["wall_slide", "banded_external_rotation", "sleeper_stretch"]),
    );
    protocols.push(Protocol {
        id: shoulder_id,
        key: "rotator_cuff_shoulder".to_string(),
        name: "Rotator Cuff Recovery".to_string(),
        phases: shoulder_phases,
    });

    // Patellofemoral pain (knee). Phase 3's routine is mapped only by
    // phase id — it predates the (protocol, phase-number) table.
    let knee_id = Uuid::new_v4();
    let knee_phase_3_id = Uuid::new_v4();
    let knee_phases = vec![
        Phase {
            id: Uuid::new_v4(),
            phase_number: 1,
            name: "Quad Activation".to_string(),
            description: "Wake up the quadriceps without loading the kneecap."
                .to_string(),
            week_start: 1,
            week_end: Some(2),
            goals: strs(&["Visible quad contraction", "Straight leg raise without lag"]),
            precautions: strs(&["Avoid deep squatting and stairs under load"]),
            progress_criteria: strs(&["10 straight leg raises without extension lag"]),
        },
        Phase {
            id: Uuid::new_v4(),
            phase_number: 2,
            name: "Progressive Loading".to_string(),
            description: "Build tolerance to compressive load in mid-range.".to_string(),
            week_start: 3,
            week_end: Some(6),
            goals: strs(&["45-second wall sit at 60 degrees", "Pain under 2/10 during loading"]),
            precautions: strs(&["Keep knee flexion under 60 degrees if the kneecap aches"]),
            progress_criteria: strs(&["Single-leg sit-to-stand from chair height"]),
        },
        Phase {
            id: knee_phase_3_id,
            phase_number: 3,
            name: "Return to Impact".to_string(),
            description: "Reintroduce stairs, running, and jumping.".to_string(),
            week_start: 7,
            week_end: Some(12),
            goals: strs(&["Descend stairs reciprocally without pain"]),
            precautions: strs(&["No consecutive impact days in the first two weeks"]),
            progress_criteria: strs(&["Pain-free step-downs from full step height"]),
        },
    ];
    by_phase_number.insert((knee_id, 1), routine(&["quad_set", "straight_leg_raise"]));
    by_phase_number.insert(
        (knee_id, 2),
        routine(&["wall_sit", "glute_bridge", "clamshell"]),
    );
    by_phase_id.insert(
        knee_phase_3_id,
        routine(&["lateral_step_down", "wall_sit", "single_leg_balance"]),
    );
    protocols.push(Protocol {
        id: knee_id,
        key: "patellofemoral_knee".to_string(),
        name: "Patellofemoral Pain Program".to_string(),
        phases: knee_phases,
    });

    // Nonspecific low back pain.
    let back_id = Uuid::new_v4();
    let back_phases = vec![
        Phase {
            id: Uuid::new_v4(),
            phase_number: 1,
            name: "Symptom Modulation".to_string(),
            description: "Find positions and movements that ease symptoms.".to_string(),
            week_start: 1,
            week_end: Some(2),
            goals: strs(&["Identify a direction of movement that centralizes pain"]),
            precautions: strs(&["Avoid prolonged sitting beyond 30 minutes"]),
            progress_criteria: strs(&["Morning stiffness resolves within 30 minutes"]),
        },
        Phase {
            id: Uuid::new_v4(),
            phase_number: 2,
            name: "Motor Control".to_string(),
            description: "Re-establish trunk control under light load.".to_string(),
            week_start: 3,
            week_end: Some(5),
            goals: strs(&["Hold bird dog 5 seconds per side without pelvis shift"]),
            precautions: strs(&["Stop any drill that peripheralizes leg symptoms"]),
            progress_criteria: strs(&["8 controlled bird dogs per side"]),
        },
        Phase {
            id: Uuid::new_v4(),
            phase_number: 3,
            name: "Conditioning".to_string(),
            description: "Return to lifting, walking volume, and recreation.".to_string(),
            week_start: 6,
            week_end: None,
            goals: strs(&["30-minute brisk walk without symptom flare"]),
            precautions: strs(&["Build lifting volume gradually"]),
            progress_criteria: strs(&["Pain-free hip hinge with a light load"]),
        },
    ];
    by_phase_number.insert(
        (back_id, 1),
        routine(&["pelvic_tilt", "cat_cow", "sciatic_nerve_glide"]),
    );
    by_phase_number.insert((back_id, 2), routine(&["bird_dog", "glute_bridge", "pelvic_tilt"]));
    by_phase_number.insert(
        (back_id, 3),
        routine(&["bird_dog", "prone_press_up", "glute_bridge"]),
    );
    protocols.push(Protocol {
        id: back_id,
        key: "nonspecific_low_back".to_string(),
        name: "Low Back Recovery Program".to_string(),
        phases: back_phases,
    });

    ReferenceData {
        protocols,
        routines_by_phase_number: by_phase_number,
        routines_by_phase_id: by_phase_id,
    }
}
