//! Maps a user's most recent qualifying assessment to a concrete
//! protocol phase and its exercise set. Stateless: phase advancement
//! is decided elsewhere, this only reads the recorded position.
//!
//! Every absence degrades to a smaller valid result — no assessment
//! or unknown protocol yields `Ok(None)`, missing phase metadata
//! yields a synthesized descriptor, and an unresolvable exercise set
//! yields an empty one. Only store failure is an error.

use std::sync::LazyLock;

use motus_catalog::{exercises_for_body_part, get_exercise};
use motus_core::models::{Exercise, Phase, Protocol};
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::ProtocolStore;

/// Cap on the body-part fallback exercise set.
const FALLBACK_LIMIT: usize = 10;

/// Body regions recognized inside protocol keys for the fallback
/// search. `foot_ankle` must precede `ankle` so the longer token wins.
static REGION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"shoulder|knee|hip|elbow|foot_ankle|ankle").expect("static region pattern")
});

/// The user's current position in a protocol, with phase metadata and
/// the phase's exercise set resolved.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedPhase {
    pub protocol: Protocol,
    pub phase: Phase,
    /// True when the stored phase number had no metadata row and the
    /// descriptor was synthesized.
    pub synthesized_phase: bool,
    /// None when the exercise set came from the body-part fallback or
    /// could not be resolved at all.
    pub routine_id: Option<Uuid>,
    pub exercises: Vec<Exercise>,
}

/// Resolve the user's current protocol phase.
pub fn resolve_current_phase<S: ProtocolStore + ?Sized>(
    store: &S,
    user_id: Uuid,
) -> Result<Option<ResolvedPhase>, StoreError> {
    let Some(assessment) = store.latest_assessment_with_protocol(user_id)? else {
        tracing::debug!(%user_id, "no qualifying assessment, no protocol assignment");
        return Ok(None);
    };
    let Some(key) = assessment.selected_protocol_key.as_deref() else {
        return Ok(None);
    };

    let Some(protocol) = store.protocol_by_key(key)? else {
        tracing::info!(%user_id, key, "assessment references an unknown protocol key");
        return Ok(None);
    };

    let phase_number = assessment.phase_number.unwrap_or(1);
    let (phase, synthesized_phase) = match protocol
        .phases
        .iter()
        .find(|p| p.phase_number == phase_number)
    {
        Some(phase) => (phase.clone(), false),
        None => {
            tracing::info!(
                key,
                phase_number,
                "phase metadata missing, synthesizing descriptor"
            );
            (synthesize_phase(phase_number), true)
        }
    };

    // Exercise-set priority chain: routine by (protocol, phase
    // number), then routine by phase id, then body-part fallback.
    let mut routine = store.routine_for_phase(protocol.id, phase_number)?;
    if routine.is_none() && !synthesized_phase {
        routine = store.routine_for_phase_id(phase.id)?;
    }

    let (routine_id, exercises) = match routine {
        Some(routine) => {
            let exercises = routine
                .exercise_ids
                .iter()
                .filter_map(|id| get_exercise(id))
                .cloned()
                .collect();
            (Some(routine.id), exercises)
        }
        None => (None, body_part_fallback(&protocol.key)),
    };

    tracing::debug!(
        %user_id,
        key,
        phase_number,
        exercise_count = exercises.len(),
        "resolved current phase"
    );

    Ok(Some(ResolvedPhase {
        protocol,
        phase,
        synthesized_phase,
        routine_id,
        exercises,
    }))
}

/// Minimal descriptor for a phase number the protocol metadata does
/// not define. The protocol assignment itself stays valid.
fn synthesize_phase(phase_number: u32) -> Phase {
    Phase {
        id: Uuid::new_v4(),
        phase_number,
        name: format!("Phase {phase_number}"),
        description: String::new(),
        week_start: 0,
        week_end: None,
        goals: Vec::new(),
        precautions: Vec::new(),
        progress_criteria: Vec::new(),
    }
}

/// Last-resort exercise set: pull a body region out of the protocol
/// key and take the top active catalog entries for it.
fn body_part_fallback(protocol_key: &str) -> Vec<Exercise> {
    let Some(found) = REGION_PATTERN.find(protocol_key) else {
        return Vec::new();
    };
    let region = match found.as_str() {
        "foot_ankle" => "ankle",
        other => other,
    };
    exercises_for_body_part(region)
        .into_iter()
        .take(FALLBACK_LIMIT)
        .cloned()
        .collect()
}
