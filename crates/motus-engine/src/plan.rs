//! The exercise-plan pipeline: resolve the user's protocol phase,
//! rank the catalog against the symptom query, then apply the hard
//! exclusions the scorer deliberately leaves to its caller.

use motus_catalog::{all_exercises, rank_catalog, safety_filter};
use motus_core::models::{Exercise, MatchResult, SymptomQuery};
use motus_protocols::{ProtocolStore, ResolvedPhase, resolve_current_phase};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::EngineError;

/// What the plan screen renders: the user's protocol assignment (if
/// any) and the ranked ad hoc matches for the query.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExercisePlan {
    pub assignment: Option<ResolvedPhase>,
    pub matches: Vec<MatchResult>,
}

/// Build the plan for one request. An empty match list is a
/// legitimate result, not an error; only store failure propagates.
pub fn build_plan<S: ProtocolStore + ?Sized>(
    store: &S,
    user_id: Uuid,
    query: &SymptomQuery,
    config: &EngineConfig,
) -> Result<ExercisePlan, EngineError> {
    let assignment = resolve_current_phase(store, user_id)?;

    let catalog = all_exercises();
    let ranked = rank_catalog(catalog, query);
    let safe = safety_filter(ranked, catalog, query.pain_level);
    let matches: Vec<MatchResult> = exclude_contraindicated(safe, catalog, &query.symptoms)
        .into_iter()
        .take(config.max_plan_exercises)
        .collect();

    tracing::debug!(
        %user_id,
        body_part = %query.body_part,
        pain_level = query.pain_level,
        assigned = assignment.is_some(),
        match_count = matches.len(),
        "built exercise plan"
    );

    Ok(ExercisePlan { assignment, matches })
}

/// Drop exercises whose contraindications overlap a reported symptom.
fn exclude_contraindicated(
    results: Vec<MatchResult>,
    catalog: &[Exercise],
    symptoms: &[String],
) -> Vec<MatchResult> {
    let symptoms: Vec<String> = symptoms
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if symptoms.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|r| {
            let Some(exercise) = catalog.iter().find(|e| e.id == r.exercise_id) else {
                return false;
            };
            !exercise.contraindications.iter().any(|c| {
                let c = c.to_lowercase();
                symptoms.iter().any(|s| c.contains(s) || s.contains(&c))
            })
        })
        .collect()
}
