//! Progress-dashboard assembly: one summary and follow-up flag per
//! condition the user has ever submitted an outcome questionnaire
//! for.

use std::collections::BTreeMap;

use motus_core::models::{OutcomeAssessment, OutcomeSummary};
use motus_outcomes::{follow_up_due_within, groc_interpretation, summarize, validate_score};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::EngineConfig;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionProgress {
    pub condition: String,
    /// None when every row for the condition failed validation.
    pub summary: Option<OutcomeSummary>,
    /// Textual bucket for the terminal GROC score, when one exists.
    pub groc_interpretation: Option<String>,
    pub follow_up_due: bool,
}

/// Recompute the dashboard from a user's full outcome history.
/// Conditions are returned in stable (sorted) order. Rows with
/// out-of-range scores are skipped, not fatal.
pub fn progress_dashboard(
    rows: &[OutcomeAssessment],
    now: jiff::Timestamp,
    config: &EngineConfig,
) -> Vec<ConditionProgress> {
    let mut by_condition: BTreeMap<&str, Vec<&OutcomeAssessment>> = BTreeMap::new();
    for row in rows {
        if let Err(err) = validate_score(row.instrument, row.score) {
            tracing::warn!(row_id = %row.id, condition = %row.condition, %err, "skipping outcome row");
            continue;
        }
        by_condition.entry(&row.condition).or_default().push(row);
    }

    by_condition
        .into_iter()
        .map(|(condition, rows)| {
            let owned: Vec<OutcomeAssessment> = rows.into_iter().cloned().collect();
            let summary = summarize(&owned, &config.mcid);
            let groc = summary
                .as_ref()
                .and_then(|s| s.final_groc.as_ref())
                .map(|g| groc_interpretation(g.score).to_string());
            ConditionProgress {
                condition: condition.to_string(),
                summary,
                groc_interpretation: groc,
                follow_up_due: follow_up_due_within(&owned, now, config.follow_up_window_days),
            }
        })
        .collect()
}
