use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One scored catalog entry for a symptom query. Recomputed on every
/// request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchResult {
    pub exercise_id: String,
    /// Weighted additive score, 0–100.
    pub score: u8,
    /// Human-readable reasons for each awarded component, in award order.
    pub reasons: Vec<String>,
}
