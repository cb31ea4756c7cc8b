use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A multi-week rehabilitation pathway, subdivided into sequential
/// phases.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Protocol {
    pub id: Uuid,
    /// Stable lookup key recorded on assessments (e.g. "rotator_cuff_shoulder").
    pub key: String,
    pub name: String,
    /// Phase numbers are unique and strictly increasing. A user's
    /// recorded phase number never decreases and never skips past an
    /// undefined phase; advancement itself is decided elsewhere.
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phase {
    pub id: Uuid,
    /// 1-based position within the protocol.
    pub phase_number: u32,
    pub name: String,
    pub description: String,
    pub week_start: u32,
    /// None = open-ended final phase.
    pub week_end: Option<u32>,
    pub goals: Vec<String>,
    pub precautions: Vec<String>,
    pub progress_criteria: Vec<String>,
}

/// An ordered exercise set mapped to a protocol phase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Routine {
    pub id: Uuid,
    pub exercise_ids: Vec<String>,
}
