use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A completed symptom-intake assessment. The most recent one with a
/// selected protocol key determines the user's current protocol
/// assignment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body_part: String,
    /// Reported severity, 0–10.
    pub severity: u8,
    pub selected_protocol_key: Option<String>,
    /// Defaults to phase 1 when the assessment did not record one.
    pub phase_number: Option<u32>,
    pub created_at: jiff::Timestamp,
}
