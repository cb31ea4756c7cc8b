use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One matching request, built from the symptom-intake form.
/// Ephemeral — never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomQuery {
    pub body_part: String,
    /// Reported pain, 0–10.
    pub pain_level: u8,
    /// Free text; may hold several descriptors separated by commas or
    /// slashes ("sharp, shooting / burning").
    pub pain_type: String,
    /// Free-text duration descriptor ("3 weeks", "several months").
    pub duration: String,
    /// Reported symptom / condition keywords.
    pub symptoms: Vec<String>,
}
