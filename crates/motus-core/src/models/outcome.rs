use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Standardized outcome questionnaire keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKey {
    /// Oswestry Disability Index (back). Lower is better.
    Odi,
    /// Knee injury and Osteoarthritis Outcome Score. Higher is better.
    Koos,
    /// QuickDASH (arm/shoulder/hand). Lower is better.
    QuickDash,
    /// 0–10 numeric pain rating. Lower is better.
    PainScale,
    /// Global Rating of Change, −7..+7. Terminal instrument.
    Groc,
}

impl InstrumentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKey::Odi => "odi",
            InstrumentKey::Koos => "koos",
            InstrumentKey::QuickDash => "quickdash",
            InstrumentKey::PainScale => "pain_scale",
            InstrumentKey::Groc => "groc",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "odi" => Ok(InstrumentKey::Odi),
            "koos" => Ok(InstrumentKey::Koos),
            "quickdash" => Ok(InstrumentKey::QuickDash),
            "pain_scale" => Ok(InstrumentKey::PainScale),
            "groc" => Ok(InstrumentKey::Groc),
            other => Err(CoreError::UnknownInstrument(other.to_string())),
        }
    }
}

/// One submitted questionnaire score. Rows accumulate per
/// user/condition as an append-only time series; none are mutated
/// after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Condition tag the series belongs to (e.g. "knee", "back").
    pub condition: String,
    pub instrument: InstrumentKey,
    pub score: f64,
    pub created_at: jiff::Timestamp,
}

/// Derived progress summary for one user/condition series.
/// Recomputed on demand; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeSummary {
    pub condition: String,
    pub baseline: Snapshot,
    pub latest: Snapshot,
    /// Present only once a terminal GROC questionnaire was submitted.
    pub final_groc: Option<ScorePoint>,
    /// Absent while the condition has only its baseline assessments.
    pub change: Option<ChangeBlock>,
}

/// Function and pain readings taken at one end of the series. The two
/// sides are independent; either may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snapshot {
    pub function: Option<ScorePoint>,
    pub pain: Option<ScorePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScorePoint {
    pub instrument: InstrumentKey,
    pub score: f64,
    pub recorded_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeBlock {
    /// latest − baseline, signed. None when the side has no follow-up.
    pub function_change: Option<f64>,
    pub pain_change: Option<f64>,
    pub function_direction: Option<ChangeDirection>,
    pub pain_direction: Option<ChangeDirection>,
    /// True when a populated change crosses the instrument's
    /// clinically-important-difference threshold in the improving
    /// direction.
    pub is_meaningful: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChangeDirection {
    Improved,
    Worsened,
    Unchanged,
}
