//! The instrument registry. Direction-of-improvement is
//! instrument-specific and correctness-critical, so polarity lives in
//! one table entry per questionnaire key — never in inline
//! conditionals at the call sites.

use motus_core::models::{ChangeDirection, InstrumentKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// What a questionnaire measures within a condition series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentRole {
    /// Disability/function instruments (ODI, KOOS, QuickDASH).
    Function,
    /// Numeric pain rating.
    Pain,
    /// Terminal global rating of change.
    GlobalRating,
}

/// Which direction of score movement counts as improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Polarity {
    LowerIsBetter,
    HigherIsBetter,
}

/// Valid score range for an instrument.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrumentSpec {
    pub key: InstrumentKey,
    pub name: &'static str,
    pub role: InstrumentRole,
    pub polarity: Polarity,
    pub range: ScoreRange,
}

/// One entry per questionnaire key. ODI and QuickDASH score
/// disability (lower is better); KOOS scores function (higher is
/// better); the pain scale is always lower-is-better.
static SPECS: [InstrumentSpec; 5] = [
    InstrumentSpec {
        key: InstrumentKey::Odi,
        name: "Oswestry Disability Index",
        role: InstrumentRole::Function,
        polarity: Polarity::LowerIsBetter,
        range: ScoreRange { min: 0.0, max: 100.0 },
    },
    InstrumentSpec {
        key: InstrumentKey::Koos,
        name: "KOOS",
        role: InstrumentRole::Function,
        polarity: Polarity::HigherIsBetter,
        range: ScoreRange { min: 0.0, max: 100.0 },
    },
    InstrumentSpec {
        key: InstrumentKey::QuickDash,
        name: "QuickDASH",
        role: InstrumentRole::Function,
        polarity: Polarity::LowerIsBetter,
        range: ScoreRange { min: 0.0, max: 100.0 },
    },
    InstrumentSpec {
        key: InstrumentKey::PainScale,
        name: "Numeric Pain Rating",
        role: InstrumentRole::Pain,
        polarity: Polarity::LowerIsBetter,
        range: ScoreRange { min: 0.0, max: 10.0 },
    },
    InstrumentSpec {
        key: InstrumentKey::Groc,
        name: "Global Rating of Change",
        role: InstrumentRole::GlobalRating,
        polarity: Polarity::HigherIsBetter,
        range: ScoreRange { min: -7.0, max: 7.0 },
    },
];

/// Look up the registry entry for a questionnaire key.
pub fn spec_for(key: InstrumentKey) -> &'static InstrumentSpec {
    let index = match key {
        InstrumentKey::Odi => 0,
        InstrumentKey::Koos => 1,
        InstrumentKey::QuickDash => 2,
        InstrumentKey::PainScale => 3,
        InstrumentKey::Groc => 4,
    };
    &SPECS[index]
}

/// Resolve a signed score change into a direction through the
/// instrument's polarity.
pub fn direction_of_change(polarity: Polarity, delta: f64) -> ChangeDirection {
    if delta == 0.0 {
        return ChangeDirection::Unchanged;
    }
    let improved = match polarity {
        Polarity::LowerIsBetter => delta < 0.0,
        Polarity::HigherIsBetter => delta > 0.0,
    };
    if improved {
        ChangeDirection::Improved
    } else {
        ChangeDirection::Worsened
    }
}

/// Textual bucket for a terminal GROC score, from the fixed ±7 scale.
pub fn groc_interpretation(score: f64) -> &'static str {
    if score >= 5.0 {
        "very much improved"
    } else if score >= 3.0 {
        "much improved"
    } else if score >= 1.0 {
        "somewhat improved"
    } else if score > -1.0 {
        "no change"
    } else if score > -3.0 {
        "somewhat worse"
    } else if score > -5.0 {
        "much worse"
    } else {
        "very much worse"
    }
}

/// A submitted score outside its instrument's valid range.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ScoreOutOfRange {
    pub instrument: InstrumentKey,
    pub value: f64,
    pub expected: ScoreRange,
    pub message: String,
}

/// Validate a submitted score against the instrument's range.
pub fn validate_score(key: InstrumentKey, value: f64) -> Result<(), ScoreOutOfRange> {
    let spec = spec_for(key);
    if spec.range.contains(value) {
        Ok(())
    } else {
        Err(ScoreOutOfRange {
            instrument: key,
            value,
            expected: spec.range,
            message: format!(
                "{} score {} is outside range [{}, {}]",
                spec.name, value, spec.range.min, spec.range.max,
            ),
        })
    }
}
