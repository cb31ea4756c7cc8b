//! Injected clinically-important-difference thresholds. The values
//! come from the caller's domain configuration; this crate carries no
//! published constants of its own.

use motus_core::models::InstrumentKey;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::OutcomeError;

/// Minimum change magnitude, per instrument, that counts as
/// clinically meaningful. All magnitudes are positive; direction is
/// resolved separately through the polarity table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct McidThresholds {
    pub odi: f64,
    pub koos: f64,
    pub quickdash: f64,
    pub pain_scale: f64,
}

impl McidThresholds {
    /// The threshold for an instrument. GROC is a terminal rating
    /// with no change threshold.
    pub fn threshold_for(&self, key: InstrumentKey) -> Option<f64> {
        match key {
            InstrumentKey::Odi => Some(self.odi),
            InstrumentKey::Koos => Some(self.koos),
            InstrumentKey::QuickDash => Some(self.quickdash),
            InstrumentKey::PainScale => Some(self.pain_scale),
            InstrumentKey::Groc => None,
        }
    }

    /// Reject configurations whose magnitudes are not positive.
    pub fn validate(&self) -> Result<(), OutcomeError> {
        for key in [
            InstrumentKey::Odi,
            InstrumentKey::Koos,
            InstrumentKey::QuickDash,
            InstrumentKey::PainScale,
        ] {
            if let Some(value) = self.threshold_for(key)
                && value <= 0.0
            {
                return Err(OutcomeError::NonPositiveThreshold {
                    instrument: key,
                    value,
                });
            }
        }
        Ok(())
    }
}
