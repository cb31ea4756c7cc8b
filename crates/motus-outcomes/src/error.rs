use motus_core::models::InstrumentKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutcomeError {
    #[error("threshold for {instrument:?} must be positive, got {value}")]
    NonPositiveThreshold {
        instrument: InstrumentKey,
        value: f64,
    },
}
