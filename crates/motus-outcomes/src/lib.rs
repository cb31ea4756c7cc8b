//! motus-outcomes
//!
//! Standardized outcome-measure tracking: the instrument registry
//! (roles, score polarity, valid ranges), progress summaries over a
//! user's append-only assessment series, and the follow-up-due
//! signal. Thresholds for clinically meaningful change are injected,
//! never hardcoded here.

pub mod config;
pub mod error;
pub mod followup;
pub mod instruments;
pub mod summary;

pub use config::McidThresholds;
pub use error::OutcomeError;
pub use followup::{FOLLOW_UP_WINDOW_DAYS, follow_up_due, follow_up_due_within};
pub use instruments::{
    InstrumentRole, InstrumentSpec, Polarity, ScoreOutOfRange, ScoreRange, direction_of_change,
    groc_interpretation, spec_for, validate_score,
};
pub use summary::summarize;
