//! motus-engine
//!
//! The facade over the decision engine: symptom query → ranked,
//! safety-filtered exercise plan; user → current protocol phase;
//! outcome series → progress dashboard. Everything here is a pure,
//! request-scoped computation over data the storage collaborator has
//! already fetched.

pub mod config;
pub mod error;
pub mod plan;
pub mod progress;

pub use config::{EngineConfig, parse_config};
pub use error::EngineError;
pub use plan::{ExercisePlan, build_plan};
pub use progress::{ConditionProgress, progress_dashboard};
