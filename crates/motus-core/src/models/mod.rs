pub mod assessment;
pub mod exercise;
pub mod matching;
pub mod outcome;
pub mod protocol;
pub mod symptom;

pub use assessment::IntakeAssessment;
pub use exercise::{Difficulty, Dosage, Exercise, ExerciseCategory};
pub use matching::MatchResult;
pub use outcome::{
    ChangeBlock, ChangeDirection, InstrumentKey, OutcomeAssessment, OutcomeSummary, ScorePoint,
    Snapshot,
};
pub use protocol::{Phase, Protocol, Routine};
pub use symptom::SymptomQuery;
