use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A catalog exercise. Immutable reference data, loaded once at
/// process start and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Body regions this exercise targets, lowercase (e.g. "lower back").
    pub body_parts: Vec<String>,
    /// Pain qualities this exercise is indicated for (e.g. "dull", "radiating").
    pub pain_types: Vec<String>,
    /// Condition tags used for symptom-keyword matching (e.g. "sciatica").
    pub conditions: Vec<String>,
    pub difficulty: Difficulty,
    pub category: ExerciseCategory,
    pub dosage: Dosage,
    pub contraindications: Vec<String>,
    pub red_flags: Vec<String>,
    pub progression_tips: Vec<String>,
    /// Highest reported pain level (0–10, inclusive) at which this
    /// exercise may still be recommended.
    pub max_pain_level: u8,
    pub display_order: u32,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExerciseCategory {
    Stretch,
    Strengthening,
    Mobility,
    NerveGlide,
    Postural,
}

/// Prescribed dose for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dosage {
    pub sets: u32,
    pub reps: Option<u32>,
    pub duration_secs: Option<u32>,
    /// Human-readable cadence, e.g. "daily" or "3x per week".
    pub frequency: String,
    pub hold_secs: Option<u32>,
    pub rest_secs: Option<u32>,
}
