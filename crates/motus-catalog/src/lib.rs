//! motus-catalog
//!
//! The embedded exercise catalog and the symptom matcher. Pure data
//! and pure functions — the catalog is loaded once into a static
//! table and never mutated at runtime.

pub mod aliases;
pub mod catalog;
pub mod matcher;

pub use catalog::{all_exercises, exercises_for_body_part, get_exercise};
pub use matcher::{rank_catalog, safety_filter, score_exercise};
