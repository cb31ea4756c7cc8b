//! motus-core
//!
//! Pure domain types for the Motus clinical decision engine.
//! No I/O, no framework dependency — this is the shared vocabulary of
//! the catalog, protocol, and outcome crates.

pub mod error;
pub mod models;
