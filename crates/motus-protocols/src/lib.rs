//! motus-protocols
//!
//! Rehabilitation protocol reference data, the read-only storage
//! boundary, and the resolver that maps a user's latest assessment to
//! their current protocol phase and exercise set.

pub mod error;
pub mod protocols;
pub mod resolver;
pub mod store;

pub use error::StoreError;
pub use resolver::{ResolvedPhase, resolve_current_phase};
pub use store::{InMemoryProtocolStore, ProtocolStore};
