use thiserror::Error;

/// Collaborator failure is the only error class the resolver
/// propagates; every "no matching rows" case degrades to a smaller
/// valid result instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("protocol store unavailable: {0}")]
    Unavailable(String),
}
