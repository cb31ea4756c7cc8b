use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] motus_protocols::StoreError),

    #[error("invalid engine config: {0}")]
    Config(String),

    #[error(transparent)]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Outcome(#[from] motus_outcomes::OutcomeError),
}
