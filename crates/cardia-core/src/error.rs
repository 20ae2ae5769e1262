use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),
}
