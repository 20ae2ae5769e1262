use cardia_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to build patient record: {0}")]
    Record(#[from] CoreError),
}
