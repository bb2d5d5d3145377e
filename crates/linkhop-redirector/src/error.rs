use linkhop_core::StorageError;
use thiserror::Error;

/// Result type for redirector operations.
pub type Result<T> = std::result::Result<T, RedirectorError>;

#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("data store unavailable: {0}")]
    Upstream(
        #[from]
        #[source]
        StorageError,
    ),
}
