use thiserror::Error;

/// Errors raised by a data store backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors raised while creating a shortcut.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
