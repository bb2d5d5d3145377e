use crate::error::StorageError;
use crate::shortcode::ShortCode;
use crate::shortcut::Shortcut;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a key-value store holding shortcuts.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the shortcut for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<Shortcut>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a shortcut keyed by its code, replacing any existing mapping.
    async fn put(&self, shortcut: &Shortcut) -> Result<()>;
}
