use crate::error::{ShortenerError, StorageError};
use crate::shortcode::ShortCode;
use crate::shortcut::Shortcut;
use async_trait::async_trait;

/// Acknowledgement of a shortcut write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOutcome {
    /// `true` when the store acknowledged the write.
    pub ok: bool,
}

/// Read and write access to shortcuts, shared by the redirect route and
/// the GraphQL resolvers.
#[async_trait]
pub trait DataAccessor: Send + Sync + 'static {
    /// Point read by short code. Returns `None` if the code does not exist.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<Shortcut>, StorageError>;

    /// Upserts the mapping `code -> href`.
    ///
    /// An existing mapping for `code` is overwritten.
    async fn create(&self, code: ShortCode, href: String) -> Result<CreateOutcome, ShortenerError>;
}
