use async_trait::async_trait;
use linkhop_core::href::validate_href;
use linkhop_core::{
    CreateOutcome, DataAccessor, Repository, ShortCode, ShortenerError, Shortcut, StorageError,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the [`DataAccessor`] trait.
///
/// This service wraps a [`Repository`] handle passed in at construction
/// and handles:
/// - point reads by short code
/// - destination URL validation
/// - upserting shortcuts (last write wins)
#[derive(Debug)]
pub struct ShortcutAccessor<R> {
    repository: Arc<R>,
}

impl<R> Clone for ShortcutAccessor<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> ShortcutAccessor<R> {
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    /// Creates an accessor over a repository handle that is shared elsewhere.
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository> DataAccessor for ShortcutAccessor<R> {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<Shortcut>, StorageError> {
        trace!(code = %code, "looking up shortcut");
        self.repository.get(code).await
    }

    async fn create(&self, code: ShortCode, href: String) -> Result<CreateOutcome, ShortenerError> {
        validate_href(&href)?;

        let shortcut = Shortcut::new(code, href);
        self.repository.put(&shortcut).await?;

        debug!(code = %shortcut.code, href = %shortcut.href, "stored shortcut");
        Ok(CreateOutcome { ok: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkhop_core::repository::Result as RepoResult;
    use linkhop_core::ReadRepository;
    use linkhop_storage::InMemoryRepository;

    fn code(s: &str) -> ShortCode {
        ShortCode::new(s).unwrap()
    }

    fn test_accessor() -> ShortcutAccessor<InMemoryRepository> {
        ShortcutAccessor::new(InMemoryRepository::new())
    }

    /// A store whose every call fails as if the backend were down.
    struct UnavailableRepository;

    #[async_trait]
    impl ReadRepository for UnavailableRepository {
        async fn get(&self, _code: &ShortCode) -> RepoResult<Option<Shortcut>> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl Repository for UnavailableRepository {
        async fn put(&self, _shortcut: &Shortcut) -> RepoResult<()> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn create_then_lookup() {
        let accessor = test_accessor();

        let outcome = accessor
            .create(code("abc"), "https://example.com".to_string())
            .await
            .unwrap();
        assert!(outcome.ok);

        let found = accessor.lookup(&code("abc")).await.unwrap().unwrap();
        assert_eq!(found.code.as_str(), "abc");
        assert_eq!(found.href, "https://example.com");
    }

    #[tokio::test]
    async fn lookup_missing() {
        let accessor = test_accessor();

        assert!(accessor.lookup(&code("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_is_idempotent() {
        let accessor = test_accessor();

        for _ in 0..2 {
            let outcome = accessor
                .create(code("abc"), "https://example.com".to_string())
                .await
                .unwrap();
            assert!(outcome.ok);
        }

        let found = accessor.lookup(&code("abc")).await.unwrap().unwrap();
        assert_eq!(found.href, "https://example.com");
        assert_eq!(accessor.repository().len(), 1);
    }

    #[tokio::test]
    async fn create_overwrites_existing_code() {
        let accessor = test_accessor();

        accessor
            .create(code("abc"), "https://one.example.com".to_string())
            .await
            .unwrap();
        accessor
            .create(code("abc"), "https://two.example.com".to_string())
            .await
            .unwrap();

        let found = accessor.lookup(&code("abc")).await.unwrap().unwrap();
        assert_eq!(found.href, "https://two.example.com");
    }

    #[tokio::test]
    async fn create_with_invalid_url_fails() {
        let accessor = test_accessor();

        let err = accessor
            .create(code("abc"), "not-a-valid-url".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenerError::InvalidUrl(_)));
        assert!(accessor.repository().is_empty());
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let accessor = ShortcutAccessor::new(UnavailableRepository);

        let err = accessor.lookup(&code("abc")).await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));

        let err = accessor
            .create(code("abc"), "https://example.com".to_string())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ShortenerError::Storage(StorageError::Unavailable(_))
        ));
    }
}
