use async_trait::async_trait;
use dashmap::DashMap;
use linkhop_core::repository::Result;
use linkhop_core::{ReadRepository, Repository, ShortCode, Shortcut};
use tracing::trace;

/// In-memory implementation of the Repository trait using DashMap.
///
/// Used for local development and as the test substitute for the
/// external data store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored shortcuts.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<Shortcut>> {
        trace!(code = %code, "reading shortcut from memory");
        Ok(self
            .storage
            .get(code.as_str())
            .map(|href| Shortcut::new(code.clone(), href.value().clone())))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn put(&self, shortcut: &Shortcut) -> Result<()> {
        trace!(code = %shortcut.code, "writing shortcut to memory");
        self.storage
            .insert(shortcut.code.as_str().to_owned(), shortcut.href.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn shortcut(c: &str, href: &str) -> Shortcut {
        Shortcut::new(code(c), href)
    }

    #[tokio::test]
    async fn put_and_get() {
        let repo = InMemoryRepository::new();

        repo.put(&shortcut("abc123", "https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.code.as_str(), "abc123");
        assert_eq!(result.href, "https://example.com");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn put_overwrites() {
        let repo = InMemoryRepository::new();

        repo.put(&shortcut("abc123", "https://old.com")).await.unwrap();
        repo.put(&shortcut("abc123", "https://new.com")).await.unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.href, "https://new.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let s = shortcut(
                    &format!("code-{:03}", i),
                    &format!("https://example{}.com", i),
                );
                repo.put(&s).await.unwrap();
            }));
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let _ = repo.get(&code(&format!("code-{:03}", i))).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let result = repo
                .get(&code(&format!("code-{:03}", i)))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(result.href, format!("https://example{}.com", i));
        }
    }
}
