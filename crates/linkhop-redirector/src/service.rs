use crate::redirector::Redirector;
use async_trait::async_trait;
use linkhop_core::href::is_redirectable;
use linkhop_core::{DataAccessor, Resolution, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Service for handling URL redirects.
///
/// Looks shortcuts up through a [`DataAccessor`] and only reports
/// destinations that can actually be redirected to.
#[derive(Debug)]
pub struct ShortcutResolver<A> {
    accessor: Arc<A>,
}

impl<A> Clone for ShortcutResolver<A> {
    fn clone(&self) -> Self {
        Self {
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<A: DataAccessor> ShortcutResolver<A> {
    /// Creates a new ShortcutResolver with the given accessor.
    pub fn new(accessor: A) -> Self {
        Self::from_shared(Arc::new(accessor))
    }

    /// Creates a resolver over an accessor that is shared elsewhere.
    pub fn from_shared(accessor: Arc<A>) -> Self {
        Self { accessor }
    }

    /// Resolves a short code to its destination URL.
    ///
    /// # Returns
    ///
    /// * `Ok(Resolution::Found(href))` - The code maps to a redirectable URL
    /// * `Ok(Resolution::NotFound)` - The code is malformed, unknown, or its
    ///   stored URL is empty or invalid
    /// * `Err(e)` - The data store could not be reached
    pub async fn resolve(&self, code: &str) -> crate::Result<Resolution> {
        Redirector::resolve(self, code).await
    }
}

#[async_trait]
impl<A: DataAccessor> Redirector for ShortcutResolver<A> {
    async fn resolve(&self, code: &str) -> crate::Result<Resolution> {
        trace!(code = %code, "resolving short code");

        let Ok(code) = ShortCode::new(code) else {
            debug!(code = %code, "Malformed short code");
            return Ok(Resolution::NotFound);
        };

        match self.accessor.lookup(&code).await? {
            Some(shortcut) if is_redirectable(&shortcut.href) => {
                debug!(code = %code, href = %shortcut.href, "Resolved short code");
                Ok(Resolution::Found(shortcut.href))
            }
            Some(shortcut) => {
                warn!(
                    code = %code,
                    href = %shortcut.href,
                    "Stored destination is not redirectable"
                );
                Ok(Resolution::NotFound)
            }
            None => {
                trace!(code = %code, "Short code not found");
                Ok(Resolution::NotFound)
            }
        }
    }
}
