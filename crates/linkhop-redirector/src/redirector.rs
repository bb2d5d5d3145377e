use crate::Result;
use async_trait::async_trait;
use linkhop_core::Resolution;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a raw path segment to a redirect target.
    /// Returns [`Resolution::NotFound`] if no usable mapping exists.
    async fn resolve(&self, code: &str) -> Result<Resolution>;
}
