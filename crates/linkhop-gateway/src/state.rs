use std::sync::Arc;

use linkhop_core::Repository;
use linkhop_graphql::{build_schema, ShortcutSchema};
use linkhop_redirector::{Redirector, ShortcutResolver};
use linkhop_shortener::ShortcutAccessor;

#[derive(Clone)]
pub struct AppState {
    redirector: Arc<dyn Redirector>,
    schema: ShortcutSchema,
}

impl AppState {
    pub fn new(redirector: Arc<dyn Redirector>, schema: ShortcutSchema) -> Self {
        Self { redirector, schema }
    }

    /// Wires the resolver and the GraphQL schema over one shared store handle.
    pub fn from_repository<R: Repository>(repository: R) -> Self {
        let accessor = Arc::new(ShortcutAccessor::new(repository));
        let schema = build_schema(accessor.clone());
        let redirector = Arc::new(ShortcutResolver::from_shared(accessor));
        Self::new(redirector, schema)
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn schema(&self) -> &ShortcutSchema {
        &self.schema
    }
}
