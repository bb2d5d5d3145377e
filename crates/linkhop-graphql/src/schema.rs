use crate::model::{CreateShortcutResult, ShortcutObject};
use async_graphql::{Context, EmptySubscription, Error, Object, Result, Schema};
use linkhop_core::{DataAccessor, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};

/// The data accessor handle stored in the schema data.
pub type SharedAccessor = Arc<dyn DataAccessor>;

pub type ShortcutSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with `accessor` available to every resolver.
pub fn build_schema(accessor: SharedAccessor) -> ShortcutSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(accessor)
        .finish()
}

fn accessor<'a>(ctx: &Context<'a>) -> Result<&'a SharedAccessor> {
    ctx.data::<SharedAccessor>()
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Looks up the shortcut stored under `code`.
    async fn shortcut(&self, ctx: &Context<'_>, code: String) -> Result<Option<ShortcutObject>> {
        trace!(code = %code, "shortcut query");

        // A malformed code can never have been stored.
        let Ok(code) = ShortCode::new(code) else {
            return Ok(None);
        };

        let shortcut = accessor(ctx)?.lookup(&code).await?;
        Ok(shortcut.map(ShortcutObject::from))
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Maps `code` to `href`, replacing any existing mapping.
    async fn create_shortcut(
        &self,
        ctx: &Context<'_>,
        code: Option<String>,
        href: Option<String>,
    ) -> Result<CreateShortcutResult> {
        let code = code.ok_or_else(|| Error::new("argument \"code\" is required"))?;
        let href = href.ok_or_else(|| Error::new("argument \"href\" is required"))?;
        let code = ShortCode::new(code)?;

        debug!(code = %code, href = %href, "createShortcut mutation");
        let outcome = accessor(ctx)?.create(code, href).await?;
        Ok(outcome.into())
    }
}
