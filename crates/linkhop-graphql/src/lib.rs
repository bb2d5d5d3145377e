//! GraphQL schema for reading and creating shortcuts.
//!
//! ```graphql
//! type Shortcut { code: String, href: String }
//! type Result { ok: Boolean }
//! type Query { shortcut(code: String!): Shortcut }
//! type Mutation { createShortcut(code: String, href: String): Result! }
//! ```
//!
//! Both roots resolve through the [`DataAccessor`] stored in the schema data.

pub mod model;
pub mod schema;

pub use linkhop_core::DataAccessor;
pub use model::{CreateShortcutResult, ShortcutObject};
pub use schema::{build_schema, MutationRoot, QueryRoot, SharedAccessor, ShortcutSchema};
