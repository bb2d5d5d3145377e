//! Data accessor over the shortcut store.
//!
//! [`ShortcutAccessor`] is the single place that reads and writes
//! shortcuts; both the redirect route and the GraphQL resolvers go
//! through it.

pub mod accessor;

pub use accessor::ShortcutAccessor;
pub use linkhop_core::{CreateOutcome, DataAccessor, ShortenerError};
