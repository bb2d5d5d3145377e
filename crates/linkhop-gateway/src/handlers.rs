mod fallback;
mod graphql;
mod index;
mod redirect;

pub use fallback::not_found_handler;
pub use graphql::{graphql_explorer_handler, graphql_handler, GRAPHQL_PATH};
pub use index::{index_handler, INDEX_HTML};
pub use redirect::redirect_handler;
