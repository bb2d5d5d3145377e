//! HTTP entry point: routes requests to the GraphQL endpoint, the index
//! page, or the short code redirect.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::App;
pub use error::{GatewayError, Result};
pub use state::AppState;
