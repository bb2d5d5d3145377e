use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    graphql_explorer_handler, graphql_handler, index_handler, not_found_handler,
    redirect_handler, GRAPHQL_PATH,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Static routes take precedence over `/{code}`, so `/graphql` and `/`
    /// never reach the redirect handler.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route(
                GRAPHQL_PATH,
                get(graphql_explorer_handler).post(graphql_handler),
            )
            .route("/", get(index_handler))
            .route("/{code}", get(redirect_handler))
            .fallback(not_found_handler)
            .method_not_allowed_fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
