use crate::error::{GatewayError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Redirect;
use linkhop_core::Resolution;
use tracing::debug;

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    match state.redirector().resolve(&code).await? {
        Resolution::Found(href) => {
            debug!(code = %code, href = %href, "redirecting");
            Ok(Redirect::temporary(&href))
        }
        Resolution::NotFound => Err(GatewayError::NotFound),
    }
}
