use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linkhop_redirector::RedirectorError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Body of every 404 response.
pub const NOT_FOUND_BODY: &str = "Not Found!";

#[derive(Debug, Error)]
pub enum GatewayError {
    /// No route matched, or the short code has no usable mapping.
    #[error("Not Found!")]
    NotFound,
    #[error("redirect lookup failed: {0}")]
    Upstream(#[from] RedirectorError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            GatewayError::Upstream(e) => {
                error!(error = %e, "data store failure while resolving redirect");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
