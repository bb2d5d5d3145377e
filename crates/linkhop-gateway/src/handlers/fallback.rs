use crate::error::GatewayError;

pub async fn not_found_handler() -> GatewayError {
    GatewayError::NotFound
}
