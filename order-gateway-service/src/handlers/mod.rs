//! HTTP handlers for the order gateway.

pub mod orders;

use axum::http::StatusCode;

/// Fixed liveness response, asserted verbatim by clients.
pub const LIVENESS_MESSAGE: &str = "✅ Order gateway is running!";

pub async fn health_check() -> &'static str {
    LIVENESS_MESSAGE
}

/// Answers direct OPTIONS probes on the order route with an empty 204.
/// Genuine browser pre-flights are short-circuited by the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
