//! Flat JSON error responses.
//!
//! Every error leaving the API uses the same single-field shape so that
//! clients can always read `error` without inspecting the status code first:
//!
//! ```json
//! { "error": "user 0198c6a2-... not found" }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses: a single human-readable message under
/// the `error` key.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Handler for 404 Not Found errors.
///
/// Use as the fallback handler in your router for unknown paths.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new("The requested resource was not found"));
    (StatusCode::NOT_FOUND, body).into_response()
}
