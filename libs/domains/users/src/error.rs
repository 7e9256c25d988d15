use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::ErrorResponse;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User {0} not found")]
    NotFound(Uuid),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Missing required fields email and password")]
    MissingRequiredFields,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::DuplicateEmail(_)
            | UserError::MissingRequiredFields
            | UserError::InvalidEmail
            | UserError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%message, "Rejecting request: not found");
        } else {
            tracing::debug!(%message, "Rejecting request: invalid input");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
