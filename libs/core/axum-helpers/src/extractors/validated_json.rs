//! JSON extractor with automatic validation using the validator crate.

use crate::errors::ErrorResponse;
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body and then runs the `validator` crate's
/// `Validate` trait over it. Both malformed bodies and validation failures
/// come back as 400 with the flat `{"error": ...}` shape.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.email)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::new(e.body_text())),
            )
                .into_response()
        })?;

        data.validate().map_err(|e| {
            // Flatten the per-field errors into one readable message
            let violations: Vec<String> = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| {
                        match err.message.as_ref() {
                            Some(msg) => format!("{}: {}", field, msg),
                            None => format!("{}: {}", field, err.code),
                        }
                    })
                })
                .collect();

            let message = format!("Request validation failed: {}", violations.join(", "));

            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::new(message)),
            )
                .into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
