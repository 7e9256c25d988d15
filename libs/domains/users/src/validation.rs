//! Request validation gates.
//!
//! Each gate enforces one of the data-model invariants that the store does
//! not enforce on its own. The service composes them, in order, before any
//! store mutation:
//!
//! | operation | gates |
//! |---|---|
//! | create | required fields → email available |
//! | put    | required fields → user exists → email belongs to same user |
//! | patch  | user exists → (email present? email belongs to same user) |
//! | read/delete | user exists |

use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// Both `email` and `password` must be present and non-empty.
///
/// Returns the owned pair so the caller does not have to unwrap the DTO
/// options again.
pub fn require_email_and_password(
    email: &Option<String>,
    password: &Option<String>,
) -> UserResult<(String, String)> {
    match (email, password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Ok((email.clone(), password.clone()))
        }
        _ => Err(UserError::MissingRequiredFields),
    }
}

/// No existing user may already own the email.
pub async fn ensure_email_available<R: UserRepository>(repo: &R, email: &str) -> UserResult<()> {
    if repo.email_exists(email).await? {
        Err(UserError::DuplicateEmail(email.to_string()))
    } else {
        Ok(())
    }
}

/// The addressed user must exist; returns it for reuse downstream.
pub async fn ensure_user_exists<R: UserRepository>(repo: &R, id: Uuid) -> UserResult<User> {
    repo.get_by_id(id).await?.ok_or(UserError::NotFound(id))
}

/// The submitted email must already belong to the addressed user.
///
/// A user must own the email AND be the user addressed by `id`. In effect an
/// update may only re-submit the email the record already carries; any other
/// value is rejected.
pub async fn ensure_email_belongs_to<R: UserRepository>(
    repo: &R,
    email: &str,
    id: Uuid,
) -> UserResult<()> {
    match repo.get_by_email(email).await? {
        Some(owner) if owner.id == id => Ok(()),
        _ => Err(UserError::InvalidEmail),
    }
}
