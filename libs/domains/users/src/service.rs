use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, PatchUser, PutUser, User, DEFAULT_PERMISSION_LEVEL};
use crate::repository::UserRepository;
use crate::validation;

/// Service façade over the user repository.
///
/// Runs the validation gates in the documented order and translates DTOs
/// into repository calls. The repository is injected, so the storage
/// implementation can change without touching the handlers.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    fn repo(&self) -> &R {
        self.repository.as_ref()
    }

    /// Create a new user; returns the assigned id.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<Uuid> {
        let (email, password) =
            validation::require_email_and_password(&input.email, &input.password)?;
        validation::ensure_email_available(self.repo(), &email).await?;

        let user = User::new(
            email,
            password,
            input.first_name,
            input.last_name,
            input.permission_level,
        );

        let created = self.repository.create(user).await?;
        Ok(created.id)
    }

    /// List all users in insertion order.
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Get a user by email.
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.repository.get_by_email(email).await
    }

    /// Replace a user wholesale, preserving its id and creation time.
    pub async fn put_user(&self, id: Uuid, input: PutUser) -> UserResult<User> {
        let (email, password) =
            validation::require_email_and_password(&input.email, &input.password)?;
        let existing = validation::ensure_user_exists(self.repo(), id).await?;
        validation::ensure_email_belongs_to(self.repo(), &email, id).await?;

        let replacement = User {
            id,
            email,
            password,
            first_name: input.first_name,
            last_name: input.last_name,
            permission_level: input.permission_level.unwrap_or(DEFAULT_PERMISSION_LEVEL),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.repository.update(replacement).await
    }

    /// Apply a partial update. Idempotent for identical input.
    pub async fn patch_user(&self, id: Uuid, input: PatchUser) -> UserResult<User> {
        validation::ensure_user_exists(self.repo(), id).await?;

        if let Some(ref email) = input.email {
            validation::ensure_email_belongs_to(self.repo(), email, id).await?;
        }

        self.repository.patch(id, input).await
    }

    /// Delete a user by ID.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}
