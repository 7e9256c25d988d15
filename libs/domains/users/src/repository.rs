use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{PatchUser, User};

/// Repository trait for User persistence.
///
/// Mutating operations report missing records explicitly (`Err(NotFound)` or
/// `Ok(false)`); callers never have to pre-check existence for safety, only
/// for the HTTP contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. The record's id must already be assigned.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email (case-insensitive)
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List all users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Replace an existing user wholesale
    async fn update(&self, user: User) -> UserResult<User>;

    /// Apply the patchable fields to an existing user
    async fn patch(&self, id: Uuid, patch: PatchUser) -> UserResult<User>;

    /// Delete a user by ID; `false` when no such user existed
    async fn delete(&self, id: Uuid) -> UserResult<bool>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository.
///
/// Backed by an id-keyed map behind a single `RwLock`, so every mutation runs
/// to completion before the next writer is admitted.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Second line of defense; the validation gates check this first
        let email_exists = users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email));

        if email_exists {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned();
        Ok(user)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();

        // Insertion order: created_at ascending, UUIDv7 as tie-breaker
        result.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        Ok(result)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id));
        }

        // An email collision with another record would break the uniqueness
        // invariant, so reject it here as well
        let email_taken = users
            .values()
            .any(|u| u.id != user.id && u.email.eq_ignore_ascii_case(&user.email));

        if email_taken {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn patch(&self, id: Uuid, patch: PatchUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        let user = users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        user.apply_patch(patch);

        tracing::info!(user_id = %id, "Patched user");
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        let exists = users.values().any(|u| u.email.eq_ignore_ascii_case(email));
        Ok(exists)
    }
}
