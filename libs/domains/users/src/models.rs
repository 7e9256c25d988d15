use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Access tier assigned when a create request does not supply one.
pub const DEFAULT_PERMISSION_LEVEL: i32 = 1;

/// User entity.
///
/// `id` is assigned by the domain at creation time and is immutable, as is
/// `email` (the uniqueness key). `password` is opaque and never serialized
/// into API responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned at creation
    pub id: Uuid,
    /// User email (unique, case-insensitive)
    pub email: String,
    /// Opaque credential (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Access tier
    pub permission_level: i32,
    /// Creation timestamp; also the stable listing order
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new user.
///
/// `email` and `password` are optional at the serde level so the
/// required-fields gate can answer with a single 400 naming both fields,
/// rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

/// DTO for replacing a user wholesale (put). Same required fields as create;
/// the submitted email must be the one already owned by the addressed user.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PutUser {
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

/// DTO for partial updates (patch).
///
/// Only `password`, `first_name`, `last_name` and `permission_level` are ever
/// applied. `email` may be present but is only checked against the addressed
/// user; it is never written.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchUser {
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_level: Option<i32>,
}

impl User {
    /// Create a new user with a freshly assigned id.
    pub fn new(
        email: String,
        password: String,
        first_name: Option<String>,
        last_name: Option<String>,
        permission_level: Option<i32>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            email,
            password,
            first_name,
            last_name,
            permission_level: permission_level.unwrap_or(DEFAULT_PERMISSION_LEVEL),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the enumerated patchable fields. `id` and `email` are never
    /// touched here.
    pub fn apply_patch(&mut self, patch: PatchUser) {
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(level) = patch.permission_level {
            self.permission_level = level;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "test@example.com".to_string(),
            "secret".to_string(),
            Some("Ada".to_string()),
            Some("Lovelace".to_string()),
            None,
        )
    }

    #[test]
    fn test_new_user_defaults_permission_level() {
        let user = sample_user();
        assert_eq!(user.permission_level, DEFAULT_PERMISSION_LEVEL);
    }

    #[test]
    fn test_new_user_keeps_supplied_permission_level() {
        let user = User::new(
            "test@example.com".to_string(),
            "secret".to_string(),
            None,
            None,
            Some(4),
        );
        assert_eq!(user.permission_level, 4);
    }

    #[test]
    fn test_apply_patch_touches_only_patchable_fields() {
        let mut user = sample_user();
        let id = user.id;
        let email = user.email.clone();

        user.apply_patch(PatchUser {
            email: Some("other@example.com".to_string()),
            password: Some("changed".to_string()),
            first_name: Some("Jo".to_string()),
            last_name: None,
            permission_level: Some(2),
        });

        assert_eq!(user.id, id);
        assert_eq!(user.email, email); // email is never applied by patch
        assert_eq!(user.password, "changed");
        assert_eq!(user.first_name.as_deref(), Some("Jo"));
        assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(user.permission_level, 2);
    }

    #[test]
    fn test_password_not_serialized() {
        let user = sample_user();
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "test@example.com");
        assert_eq!(value["firstName"], "Ada");
    }

    #[test]
    fn test_create_user_deserializes_camel_case() {
        let input: CreateUser = serde_json::from_str(
            r#"{"email":"a@x.com","password":"p","firstName":"Jo","permissionLevel":2}"#,
        )
        .unwrap();
        assert_eq!(input.email.as_deref(), Some("a@x.com"));
        assert_eq!(input.first_name.as_deref(), Some("Jo"));
        assert_eq!(input.permission_level, Some(2));
        assert!(input.last_name.is_none());
    }
}
