use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorResponse, UuidPath, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, PatchUser, PutUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{userId}",
            get(get_user)
                .put(put_user)
                .patch(patch_user)
                .delete(delete_user),
        )
        .with_state(shared_service)
}

/// OpenAPI documentation for the users endpoints.
///
/// Nest this into the application's `ApiDoc` under the mount path:
/// `#[openapi(nest((path = "/users", api = UsersApiDoc)))]`
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, put_user, patch_user, delete_user),
    components(schemas(User, CreateUser, PutUser, PatchUser, CreatedUser, MessageResponse, ErrorResponse)),
    tags((name = "users", description = "User CRUD operations"))
)]
pub struct UsersApiDoc;

/// Response body for a successful create
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUser {
    pub id: Uuid,
}

/// Confirmation body for put/patch/delete
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List all users
///
/// GET /users
#[utoipa::path(
    get,
    path = "",
    responses((status = 200, body = [User])),
    tag = "users"
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "",
    request_body = CreateUser,
    responses(
        (status = 201, body = CreatedUser),
        (status = 400, body = ErrorResponse)
    ),
    tag = "users"
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let id = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedUser { id })))
}

/// Get a user by ID
///
/// GET /users/:userId
#[utoipa::path(
    get,
    path = "/{userId}",
    params(("userId" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, body = User),
        (status = 404, body = ErrorResponse)
    ),
    tag = "users"
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace a user (full update)
///
/// PUT /users/:userId
#[utoipa::path(
    put,
    path = "/{userId}",
    params(("userId" = Uuid, Path, description = "User identifier")),
    request_body = PutUser,
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "users"
)]
async fn put_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<PutUser>,
) -> UserResult<Json<MessageResponse>> {
    let updated = service.put_user(id, input).await?;
    Ok(Json(MessageResponse {
        message: format!("{} updated via put", updated.id),
    }))
}

/// Update a subset of a user's fields
///
/// PATCH /users/:userId
#[utoipa::path(
    patch,
    path = "/{userId}",
    params(("userId" = Uuid, Path, description = "User identifier")),
    request_body = PatchUser,
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "users"
)]
async fn patch_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<PatchUser>,
) -> UserResult<Json<MessageResponse>> {
    let patched = service.patch_user(id, input).await?;
    Ok(Json(MessageResponse {
        message: format!("{} patched", patched.id),
    }))
}

/// Delete a user
///
/// DELETE /users/:userId
#[utoipa::path(
    delete,
    path = "/{userId}",
    params(("userId" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, body = ErrorResponse)
    ),
    tag = "users"
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(id).await?;
    Ok(Json(MessageResponse {
        message: format!("{} removed", id),
    }))
}
