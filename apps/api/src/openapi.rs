use domain_users::UsersApiDoc;
use utoipa::OpenApi;

/// Aggregated API documentation, served by the Swagger UI mount.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "users-api",
        description = "Minimal users CRUD service backed by an in-memory store"
    ),
    nest((path = "/users", api = UsersApiDoc))
)]
pub struct ApiDoc;
