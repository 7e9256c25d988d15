use axum::{routing::get, Router};

pub mod users;

/// Liveness string for the root path.
async fn index() -> &'static str {
    "Server up and running!"
}

/// Creates the API routes.
///
/// Returns a stateless Router: sub-routers have their state already applied,
/// so only cheap Arc clones remain inside.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/users", users::router())
}
