use axum::Router;
use domain_users::{handlers, InMemoryUserRepository, UserService};

/// Builds the users router with a single process-lifetime store instance
/// injected into the service.
pub fn router() -> Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);
    handlers::router(service)
}
