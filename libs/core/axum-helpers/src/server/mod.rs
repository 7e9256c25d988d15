//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with common middleware and OpenAPI documentation
//! - A `/health` liveness endpoint
//! - Graceful shutdown on SIGINT/SIGTERM

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
