use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Build router with the API routes; create_router adds docs and
    // cross-cutting middleware (request tracing, CORS, security headers)
    let api_routes = api::routes();
    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    // Merge the /health liveness endpoint into the app
    let app = router.merge(health_router(config.app.clone()));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("users API shutdown complete");
    Ok(())
}
