use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, Environment};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Tracing first so configuration warnings are visible
    init_tracing(&Environment::from_env());

    // Load configuration from environment variables
    let config = Config::from_env()?;

    if let Err(e) = observability::init_metrics() {
        warn!("Prometheus recorder not installed, /metrics will be empty: {}", e);
    }

    let state = AppState::new(config)?;
    let app = api::app(&state)?;

    info!(
        environment = ?state.config.environment,
        "Starting {} v{} (shutdown budget {:?})",
        state.config.app.name, state.config.app.version, state.config.server.shutdown_timeout
    );

    let users = state.users.clone();
    create_production_app(app, &state.config.server, async move {
        use domain_users::UserRepository;

        match users.count().await {
            Ok(count) => info!("Discarding {} in-memory users", count),
            Err(e) => warn!("Could not count users during shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Hexagon API shutdown complete");
    Ok(())
}
