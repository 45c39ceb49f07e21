/// Server setup and initialization
///
/// Wires together the config store, the Discord notifier, and the HTTP
/// routes. Provides the application factory used by main and by tests.

use crate::{
    api::forward::{create_forward_routes, AppState},
    config::{Config, ConfigStore},
    discord::DiscordNotifier,
};
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// Create the Axum application with all routes
pub fn create_app(config: &Config) -> Result<Router> {
    let store = ConfigStore::new(&config.storage.config_file);
    let notifier = DiscordNotifier::new()?;

    let state = AppState { store, notifier };

    let app = Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Chat forwarding endpoint
        .merge(create_forward_routes().with_state(state));

    Ok(app)
}

/// Start the HTTP server with the given configuration
///
/// Binds the configured address and serves until process termination. A bind
/// failure (port already in use, privileged port) is returned to the caller
/// so the operator can be told before the process ends.
pub async fn start_server(config: Config) -> Result<()> {
    let app = create_app(&config)?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
