//! HTTP endpoint exposing metadata resolution.
//!
//! - `GET /api?url=<url>`: the page's `MetadataRecord` as JSON
//! - `GET /health`: liveness probe
//! - `GET /status`: request counters

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use crate::config::{Config, DEFAULT_BIND_ADDRESS};
use crate::initialization::init_client;
use handlers::{health_handler, metadata_handler, status_handler};
pub use types::{ApiQuery, AppState, ErrorResponse};

/// Builds the router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(metadata_handler))
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Creates the shared client and serves until Ctrl+C.
pub async fn start_server(config: &Config) -> Result<(), anyhow::Error> {
    let client = init_client(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize HTTP client: {}", e))?;
    let app = router(AppState::new(client));

    let addr = format!("{}:{}", DEFAULT_BIND_ADDRESS, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Listening on http://{}/", addr);
    log::info!("  - Metadata: http://{}/api?url=<url>", addr);
    log::info!("  - Status: http://{}/status", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    log::info!("Shutting down");
}
