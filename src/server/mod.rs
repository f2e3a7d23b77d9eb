//! HTTP server for quake-proxy
//!
//! Exposes the earthquake queries as REST endpoints.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::quake::{EarthquakeSource, QuakeClient};
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server backed by the configured upstream
///
/// Fails before binding if no API key is configured.
///
/// # Returns
/// Never returns unless the server shuts down
pub async fn run(config: Config) -> Result<()> {
    let client = QuakeClient::from_config(&config)?;
    let upstream = client.base_url().to_string();
    run_on(&config.server_addr(), AppState::new(client, upstream)).await
}

/// Start the HTTP server on a specific address with any earthquake source
pub async fn run_on<S: EarthquakeSource + 'static>(addr: &str, state: AppState<S>) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address: {}", e)))?;

    info!(upstream = %state.upstream, "Starting server on {}", addr);
    let app = create_router(Arc::new(state));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
