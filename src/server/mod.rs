//! HTTP ingestion server.
//!
//! Provides three endpoints:
//! - `PUT /organisations/:uuid` - queue an organisation for writing
//! - `/__health` - JSON health of the batch writer
//! - `/metrics` - Prometheus-compatible metrics

mod handlers;
mod types;

use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use handlers::{health_handler, metrics_handler, write_handler};
pub use types::{AppState, HealthResponse};

/// Builds the router for the ingestion server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/organisations/:uuid", put(write_handler))
        .route("/__health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Binds `port` on all interfaces.
pub async fn bind(port: u16) -> Result<TcpListener, anyhow::Error> {
    TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to port {}: {}", port, e))
}

/// Serves requests until `shutdown` is cancelled, then finishes in-flight ones.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("Listening on http://{}/", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("HTTP server stopped");
    Ok(())
}
