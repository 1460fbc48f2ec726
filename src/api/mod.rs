//! REST API over the estimation engine.
//!
//! Provides three endpoints:
//! - `GET /equipment` — the standard equipment catalog
//! - `GET /irradiance?zip=...` — irradiance lookup for a ZIP code
//! - `POST /estimate` — loads and system sizing for a posted schedule

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

pub use types::{EstimateRequest, EstimateResponse, IrradianceResponse};

/// Immutable application state shared across all request handlers.
pub struct AppState {
    /// Battery autonomy used when a request does not specify one (h).
    pub default_backup_hours: f64,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/equipment", get(handlers::get_equipment))
        .route("/irradiance", get(handlers::get_irradiance))
        .route("/estimate", post(handlers::post_estimate))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}
