//! Sea-route planning HTTP service.
//!
//! Provides a REST API for planning constrained voyages between ports over
//! the charted route network.
//!
//! # Endpoints
//!
//! - `POST /api/v1/route` - Plan a voyage between two ports
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `SEAROUTE_DATA_DIR` - Dataset directory holding ports.geojson,
//!   routes.json and (optionally) storms.json
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use searoute_service::{app, init_logging, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("searoute");
    init_logging(&logging_config);

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(port, "starting sea-route service");

    // Data dir comes from SEAROUTE_DATA_DIR or the platform default.
    let state = AppState::load(None).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    info!(data_dir = %state.data_dir().display(), "application state loaded");

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
