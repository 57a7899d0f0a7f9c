//! Health check handlers for liveness and readiness probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for orchestrator probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: ...".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of ports in the directory (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports_loaded: Option<usize>,

    /// Number of active storm advisories (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storms_active: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            ports_loaded: None,
            storms_active: None,
        }
    }

    /// Create a ready status with dataset information.
    pub fn ready(service: &str, version: &str, ports: usize, storms: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            ports_loaded: Some(ports),
            storms_active: Some(storms),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            ports_loaded: None,
            storms_active: None,
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running. This is a simple check that does
/// not depend on external resources.
///
/// # Example
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"searoute-service","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 200 OK if the service is ready to accept traffic. Performs a fresh
/// chart load, so readiness reflects the dataset currently on disk.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let chart = match state.chart() {
        Ok(chart) => chart,
        Err(error) => {
            let status = HealthStatus::not_ready(service, version, &error.to_string());
            return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
        }
    };

    if chart.ports.is_empty() {
        let status = HealthStatus::not_ready(service, version, "port directory is empty");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, chart.ports.len(), chart.storms.len());
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("test-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "test-service");
        assert!(status.ports_loaded.is_none());
        assert!(status.storms_active.is_none());
    }

    #[test]
    fn test_health_status_ready() {
        let status = HealthStatus::ready("test-service", "1.0.0", 8, 1);
        assert_eq!(status.status, "ok");
        assert_eq!(status.ports_loaded, Some(8));
        assert_eq!(status.storms_active, Some(1));
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("test-service", "1.0.0", "no data");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no data"));
    }

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus::alive("searoute-service", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"service\":\"searoute-service\""));
        assert!(!json.contains("ports_loaded")); // skip_serializing_if
    }
}
