//! Router assembly and the voyage planning handler.

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use searoute_lib::{plan_voyage, resolve_port, Coordinate, Port, PortId, VoyageRequest};

use crate::{
    from_lib_error, health_live, health_ready, AppState, PlanVoyageRequest, ProblemDetails,
    ServiceResponse, Validate,
};

/// Voyage response returned to the caller.
#[derive(Debug, Serialize)]
pub struct VoyageResponse {
    /// Identifier for correlating this request in the logs.
    pub request_id: String,
    /// Wall-clock time spent planning, in milliseconds.
    pub duration_ms: u64,
    /// Total distance of the voyage in kilometres.
    pub total_distance_km: f64,
    /// Ordered port identifiers along the voyage.
    pub path: Vec<PortId>,
    /// Ports of call enriched with reference records.
    pub ports: Vec<Port>,
    /// Full traversed lane geometry in travel order.
    pub route_coordinates: Vec<Coordinate>,
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Success(ServiceResponse<VoyageResponse>),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the service router with all endpoints and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/route", post(route_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle POST /api/v1/route requests.
///
/// The chart is reloaded from disk on every request and the graph rebuilt
/// from it, so storm advisories updated in the dataset directory apply to
/// the very next query.
async fn route_handler(
    State(state): State<AppState>,
    Json(request): Json<PlanVoyageRequest>,
) -> Response {
    let request_id = generate_request_id();
    let started = Instant::now();

    info!(
        request_id = %request_id,
        start = %request.start,
        end = %request.end,
        max_leg_km = request.max_leg_km,
        "handling voyage request"
    );

    if let Err(problem) = request.validate(&request_id) {
        return Response::Error(*problem);
    }

    let chart = match state.chart() {
        Ok(chart) => chart,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "chart load failed");
            return Response::Error(from_lib_error(&e, &request_id));
        }
    };

    let start = match resolve_port(&chart.ports, &request.start) {
        Ok(id) => id,
        Err(e) => return Response::Error(from_lib_error(&e, &request_id)),
    };
    let end = match resolve_port(&chart.ports, &request.end) {
        Ok(id) => id,
        Err(e) => return Response::Error(from_lib_error(&e, &request_id)),
    };

    let plan = match plan_voyage(&chart, &VoyageRequest::new(start, end, request.max_leg_km)) {
        Ok(plan) => plan,
        Err(e) => {
            info!(request_id = %request_id, error = %e, "voyage planning failed");
            return Response::Error(from_lib_error(&e, &request_id));
        }
    };

    let response = VoyageResponse {
        request_id: request_id.clone(),
        duration_ms: started.elapsed().as_millis() as u64,
        total_distance_km: plan.total_distance_km,
        path: plan.ports,
        ports: plan.calls,
        route_coordinates: plan.geometry,
    };

    info!(
        request_id = %request_id,
        legs = response.path.len().saturating_sub(1),
        total_distance_km = response.total_distance_km,
        duration_ms = response.duration_ms,
        "voyage planned successfully"
    );

    Response::Success(ServiceResponse::new(response))
}

/// Generate a unique request ID for tracing.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    format!("req-{:x}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_prefixed_and_distinct() {
        let first = generate_request_id();
        let second = generate_request_id();

        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }
}
