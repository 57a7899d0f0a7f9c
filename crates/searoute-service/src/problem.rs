//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use searoute_lib::Error as LibError;

/// Problem type URI for port references that cannot be resolved.
pub const PROBLEM_UNKNOWN_PORT: &str = "/problems/unknown-port";

/// Problem type URI for voyages with no admissible route.
pub const PROBLEM_NO_ADMISSIBLE_PATH: &str = "/problems/no-admissible-path";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// Problem type URI for an unavailable or unreadable dataset.
pub const PROBLEM_DATASET_UNAVAILABLE: &str = "/problems/dataset-unavailable";

/// RFC 9457 Problem Details response structure.
///
/// Provides a consistent format for error responses across the service.
///
/// # Example
///
/// ```
/// use searoute_service::{ProblemDetails, PROBLEM_UNKNOWN_PORT};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_UNKNOWN_PORT,
///     "Unknown Port",
///     StatusCode::NOT_FOUND,
/// )
/// .with_detail("Port 'Roterdam' not found. Did you mean: 'Rotterdam'?")
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Content type for this response (always "application/problem+json").
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Create a 400 Bad Request problem for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for an unresolvable port name.
    pub fn unknown_port_name(
        name: &str,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        let detail = if suggestions.is_empty() {
            format!("Port '{}' not found", name)
        } else {
            format!(
                "Port '{}' not found. Did you mean: {}?",
                name,
                suggestions.join(", ")
            )
        };

        Self::new(PROBLEM_UNKNOWN_PORT, "Unknown Port", StatusCode::NOT_FOUND)
            .with_detail(detail)
            .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for a port id off the route network.
    pub fn unknown_port(port: i64, request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_UNKNOWN_PORT, "Unknown Port", StatusCode::NOT_FOUND)
            .with_detail(format!("Port {} is not on the route network", port))
            .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for voyages with no admissible route.
    pub fn no_admissible_path(start: i64, goal: i64, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_NO_ADMISSIBLE_PATH,
            "No Admissible Route",
            StatusCode::NOT_FOUND,
        )
        .with_detail(format!(
            "No admissible route from port {} to port {} under the current constraints",
            start, goal
        ))
        .with_request_id(request_id)
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 503 Service Unavailable problem for dataset failures.
    pub fn dataset_unavailable(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_DATASET_UNAVAILABLE,
            "Dataset Unavailable",
            StatusCode::SERVICE_UNAVAILABLE,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.detail.as_deref().unwrap_or(""))
    }
}

impl std::error::Error for ProblemDetails {}

/// Implement IntoResponse for axum to return ProblemDetails as HTTP responses.
impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Set the content-type header to application/problem+json
        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't
/// carry one. Dataset problems map to 503 so orchestrators retry rather than
/// cache a 4xx.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownPort { port } => ProblemDetails::unknown_port(*port, request_id),
        LibError::UnknownPortName { name, suggestions } => {
            ProblemDetails::unknown_port_name(name, suggestions, request_id)
        }
        LibError::NoAdmissiblePath { start, goal } => {
            ProblemDetails::no_admissible_path(*start, *goal, request_id)
        }
        LibError::DatasetNotFound { path } => ProblemDetails::dataset_unavailable(
            format!("Dataset not available at {}", path.display()),
            request_id,
        ),
        LibError::DatasetParse { .. } | LibError::MalformedSegment { .. } => {
            ProblemDetails::dataset_unavailable(error.to_string(), request_id)
        }
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}
