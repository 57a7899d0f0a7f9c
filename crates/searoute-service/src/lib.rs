//! HTTP service for constrained sea-route planning.
//!
//! This crate provides the HTTP glue over `searoute-lib`:
//!
//! - [`AppState`]: Validated dataset directory shared across handlers
//! - [`health`]: Health check handlers for liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`logging`]: Structured JSON logging setup
//! - Request types with validation for the voyage endpoint
//!
//! The service follows a thin-handler pattern where all routing logic resides
//! in `searoute-lib`; handlers parse, validate, delegate, and format.

#![deny(warnings)]

mod health;
pub mod logging;
mod problem;
mod request;
mod response;
mod routes;
mod state;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_DATASET_UNAVAILABLE, PROBLEM_INTERNAL_ERROR,
    PROBLEM_INVALID_REQUEST, PROBLEM_NO_ADMISSIBLE_PATH, PROBLEM_UNKNOWN_PORT,
};
pub use request::{PlanVoyageRequest, Validate};
pub use response::ServiceResponse;
pub use routes::{app, VoyageResponse};
pub use state::{AppState, AppStateError};
