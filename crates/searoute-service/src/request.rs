//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request for planning a voyage between two ports.
///
/// `start` and `end` accept either a numeric port id or a port name; names
/// resolve case-insensitively against the port directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanVoyageRequest {
    /// Port of departure (id or name).
    pub start: String,

    /// Port of arrival (id or name).
    pub end: String,

    /// Range ceiling applied to every individual leg, in kilometres.
    pub max_leg_km: f64,
}

impl Validate for PlanVoyageRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.start.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'start' field is required and cannot be empty",
                request_id,
            )));
        }

        if self.end.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'end' field is required and cannot be empty",
                request_id,
            )));
        }

        if !self.max_leg_km.is_finite() || self.max_leg_km <= 0.0 {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'max_leg_km' field must be a positive number",
                request_id,
            )));
        }

        Ok(())
    }
}
