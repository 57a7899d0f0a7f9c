use std::path::PathBuf;

use thiserror::Error;

use crate::graph::PortId;

/// Convenient result alias for the searoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a queried port identifier is not present in the route graph.
    #[error("unknown port {port}: not on the route network")]
    UnknownPort { port: PortId },

    /// Raised when a port name could not be resolved against the port directory.
    #[error("unknown port name: {name}{}", format_suggestions(.suggestions))]
    UnknownPortName {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the frontier empties before the goal port is reached.
    #[error("no admissible route between port {start} and port {goal} under the current constraints")]
    NoAdmissiblePath { start: PortId, goal: PortId },

    /// Raised when a route segment fails validation during dataset loading.
    #[error("malformed route segment {from} -> {to}: {reason}")]
    MalformedSegment {
        from: PortId,
        to: PortId,
        reason: String,
    },

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when parsing one of the dataset files fails.
    #[error("failed to parse dataset file {path}: {message}")]
    DatasetParse { path: PathBuf, message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    ProjectDirsUnavailable,

    /// Raised when a computed voyage plan lacks any ports.
    #[error("voyage plan was empty")]
    EmptyVoyagePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
