//! Application state for the routing service.
//!
//! Handlers get a validated dataset directory rather than a preloaded chart:
//! every request reloads the chart from disk so storm advisories dropped into
//! the dataset directory take effect without a restart.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use searoute_lib::{load_chart, resolve_data_dir, Error as LibError, SeaChart};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Dataset directory could not be resolved or is missing required files.
    DatasetUnavailable(String),

    /// Dataset resolved but the chart failed to load.
    ChartLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatasetUnavailable(path) => write!(f, "dataset unavailable: {}", path),
            Self::ChartLoad(e) => write!(f, "failed to load sea chart: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ChartLoad(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::DatasetNotFound { path } => {
                Self::DatasetUnavailable(path.display().to_string())
            }
            other => Self::ChartLoad(other),
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); share via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    data_dir: PathBuf,
}

impl AppState {
    /// Resolve the dataset directory and verify a chart loads from it.
    ///
    /// The probe load is discarded; handlers load their own fresh chart per
    /// request. Startup fails fast if the dataset is absent or unparseable.
    pub fn load(data_dir: Option<&Path>) -> Result<Self, AppStateError> {
        let resolved = resolve_data_dir(data_dir)?;

        tracing::info!(path = %resolved.display(), "probing sea chart");
        let chart = load_chart(&resolved)?;
        tracing::info!(
            ports = chart.ports.len(),
            segments = chart.segments.len(),
            storms = chart.storms.len(),
            "sea chart probe succeeded"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { data_dir: resolved }),
        })
    }

    /// The resolved dataset directory.
    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    /// Load a fresh chart from the dataset directory.
    pub fn chart(&self) -> searoute_lib::Result<SeaChart> {
        load_chart(&self.inner.data_dir)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("data_dir", &self.inner.data_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
    }

    #[test]
    fn test_app_state_load_from_fixtures() {
        let state = AppState::load(Some(&fixtures_dir())).expect("fixtures load");
        assert_eq!(state.data_dir(), fixtures_dir());

        let chart = state.chart().expect("chart reloads");
        assert!(!chart.ports.is_empty());
    }

    #[test]
    fn test_app_state_load_missing_dataset() {
        let result = AppState::load(Some(Path::new("/nonexistent/charts")));

        match result.expect_err("missing dataset rejected") {
            AppStateError::DatasetUnavailable(path) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_app_state_clone_shares_the_directory() {
        let state1 = AppState::load(Some(&fixtures_dir())).expect("fixtures load");
        let state2 = state1.clone();
        assert_eq!(state1.data_dir(), state2.data_dir());
    }

    #[test]
    fn test_app_state_error_display() {
        let err = AppStateError::DatasetUnavailable("/data/charts".to_string());
        assert!(err.to_string().contains("/data/charts"));
        assert!(err.to_string().contains("unavailable"));
    }
}
