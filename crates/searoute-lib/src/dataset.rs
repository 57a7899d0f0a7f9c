//! Loading the sea chart: ports, sea-lane segments, and storm advisories.
//!
//! The dataset directory holds three JSON documents:
//!
//! - `ports.geojson` — GeoJSON FeatureCollection of Point features with
//!   `properties.id` and `properties.name`.
//! - `routes.json` — `{ "routes": [...] }` of sea-lane segments with sampled
//!   waypoint geometry.
//! - `storms.json` — `{ "locations": [...] }` of active storm zones. Optional;
//!   a missing file means no active storms.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{PortId, RouteSegment};
use crate::storm::StormZone;

/// Filename of the port reference file within a dataset directory.
pub const PORTS_FILENAME: &str = "ports.geojson";

/// Filename of the sea-lane segment file within a dataset directory.
pub const ROUTES_FILENAME: &str = "routes.json";

/// Filename of the storm advisory file within a dataset directory.
pub const STORMS_FILENAME: &str = "storms.json";

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "SEAROUTE_DATA_DIR";

/// Minimum similarity before a port name is offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Port reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub coordinate: Coordinate,
}

/// Immutable port reference set with name lookup.
#[derive(Debug, Clone, Default)]
pub struct PortDirectory {
    ports: HashMap<PortId, Port>,
    name_to_id: HashMap<String, PortId>,
}

impl PortDirectory {
    /// Build a directory from a list of port records. When two records share
    /// a name the later record wins the name lookup.
    pub fn from_ports(ports: Vec<Port>) -> Self {
        let mut directory = Self::default();
        for port in ports {
            directory.name_to_id.insert(port.name.to_lowercase(), port.id);
            directory.ports.insert(port.id, port);
        }
        directory
    }

    /// Lookup a port record by identifier.
    pub fn get(&self, id: PortId) -> Option<&Port> {
        self.ports.get(&id)
    }

    /// Lookup a port identifier by its case-insensitive name.
    pub fn port_id_by_name(&self, name: &str) -> Option<PortId> {
        self.name_to_id.get(&name.to_lowercase()).copied()
    }

    /// Lookup a port name by identifier.
    pub fn port_name(&self, id: PortId) -> Option<&str> {
        self.ports.get(&id).map(|port| port.name.as_str())
    }

    /// Port names similar to `name`, best match first, at most `limit`.
    pub fn fuzzy_port_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .ports
            .values()
            .map(|port| {
                (
                    strsim::jaro_winkler(&needle, &port.name.to_lowercase()),
                    port.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.truncate(limit);
        scored.into_iter().map(|(_, n)| n.to_string()).collect()
    }

    /// Number of ports in the directory.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Iterate over all port records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }
}

/// Everything a single routing query needs, loaded fresh from disk.
#[derive(Debug, Clone, Default)]
pub struct SeaChart {
    pub ports: PortDirectory,
    pub segments: Vec<RouteSegment>,
    pub storms: Vec<StormZone>,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
    geometry: FeatureGeometry,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    id: PortId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct FeatureGeometry {
    // GeoJSON position order is [longitude, latitude].
    coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RoutesFile {
    routes: Vec<RouteSegment>,
}

#[derive(Debug, Deserialize)]
struct StormsFile {
    locations: Vec<StormZone>,
}

/// Load the port reference set from a GeoJSON file.
pub fn load_ports(path: &Path) -> Result<PortDirectory> {
    let collection: FeatureCollection = read_json(path)?;
    let ports = collection
        .features
        .into_iter()
        .map(|feature| Port {
            id: feature.properties.id,
            name: feature.properties.name,
            coordinate: Coordinate::new(
                feature.geometry.coordinates[1],
                feature.geometry.coordinates[0],
            ),
        })
        .collect::<Vec<_>>();
    debug!(path = %path.display(), ports = ports.len(), "loaded port reference data");
    Ok(PortDirectory::from_ports(ports))
}

/// Load the sea-lane segments from a routes file.
///
/// A segment that parses but carries a non-positive or non-finite distance is
/// rejected with [`Error::MalformedSegment`] so garbage edges never reach the
/// graph builder silently.
pub fn load_segments(path: &Path) -> Result<Vec<RouteSegment>> {
    let file: RoutesFile = read_json(path)?;
    for segment in &file.routes {
        if !segment.distance_km.is_finite() || segment.distance_km <= 0.0 {
            return Err(Error::MalformedSegment {
                from: segment.from,
                to: segment.to,
                reason: format!("distance must be a positive number, got {}", segment.distance_km),
            });
        }
    }
    debug!(path = %path.display(), segments = file.routes.len(), "loaded sea-lane segments");
    Ok(file.routes)
}

/// Load the active storm zones from an advisory file.
pub fn load_storms(path: &Path) -> Result<Vec<StormZone>> {
    let file: StormsFile = read_json(path)?;
    debug!(path = %path.display(), storms = file.locations.len(), "loaded storm advisories");
    Ok(file.locations)
}

/// Load the complete sea chart from a dataset directory.
///
/// Ports and routes are required; storms are transient advisories, so a
/// missing storms file reads as an empty set.
pub fn load_chart(data_dir: &Path) -> Result<SeaChart> {
    let ports = load_ports(&data_dir.join(PORTS_FILENAME))?;
    let segments = load_segments(&data_dir.join(ROUTES_FILENAME))?;

    let storms_path = data_dir.join(STORMS_FILENAME);
    let storms = if storms_path.exists() {
        load_storms(&storms_path)?
    } else {
        info!(path = %storms_path.display(), "no storm advisory file, assuming clear weather");
        Vec::new()
    };

    info!(
        ports = ports.len(),
        segments = segments.len(),
        storms = storms.len(),
        "sea chart loaded"
    );

    Ok(SeaChart {
        ports,
        segments,
        storms,
    })
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "searoute", "searoute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the dataset directory for a query.
///
/// Resolution order:
/// 1. Explicit `target` argument.
/// 2. `SEAROUTE_DATA_DIR` environment variable.
/// 3. Platform project data directory.
///
/// The resolved directory must contain the routes file; otherwise
/// [`Error::DatasetNotFound`] is returned.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        explicit.to_path_buf()
    } else if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        PathBuf::from(env_path)
    } else {
        default_data_dir()?
    };

    if !resolved.join(ROUTES_FILENAME).exists() {
        return Err(Error::DatasetNotFound { path: resolved });
    }

    Ok(resolved)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|err| Error::DatasetParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
