//! High-level voyage planning on top of the constrained path finder.
//!
//! [`plan_voyage`] is the main entry point: it rebuilds the route graph from
//! the chart's segments, runs the constrained search, and enriches the found
//! port-id path with reference records. The graph is built fresh on every
//! call; nothing is cached between queries, so storm advisories picked up by
//! a fresh chart load always take effect.

use serde::Serialize;
use tracing::warn;

use crate::dataset::{Port, PortDirectory, SeaChart};
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{build_graph, PortId};
use crate::path::find_path;

/// High-level voyage planning request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoyageRequest {
    /// Port of departure.
    pub start: PortId,
    /// Port of arrival.
    pub goal: PortId,
    /// Range ceiling applied to each individual leg, in kilometres.
    pub max_leg_km: f64,
}

impl VoyageRequest {
    pub fn new(start: PortId, goal: PortId, max_leg_km: f64) -> Self {
        Self {
            start,
            goal,
            max_leg_km,
        }
    }
}

/// Planned voyage returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoyagePlan {
    pub start: PortId,
    pub goal: PortId,
    /// Total distance of the voyage in kilometres.
    pub total_distance_km: f64,
    /// Ordered port identifiers along the voyage.
    pub ports: Vec<PortId>,
    /// Ports of call enriched with reference records, in voyage order. Ids
    /// without a reference record are omitted here but stay in `ports`.
    pub calls: Vec<Port>,
    /// Full traversed lane geometry.
    pub geometry: Vec<Coordinate>,
}

impl VoyagePlan {
    /// Number of legs sailed during the voyage.
    pub fn leg_count(&self) -> usize {
        self.ports.len().saturating_sub(1)
    }
}

/// Compute a voyage plan against a loaded sea chart.
///
/// Builds the graph and geometry index fresh from the chart's segments, runs
/// the constrained search with the chart's storm advisories, and maps the
/// resulting path onto port reference records.
pub fn plan_voyage(chart: &SeaChart, request: &VoyageRequest) -> Result<VoyagePlan> {
    let (graph, geometry) = build_graph(&chart.segments);
    let result = find_path(
        &graph,
        &geometry,
        request.start,
        request.goal,
        request.max_leg_km,
        &chart.storms,
    )?;
    let calls = assemble_calls(&result.ports, &chart.ports);

    Ok(VoyagePlan {
        start: request.start,
        goal: request.goal,
        total_distance_km: result.total_distance_km,
        ports: result.ports,
        calls,
        geometry: result.geometry,
    })
}

/// Map each port id in a path to its reference record, preserving order.
///
/// An id with no matching record is skipped with a warning rather than
/// failing the voyage; the id path itself remains valid and actionable.
pub fn assemble_calls(path: &[PortId], directory: &PortDirectory) -> Vec<Port> {
    let mut calls = Vec::with_capacity(path.len());
    for &id in path {
        match directory.get(id) {
            Some(port) => calls.push(port.clone()),
            None => warn!(port = id, "no reference record for port in path, omitting"),
        }
    }
    calls
}

/// Resolve a port reference given either a numeric identifier or a name.
///
/// All-digit references are treated as identifiers and pass through without a
/// directory check; the search itself reports ids that are not on the route
/// network. Name lookups are case-insensitive, and failures carry fuzzy
/// suggestions for the caller's error message.
pub fn resolve_port(directory: &PortDirectory, reference: &str) -> Result<PortId> {
    if let Ok(id) = reference.trim().parse::<PortId>() {
        return Ok(id);
    }

    directory.port_id_by_name(reference).ok_or_else(|| {
        let suggestions = directory.fuzzy_port_matches(reference, 3);
        Error::UnknownPortName {
            name: reference.to_string(),
            suggestions,
        }
    })
}
