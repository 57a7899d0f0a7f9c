use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::graph::{Edge, GeometryIndex, Graph, PortId};
use crate::storm::{path_enters_storm, StormZone};

/// Successful outcome of a constrained path search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Total cumulative distance of the path in kilometres.
    pub total_distance_km: f64,
    /// Ordered port identifiers from start to goal, inclusive.
    pub ports: Vec<PortId>,
    /// Full traversed geometry, legs concatenated in travel order.
    pub geometry: Vec<Coordinate>,
}

/// Find the minimum-distance admissible path between two ports.
///
/// Priority-ordered search keyed by cumulative distance. Two per-edge filters
/// run before an edge is ever enqueued: the capacity filter rejects edges
/// longer than `max_leg_km` (a per-leg ceiling, not a depleting fuel budget),
/// and the hazard filter rejects edges whose stored waypoints enter a storm
/// zone. Both filters apply at edge discovery time only; the accumulated path
/// is never re-checked.
///
/// The first time the goal port is popped the entry's path is returned; with
/// non-negative edge weights that path is minimal among admissible paths.
/// Frontier ties break on port identifier and then path sequence, so results
/// are deterministic across runs.
///
/// `start == goal` trivially succeeds with a single-port path, zero distance
/// and empty geometry. A start or goal absent from the graph is
/// [`Error::UnknownPort`]; an exhausted frontier is
/// [`Error::NoAdmissiblePath`].
pub fn find_path(
    graph: &Graph,
    geometry: &GeometryIndex,
    start: PortId,
    goal: PortId,
    max_leg_km: f64,
    storms: &[StormZone],
) -> Result<PathResult> {
    if !graph.contains(start) {
        return Err(Error::UnknownPort { port: start });
    }
    if !graph.contains(goal) {
        return Err(Error::UnknownPort { port: goal });
    }

    let mut frontier = BinaryHeap::new();
    let mut finalized: HashSet<PortId> = HashSet::new();
    frontier.push(FrontierEntry::origin(start));

    while let Some(entry) = frontier.pop() {
        if entry.port == goal {
            return Ok(entry.into_result());
        }

        if !finalized.insert(entry.port) {
            continue;
        }

        for edge in graph.neighbours(entry.port) {
            if edge.distance_km > max_leg_km {
                debug!(
                    from = entry.port,
                    to = edge.target,
                    distance_km = edge.distance_km,
                    max_leg_km,
                    "leg exceeds range ceiling, skipping"
                );
                continue;
            }

            let leg = geometry.waypoints(entry.port, edge.target);
            if path_enters_storm(leg, storms) {
                debug!(
                    from = entry.port,
                    to = edge.target,
                    "leg crosses a storm zone, skipping"
                );
                continue;
            }

            frontier.push(entry.extend(edge, leg));
        }
    }

    Err(Error::NoAdmissiblePath { start, goal })
}

/// Search state carrying the whole path and its geometry.
///
/// Entries are immutable once pushed; expansion copies rather than mutates so
/// sibling expansions of one popped entry stay independent.
#[derive(Debug, Clone)]
struct FrontierEntry {
    cost: FloatOrd,
    port: PortId,
    ports: Vec<PortId>,
    geometry: Vec<Coordinate>,
}

impl FrontierEntry {
    fn origin(port: PortId) -> Self {
        Self {
            cost: FloatOrd(0.0),
            port,
            ports: vec![port],
            geometry: Vec::new(),
        }
    }

    fn extend(&self, edge: &Edge, leg: &[Coordinate]) -> Self {
        let mut ports = Vec::with_capacity(self.ports.len() + 1);
        ports.extend_from_slice(&self.ports);
        ports.push(edge.target);

        let mut geometry = Vec::with_capacity(self.geometry.len() + leg.len());
        geometry.extend_from_slice(&self.geometry);
        geometry.extend_from_slice(leg);

        Self {
            cost: FloatOrd(self.cost.0 + edge.distance_km),
            port: edge.target,
            ports,
            geometry,
        }
    }

    fn into_result(self) -> PathResult {
        PathResult {
            total_distance_km: self.cost.0,
            ports: self.ports,
            geometry: self.geometry,
        }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.port == other.port && self.ports == other.ports
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cumulative
        // distance. Ties fall back to port id and then the path sequence to
        // keep pop order deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.port.cmp(&self.port))
            .then_with(|| other.ports.cmp(&self.ports))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
