//! Route graph construction from sea-lane segment data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geo::Coordinate;

/// Identifier for a port within the route network.
pub type PortId = i64;

/// Sea-lane segment connecting two ports.
///
/// Stored directionally in source data but treated as bidirectional by the
/// graph builder. `waypoints` is the sampled geometry of the physical lane
/// from `from` towards `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub from: PortId,
    pub to: PortId,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "route", default)]
    pub waypoints: Vec<Coordinate>,
}

/// Directed edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: PortId,
    pub distance_km: f64,
}

/// Adjacency structure used by pathfinding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: HashMap<PortId, Vec<Edge>>,
}

impl Graph {
    /// Return the outgoing edges for a given port identifier.
    pub fn neighbours(&self, port: PortId) -> &[Edge] {
        self.adjacency.get(&port).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the port appears in the graph at all.
    pub fn contains(&self, port: PortId) -> bool {
        self.adjacency.contains_key(&port)
    }

    /// Number of ports present in the graph.
    pub fn port_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterate over every port identifier in the graph.
    pub fn ports(&self) -> impl Iterator<Item = PortId> + '_ {
        self.adjacency.keys().copied()
    }
}

/// Waypoint geometry for every directed edge, keyed by ordered (from, to) pair.
///
/// The reverse direction of a lane stores the exact reverse of the forward
/// sequence. For parallel lanes between the same pair of ports the last-stored
/// sequence wins per directed key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryIndex {
    segments: HashMap<(PortId, PortId), Vec<Coordinate>>,
}

impl GeometryIndex {
    /// Waypoints for the directed edge `from -> to`; empty when no geometry
    /// was recorded for the pair.
    pub fn waypoints(&self, from: PortId, to: PortId) -> &[Coordinate] {
        self.segments
            .get(&(from, to))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of directed entries held by the index.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Build the bidirectional routing graph and its edge geometry index.
///
/// Every segment contributes one edge in each direction with identical
/// distance, plus a geometry entry per direction (reverse direction reversed).
/// Parallel segments between the same pair are all retained; the search
/// naturally prefers the cheaper one. Segments whose distance is not a
/// positive finite number are skipped with a warning rather than poisoning
/// the graph. The input list is never mutated.
pub fn build_graph(segments: &[RouteSegment]) -> (Graph, GeometryIndex) {
    let mut adjacency: HashMap<PortId, Vec<Edge>> = HashMap::new();
    let mut geometry: HashMap<(PortId, PortId), Vec<Coordinate>> = HashMap::new();
    let mut skipped_segments = 0usize;

    for segment in segments {
        if !segment.distance_km.is_finite() || segment.distance_km <= 0.0 {
            skipped_segments += 1;
            warn!(
                from = segment.from,
                to = segment.to,
                distance_km = segment.distance_km,
                "skipping segment with non-positive distance"
            );
            continue;
        }

        adjacency.entry(segment.from).or_default().push(Edge {
            target: segment.to,
            distance_km: segment.distance_km,
        });
        adjacency.entry(segment.to).or_default().push(Edge {
            target: segment.from,
            distance_km: segment.distance_km,
        });

        let reversed: Vec<Coordinate> = segment.waypoints.iter().rev().copied().collect();
        geometry.insert((segment.from, segment.to), segment.waypoints.clone());
        geometry.insert((segment.to, segment.from), reversed);
    }

    debug!(
        ports = adjacency.len(),
        directed_edges = adjacency.values().map(Vec::len).sum::<usize>(),
        skipped_segments,
        "route graph built"
    );

    (
        Graph { adjacency },
        GeometryIndex { segments: geometry },
    )
}
