//! Searoute library entry points.
//!
//! This crate exposes helpers to locate the sea chart dataset, load ports,
//! sea-lane segments, and storm advisories into memory, build the route
//! graph, and run constrained voyage planning. Higher-level consumers (CLI,
//! HTTP service) should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod storm;

pub use dataset::{
    default_data_dir, load_chart, load_ports, load_segments, load_storms, resolve_data_dir, Port,
    PortDirectory, SeaChart,
};
pub use error::{Error, Result};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use graph::{build_graph, Edge, GeometryIndex, Graph, PortId, RouteSegment};
pub use output::{VoyageRenderMode, VoyageSummary};
pub use path::{find_path, PathResult};
pub use routing::{plan_voyage, resolve_port, VoyagePlan, VoyageRequest};
pub use storm::{path_enters_storm, StormZone};
