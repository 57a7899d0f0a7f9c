//! Storm exclusion zones and the hazard predicate applied to leg geometry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::{haversine_km, Coordinate};

/// Circular storm exclusion zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StormZone {
    /// Center of the exclusion area.
    pub center: Coordinate,
    /// Exclusion radius in kilometres, inclusive.
    pub radius_km: f64,
}

impl StormZone {
    pub fn new(center: Coordinate, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Whether a point lies within the exclusion radius (boundary included).
    pub fn contains(&self, point: &Coordinate) -> bool {
        haversine_km(point, &self.center) <= self.radius_km
    }
}

/// Test whether any waypoint of a candidate leg falls inside any storm zone.
///
/// Only the discrete waypoints supplied are checked; the spans between them
/// are not intersected, so a storm sitting strictly between two waypoints goes
/// undetected. Returns on the first hit. An empty waypoint sequence or an
/// empty storm set is never hazardous.
pub fn path_enters_storm(waypoints: &[Coordinate], storms: &[StormZone]) -> bool {
    for point in waypoints {
        for storm in storms {
            if storm.contains(point) {
                debug!(
                    latitude = point.latitude,
                    longitude = point.longitude,
                    storm_latitude = storm.center.latitude,
                    storm_longitude = storm.center.longitude,
                    radius_km = storm.radius_km,
                    "waypoint falls inside a storm zone"
                );
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn north_sea_storm() -> StormZone {
        StormZone::new(Coordinate::new(55.0, 3.0), 100.0)
    }

    #[test]
    fn empty_waypoints_are_never_hazardous() {
        assert!(!path_enters_storm(&[], &[north_sea_storm()]));
    }

    #[test]
    fn empty_storm_set_is_never_hazardous() {
        let waypoints = [Coordinate::new(55.0, 3.0)];
        assert!(!path_enters_storm(&waypoints, &[]));
    }

    #[test]
    fn waypoint_inside_radius_is_hazardous() {
        let waypoints = [Coordinate::new(55.1, 3.1)];
        assert!(path_enters_storm(&waypoints, &[north_sea_storm()]));
    }

    #[test]
    fn waypoint_on_the_boundary_counts_as_inside() {
        let storm = StormZone::new(Coordinate::new(0.0, 0.0), 111.19);
        // One degree of latitude sits within a hair of the 111.19 km radius.
        let point = Coordinate::new(0.9999, 0.0);
        assert!(storm.contains(&point));
    }

    #[test]
    fn waypoint_outside_radius_is_clear() {
        let waypoints = [Coordinate::new(50.0, -10.0)];
        assert!(!path_enters_storm(&waypoints, &[north_sea_storm()]));
    }

    #[test]
    fn any_single_hit_flags_the_whole_leg() {
        let waypoints = [
            Coordinate::new(50.0, -10.0),
            Coordinate::new(55.0, 3.0),
            Coordinate::new(60.0, 10.0),
        ];
        assert!(path_enters_storm(&waypoints, &[north_sea_storm()]));
    }
}
