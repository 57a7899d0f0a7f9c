use searoute_lib::{
    build_graph, find_path, haversine_km, Coordinate, Error, PortId, RouteSegment, StormZone,
};

fn lane(from: PortId, to: PortId, distance_km: f64, waypoints: Vec<Coordinate>) -> RouteSegment {
    RouteSegment {
        from,
        to,
        distance_km,
        waypoints,
    }
}

fn coastal_triangle() -> Vec<RouteSegment> {
    vec![
        lane(1, 3, 100.0, vec![Coordinate::new(10.0, 10.0)]),
        lane(1, 2, 80.0, vec![Coordinate::new(0.0, 5.0)]),
        lane(2, 3, 90.0, vec![Coordinate::new(5.0, 20.0)]),
    ]
}

#[test]
fn storm_on_the_direct_lane_forces_a_detour() {
    let (graph, geometry) = build_graph(&coastal_triangle());
    let storms = vec![StormZone::new(Coordinate::new(10.0, 10.0), 50.0)];

    let result = find_path(&graph, &geometry, 1, 3, 1_000.0, &storms).expect("detour exists");
    assert_eq!(result.ports, vec![1, 2, 3]);
    assert_eq!(result.total_distance_km, 170.0);
}

#[test]
fn clear_weather_keeps_the_direct_lane() {
    let (graph, geometry) = build_graph(&coastal_triangle());

    let result = find_path(&graph, &geometry, 1, 3, 1_000.0, &[]).expect("direct lane open");
    assert_eq!(result.ports, vec![1, 3]);
    assert_eq!(result.total_distance_km, 100.0);
}

#[test]
fn storms_closing_every_lane_leave_no_route() {
    let (graph, geometry) = build_graph(&coastal_triangle());
    let storms = vec![
        StormZone::new(Coordinate::new(10.0, 10.0), 10.0),
        StormZone::new(Coordinate::new(0.0, 5.0), 10.0),
        StormZone::new(Coordinate::new(5.0, 20.0), 10.0),
    ];

    let error = find_path(&graph, &geometry, 1, 3, 1_000.0, &storms).expect_err("all lanes closed");
    assert!(matches!(
        error,
        Error::NoAdmissiblePath { start: 1, goal: 3 }
    ));
}

#[test]
fn waypoint_exactly_on_the_storm_boundary_counts_as_inside() {
    let center = Coordinate::new(0.0, 0.0);
    let waypoint = Coordinate::new(0.0, 1.0);
    let radius_km = haversine_km(&center, &waypoint);

    let (graph, geometry) = build_graph(&[lane(1, 2, 50.0, vec![waypoint])]);
    let storms = vec![StormZone::new(center, radius_km)];

    let error = find_path(&graph, &geometry, 1, 2, 100.0, &storms).expect_err("boundary blocks");
    assert!(matches!(error, Error::NoAdmissiblePath { .. }));
}

#[test]
fn one_bad_waypoint_closes_the_whole_lane() {
    let waypoints = vec![
        Coordinate::new(0.0, 1.0),
        Coordinate::new(0.0, 2.0),
        Coordinate::new(0.0, 3.0),
    ];
    let (graph, geometry) = build_graph(&[lane(1, 2, 300.0, waypoints)]);
    let storms = vec![StormZone::new(Coordinate::new(0.0, 2.0), 25.0)];

    let error = find_path(&graph, &geometry, 1, 2, 1_000.0, &storms).expect_err("midpoint inside");
    assert!(matches!(error, Error::NoAdmissiblePath { .. }));
}

#[test]
fn storms_block_lanes_in_both_directions() {
    // Lane recorded 2 -> 1 but sailed 1 -> 2; the reversed geometry carries
    // the same positions, so the storm closes both headings.
    let (graph, geometry) = build_graph(&[lane(2, 1, 60.0, vec![Coordinate::new(30.0, 30.0)])]);
    let storms = vec![StormZone::new(Coordinate::new(30.0, 30.0), 40.0)];

    let error = find_path(&graph, &geometry, 1, 2, 100.0, &storms).expect_err("lane closed");
    assert!(matches!(error, Error::NoAdmissiblePath { .. }));

    let clear = find_path(&graph, &geometry, 1, 2, 100.0, &[]).expect("open without storms");
    assert_eq!(clear.ports, vec![1, 2]);
}

#[test]
fn lanes_without_recorded_geometry_are_never_flagged() {
    // Hazard screening samples stored waypoints only; a lane with no
    // geometry has nothing to test against, even under a storm covering
    // everything.
    let (graph, geometry) = build_graph(&[lane(1, 2, 100.0, Vec::new())]);
    let storms = vec![StormZone::new(Coordinate::new(0.0, 0.0), 20_000.0)];

    let result = find_path(&graph, &geometry, 1, 2, 1_000.0, &storms).expect("nothing to screen");
    assert_eq!(result.ports, vec![1, 2]);
}

#[test]
fn storm_near_but_not_on_the_lane_does_not_close_it() {
    let (graph, geometry) = build_graph(&[lane(1, 2, 100.0, vec![Coordinate::new(0.0, 5.0)])]);
    // Roughly 111 km from the waypoint, radius 100 km: close but clear.
    let storms = vec![StormZone::new(Coordinate::new(0.0, 6.0), 100.0)];

    let result = find_path(&graph, &geometry, 1, 2, 1_000.0, &storms).expect("lane stays open");
    assert_eq!(result.ports, vec![1, 2]);
}
