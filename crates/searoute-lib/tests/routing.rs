use std::path::PathBuf;

use searoute_lib::{
    load_chart, plan_voyage, resolve_port, Error, SeaChart, VoyageRenderMode, VoyageRequest,
    VoyageSummary,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn fixture_chart() -> SeaChart {
    load_chart(&fixtures_dir()).expect("fixture chart loads")
}

#[test]
fn tight_ceiling_calls_at_rotterdam() {
    let chart = fixture_chart();
    let plan = plan_voyage(&chart, &VoyageRequest::new(1, 3, 2_000.0)).expect("route exists");

    assert_eq!(plan.ports, vec![1, 2, 3]);
    assert_eq!(plan.total_distance_km, 2_335.0);
    assert_eq!(plan.leg_count(), 2);

    let names: Vec<&str> = plan.calls.iter().map(|port| port.name.as_str()).collect();
    assert_eq!(names, vec!["Lisbon", "Rotterdam", "Hamburg"]);
}

#[test]
fn relaxed_ceiling_sails_direct_to_hamburg() {
    let chart = fixture_chart();
    let plan = plan_voyage(&chart, &VoyageRequest::new(1, 3, 3_000.0)).expect("route exists");

    assert_eq!(plan.ports, vec![1, 3]);
    assert_eq!(plan.total_distance_km, 2_330.0);
}

#[test]
fn voyage_geometry_follows_the_sailed_lanes() {
    let chart = fixture_chart();
    let plan = plan_voyage(&chart, &VoyageRequest::new(1, 3, 2_000.0)).expect("route exists");

    // Three Biscay waypoints, then the two German Bight waypoints.
    assert_eq!(plan.geometry.len(), 5);
    assert_eq!(plan.geometry[0].latitude, 42.9);
    assert_eq!(plan.geometry[0].longitude, -9.3);
    assert_eq!(plan.geometry[4].latitude, 54.05);
    assert_eq!(plan.geometry[4].longitude, 7.9);
}

#[test]
fn the_norwegian_sea_storm_cuts_off_reykjavik() {
    let chart = fixture_chart();
    let error = plan_voyage(&chart, &VoyageRequest::new(3, 5, 2_000.0)).expect_err("lane closed");

    assert!(matches!(
        error,
        Error::NoAdmissiblePath { start: 3, goal: 5 }
    ));
}

#[test]
fn ignoring_storms_reopens_the_reykjavik_lane() {
    let mut chart = fixture_chart();
    chart.storms.clear();

    let plan = plan_voyage(&chart, &VoyageRequest::new(3, 5, 2_000.0)).expect("route exists");
    assert_eq!(plan.ports, vec![3, 4, 5]);
    assert_eq!(plan.total_distance_km, 2_355.0);
}

#[test]
fn charted_port_without_lanes_is_not_on_the_network() {
    let chart = fixture_chart();
    let new_york = resolve_port(&chart.ports, "New York").expect("directory knows New York");
    assert_eq!(new_york, 6);

    let error =
        plan_voyage(&chart, &VoyageRequest::new(1, new_york, 5_000.0)).expect_err("no lanes");
    assert!(matches!(error, Error::UnknownPort { port: 6 }));
}

#[test]
fn the_tasman_basin_is_unreachable_from_europe() {
    let chart = fixture_chart();
    let error = plan_voyage(&chart, &VoyageRequest::new(1, 7, 25_000.0)).expect_err("no crossing");

    assert!(matches!(
        error,
        Error::NoAdmissiblePath { start: 1, goal: 7 }
    ));
}

#[test]
fn port_names_resolve_case_insensitively() {
    let chart = fixture_chart();

    assert_eq!(resolve_port(&chart.ports, "rotterdam").expect("resolves"), 2);
    assert_eq!(resolve_port(&chart.ports, "REYKJAVIK").expect("resolves"), 5);
    assert_eq!(resolve_port(&chart.ports, "4").expect("numeric id"), 4);
}

#[test]
fn misspelt_port_names_get_suggestions() {
    let chart = fixture_chart();
    let error = resolve_port(&chart.ports, "Roterdam").expect_err("typo rejected");

    let message = format!("{error}");
    assert!(message.contains("Roterdam"), "message names the input");
    assert!(message.contains("Did you mean"), "message offers help");
    assert!(message.contains("Rotterdam"), "suggestion is the close name");
}

#[test]
fn summary_renders_the_fixture_voyage() {
    let chart = fixture_chart();
    let plan = plan_voyage(&chart, &VoyageRequest::new(1, 3, 2_000.0)).expect("route exists");
    let summary = VoyageSummary::from_plan(&chart.ports, &plan).expect("summary builds");

    let text = summary.render(VoyageRenderMode::PlainText);
    assert!(text.contains("Lisbon"));
    assert!(text.contains("Hamburg"));
    assert!(text.contains("2 legs"));
    assert!(text.contains("2335.0 km"));
}
