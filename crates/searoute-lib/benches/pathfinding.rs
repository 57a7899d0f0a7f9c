use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use searoute_lib::{
    build_graph, find_path, load_chart, plan_voyage, RouteSegment, SeaChart, VoyageRequest,
};
use std::hint::black_box;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

static CHART: Lazy<SeaChart> = Lazy::new(|| load_chart(&fixtures_dir()).expect("fixture loads"));

static CHAIN: Lazy<Vec<RouteSegment>> = Lazy::new(|| {
    // 256-port chain with skip lanes, so the frontier has real work to do.
    let mut segments = Vec::new();
    for port in 0..255 {
        segments.push(RouteSegment {
            from: port,
            to: port + 1,
            distance_km: 10.0,
            waypoints: Vec::new(),
        });
        if port + 2 <= 255 {
            segments.push(RouteSegment {
                from: port,
                to: port + 2,
                distance_km: 25.0,
                waypoints: Vec::new(),
            });
        }
    }
    segments
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let chart = &*CHART;

    c.bench_function("voyage_via_rotterdam", |b| {
        let request = VoyageRequest::new(1, 3, 2_000.0);
        b.iter(|| {
            let plan = plan_voyage(chart, &request).expect("route exists");
            black_box(plan.leg_count())
        });
    });

    c.bench_function("voyage_direct_lane", |b| {
        let request = VoyageRequest::new(1, 3, 3_000.0);
        b.iter(|| {
            let plan = plan_voyage(chart, &request).expect("route exists");
            black_box(plan.total_distance_km)
        });
    });

    c.bench_function("voyage_lisbon_bergen", |b| {
        let request = VoyageRequest::new(1, 4, 2_000.0);
        b.iter(|| {
            let plan = plan_voyage(chart, &request).expect("route exists");
            black_box(plan.ports.len())
        });
    });

    c.bench_function("find_path_chain_256", |b| {
        let (graph, geometry) = build_graph(&CHAIN);
        b.iter(|| {
            let result =
                find_path(&graph, &geometry, 0, 255, 50.0, &[]).expect("chain is connected");
            black_box(result.total_distance_km)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
