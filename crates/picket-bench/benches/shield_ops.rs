//! Criterion micro-benchmarks for the shield pipeline stages.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use picket_bench::maze_profile;
use picket_shield::{build_occupancy, propagate, LocalShield, MetricKind, ProbabilityClass};
use picket_space::VisibilityMap;

/// Benchmark: visibility scan on a 64x64 maze across horizons.
fn bench_scan(c: &mut Criterion) {
    let p = maze_profile(64, 4, 42);
    let mut group = c.benchmark_group("scan_64");
    for h in [2u32, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(h), &h, |b, &h| {
            b.iter(|| {
                let map = VisibilityMap::scan(&p.grid, p.agent, &p.adversaries, h).unwrap();
                black_box(map);
            });
        });
    }
    group.finish();
}

/// Benchmark: occupancy expansion and backward induction, h = 8.
fn bench_occupancy_and_propagate(c: &mut Criterion) {
    let p = maze_profile(64, 4, 42);
    let h = 8;
    let map = VisibilityMap::scan(&p.grid, p.agent, &p.adversaries, h).unwrap();

    c.bench_function("occupancy_64_h8", |b| {
        b.iter(|| black_box(build_occupancy(&map, &p.adversaries, h)));
    });

    let occ = build_occupancy(&map, &p.adversaries, h);
    let metric = ProbabilityClass::default();
    c.bench_function("propagate_64_h8", |b| {
        b.iter(|| black_box(propagate(&map, &occ, &metric)));
    });
}

/// Benchmark: full decision for both metrics on a 32x32 maze.
fn bench_decide(c: &mut Criterion) {
    let p = maze_profile(32, 3, 7);
    let legal = p.grid.legal_actions(p.agent);
    let mut group = c.benchmark_group("decide_32_h6");
    for metric in [MetricKind::ProbabilityClass, MetricKind::MinTimeToCapture] {
        let shield = LocalShield::builder()
            .horizon(6)
            .metric(metric)
            .build()
            .unwrap();
        group.bench_function(metric.to_string(), |b| {
            b.iter(|| {
                let d = shield
                    .decide(&p.grid, p.agent, &p.adversaries, &legal)
                    .unwrap();
                black_box(d);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scan,
    bench_occupancy_and_propagate,
    bench_decide
);
criterion_main!(benches);
