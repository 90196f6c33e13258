//! Criterion benchmarks comparing the two planners on the same worlds.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dustbot_bench::{cluttered_profile, maze_profile, open_profile, REFERENCE_SIDE};
use dustbot_search::depth_first::traverse;
use dustbot_search::{DepthFirst, NearestDirty, Planner};
use std::hint::black_box;

/// Benchmark: both planners on the open, cluttered, and maze profiles.
fn bench_planners(c: &mut Criterion) {
    let worlds = [
        ("open", open_profile(REFERENCE_SIDE)),
        ("cluttered", cluttered_profile(REFERENCE_SIDE, 42)),
        ("maze", maze_profile(REFERENCE_SIDE)),
    ];
    let planners: [&dyn Planner; 2] = [&DepthFirst::new(), &NearestDirty];

    let mut group = c.benchmark_group("plan_64x64");
    for (name, (world, start)) in &worlds {
        for planner in planners {
            group.bench_with_input(BenchmarkId::new(planner.name(), name), world, |b, world| {
                b.iter(|| black_box(planner.plan(world, *start)));
            });
        }
    }
    group.finish();
}

/// Benchmark: untrimmed depth-first walk on a 1x100K corridor.
fn bench_deep_corridor(c: &mut Criterion) {
    let (world, start) = dustbot_test_utils::fixtures::corridor(100_000);
    c.bench_function("traverse_corridor_100k", |b| {
        b.iter(|| black_box(traverse(&world, start)));
    });
}

/// Benchmark: sweep cost as the dirt count grows on a 32x32 open field.
fn bench_sweep_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_by_side");
    for side in [8usize, 16, 32] {
        let (world, start) = open_profile(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &world, |b, world| {
            b.iter(|| black_box(NearestDirty.plan(world, start)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_planners, bench_deep_corridor, bench_sweep_scaling);
criterion_main!(benches);
