//! Criterion micro-benchmarks for grid topology and geometry.

use criterion::{criterion_group, criterion_main, Criterion};
use quadcraft_bench::{bench_grid, cell_pairs};
use quadcraft_space::{bounded_neighbors, generate_grid, ivm_hops, Topology};
use quadcraft_verify::verify_geometric_identities;
use std::hint::black_box;

/// Benchmark: bounded_neighbors() on every raw cell of a size-8 grid (4096 cells).
fn bench_bounded_neighbors_size8(c: &mut Criterion) {
    c.bench_function("bounded_neighbors_size8", |b| {
        b.iter(|| {
            for a in 0..8 {
                for bb in 0..8 {
                    for cc in 0..8 {
                        for d in 0..8 {
                            black_box(bounded_neighbors(a, bb, cc, d, 8));
                        }
                    }
                }
            }
        });
    });
}

/// Benchmark: generate_grid() for size 10 (10K cells).
fn bench_generate_grid_size10(c: &mut Criterion) {
    c.bench_function("generate_grid_size10", |b| {
        b.iter(|| black_box(generate_grid(black_box(10))));
    });
}

/// Benchmark: canonical_rank() round trip over every rank of a size-10 grid.
fn bench_rank_round_trip(c: &mut Criterion) {
    let grid = bench_grid(10).unwrap();
    c.bench_function("rank_round_trip_size10", |b| {
        b.iter(|| {
            for rank in 0..grid.cell_count() {
                if let Some(cell) = grid.cell_at(rank) {
                    black_box(grid.canonical_rank(&cell));
                }
            }
        });
    });
}

/// Benchmark: distance() and ivm_hops() for 1000 deterministic pairs.
fn bench_distance_pairs(c: &mut Criterion) {
    let grid = bench_grid(12).unwrap();
    let pairs = cell_pairs(12, 1000, 42);
    c.bench_function("distance_1k_pairs", |b| {
        b.iter(|| {
            for (p, q) in &pairs {
                black_box(grid.distance(p, q));
            }
        });
    });
    c.bench_function("ivm_hops_1k_pairs", |b| {
        b.iter(|| {
            for (p, q) in &pairs {
                black_box(ivm_hops(p, q));
            }
        });
    });
}

/// Benchmark: the full verification battery.
fn bench_verification(c: &mut Criterion) {
    c.bench_function("verify_geometric_identities", |b| {
        b.iter(|| black_box(verify_geometric_identities()));
    });
}

criterion_group!(
    benches,
    bench_bounded_neighbors_size8,
    bench_generate_grid_size10,
    bench_rank_round_trip,
    bench_distance_pairs,
    bench_verification
);
criterion_main!(benches);
