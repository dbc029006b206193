//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {16, 128, 1024, 8192}; lattice clouds additionally
//! stress the exact-predicate fallback during merges.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use exacthull::hull::ConvexHull2;
use exacthull::sample::{draw_lattice_cloud, draw_uniform_cloud, CloudCfg, ReplayToken};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for &n in &[16usize, 128, 1024, 8192] {
        let uniform = draw_uniform_cloud(
            CloudCfg {
                count: n,
                extent: 100.0,
            },
            ReplayToken {
                seed: 42,
                index: n as u64,
            },
        );
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, _| {
            b.iter_batched(
                ConvexHull2::new,
                |mut hull| hull.compute(&uniform).unwrap(),
                BatchSize::SmallInput,
            )
        });

        let lattice = draw_lattice_cloud(
            CloudCfg {
                count: n,
                extent: 12.0,
            },
            ReplayToken {
                seed: 43,
                index: n as u64,
            },
        );
        group.bench_with_input(BenchmarkId::new("lattice", n), &n, |b, _| {
            b.iter_batched(
                ConvexHull2::new,
                |mut hull| hull.compute(&lattice).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
