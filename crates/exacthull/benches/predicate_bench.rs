//! Criterion benchmarks for the two-stage orientation predicate.
//! Compares the filter-only fast path (generic triples) against forced
//! exact-stage fallbacks (collinear and one-ulp-off triples).

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use exacthull::predicates::{orientation_sign, OrientQuery};
use exacthull::sample::{draw_lattice_cloud, draw_uniform_cloud, CloudCfg, ReplayToken};

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation");

    let generic = draw_uniform_cloud(
        CloudCfg {
            count: 3 * 1024,
            extent: 100.0,
        },
        ReplayToken { seed: 11, index: 0 },
    );
    group.bench_function("filter_fast_path", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for tri in generic.chunks_exact(3) {
                acc += orientation_sign(tri[0], tri[1], tri[2]).value();
            }
            acc
        })
    });

    group.bench_function("exact_fallback_collinear", |b| {
        let a = nalgebra::Vector2::new(0.0, 0.0);
        let p = nalgebra::Vector2::new(12.0, 12.0);
        let q = nalgebra::Vector2::new(7.0, 7.0);
        b.iter(|| orientation_sign(a, p, q).value())
    });

    group.bench_function("query_with_cache_lattice", |b| {
        let points = draw_lattice_cloud(
            CloudCfg {
                count: 256,
                extent: 6.0,
            },
            ReplayToken { seed: 12, index: 0 },
        );
        b.iter_batched(
            || {
                let mut q = OrientQuery::new();
                q.reset(points.len());
                q
            },
            |mut q| {
                let mut acc = 0i32;
                for i in 0..points.len() - 2 {
                    acc += q.sign(&points, i, i + 1, i + 2).value();
                }
                acc
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_orientation);
criterion_main!(benches);
