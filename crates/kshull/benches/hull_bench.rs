//! Criterion benchmarks for planar hulls.
//! Focus sizes: n in {100, 1_000, 10_000}. Clouds are uniform in a square
//! (h grows like log n) or on a circle (every point is a vertex).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p kshull

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use kshull::{jarvis_march, kirkpatrick_seidel, HullCfg, MedianRule};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn square_cloud(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn circle_cloud(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            Vector2::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    let sort_cfg = HullCfg {
        median: MedianRule::Sort,
        ..HullCfg::default()
    };
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ks_square", n), &n, |b, &n| {
            b.iter_batched(
                || square_cloud(n, 43),
                |pts| {
                    let _hull = kirkpatrick_seidel(&pts, &HullCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("ks_square_sorted_median", n), &n, |b, &n| {
            b.iter_batched(
                || square_cloud(n, 43),
                |pts| {
                    let _hull = kirkpatrick_seidel(&pts, &sort_cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("jarvis_square", n), &n, |b, &n| {
            b.iter_batched(
                || square_cloud(n, 43),
                |pts| {
                    let _ids = jarvis_march(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        // Jarvis is quadratic here; keep it to the small sizes.
        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("jarvis_circle", n), &n, |b, &n| {
                b.iter_batched(
                    || circle_cloud(n, 44),
                    |pts| {
                        let _ids = jarvis_march(&pts);
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.bench_with_input(BenchmarkId::new("ks_circle", n), &n, |b, &n| {
            b.iter_batched(
                || circle_cloud(n, 44),
                |pts| {
                    let _hull = kirkpatrick_seidel(&pts, &HullCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
