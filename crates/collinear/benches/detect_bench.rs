//! Criterion benchmarks for the collinear detectors.
//!
//! Fast detector over n in {64, 256, 1024}; brute force only on the small sizes
//! since it is O(n^4). Inputs are seeded samples with planted lines.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use collinear::prelude::*;

fn sample(n: usize, seed: u64) -> Vec<Point> {
    let cfg = SampleCfg {
        background: n,
        lines: (n / 16).max(1),
        per_line: PerLine::Uniform { min: 4, max: 8 },
        max_step: 256,
        bound: COORD_MAX,
    };
    draw_points(cfg, ReplayToken { seed, index: n as u64 })
        .expect("valid sample cfg")
        .points
}

fn bench_detectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for &n in &[64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("fast", n), &n, |b, &n| {
            b.iter_batched(
                || sample(n, 41),
                |pts| {
                    let _ = black_box(FastCollinearPoints::new(&pts).unwrap());
                },
                BatchSize::SmallInput,
            )
        });
        if n <= 64 {
            group.bench_with_input(BenchmarkId::new("brute", n), &n, |b, &n| {
                b.iter_batched(
                    || sample(n, 41),
                    |pts| {
                        let _ = black_box(BruteCollinearPoints::new(&pts).unwrap());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_detectors);
criterion_main!(benches);
