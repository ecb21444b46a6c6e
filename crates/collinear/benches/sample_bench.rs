//! Criterion microbench for the seeded point sampler.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use collinear::sample::{draw_points, PerLine, ReplayToken, SampleCfg};

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for &lines in &[4usize, 32] {
        let cfg = SampleCfg {
            background: 1000,
            lines,
            per_line: PerLine::Uniform { min: 4, max: 12 },
            ..SampleCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("draw_points", lines), &cfg, |b, cfg| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let _ = draw_points(*cfg, tok);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
