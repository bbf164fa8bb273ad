//! Criterion benchmarks for the solution checks and problem area.
//! Focus sizes: grid points drawn in {16, 64, 256} (hull sizes grow slowly).
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use foldcheck::sample::{draw_convex_polygon, draw_solution, ReplayToken, SamplerCfg};
use foldcheck::validate::{
    problem_area, source_has_no_edge_crosses_or_touches_with, validate, CheckCfg, Problem,
};

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for &points in &[16usize, 64, 256] {
        let cfg = SamplerCfg { points, den: 1024 };
        let tok = ReplayToken { seed: 43, index: points as u64 };

        group.bench_with_input(BenchmarkId::new("validate_reference", points), &points, |b, _| {
            b.iter_batched(
                || draw_solution(cfg, tok).unwrap(),
                |sol| validate(&sol),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("crossings_exact", points), &points, |b, _| {
            b.iter_batched(
                || draw_solution(cfg, tok).unwrap(),
                |sol| source_has_no_edge_crosses_or_touches_with(&sol, CheckCfg::strict()),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("problem_area", points), &points, |b, _| {
            b.iter_batched(
                || {
                    let poly = draw_convex_polygon(cfg, tok).unwrap();
                    Problem::from_polygons(vec![poly], Vec::new())
                },
                |p| problem_area(&p),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
