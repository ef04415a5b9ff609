//! Benchmarks for the fit calculator.
//!
//! Run with: cargo bench -p spillrow-core

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spillrow_core::fit::visible_count;
use std::hint::black_box;

// ============================================================================
// Visible count
// ============================================================================

fn uniform_widths(n: usize) -> Vec<f64> {
    vec![48.0; n]
}

fn ragged_widths(n: usize) -> Vec<f64> {
    (0..n).map(|i| 20.0 + ((i * 37) % 90) as f64).collect()
}

fn bench_visible_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit/visible_count");

    for n in [8usize, 64, 512, 4096] {
        let uniform = uniform_widths(n);
        let ragged = ragged_widths(n);
        // Budget sized so roughly half the row stays visible.
        let budget = (n as f64) * 28.0;

        group.bench_with_input(BenchmarkId::new("uniform", n), &(), |b, _| {
            b.iter(|| {
                black_box(visible_count(
                    black_box(&uniform),
                    30.0,
                    8.0,
                    true,
                    black_box(budget),
                ))
            })
        });

        group.bench_with_input(BenchmarkId::new("ragged", n), &(), |b, _| {
            b.iter(|| {
                black_box(visible_count(
                    black_box(&ragged),
                    30.0,
                    8.0,
                    true,
                    black_box(budget),
                ))
            })
        });
    }

    group.finish();
}

// ============================================================================
// Degenerate budgets
// ============================================================================

fn bench_degenerate_budgets(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit/degenerate");
    let widths = ragged_widths(512);

    group.bench_with_input(BenchmarkId::new("zero_budget", 512), &(), |b, _| {
        b.iter(|| black_box(visible_count(black_box(&widths), 30.0, 8.0, true, 0.0)))
    });

    group.bench_with_input(BenchmarkId::new("everything_fits", 512), &(), |b, _| {
        b.iter(|| {
            black_box(visible_count(
                black_box(&widths),
                30.0,
                8.0,
                true,
                1_000_000.0,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_visible_count, bench_degenerate_budgets);

criterion_main!(benches);
