//! Criterion benchmarks for metrics_engine.
//!
//! Covers the formulas with non-trivial cost: multi-stage discount models
//! (loop over the horizon), the moat scorer (two standard deviations) and
//! the IDR waterfall.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metrics_engine::growth::{ThreeStageDdm, TwoStageDdm};
use metrics_engine::quality::{calculate_moat_score, MoatInputs};
use metrics_engine::risk::{sortino_ratio, TargetReturn};
use metrics_engine::sector::mlp::IdrSchedule;

/// Benchmark multi-stage DDM valuation across horizon lengths.
fn bench_ddm(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddm");

    for periods in [5_u32, 20, 50] {
        let two = TwoStageDdm::new(2.0_f64, 0.10, 0.03, 0.08, periods).unwrap();
        group.bench_with_input(BenchmarkId::new("two_stage", periods), &two, |b, model| {
            b.iter(|| black_box(model).valuation());
        });

        let three = ThreeStageDdm::new(2.0_f64, 0.10, 0.03, 0.08, periods, periods)
            .unwrap()
            .with_transition_growth_rate(0.06);
        group.bench_with_input(BenchmarkId::new("three_stage", periods), &three, |b, model| {
            b.iter(|| black_box(model).valuation());
        });
    }

    group.finish();
}

/// Benchmark the moat scorer on a full ten-year history.
fn bench_moat(c: &mut Criterion) {
    let inputs = MoatInputs {
        roic_history: (0..10).map(|i| 0.15 + 0.01 * (i % 3) as f64).collect(),
        gross_margin_history: vec![0.42, 0.43, 0.41, 0.44, 0.42],
        market_share: 0.22,
        customer_retention: 0.88,
        intangible_assets: 90.0,
        market_cap: 400.0,
        user_growth_rate: 0.12,
        cost_growth_rate: 0.05,
    };
    c.bench_function("moat_score", |b| b.iter(|| calculate_moat_score(black_box(&inputs))));
}

/// Benchmark the IDR waterfall at every tier.
fn bench_idr(c: &mut Criterion) {
    let mut group = c.benchmark_group("idr_waterfall");
    let schedule = IdrSchedule::standard();

    for dcf in [0.40, 0.55, 0.70, 1.20] {
        group.bench_with_input(BenchmarkId::from_parameter(dcf), &dcf, |b, &dcf| {
            b.iter(|| schedule.distribute(black_box(dcf)));
        });
    }

    group.finish();
}

/// Benchmark Sortino over return series of increasing length.
fn bench_sortino(c: &mut Criterion) {
    let mut group = c.benchmark_group("sortino");

    for size in [12, 252, 2520] {
        let returns: Vec<f64> = (0..size).map(|i| ((i as f64) * 0.7).sin() * 0.02).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &returns, |b, returns| {
            b.iter(|| sortino_ratio(black_box(returns), 0.0002, TargetReturn::Fixed(0.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ddm, bench_moat, bench_idr, bench_sortino);
criterion_main!(benches);
