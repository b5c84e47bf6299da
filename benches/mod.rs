use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use optionlab_rs::prelude::*;
use std::hint::black_box;

fn reference_call() -> OptionParams {
    OptionParams::call(100.0, 100.0, 1.0, 0.05)
}

fn bench_price(c: &mut Criterion) {
    let params = reference_call();
    c.bench_function("black_scholes_price", |b| {
        b.iter(|| black_box(BlackScholes::price(black_box(&params), black_box(0.2))))
    });
}

fn bench_greeks(c: &mut Criterion) {
    let params = reference_call();
    c.bench_function("greeks_compute", |b| {
        b.iter(|| black_box(Greeks::compute(black_box(&params), black_box(0.2))))
    });
}

fn bench_implied_volatility(c: &mut Criterion) {
    let config = SolverConfig::default();
    let mut group = c.benchmark_group("solve_iv");

    for strike in [80.0_f64, 100.0, 120.0] {
        let params = reference_call().with_strike(strike);
        let target = BlackScholes::price(&params, 0.35);
        group.bench_with_input(BenchmarkId::from_parameter(strike), &strike, |b, _| {
            b.iter(|| black_box(solve_iv(black_box(&params), black_box(target), &config)))
        });
    }

    group.finish();
}

fn bench_surface(c: &mut Criterion) {
    let config = SolverConfig::default();
    let params = reference_call();
    let mut group = c.benchmark_group("vol_surface");
    group.sample_size(20);

    for points in [10_usize, 25, 50] {
        let strikes = linspace(50.0, 150.0, points);
        let maturities = linspace(0.1, 2.0, points);
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, _| {
            b.iter(|| {
                black_box(VolSurface::from_model_price(
                    &params,
                    0.2,
                    black_box(&strikes),
                    black_box(&maturities),
                    &config,
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_price,
    bench_greeks,
    bench_implied_volatility,
    bench_surface
);
criterion_main!(benches);
