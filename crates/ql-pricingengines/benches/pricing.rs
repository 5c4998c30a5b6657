use criterion::{criterion_group, criterion_main, Criterion};
use ql_instruments::{
    Exercise, OptionType, PlainVanillaPayoff, PricingEngine, VanillaOptionArguments,
};
use ql_models::HullWhite;
use ql_pricingengines::{
    black_formula, AnalyticBsmHullWhiteEngine, AnalyticEuropeanEngine, HybridOptionArguments,
};
use ql_processes::GeneralizedBlackScholesProcess;
use ql_termstructures::{BlackConstantVol, FlatForward, YieldTermStructure};
use ql_time::{Actual365Fixed, Date};
use std::hint::black_box;
use std::sync::Arc;

fn market() -> (Arc<GeneralizedBlackScholesProcess>, Arc<dyn YieldTermStructure>) {
    let today = Date::from_ymd(2025, 1, 15).expect("valid date");
    let curve: Arc<dyn YieldTermStructure> =
        Arc::new(FlatForward::new(today, 0.02, Actual365Fixed));
    let dividends = Arc::new(FlatForward::new(today, 0.0, Actual365Fixed));
    let vol = Arc::new(BlackConstantVol::new(today, 0.20, Actual365Fixed));
    let process = Arc::new(GeneralizedBlackScholesProcess::new(
        100.0,
        Arc::clone(&curve),
        dividends,
        vol,
    ));
    (process, curve)
}

fn call(strike: f64) -> VanillaOptionArguments {
    VanillaOptionArguments {
        payoff: Arc::new(PlainVanillaPayoff::new(OptionType::Call, strike)),
        exercise: Exercise::european(Date::from_ymd(2026, 1, 15).expect("valid date")),
    }
}

fn bench_black_formula(c: &mut Criterion) {
    c.bench_function("black_formula", |b| {
        b.iter(|| {
            black_formula(
                OptionType::Call,
                black_box(100.0),
                black_box(102.0),
                black_box(0.2),
                black_box(0.98),
            )
        })
    });
}

fn bench_analytic_european(c: &mut Criterion) {
    let (process, _) = market();
    let engine = AnalyticEuropeanEngine::new(process);
    let args = call(100.0);
    c.bench_function("analytic_european_call", |b| {
        b.iter(|| engine.calculate(black_box(&args)).expect("pricing should succeed").npv)
    });
}

fn bench_hybrid(c: &mut Criterion) {
    let (process, curve) = market();
    let model = Arc::new(HullWhite::new(curve, 0.1, 0.01).expect("valid model"));
    let engine = AnalyticBsmHullWhiteEngine::new(0.3, model).expect("valid correlation");
    let atm = HybridOptionArguments::new(call(100.0), Arc::clone(&process));
    let otm = HybridOptionArguments::new(call(110.0), process);

    let mut group = c.benchmark_group("bsm_hull_white_call");
    group.bench_function("cached", |b| {
        b.iter(|| engine.calculate(black_box(&atm)).expect("pricing should succeed").npv)
    });
    // alternating strikes defeats the single-entry cache
    group.bench_function("recomputed", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let args = if flip { &atm } else { &otm };
            engine.calculate(black_box(args)).expect("pricing should succeed").npv
        })
    });
    group.finish();
}

criterion_group!(benches, bench_black_formula, bench_analytic_european, bench_hybrid);
criterion_main!(benches);
