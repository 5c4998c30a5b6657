//! Analytic engine for European equity options with Hull-White rates.
//!
//! Translates `ql/pricingengines/vanilla/analyticbsmhullwhiteengine.hpp`.
//!
//! The equity follows Black-Scholes-Merton dynamics with volatility `η`, the
//! short rate follows a Hull-White model, and the two Brownian motions have
//! correlation `ρ`. Under the `T`-forward measure the forward `F = S·D_q/D`
//! is a martingale whose log has total variance
//!
//! ```text
//! Σ² = η²T + V_r(T) + 2ρη·C(T)
//! ```
//!
//! where `V_r` is the variance of the integrated short rate and `C` its
//! covariance with the equity driver. The option is then priced with the
//! Black formula on `(F, Σ)` and discounted with the initial curve.

use crate::analytic_european_engine::{EuropeanInputs, TotalVariance};
use ql_core::{errors::Result, Error, Observable, Observer, Real, Time, Volatility};
use ql_instruments::{PricingEngine, PricingResults, VanillaOptionArguments};
use ql_models::{HullWhite, HullWhiteParameters};
use ql_processes::GeneralizedBlackScholesProcess;
use tracing::{debug, trace};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Arguments for [`AnalyticBsmHullWhiteEngine`]: the option contract plus the
/// equity market data it is priced against.
#[derive(Debug, Clone)]
pub struct HybridOptionArguments {
    /// Payoff and exercise.
    pub option: VanillaOptionArguments,
    /// Spot, risk-free and dividend curves, equity volatility.
    pub process: Arc<GeneralizedBlackScholesProcess>,
}

impl HybridOptionArguments {
    /// Bundle an option with its market data.
    pub fn new(
        option: VanillaOptionArguments,
        process: Arc<GeneralizedBlackScholesProcess>,
    ) -> Self {
        Self { option, process }
    }
}

/// Total variance of the log-forward under equity volatility `η` and the
/// Hull-White parameters `params`, for an option maturing at `maturity`.
///
/// `∂Σ²/∂T` holds the rate-model moments fixed.
pub fn hybrid_total_variance(
    params: HullWhiteParameters,
    correlation: Real,
    volatility: Volatility,
    maturity: Time,
) -> TotalVariance {
    let equity = volatility * volatility * maturity;
    let rate = params.integrated_rate_variance(maturity);
    let covariance = params.integrated_rate_covariance(maturity);
    let cross = 2.0 * correlation * volatility * covariance;
    trace!(equity, rate, cross, maturity, "hybrid variance decomposition");
    TotalVariance {
        variance: equity + rate + cross,
        d_volatility: 2.0 * (volatility * maturity + correlation * covariance),
        d_maturity: volatility * volatility,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result cache
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct CachedResult {
    generation: u64,
    inputs: EuropeanInputs,
    results: PricingResults,
}

/// Last result of the engine, invalidated by model notifications.
///
/// Every notification bumps the generation. An entry is only reused when it
/// was computed under the current generation, and the generation is read
/// before the model parameters, so a result computed from parameters older
/// than the latest notification is never served.
#[derive(Debug, Default)]
struct EngineCache {
    generation: AtomicU64,
    last: Mutex<Option<CachedResult>>,
}

impl EngineCache {
    fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn lock(&self) -> MutexGuard<'_, Option<CachedResult>> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, generation: u64, inputs: &EuropeanInputs) -> Option<PricingResults> {
        self.lock()
            .as_ref()
            .filter(|c| c.generation == generation && c.inputs == *inputs)
            .map(|c| c.results.clone())
    }

    fn store(&self, generation: u64, inputs: EuropeanInputs, results: PricingResults) {
        let mut last = self.lock();
        if last.as_ref().is_some_and(|c| c.generation > generation) {
            return;
        }
        *last = Some(CachedResult {
            generation,
            inputs,
            results,
        });
    }
}

impl Observer for EngineCache {
    fn update(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Analytic European engine for an equity under Black-Scholes-Merton dynamics
/// with stochastic Hull-White interest rates.
///
/// The engine subscribes to the model it is given: refitting the model
/// (`set_params`, `fit_to`) invalidates the cached result, and the next call
/// to `calculate` reads the new parameters. Several engines may share one
/// model.
///
/// Corresponds to `QuantLib::AnalyticBSMHullWhiteEngine`.
#[derive(Debug)]
pub struct AnalyticBsmHullWhiteEngine {
    correlation: Real,
    model: Arc<HullWhite>,
    cache: Arc<EngineCache>,
    observer: Weak<dyn Observer>,
}

impl AnalyticBsmHullWhiteEngine {
    /// Create an engine with equity/rate correlation `correlation`.
    ///
    /// Fails with [`Error::Configuration`] unless `correlation ∈ [−1, 1]`.
    pub fn new(correlation: Real, model: Arc<HullWhite>) -> Result<Self> {
        if !(-1.0..=1.0).contains(&correlation) {
            return Err(Error::Configuration(format!(
                "correlation {correlation} outside [-1, 1]"
            )));
        }
        let cache = Arc::new(EngineCache::default());
        let observer = Arc::downgrade(&cache) as Weak<dyn Observer>;
        model.register_observer(observer.clone());
        debug!(
            correlation,
            a = model.a(),
            sigma = model.sigma(),
            "analytic BSM/Hull-White engine created"
        );
        Ok(Self {
            correlation,
            model,
            cache,
            observer,
        })
    }

    /// Equity/rate correlation.
    pub fn correlation(&self) -> Real {
        self.correlation
    }

    /// The rate model.
    pub fn model(&self) -> &Arc<HullWhite> {
        &self.model
    }
}

impl Drop for AnalyticBsmHullWhiteEngine {
    fn drop(&mut self) {
        self.model.unregister_observer(&self.observer);
    }
}

impl PricingEngine<HybridOptionArguments> for AnalyticBsmHullWhiteEngine {
    fn calculate(&self, args: &HybridOptionArguments) -> Result<PricingResults> {
        let inputs = EuropeanInputs::from_args(&args.option, &args.process)?;

        let generation = self.cache.generation();
        let params = self.model.fitted_parameters()?;
        if let Some(results) = self.cache.lookup(generation, &inputs) {
            trace!(generation, "reusing cached result");
            return Ok(results);
        }

        let results = if inputs.maturity == 0.0 {
            inputs.intrinsic_results()
        } else {
            let variance = hybrid_total_variance(
                params,
                self.correlation,
                inputs.volatility,
                inputs.maturity,
            );
            inputs.results(variance)
        };
        self.cache.store(generation, inputs, results.clone());
        Ok(results)
    }
}
