//! Hull-White (extended Vasicek) model.
//!
//! Translates `ql/models/shortrate/onefactormodels/hullwhite.hpp`.
//!
//! ```text
//! dr = (θ(t) − a·r) dt + σ dW
//! ```
//!
//! The function `θ(t)` is chosen to exactly fit the initial yield curve.
//!
//! Discount bond price:
//! `P(t,T) = A(t,T) exp(−B(t,T) r(t))`
//!
//! Besides bond prices the model exposes the two moments of the integrated
//! short rate `∫_t^T r(u) du` that hybrid equity/rate engines need: its
//! variance and its covariance with the driving Brownian motion.

use crate::calibrated_model::{
    CalibratedModel, NonNegativeConstraint, Parameter, PositiveConstraint,
};
use crate::short_rate_model::{OneFactorAffineModel, OneFactorModel, ShortRateModel};
use ql_core::{ensure, Error, Observable, Observer, ObserverList, Real, Result, Time};
use ql_termstructures::YieldTermStructure;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tracing::debug;

/// Below this value of `a·τ` the closed forms lose precision to cancellation
/// and their Taylor expansions are used instead.
const SMALL_DECAY: Real = 1.0e-2;

/// Step used for the finite-difference slope of the forward curve in `θ(t)`.
const THETA_DT: Time = 1.0e-4;

// ────────────────────────────────────────────────────────────────────────────
// Parameter snapshot
// ────────────────────────────────────────────────────────────────────────────

/// A consistent snapshot of the Hull-White parameters.
///
/// All closed-form moments are computed on the snapshot, so a caller that
/// reads it once sees `a` and `σ` from the same fit even while another thread
/// refits the model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HullWhiteParameters {
    /// Mean-reversion speed `a > 0`.
    pub a: Real,
    /// Short-rate volatility `σ ≥ 0`.
    pub sigma: Real,
}

impl HullWhiteParameters {
    /// `B(τ) = (1 − e^{−aτ}) / a`.
    pub fn b(&self, tau: Time) -> Real {
        -(-self.a * tau).exp_m1() / self.a
    }

    /// Variance of `∫_t^T r(u) du`, as a function of `τ = T − t`:
    ///
    /// `σ² ∫_0^τ B(s)² ds = σ²/a³ · (aτ + 2(e^{−aτ} − 1) − (e^{−2aτ} − 1)/2)`
    ///
    /// Zero for `τ ≤ 0` and for `σ = 0`.
    pub fn integrated_rate_variance(&self, tau: Time) -> Real {
        if tau <= 0.0 || self.sigma == 0.0 {
            return 0.0;
        }
        let x = self.a * tau;
        let s2 = self.sigma * self.sigma;
        if x < SMALL_DECAY {
            let series = 1.0 / 3.0
                + x * (-1.0 / 4.0 + x * (7.0 / 60.0 + x * (-1.0 / 24.0 + x * 31.0 / 2520.0)));
            s2 * tau * tau * tau * series
        } else {
            s2 / (self.a * self.a * self.a)
                * (x + 2.0 * (-x).exp_m1() - 0.5 * (-2.0 * x).exp_m1())
        }
    }

    /// Covariance between `∫_t^T r(u) du` and the driving Brownian increment
    /// over `[t, T]`, before scaling by any correlation:
    ///
    /// `σ ∫_0^τ B(s) ds = σ/a² · (aτ + e^{−aτ} − 1)`
    ///
    /// Zero for `τ ≤ 0` and for `σ = 0`.
    pub fn integrated_rate_covariance(&self, tau: Time) -> Real {
        if tau <= 0.0 || self.sigma == 0.0 {
            return 0.0;
        }
        let x = self.a * tau;
        if x < SMALL_DECAY {
            let series = 0.5 + x * (-1.0 / 6.0 + x * (1.0 / 24.0 + x * (-1.0 / 120.0 + x / 720.0)));
            self.sigma * tau * tau * series
        } else {
            self.sigma / (self.a * self.a) * (x + (-x).exp_m1())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HullWhite
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct HullWhiteState {
    a: Parameter,
    sigma: Parameter,
    term_structure: Option<Arc<dyn YieldTermStructure>>,
}

impl HullWhiteState {
    fn parameters(&self) -> HullWhiteParameters {
        HullWhiteParameters {
            a: self.a.value(),
            sigma: self.sigma.value(),
        }
    }

    fn curve(&self) -> Result<&Arc<dyn YieldTermStructure>> {
        self.term_structure.as_ref().ok_or_else(|| {
            Error::UpstreamModel("Hull-White model is not fitted to a term structure".into())
        })
    }

    /// `θ(t) = ∂f(0,t)/∂t + a·f(0,t) + σ²/(2a)·(1 − e^{−2at})`
    fn theta(&self, t: Time) -> Result<Real> {
        let curve = self.curve()?;
        let p = self.parameters();
        let f = curve.forward_rate(t, t);
        let slope = (curve.forward_rate(t + THETA_DT, t + THETA_DT) - f) / THETA_DT;
        Ok(slope + p.a * f + p.sigma * p.sigma * p.b(2.0 * t) / 2.0)
    }

    /// `A(t,T) = P(0,T)/P(0,t) · exp(B(t,T)·f(0,t) − σ²/(4a)·B(t,T)²·(1 − e^{−2at}))`
    fn a_function(&self, t: Time, maturity: Time) -> Result<Real> {
        let curve = self.curve()?;
        let p = self.parameters();
        let b = p.b(maturity - t);
        let f = curve.forward_rate(t, t);
        let convexity = 0.25 * p.sigma * p.sigma * b * b * p.b(2.0 * t);
        Ok((b * f - convexity).exp() * curve.discount(maturity) / curve.discount(t))
    }
}

/// Hull-White one-factor model.
///
/// The model is shared between engines behind an `Arc`; parameters and the
/// fitted curve sit behind an `RwLock` so a refit is atomic with respect to
/// readers. Every refit notifies the registered observers after the lock is
/// released.
///
/// Corresponds to `QuantLib::HullWhite`.
#[derive(Debug)]
pub struct HullWhite {
    state: RwLock<HullWhiteState>,
    observers: ObserverList,
}

impl HullWhite {
    /// Create a model fitted to `term_structure`.
    ///
    /// Fails with [`Error::Precondition`] unless `a > 0` and `sigma ≥ 0`.
    pub fn new(term_structure: Arc<dyn YieldTermStructure>, a: Real, sigma: Real) -> Result<Self> {
        Self::build(Some(term_structure), a, sigma)
    }

    /// Create a model that has parameters but no curve yet; see
    /// [`fit_to`](Self::fit_to).
    pub fn unfitted(a: Real, sigma: Real) -> Result<Self> {
        Self::build(None, a, sigma)
    }

    /// Create a model from a parameter snapshot.
    pub fn from_parameters(
        term_structure: Arc<dyn YieldTermStructure>,
        params: HullWhiteParameters,
    ) -> Result<Self> {
        Self::new(term_structure, params.a, params.sigma)
    }

    fn build(
        term_structure: Option<Arc<dyn YieldTermStructure>>,
        a: Real,
        sigma: Real,
    ) -> Result<Self> {
        let state = HullWhiteState {
            a: Parameter::new("a", a, PositiveConstraint)?,
            sigma: Parameter::new("sigma", sigma, NonNegativeConstraint)?,
            term_structure,
        };
        debug!(a, sigma, fitted = state.term_structure.is_some(), "Hull-White model created");
        Ok(Self {
            state: RwLock::new(state),
            observers: ObserverList::new(),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, HullWhiteState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HullWhiteState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current `(a, σ)`, read under a single lock.
    pub fn parameters(&self) -> HullWhiteParameters {
        self.read().parameters()
    }

    /// Mean-reversion speed.
    pub fn a(&self) -> Real {
        self.read().a.value()
    }

    /// Short-rate volatility.
    pub fn sigma(&self) -> Real {
        self.read().sigma.value()
    }

    /// Whether the model has a curve to fit.
    pub fn is_fitted(&self) -> bool {
        self.read().term_structure.is_some()
    }

    /// Parameter snapshot of a fitted model.
    ///
    /// Fails with [`Error::UpstreamModel`] when no curve has been fitted yet.
    pub fn fitted_parameters(&self) -> Result<HullWhiteParameters> {
        let state = self.read();
        state.curve()?;
        Ok(state.parameters())
    }

    /// Fit the model to a new initial curve and notify observers.
    pub fn fit_to(&self, term_structure: Arc<dyn YieldTermStructure>) {
        self.write().term_structure = Some(term_structure);
        debug!("Hull-White model refitted to a new term structure");
        self.notify_observers();
    }

    /// Variance of the integrated short rate over `[t, T]`.
    pub fn integrated_rate_variance(&self, t: Time, maturity: Time) -> Real {
        self.parameters().integrated_rate_variance(maturity - t)
    }

    /// Covariance of the integrated short rate over `[t, T]` with the
    /// driving Brownian motion.
    pub fn integrated_rate_covariance(&self, t: Time, maturity: Time) -> Real {
        self.parameters().integrated_rate_covariance(maturity - t)
    }
}

impl Observable for HullWhite {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.observers.notify();
    }
}

impl CalibratedModel for HullWhite {
    /// `[a, σ]`.
    fn params(&self) -> Vec<Real> {
        let p = self.parameters();
        vec![p.a, p.sigma]
    }

    fn set_params(&self, values: &[Real]) -> Result<()> {
        ensure!(
            values.len() == 2,
            "Hull-White takes 2 parameters (a, sigma), got {}",
            values.len()
        );
        {
            let mut state = self.write();
            let mut a = state.a.clone();
            let mut sigma = state.sigma.clone();
            a.set_value(values[0])?;
            sigma.set_value(values[1])?;
            state.a = a;
            state.sigma = sigma;
        }
        debug!(a = values[0], sigma = values[1], "Hull-White parameters updated");
        self.notify_observers();
        Ok(())
    }
}

impl ShortRateModel for HullWhite {
    fn discount_bond(&self, t: Time, maturity: Time, rate: Real) -> Result<Real> {
        let state = self.read();
        let b = state.parameters().b(maturity - t);
        Ok(state.a_function(t, maturity)? * (-b * rate).exp())
    }

    fn term_structure(&self) -> Option<Arc<dyn YieldTermStructure>> {
        self.read().term_structure.clone()
    }
}

impl OneFactorModel for HullWhite {
    fn short_rate_drift(&self, t: Time, r: Real) -> Result<Real> {
        let state = self.read();
        Ok(state.theta(t)? - state.a.value() * r)
    }

    fn short_rate_diffusion(&self, _t: Time, _r: Real) -> Real {
        self.sigma()
    }
}

impl OneFactorAffineModel for HullWhite {
    fn a_function(&self, t: Time, maturity: Time) -> Result<Real> {
        self.read().a_function(t, maturity)
    }

    fn b_function(&self, t: Time, maturity: Time) -> Real {
        self.parameters().b(maturity - t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use ql_termstructures::FlatForward;
    use ql_time::{Actual365Fixed, Date};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn flat_ts(rate: Real) -> Arc<dyn YieldTermStructure> {
        let ref_date = Date::from_ymd(2025, 1, 2).unwrap();
        Arc::new(FlatForward::new(ref_date, rate, Actual365Fixed))
    }

    #[test]
    fn construction_validates_parameters() {
        assert!(HullWhite::new(flat_ts(0.02), 0.1, 0.01).is_ok());
        assert!(HullWhite::new(flat_ts(0.02), 0.1, 0.0).is_ok());
        assert!(matches!(
            HullWhite::new(flat_ts(0.02), 0.0, 0.01),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            HullWhite::new(flat_ts(0.02), -0.1, 0.01),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            HullWhite::unfitted(0.1, -0.01),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn rebuilds_from_a_parameter_snapshot() {
        let original = HullWhite::new(flat_ts(0.02), 0.07, 0.015).unwrap();
        let rebuilt = HullWhite::from_parameters(flat_ts(0.02), original.parameters()).unwrap();
        assert_eq!(rebuilt.parameters(), original.parameters());
        assert!(rebuilt.is_fitted());
        assert!(matches!(
            HullWhite::from_parameters(
                flat_ts(0.02),
                HullWhiteParameters { a: 0.0, sigma: 0.01 }
            ),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn reference_moments() {
        let p = HullWhiteParameters { a: 0.1, sigma: 0.01 };
        assert_relative_eq!(
            p.integrated_rate_variance(1.0),
            3.094_595_329_280_025e-5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            p.integrated_rate_covariance(1.0),
            4.837_418_035_959_517e-3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn moments_vanish_without_rate_volatility() {
        let p = HullWhiteParameters { a: 0.3, sigma: 0.0 };
        assert_eq!(p.integrated_rate_variance(5.0), 0.0);
        assert_eq!(p.integrated_rate_covariance(5.0), 0.0);
        let q = HullWhiteParameters { a: 0.3, sigma: 0.01 };
        assert_eq!(q.integrated_rate_variance(0.0), 0.0);
        assert_eq!(q.integrated_rate_covariance(-1.0), 0.0);
    }

    #[test]
    fn series_branch_matches_closed_form() {
        // a·τ just either side of the switch between the two branches
        let below = HullWhiteParameters { a: 0.999_999e-2, sigma: 0.01 };
        let above = HullWhiteParameters { a: 1.000_001e-2, sigma: 0.01 };
        assert_relative_eq!(
            below.integrated_rate_variance(1.0),
            above.integrated_rate_variance(1.0),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            below.integrated_rate_covariance(1.0),
            above.integrated_rate_covariance(1.0),
            max_relative = 1e-6
        );
        // Vanishing mean reversion is a Brownian short rate
        let tiny = HullWhiteParameters { a: 1e-12, sigma: 0.01 };
        assert_relative_eq!(
            tiny.integrated_rate_variance(2.0),
            1e-4 * 8.0 / 3.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(tiny.integrated_rate_covariance(2.0), 0.01 * 2.0, max_relative = 1e-9);
    }

    #[test]
    fn b_function() {
        let hw = HullWhite::new(flat_ts(0.05), 0.1, 0.01).unwrap();
        let expected = (1.0 - (-1.0_f64).exp()) / 0.1;
        assert_abs_diff_eq!(hw.b_function(0.0, 10.0), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(hw.b_function(3.0, 3.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn discount_bond_reprices_initial_curve() {
        let ts = flat_ts(0.05);
        let hw = HullWhite::new(Arc::clone(&ts), 0.1, 0.01).unwrap();
        let r0 = ts.forward_rate(0.0, 0.0);
        for maturity in [0.5, 1.0, 5.0, 10.0] {
            assert_abs_diff_eq!(
                hw.discount_bond(0.0, maturity, r0).unwrap(),
                ts.discount(maturity),
                epsilon = 1e-14
            );
        }
        assert_abs_diff_eq!(hw.discount_bond(2.0, 2.0, 0.07).unwrap(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn discount_bond_decreases_with_rate() {
        let hw = HullWhite::new(flat_ts(0.05), 0.1, 0.01).unwrap();
        let low = hw.discount_bond(1.0, 5.0, 0.01).unwrap();
        let high = hw.discount_bond(1.0, 5.0, 0.08).unwrap();
        assert!(high < low && low < 1.0);
    }

    #[test]
    fn drift_on_flat_curve() {
        // f' = 0: θ(t) − a r = a f + σ²/(2a)(1 − e^{−2at}) − a r
        let hw = HullWhite::new(flat_ts(0.05), 0.1, 0.01).unwrap();
        let t = 2.0;
        let expected = 0.1 * 0.05 + 1e-4 / 0.2 * (1.0 - (-0.4_f64).exp()) - 0.1 * 0.03;
        assert_abs_diff_eq!(hw.short_rate_drift(t, 0.03).unwrap(), expected, epsilon = 1e-10);
        assert_abs_diff_eq!(hw.short_rate_diffusion(t, 0.03), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn unfitted_model_reports_upstream_error() {
        let hw = HullWhite::unfitted(0.1, 0.01).unwrap();
        assert!(!hw.is_fitted());
        assert!(matches!(
            hw.discount_bond(0.0, 1.0, 0.02),
            Err(Error::UpstreamModel(_))
        ));
        assert!(matches!(hw.fitted_parameters(), Err(Error::UpstreamModel(_))));
        hw.fit_to(flat_ts(0.02));
        assert!(hw.is_fitted());
        assert!(hw.discount_bond(0.0, 1.0, 0.02).is_ok());
        assert_eq!(
            hw.fitted_parameters().unwrap(),
            HullWhiteParameters { a: 0.1, sigma: 0.01 }
        );
    }

    #[test]
    fn set_params_is_all_or_nothing() {
        let hw = HullWhite::new(flat_ts(0.02), 0.1, 0.01).unwrap();
        assert!(hw.set_params(&[0.2]).is_err());
        assert!(hw.set_params(&[0.2, -0.01]).is_err());
        assert_eq!(hw.params(), vec![0.1, 0.01]);
        hw.set_params(&[0.2, 0.015]).unwrap();
        assert_eq!(hw.parameters(), HullWhiteParameters { a: 0.2, sigma: 0.015 });
    }

    struct Counter(AtomicUsize);

    impl Observer for Counter {
        fn update(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn refits_notify_observers() {
        let hw = HullWhite::new(flat_ts(0.02), 0.1, 0.01).unwrap();
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        hw.register_observer(Arc::downgrade(&counter) as Weak<dyn Observer>);

        hw.set_params(&[0.2, 0.02]).unwrap();
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        // rejected refit: no notification
        assert!(hw.set_params(&[-0.2, 0.02]).is_err());
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        hw.fit_to(flat_ts(0.03));
        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn model_is_shareable_across_threads() {
        let hw = Arc::new(HullWhite::new(flat_ts(0.02), 0.1, 0.01).unwrap());
        let writer = {
            let hw = Arc::clone(&hw);
            std::thread::spawn(move || {
                for i in 1..=100 {
                    let x = i as Real;
                    hw.set_params(&[0.1 * x, 0.01 * x]).unwrap();
                }
            })
        };
        for _ in 0..100 {
            let p = hw.parameters();
            // every snapshot comes from a single fit
            assert_relative_eq!(p.sigma / p.a, 0.1, max_relative = 1e-12);
        }
        writer.join().unwrap();
    }

    proptest! {
        #[test]
        fn moments_non_decreasing_in_maturity(
            a in 1e-6f64..3.0,
            sigma in 0.0f64..0.1,
            t1 in 0.0f64..30.0,
            dt in 0.0f64..5.0,
        ) {
            let p = HullWhiteParameters { a, sigma };
            let t2 = t1 + dt;
            prop_assert!(p.integrated_rate_variance(t2) >= p.integrated_rate_variance(t1));
            prop_assert!(p.integrated_rate_covariance(t2) >= p.integrated_rate_covariance(t1));
        }

        #[test]
        fn moments_are_non_negative(a in 1e-6f64..3.0, sigma in 0.0f64..0.1, tau in 0.0f64..50.0) {
            let p = HullWhiteParameters { a, sigma };
            prop_assert!(p.integrated_rate_variance(tau) >= 0.0);
            prop_assert!(p.integrated_rate_covariance(tau) >= 0.0);
        }
    }
}
