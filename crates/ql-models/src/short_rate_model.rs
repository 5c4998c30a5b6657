//! Short-rate model traits (translates `ql/models/shortrate/onefactormodel.hpp`
//! and `ql/models/shortrate/onefactormodels/` base classes).

use crate::calibrated_model::CalibratedModel;
use ql_core::{Real, Result, Time};
use ql_termstructures::YieldTermStructure;
use std::sync::Arc;

/// A model of the instantaneous short rate `r(t)`.
pub trait ShortRateModel: CalibratedModel {
    /// Zero-coupon bond `P(t, T)` observed at `t` with short rate `rate`.
    fn discount_bond(&self, t: Time, maturity: Time, rate: Real) -> Result<Real>;

    /// Curve the model reproduces, once fitted.
    fn term_structure(&self) -> Option<Arc<dyn YieldTermStructure>>;
}

/// `dr = μ(t, r) dt + σ(t, r) dW` with a single Brownian driver.
pub trait OneFactorModel: ShortRateModel {
    /// `μ(t, r)`.
    fn short_rate_drift(&self, t: Time, r: Real) -> Result<Real>;

    /// `σ(t, r)`.
    fn short_rate_diffusion(&self, t: Time, r: Real) -> Real;
}

/// Bond prices of the form `P(t, T) = A(t, T)·exp(−B(t, T)·r(t))`.
pub trait OneFactorAffineModel: OneFactorModel {
    /// `A(t, T)`.
    fn a_function(&self, t: Time, maturity: Time) -> Result<Real>;

    /// `B(t, T)`.
    fn b_function(&self, t: Time, maturity: Time) -> Real;
}
