//! Generalized Black-Scholes process (translates
//! `ql/processes/blackscholesprocess.hpp`).
//!
//! `dS/S = (r(t) − q(t)) dt + σ(t, S) dW`
//!
//! Engines only need the market data behind the dynamics, so the process is
//! a bundle of spot, curves and volatility surface. Time is measured on the
//! risk-free curve's day counter from its reference date.

use ql_core::{DiscountFactor, Error, Real, Result, Time, Volatility};
use ql_termstructures::{BlackVolTermStructure, FlatForward, TermStructure, YieldTermStructure};
use ql_time::{Actual365Fixed, Date};
use std::sync::Arc;

/// Spot, risk-free curve, dividend curve and Black volatility of one equity.
///
/// Corresponds to `QuantLib::GeneralizedBlackScholesProcess`; the
/// `BlackScholesMertonProcess` flavour is the same constructor.
#[derive(Debug, Clone)]
pub struct GeneralizedBlackScholesProcess {
    spot: Real,
    risk_free: Arc<dyn YieldTermStructure>,
    dividends: Arc<dyn YieldTermStructure>,
    volatility: Arc<dyn BlackVolTermStructure>,
}

impl GeneralizedBlackScholesProcess {
    /// Bundle market data. Nothing is checked until [`validate`](Self::validate).
    pub fn new(
        spot: Real,
        risk_free: Arc<dyn YieldTermStructure>,
        dividends: Arc<dyn YieldTermStructure>,
        volatility: Arc<dyn BlackVolTermStructure>,
    ) -> Self {
        Self {
            spot,
            risk_free,
            dividends,
            volatility,
        }
    }

    /// A process with `q = 0` (`QuantLib::BlackScholesProcess`).
    pub fn without_dividends(
        spot: Real,
        risk_free: Arc<dyn YieldTermStructure>,
        volatility: Arc<dyn BlackVolTermStructure>,
    ) -> Self {
        let no_yield = FlatForward::new(risk_free.reference_date(), 0.0, Actual365Fixed);
        Self::new(spot, risk_free, Arc::new(no_yield), volatility)
    }

    /// `S₀`.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Risk-free curve.
    pub fn risk_free_rate(&self) -> &dyn YieldTermStructure {
        &*self.risk_free
    }

    /// Dividend curve.
    pub fn dividend_yield(&self) -> &dyn YieldTermStructure {
        &*self.dividends
    }

    /// Years from the risk-free reference date to `date`.
    pub fn time(&self, date: Date) -> Time {
        self.risk_free.time_from_reference(date)
    }

    /// `D = P_r(0, t)`.
    pub fn risk_free_discount(&self, t: Time) -> DiscountFactor {
        self.risk_free.discount(t)
    }

    /// `Dq = P_q(0, t)`.
    pub fn dividend_discount(&self, t: Time) -> DiscountFactor {
        self.dividends.discount(t)
    }

    /// `S·Dq/D`.
    pub fn forward(&self, t: Time) -> Real {
        self.spot * self.dividend_discount(t) / self.risk_free_discount(t)
    }

    /// Black volatility to `date` at `strike`.
    pub fn black_vol(&self, date: Date, strike: Real) -> Volatility {
        self.volatility.black_vol(date, strike)
    }

    /// Fails with [`Error::InvalidArgument`] unless the spot is positive and
    /// finite.
    pub fn validate(&self) -> Result<()> {
        if self.spot > 0.0 && self.spot.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "spot must be positive, got {}",
                self.spot
            )))
        }
    }
}
