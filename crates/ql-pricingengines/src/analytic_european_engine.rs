//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Translates `ql/pricingengines/vanilla/analyticeuropeanengine.hpp`.
//!
//! Prices European vanilla options using the closed-form Black-Scholes-Merton
//! formula. Computes NPV and first/second-order Greeks.
//!
//! The input extraction and the Greeks are shared with the hybrid engine in
//! [`crate::analytic_bsm_hull_white_engine`], which only differs in how the
//! total variance of the log-forward is built.

use crate::black_formula::black_terms;
use ql_core::{errors::Result, DiscountFactor, Error, Real, Time, Volatility};
use ql_instruments::{
    ExerciseType, OptionType, PricingEngine, PricingResults, VanillaOptionArguments,
};
use ql_processes::GeneralizedBlackScholesProcess;
use ql_time::Date;
use tracing::{debug, warn};

use std::sync::Arc;

/// Market inputs of a European vanilla option, read off a Black-Scholes
/// process at the option's expiry.
///
/// Two inputs compare equal exactly when they price identically under the
/// same model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanInputs {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike `K > 0`.
    pub strike: Real,
    /// Spot `S > 0`.
    pub spot: Real,
    /// Expiry date.
    pub expiry: Date,
    /// Time to expiry `T ≥ 0` on the risk-free curve's day counter.
    pub maturity: Time,
    /// Risk-free discount factor `D = P_r(0,T)`.
    pub risk_free_discount: DiscountFactor,
    /// Dividend discount factor `D_q = P_q(0,T)`.
    pub dividend_discount: DiscountFactor,
    /// Black volatility `η` at expiry and strike; zero when `T = 0`.
    pub volatility: Volatility,
}

impl EuropeanInputs {
    /// Validate the option and read the market data it needs.
    ///
    /// Fails with [`Error::InvalidArgument`] for a non-European exercise, a
    /// non-positive strike or spot, an expiry before the curve's reference
    /// date, or a negative volatility.
    pub fn from_args(
        args: &VanillaOptionArguments,
        process: &GeneralizedBlackScholesProcess,
    ) -> Result<Self> {
        if args.exercise.exercise_type() != ExerciseType::European {
            return Err(Error::InvalidArgument(format!(
                "not a European option: {}",
                args.exercise
            )));
        }
        let strike = args.payoff.strike();
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "strike must be positive, got {strike}"
            )));
        }
        process.validate()?;

        let expiry = args.exercise.last_date();
        let maturity = process.time(expiry);
        if !(maturity >= 0.0 && maturity.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "option expired on {expiry}, time to expiry {maturity}"
            )));
        }
        let volatility = if maturity > 0.0 {
            process.black_vol(expiry, strike)
        } else {
            0.0
        };
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "volatility must be non-negative, got {volatility}"
            )));
        }

        Ok(Self {
            option_type: args.payoff.option_type(),
            strike,
            spot: process.spot(),
            expiry,
            maturity,
            risk_free_discount: process.risk_free_discount(maturity),
            dividend_discount: process.dividend_discount(maturity),
            volatility,
        })
    }

    /// Curve-implied forward `F = S·D_q/D`.
    pub fn forward(&self) -> Real {
        self.spot * self.dividend_discount / self.risk_free_discount
    }

    /// Results for an option expiring now: the exact intrinsic value.
    pub fn intrinsic_results(&self) -> PricingResults {
        let phi = self.option_type.sign();
        let intrinsic = (phi * (self.spot - self.strike)).max(0.0);
        let delta = if intrinsic > 0.0 { phi } else { 0.0 };
        PricingResults::from_npv(intrinsic)
            .with_result("delta", delta)
            .with_result("gamma", 0.0)
            .with_result("vega", 0.0)
            .with_result("theta", 0.0)
            .with_result("rho", 0.0)
            .with_result("dividend_rho", 0.0)
            .with_result("variance", 0.0)
            .with_result("forward", self.spot)
            .with_result("discount", 1.0)
    }

    /// Black price and Greeks for the given total variance of `ln F(T)`.
    ///
    /// Requires `maturity > 0`. Greeks are per unit of the quantity (vega per
    /// 1.0 of volatility, rho per 1.0 of rate, theta per year).
    ///
    /// Theta takes the zero rates to expiry, `−ln D / T`, as the slopes of
    /// the discount factors. That is exact for flat curves only; on a sloped
    /// curve the true slope is the instantaneous forward at `T`.
    pub fn results(&self, variance: TotalVariance) -> PricingResults {
        let phi = self.option_type.sign();
        let s = self.spot;
        let k = self.strike;
        let t = self.maturity;
        let d = self.risk_free_discount;
        let dq = self.dividend_discount;
        let forward = self.forward();

        let total = variance.variance.max(0.0);
        if total <= 0.0 {
            warn!(
                maturity = t,
                variance = variance.variance,
                "degenerate total variance, pricing the discounted forward intrinsic value"
            );
        }
        let std_dev = total.sqrt();
        let terms = black_terms(self.option_type, k, forward, std_dev);

        let npv = (phi * (s * dq * terms.cdf_d1 - k * d * terms.cdf_d2)).max(0.0);
        let delta = phi * dq * terms.cdf_d1;
        // ∂V/∂Σ
        let sensitivity = s * dq * terms.pdf_d1;
        let (gamma, vega, time_decay) = if std_dev > 0.0 {
            (
                dq * terms.pdf_d1 / (s * std_dev),
                sensitivity * variance.d_volatility / (2.0 * std_dev),
                sensitivity * variance.d_maturity / (2.0 * std_dev),
            )
        } else {
            (0.0, 0.0, 0.0)
        };
        // zero rates to expiry
        let r = -d.ln() / t;
        let q = -dq.ln() / t;
        let theta = -time_decay + phi * (q * s * dq * terms.cdf_d1 - r * k * d * terms.cdf_d2);
        let rho = phi * k * t * d * terms.cdf_d2;
        let dividend_rho = -phi * s * t * dq * terms.cdf_d1;

        PricingResults::from_npv(npv)
            .with_result("delta", delta)
            .with_result("gamma", gamma)
            .with_result("vega", vega)
            .with_result("theta", theta)
            .with_result("rho", rho)
            .with_result("dividend_rho", dividend_rho)
            .with_result("variance", total)
            .with_result("forward", forward)
            .with_result("discount", d)
    }
}

/// Total variance `Σ²` of `ln F(T)` with its partial derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalVariance {
    /// `Σ²`.
    pub variance: Real,
    /// `∂Σ²/∂η`, used for vega.
    pub d_volatility: Real,
    /// `∂Σ²/∂T` holding the rate-model moments fixed, used for theta.
    pub d_maturity: Real,
}

impl TotalVariance {
    /// Black-Scholes variance `η²T`.
    pub fn black_scholes(volatility: Volatility, maturity: Time) -> Self {
        Self {
            variance: volatility * volatility * maturity,
            d_volatility: 2.0 * volatility * maturity,
            d_maturity: volatility * volatility,
        }
    }
}

/// Analytic pricing engine for European vanilla options.
///
/// Implements the Black-Scholes-Merton closed-form solution:
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
///
/// Corresponds to `QuantLib::AnalyticEuropeanEngine`.
#[derive(Debug)]
pub struct AnalyticEuropeanEngine {
    process: Arc<GeneralizedBlackScholesProcess>,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine with the given Black-Scholes process.
    pub fn new(process: Arc<GeneralizedBlackScholesProcess>) -> Self {
        debug!(spot = process.spot(), "analytic European engine created");
        Self { process }
    }

    /// The process supplying the market data.
    pub fn process(&self) -> &Arc<GeneralizedBlackScholesProcess> {
        &self.process
    }
}

impl PricingEngine<VanillaOptionArguments> for AnalyticEuropeanEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<PricingResults> {
        let inputs = EuropeanInputs::from_args(args, &self.process)?;
        if inputs.maturity == 0.0 {
            return Ok(inputs.intrinsic_results());
        }
        Ok(inputs.results(TotalVariance::black_scholes(
            inputs.volatility,
            inputs.maturity,
        )))
    }
}
