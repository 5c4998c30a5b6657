//! # ql-pricingengines
//!
//! Analytic pricing engines for European equity options.
//!
//! ## Engines
//!
//! - [`AnalyticEuropeanEngine`]: Black-Scholes-Merton closed-form for European options
//! - [`AnalyticBsmHullWhiteEngine`]: Black-Scholes-Merton equity with correlated
//!   Hull-White stochastic rates
//!
//! Both engines share the Black formula in [`black_formula`] and report the
//! same additional results: `delta`, `gamma`, `vega`, `theta`, `rho`,
//! `dividend_rho`, `variance`, `forward` and `discount`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_bsm_hull_white_engine;
pub mod analytic_european_engine;
pub mod black_formula;

pub use analytic_bsm_hull_white_engine::{
    hybrid_total_variance, AnalyticBsmHullWhiteEngine, HybridOptionArguments,
};
pub use analytic_european_engine::{AnalyticEuropeanEngine, EuropeanInputs, TotalVariance};
pub use black_formula::{black_formula, black_terms, BlackTerms};
