//! # quantlib-hybrid
//!
//! European equity options priced under Black-Scholes-Merton dynamics with
//! correlated Hull-White stochastic interest rates, built on a
//! [QuantLib](https://www.quantlib.org/)-style object model.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ql-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! quantlib-hybrid = "0.1"
//! ```
//!
//! ```rust
//! use std::sync::Arc;
//! use quantlib_hybrid::instruments::{OptionType, PricingEngine, VanillaOption};
//! use quantlib_hybrid::models::HullWhite;
//! use quantlib_hybrid::pricingengines::{AnalyticBsmHullWhiteEngine, HybridOptionArguments};
//! use quantlib_hybrid::processes::GeneralizedBlackScholesProcess;
//! use quantlib_hybrid::termstructures::{BlackConstantVol, FlatForward, YieldTermStructure};
//! use quantlib_hybrid::time::{Actual365Fixed, Date};
//!
//! # fn main() -> quantlib_hybrid::core::Result<()> {
//! let today = Date::from_ymd(2025, 1, 15)?;
//! let curve: Arc<dyn YieldTermStructure> =
//!     Arc::new(FlatForward::new(today, 0.02, Actual365Fixed));
//! let dividends = Arc::new(FlatForward::new(today, 0.0, Actual365Fixed));
//! let vol = Arc::new(BlackConstantVol::new(today, 0.20, Actual365Fixed));
//! let process = Arc::new(GeneralizedBlackScholesProcess::new(
//!     100.0,
//!     Arc::clone(&curve),
//!     dividends,
//!     vol,
//! ));
//!
//! let model = Arc::new(HullWhite::new(curve, 0.1, 0.01)?);
//! let engine = AnalyticBsmHullWhiteEngine::new(0.0, model)?;
//!
//! let option = VanillaOption::european(OptionType::Call, 100.0, Date::from_ymd(2026, 1, 15)?);
//! let results = engine.calculate(&HybridOptionArguments::new(option.arguments(), process))?;
//! assert!((results.npv - 8.919_061_990_902_149).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for dates, conventions, calendar
//!   markets, option types and Hull-White parameter snapshots.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and the observer pattern.
pub use ql_core as core;

/// Date, calendar and day counter types, including the South Korea calendars.
pub use ql_time as time;

/// Normal distribution.
pub use ql_math as math;

/// Yield and Black volatility term structures.
pub use ql_termstructures as termstructures;

/// Generalized Black-Scholes process.
pub use ql_processes as processes;

/// Hull-White short-rate model and calibration parameters.
pub use ql_models as models;

/// Vanilla options, payoffs and exercises.
pub use ql_instruments as instruments;

/// Analytic European and BSM/Hull-White engines.
pub use ql_pricingengines as pricingengines;
