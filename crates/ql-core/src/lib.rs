//! # ql-core
//!
//! Numeric aliases, the workspace error type and the observer registry that
//! lets a refit model invalidate the engines priced off it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod errors;
pub mod patterns;

/// Every floating-point quantity.
pub type Real = f64;

/// Continuously compounded unless stated otherwise; `0.05` is 5%.
pub type Rate = Real;

/// `P(0, t)`.
pub type DiscountFactor = Real;

/// Annualised, `0.2` is 20%.
pub type Volatility = Real;

/// Year fraction.
pub type Time = Real;

pub use errors::{Error, Result};
pub use patterns::observable::{Observable, Observer, ObserverList};
