//! # ql-math
//!
//! Numerical helpers for the closed-form engines. At present only the
//! standard normal density and distribution function are needed.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod distributions;

pub use distributions::{normal_cdf, normal_pdf};
