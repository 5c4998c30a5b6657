//! # ql-processes
//!
//! The equity leg of the hybrid model: spot, risk-free and dividend curves
//! and the Black volatility, bundled as a generalized Black-Scholes process.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_scholes_process;

pub use black_scholes_process::GeneralizedBlackScholesProcess;
