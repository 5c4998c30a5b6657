//! # ql-termstructures
//!
//! Market curves read by the engines: discount curves for the risk-free and
//! dividend legs, and the Black volatility of the equity. All of them measure
//! time from a reference date with their own day counter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_vol_term_structure;
pub mod flat_forward;
pub mod term_structure;
pub mod yield_term_structure;

pub use black_vol_term_structure::{BlackConstantVol, BlackVolTermStructure};
pub use flat_forward::FlatForward;
pub use term_structure::{TermStructure, TermStructureData};
pub use yield_term_structure::YieldTermStructure;
