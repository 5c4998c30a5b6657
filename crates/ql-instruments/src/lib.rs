//! # ql-instruments
//!
//! Contract terms of single-asset options and the [`PricingEngine`]
//! interface that turns them into prices.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::{Exercise, ExerciseType};
pub use instrument::{Instrument, PricingEngine, PricingResults};
pub use option::{VanillaOption, VanillaOptionArguments};
pub use payoff::{OptionType, PlainVanillaPayoff, StrikedPayoff};
