//! # ql-models
//!
//! The Hull-White short-rate model that drives the rate leg of the hybrid
//! engine, with the constrained-parameter machinery it is built on.
//! Parameters are set from outside; nothing here calibrates.
//!
//! ```text
//! CalibratedModel ─ ShortRateModel ─ OneFactorModel ─ OneFactorAffineModel
//!                                                        └── HullWhite
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod calibrated_model;
pub mod hull_white_model;
pub mod short_rate_model;
pub use calibrated_model::{
    BoundaryConstraint, CalibratedModel, Constraint, NoConstraint, NonNegativeConstraint,
    Parameter, PositiveConstraint,
};
pub use hull_white_model::{HullWhite, HullWhiteParameters};
pub use short_rate_model::{OneFactorAffineModel, OneFactorModel, ShortRateModel};
