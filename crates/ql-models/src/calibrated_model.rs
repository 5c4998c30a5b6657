//! Calibrated-model infrastructure: `Parameter`, constraints and the
//! `CalibratedModel` trait.
//!
//! Translates `ql/models/parameter.hpp`, `ql/math/optimization/constraint.hpp`
//! and `ql/models/model.hpp`.

use ql_core::{ensure, Observable, Real, Result};
use std::fmt;
use std::sync::Arc;

// ────────────────────────────────────────────────────────────────────────────
// Constraints
// ────────────────────────────────────────────────────────────────────────────

/// A constraint on parameter values.
pub trait Constraint: fmt::Debug + Send + Sync {
    /// Whether `value` satisfies this constraint.
    fn test(&self, value: Real) -> bool;

    /// Short description used in error messages (e.g. `"> 0"`).
    fn describe(&self) -> String;
}

/// No constraint beyond finiteness.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConstraint;

impl Constraint for NoConstraint {
    fn test(&self, value: Real) -> bool {
        value.is_finite()
    }

    fn describe(&self) -> String {
        "finite".into()
    }
}

/// Strictly positive values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveConstraint;

impl Constraint for PositiveConstraint {
    fn test(&self, value: Real) -> bool {
        value.is_finite() && value > 0.0
    }

    fn describe(&self) -> String {
        "> 0".into()
    }
}

/// Non-negative values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeConstraint;

impl Constraint for NonNegativeConstraint {
    fn test(&self, value: Real) -> bool {
        value.is_finite() && value >= 0.0
    }

    fn describe(&self) -> String {
        ">= 0".into()
    }
}

/// A bound constraint `[lower, upper]`.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryConstraint {
    /// Lower bound (inclusive).
    pub lower: Real,
    /// Upper bound (inclusive).
    pub upper: Real,
}

impl Constraint for BoundaryConstraint {
    fn test(&self, value: Real) -> bool {
        value >= self.lower && value <= self.upper
    }

    fn describe(&self) -> String {
        format!("in [{}, {}]", self.lower, self.upper)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parameter
// ────────────────────────────────────────────────────────────────────────────

/// A named, constrained scalar model parameter.
///
/// Corresponds to `QuantLib::ConstantParameter`.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: &'static str,
    value: Real,
    constraint: Arc<dyn Constraint>,
}

impl Parameter {
    /// Create a parameter, failing if `value` violates `constraint`.
    pub fn new(
        name: &'static str,
        value: Real,
        constraint: impl Constraint + 'static,
    ) -> Result<Self> {
        let constraint: Arc<dyn Constraint> = Arc::new(constraint);
        check(name, value, &*constraint)?;
        Ok(Self {
            name,
            value,
            constraint,
        })
    }

    /// The parameter's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current value.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Replace the value; the old value is kept if the new one is rejected.
    pub fn set_value(&mut self, value: Real) -> Result<()> {
        check(self.name, value, &*self.constraint)?;
        self.value = value;
        Ok(())
    }

    /// Whether `value` would be accepted by [`set_value`](Self::set_value).
    pub fn accepts(&self, value: Real) -> bool {
        self.constraint.test(value)
    }

    /// Access the constraint.
    pub fn constraint(&self) -> &dyn Constraint {
        &*self.constraint
    }
}

fn check(name: &str, value: Real, constraint: &dyn Constraint) -> Result<()> {
    ensure!(
        constraint.test(value),
        "parameter {name} must be {}, got {value}",
        constraint.describe()
    );
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// CalibratedModel trait
// ────────────────────────────────────────────────────────────────────────────

/// A model whose parameters are supplied (or calibrated) externally.
///
/// Models are shared behind `Arc` and refit in place, so `set_params` takes
/// `&self`; a successful refit notifies every registered observer.
///
/// Corresponds to `QuantLib::CalibratedModel`.
pub trait CalibratedModel: Observable + fmt::Debug + Send + Sync {
    /// Current parameter values, in the model's canonical order.
    fn params(&self) -> Vec<Real>;

    /// Replace all parameters at once.
    ///
    /// Either every value is accepted and observers are notified, or the
    /// model is left untouched and an error is returned.
    fn set_params(&self, values: &[Real]) -> Result<()>;
}
