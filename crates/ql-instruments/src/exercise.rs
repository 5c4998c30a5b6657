//! Exercise rights (translates `ql/exercise.hpp`).

use ql_time::Date;
use std::fmt;

/// When the holder may exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseType {
    /// On the expiry date only.
    European,
    /// On any date of a window that ends at expiry.
    American,
}

/// An exercise window `[first_date, last_date]`; a European exercise has
/// both ends on the expiry date.
///
/// Corresponds to `QuantLib::EuropeanExercise` and
/// `QuantLib::AmericanExercise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exercise {
    kind: ExerciseType,
    first: Date,
    last: Date,
}

impl Exercise {
    /// Exercise on `expiry` only.
    pub fn european(expiry: Date) -> Self {
        Self {
            kind: ExerciseType::European,
            first: expiry,
            last: expiry,
        }
    }

    /// Exercise on any date between `a` and `b`, in either order.
    pub fn american(a: Date, b: Date) -> Self {
        Self {
            kind: ExerciseType::American,
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// European or American.
    pub fn exercise_type(&self) -> ExerciseType {
        self.kind
    }

    /// Earliest exercise date.
    pub fn first_date(&self) -> Date {
        self.first
    }

    /// Expiry.
    pub fn last_date(&self) -> Date {
        self.last
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ExerciseType::European => write!(f, "European({})", self.last),
            ExerciseType::American => write!(f, "American({} to {})", self.first, self.last),
        }
    }
}
