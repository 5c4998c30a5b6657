//! Time spans for date arithmetic (translates `ql/time/period.hpp` and
//! `ql/time/timeunit.hpp`).

use std::fmt;

/// Unit of a [`Period`].
///
/// `Days` means business days when passed to [`Calendar::advance`] and
/// calendar days everywhere else.
///
/// [`Calendar::advance`]: crate::calendar::Calendar::advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Days.
    Days,
    /// Seven days.
    Weeks,
    /// Months, clamping the day to the end of a shorter month.
    Months,
    /// Twelve months.
    Years,
}

impl TimeUnit {
    fn suffix(self) -> char {
        match self {
            Self::Days => 'D',
            Self::Weeks => 'W',
            Self::Months => 'M',
            Self::Years => 'Y',
        }
    }
}

/// A signed number of [`TimeUnit`]s, written `3M`, `-1D`, `10Y`.
///
/// Corresponds to `QuantLib::Period`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Signed count.
    pub length: i32,
    /// Unit.
    pub unit: TimeUnit,
}

impl Period {
    /// `length` units.
    pub const fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// `n` days.
    pub const fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// `n` weeks.
    pub const fn weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// `n` months.
    pub const fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// `n` years.
    pub const fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.length, self.unit)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.suffix())
    }
}

impl fmt::Debug for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Period({self})")
    }
}
