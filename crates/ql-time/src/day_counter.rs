//! Day-count conventions (translates `ql/time/daycounter.hpp` and
//! `ql/time/daycounters/`).
//!
//! Engines measure time to expiry with the day counter of the curve or
//! volatility surface they read, so the counter is a trait object carried by
//! every term structure.

use crate::date::{days_in_month, is_leap_year, Date};
use ql_core::{Real, Time};

/// Converts a pair of dates into a day count and a year fraction.
///
/// Corresponds to `QuantLib::DayCounter`.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Convention name, e.g. `"Actual/365 (Fixed)"`.
    fn name(&self) -> &str;

    /// Days from `d1` to `d2`.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Years from `d1` to `d2`; negative when `d2 < d1`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

fn actual_days(d1: Date, d2: Date) -> i64 {
    i64::from(d2 - d1)
}

/// Actual days over a fixed year length.
macro_rules! actual_over_fixed_basis {
    ($(#[$doc:meta])* $name:ident, $label:literal, $basis:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl DayCounter for $name {
            fn name(&self) -> &str {
                $label
            }

            fn day_count(&self, d1: Date, d2: Date) -> i64 {
                actual_days(d1, d2)
            }

            fn year_fraction(&self, d1: Date, d2: Date) -> Time {
                actual_days(d1, d2) as Real / $basis
            }
        }
    };
}

actual_over_fixed_basis!(
    /// Actual/365 (Fixed).
    Actual365Fixed,
    "Actual/365 (Fixed)",
    365.0
);

actual_over_fixed_basis!(
    /// Actual/360, the money-market basis.
    Actual360,
    "Actual/360",
    360.0
);

/// 30/360 US bond basis.
///
/// A 31st start day becomes the 30th. A 31st end day becomes the 30th when
/// the start day is the 30th or later; otherwise it rolls to the 1st of the
/// next month, which is day 31 of its own month in 30-day arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let (y1, m1, day1) = d1.ymd();
        let (y2, m2, day2) = d2.ymd();
        let start = i64::from(day1.min(30));
        let end = match i64::from(day2) {
            31 if start < 30 => 31,
            31 => 30,
            d => d,
        };
        360 * (i64::from(y2) - i64::from(y1)) + 30 * (i64::from(m2) - i64::from(m1)) + end
            - start
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA): each calendar year contributes its own days over
/// its own length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActualActualIsda;

impl ActualActualIsda {
    fn year_length(year: u16) -> Real {
        if is_leap_year(year) {
            366.0
        } else {
            365.0
        }
    }

    /// 1 for 1 January.
    fn day_of_year(d: Date) -> u16 {
        let (year, month, day) = d.ymd();
        (1..month)
            .map(|m| u16::from(days_in_month(year, m)))
            .sum::<u16>()
            + u16::from(day)
    }
}

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        actual_days(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d2 < d1 {
            return -self.year_fraction(d2, d1);
        }
        let (y1, y2) = (d1.year(), d2.year());
        if y1 == y2 {
            return actual_days(d1, d2) as Real / Self::year_length(y1);
        }
        // stub to the end of y1, whole years, then what has elapsed of y2
        let len1 = Self::year_length(y1);
        let first = (len1 - Real::from(Self::day_of_year(d1)) + 1.0) / len1;
        let last = Real::from(Self::day_of_year(d2) - 1) / Self::year_length(y2);
        first + Real::from(y2 - y1 - 1) + last
    }
}
