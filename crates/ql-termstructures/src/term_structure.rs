//! `TermStructure`: base trait for all term structures
//! (translates `ql/termstructure.hpp`).
//!
//! Every term structure has a **reference date**, a **day counter**, and a
//! **maximum date** (the furthest point at which extrapolation is allowed).

use ql_core::Time;
use ql_time::{Calendar, Date, DayCounter, NullCalendar};
use std::sync::Arc;

/// Base trait for all term structures.
///
/// Corresponds to `QuantLib::TermStructure`.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date at which discount = 1.0 and from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time-fraction conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The calendar used for date adjustments.
    fn calendar(&self) -> &dyn Calendar;

    /// The latest date for which the curve can be used.
    fn max_date(&self) -> Date {
        Date::MAX
    }

    /// Convert a date to a year fraction relative to the reference date.
    ///
    /// Dates before the reference date give a negative time.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter()
            .year_fraction(self.reference_date(), date)
    }

    /// Check whether a date is in the valid range of the term structure.
    fn check_range_date(&self, date: Date) -> bool {
        date >= self.reference_date() && date <= self.max_date()
    }
}

/// Reference date, calendar and day counter shared by the concrete curves
/// and surfaces in this crate.
#[derive(Debug, Clone)]
pub struct TermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Calendar for date adjustments.
    pub calendar: Arc<dyn Calendar>,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
}

impl TermStructureData {
    /// Bundle a reference date and day counter with the null calendar.
    pub fn new(reference_date: Date, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            reference_date,
            calendar: Arc::new(NullCalendar),
            day_counter: Arc::new(day_counter),
        }
    }

    /// Replace the calendar.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Arc::new(calendar);
        self
    }
}

/// Implements [`TermStructure`] for a type with a `data: TermStructureData`
/// field.
macro_rules! impl_term_structure {
    ($ty:ty) => {
        impl $crate::term_structure::TermStructure for $ty {
            fn reference_date(&self) -> ql_time::Date {
                self.data.reference_date
            }

            fn day_counter(&self) -> &dyn ql_time::DayCounter {
                &*self.data.day_counter
            }

            fn calendar(&self) -> &dyn ql_time::Calendar {
                &*self.data.calendar
            }
        }
    };
}

pub(crate) use impl_term_structure;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ql_time::{Actual360, SouthKorea};

    #[derive(Debug)]
    struct Bare {
        data: TermStructureData,
    }

    impl_term_structure!(Bare);

    #[test]
    fn time_from_reference_uses_day_counter() {
        let ref_date = Date::from_ymd(2025, 1, 15).unwrap();
        let ts = Bare {
            data: TermStructureData::new(ref_date, Actual360),
        };
        let d = Date::from_ymd(2025, 7, 14).unwrap();
        assert_abs_diff_eq!(ts.time_from_reference(d), 180.0 / 360.0, epsilon = 1e-15);
        assert!(ts.time_from_reference(ref_date - 1) < 0.0);
    }

    #[test]
    fn range_and_calendar() {
        let ref_date = Date::from_ymd(2025, 1, 15).unwrap();
        let ts = Bare {
            data: TermStructureData::new(ref_date, Actual360).with_calendar(SouthKorea::default()),
        };
        assert_eq!(ts.calendar().name(), "South-Korean settlement");
        assert!(ts.check_range_date(ref_date));
        assert!(!ts.check_range_date(ref_date - 1));
    }
}
