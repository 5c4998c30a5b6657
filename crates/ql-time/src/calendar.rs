//! Business-day calendars (translates `ql/time/calendar.hpp`).
//!
//! A calendar is one predicate, [`Calendar::is_business_day`]. Adjustment,
//! advancing and counting are all derived from it.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::period::{Period, TimeUnit};
use ql_core::errors::Result;

/// Business-day rules of a market.
///
/// Corresponds to `QuantLib::Calendar`.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Display name, e.g. `"South-Korean settlement"`.
    fn name(&self) -> &str;

    /// Whether the market is open on `date`.
    fn is_business_day(&self, date: Date) -> bool;

    /// Not a business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Saturday or Sunday unless the calendar says otherwise.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Whether `date` is the last business day of its month. A date on the
    /// last supported month counts as month end when no later business day
    /// can be found.
    fn is_end_of_month(&self, date: Date) -> bool {
        date.add_days(1)
            .and_then(|next| self.roll(next, 1))
            .map_or(true, |next| next.month() != date.month())
    }

    /// Last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Result<Date> {
        self.roll(date.end_of_month(), -1)
    }

    /// Move a holiday to a business day under `convention`. Business days
    /// are returned unchanged except under `EndOfMonth`.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        use BusinessDayConvention as Bdc;

        let within_month = |first: i32| -> Result<Date> {
            let rolled = self.roll(date, first)?;
            if rolled.month() == date.month() {
                Ok(rolled)
            } else {
                self.roll(date, -first)
            }
        };
        match convention {
            Bdc::Unadjusted => Ok(date),
            Bdc::Following => self.roll(date, 1),
            Bdc::Preceding => self.roll(date, -1),
            Bdc::ModifiedFollowing => within_month(1),
            Bdc::ModifiedPreceding => within_month(-1),
            Bdc::Nearest => {
                let (after, before) = (self.roll(date, 1)?, self.roll(date, -1)?);
                Ok(if after - date <= date - before { after } else { before })
            }
            Bdc::EndOfMonth => self.end_of_month(date),
        }
    }

    /// First business day reached from `date` stepping `step` days at a time,
    /// `date` included.
    fn roll(&self, date: Date, step: i32) -> Result<Date> {
        let mut d = date;
        while self.is_holiday(d) {
            d = d.add_days(step)?;
        }
        Ok(d)
    }

    /// Move `date` by `period` (`QuantLib::Calendar::advance`).
    ///
    /// Day periods count business days and ignore `convention`. Week, month
    /// and year periods move in calendar time and then adjust. With
    /// `end_of_month`, a month or year step from a month-end business day
    /// lands on the month-end business day of the target month.
    fn advance(
        &self,
        date: Date,
        period: Period,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Date> {
        let Period { length, unit } = period;
        if length == 0 {
            return self.adjust(date, convention);
        }
        if unit == TimeUnit::Days {
            return self.advance_business_days(date, length);
        }
        let target = date.advance(length, unit)?;
        let month_based = matches!(unit, TimeUnit::Months | TimeUnit::Years);
        if month_based && end_of_month && self.is_end_of_month(date) {
            self.end_of_month(target)
        } else {
            self.adjust(target, convention)
        }
    }

    /// The `n`-th business day after `date`, or before it for negative `n`.
    fn advance_business_days(&self, date: Date, n: i32) -> Result<Date> {
        let step = n.signum();
        let mut d = date;
        for _ in 0..n.unsigned_abs() {
            d = self.roll(d.add_days(step)?, step)?;
        }
        Ok(d)
    }

    /// Business days in `(d1, d2]`, negated when `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let open = (start.serial() + 1..=end.serial())
            .filter_map(|serial| Date::from_serial(serial).ok())
            .filter(|d| self.is_business_day(*d))
            .count();
        sign * open as i32
    }
}

/// Every day is a business day (`QuantLib::NullCalendar`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// Saturdays and Sundays off, no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
