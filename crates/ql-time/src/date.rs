//! `Date` type (translates `ql/time/date.hpp`).
//!
//! A date is a day serial: serial 1 is 1 January 1900 and the valid range
//! ends on 31 December 2199. Conversions to and from year/month/day use the
//! proleptic Gregorian day-count algorithm of H. Hinnant, shifted to that
//! epoch; 1900 is not a leap year.

use crate::period::TimeUnit;
use crate::weekday::Weekday;
use ql_core::errors::{Error, Result};

/// Days from 1970-01-01 back to the day before the serial epoch.
const EPOCH: i32 = -25_568;

const FIRST_YEAR: u16 = 1900;
const LAST_YEAR: u16 = 2199;

/// A calendar date.
///
/// Corresponds to `QuantLib::Date`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date(i32);

impl Date {
    /// 1 January 1900.
    pub const MIN: Date = Date(1);

    /// 31 December 2199.
    pub const MAX: Date = Date(109_573);

    /// Create a date from its serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{FIRST_YEAR}, {LAST_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if !(1..=last).contains(&day) {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year, month, day) - EPOCH))
    }

    /// The serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil_from_days(self.0 + EPOCH)
    }

    /// The year.
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// The month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// The day of the month.
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// The day of the week; 1 January 1900 was a Monday.
    pub fn weekday(&self) -> Weekday {
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// Move by `n` calendar days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days overflows")))
            .and_then(Self::from_serial)
    }

    /// Move by `n` units. Month and year steps clamp the day to the end of
    /// the target month (31 January + 1M = 28 or 29 February).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n * 7),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let months = i32::from(y) * 12 + i32::from(m) - 1 + n;
                let year = u16::try_from(months.div_euclid(12))
                    .ok()
                    .filter(|y| (FIRST_YEAR..=LAST_YEAR).contains(y))
                    .ok_or_else(|| Error::Date(format!("{self} + {n} months is out of range")))?;
                let month = (months.rem_euclid(12) + 1) as u8;
                Self::from_ymd(year, month, d.min(days_in_month(year, month)))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Last day of this date's month.
    pub fn end_of_month(self) -> Self {
        let (y, m, d) = self.ymd();
        Date(self.0 + i32::from(days_in_month(y, m) - d))
    }

    /// Whether this is the last day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Operators ────────────────────────────────────────────────────────────────
//
// The operators panic outside the supported range, like integer overflow;
// use `add_days` to handle that case.

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        match self.add_days(rhs) {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self + (-rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let (y, m, d) = self.ymd();
        write!(f, "{d} {} {y}", MONTHS[usize::from(m) - 1])
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1–12) of `year`.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days since 1970-01-01 of a civil date.
fn days_from_civil(year: u16, month: u8, day: u8) -> i32 {
    let m = i32::from(month);
    let y = i32::from(year) - i32::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    // day of year counted from 1 March
    let doy = (153 * ((m + 9) % 12) + 2) / 5 + i32::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date of a day count since 1970-01-01.
fn civil_from_days(days: i32) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}
