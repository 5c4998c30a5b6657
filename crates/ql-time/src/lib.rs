//! # ql-time
//!
//! Date, calendar, day counter, period, and business-day-convention types.
//!
//! These are the date-arithmetic collaborators of the pricing layer: a
//! [`DayCounter`] turns an expiry date into a year fraction, and a
//! [`Calendar`] decides which dates are business days.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// Concrete calendar implementations (country / exchange specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// `Period` and its `TimeUnit`.
pub mod period;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::{SouthKorea, SouthKoreaMarket};
pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, ActualActualIsda, DayCounter, Thirty360};
pub use period::{Period, TimeUnit};
pub use weekday::Weekday;
