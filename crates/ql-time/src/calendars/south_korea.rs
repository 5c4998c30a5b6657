//! South Korea calendars.
//!
//! Translates `ql/time/calendars/southkorea.hpp` / `.cpp`.
//!
//! Each market is a case of [`SouthKoreaMarket`] owning an ordered list of
//! static rule tables.  The KRX exchange calendar observes every settlement
//! holiday and adds the exchange's year-end closings on top.

use crate::calendar::Calendar;
use crate::date::Date;

/// Which South Korean calendar to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SouthKoreaMarket {
    /// Public holidays.
    #[default]
    Settlement,
    /// Korea Exchange: public holidays plus year-end closings.
    Krx,
}

impl SouthKoreaMarket {
    fn rule_tables(self) -> &'static [&'static [HolidayRule]] {
        match self {
            SouthKoreaMarket::Settlement => &[PUBLIC_HOLIDAYS],
            SouthKoreaMarket::Krx => &[PUBLIC_HOLIDAYS, KRX_CLOSINGS],
        }
    }
}

/// A single holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HolidayRule {
    /// Same day and month every year.
    Fixed { month: u8, day: u8 },
    /// Same day and month, observed up to and including `last_year`.
    FixedUntil { month: u8, day: u8, last_year: u16 },
    /// Explicit days of one month of one year (lunar holidays, elections,
    /// one-off closings).
    Dates { year: u16, month: u8, days: &'static [u8] },
}

impl HolidayRule {
    fn matches(&self, y: u16, m: u8, d: u8) -> bool {
        match *self {
            HolidayRule::Fixed { month, day } => m == month && d == day,
            HolidayRule::FixedUntil {
                month,
                day,
                last_year,
            } => m == month && d == day && y <= last_year,
            HolidayRule::Dates { year, month, days } => {
                y == year && m == month && days.contains(&d)
            }
        }
    }
}

const fn fixed(month: u8, day: u8) -> HolidayRule {
    HolidayRule::Fixed { month, day }
}

const fn until(month: u8, day: u8, last_year: u16) -> HolidayRule {
    HolidayRule::FixedUntil {
        month,
        day,
        last_year,
    }
}

const fn on(year: u16, month: u8, days: &'static [u8]) -> HolidayRule {
    HolidayRule::Dates { year, month, days }
}

const PUBLIC_HOLIDAYS: &[HolidayRule] = &[
    // New Year's Day
    fixed(1, 1),
    // Independence Movement Day
    fixed(3, 1),
    // Arbour Day
    until(4, 5, 2005),
    // Labour Day
    fixed(5, 1),
    // Children's Day
    fixed(5, 5),
    // Memorial Day
    fixed(6, 6),
    // Constitution Day
    until(7, 17, 2007),
    // Liberation Day
    fixed(8, 15),
    // National Foundation Day
    fixed(10, 3),
    // Christmas Day
    fixed(12, 25),
    // Lunar New Year
    on(2004, 1, &[21, 22, 23]),
    on(2005, 2, &[8, 9, 10]),
    on(2006, 1, &[28, 29, 30]),
    on(2007, 2, &[19]),
    on(2008, 2, &[6, 7, 8]),
    on(2009, 1, &[25, 26, 27]),
    on(2010, 2, &[13, 14, 15]),
    on(2011, 2, &[2, 3, 4]),
    on(2012, 1, &[23, 24]),
    on(2013, 2, &[11]),
    // Election days
    on(2004, 4, &[15]),
    on(2006, 5, &[31]),
    on(2007, 12, &[19]),
    on(2008, 4, &[9]),
    on(2010, 6, &[2]),
    on(2012, 4, &[11]),
    on(2012, 12, &[19]),
    // Buddha's birthday
    on(2004, 5, &[26]),
    on(2005, 5, &[15]),
    on(2006, 5, &[5]),
    on(2007, 5, &[24]),
    on(2008, 5, &[12]),
    on(2009, 5, &[2]),
    on(2010, 5, &[21]),
    on(2011, 5, &[10]),
    on(2012, 5, &[28]),
    on(2013, 5, &[17]),
    // Harvest Moon Day (Chuseok)
    on(2004, 9, &[27, 28, 29]),
    on(2005, 9, &[17, 18, 19]),
    on(2006, 10, &[5, 6, 7]),
    on(2007, 9, &[24, 25, 26]),
    on(2008, 9, &[13, 14, 15]),
    on(2009, 10, &[2, 3, 4]),
    on(2010, 9, &[21, 22, 23]),
    on(2011, 9, &[12, 13]),
    on(2012, 10, &[1]),
    on(2013, 9, &[18, 19, 20]),
];

// Year-end closing of the exchange.
const KRX_CLOSINGS: &[HolidayRule] = &[
    on(2004, 12, &[31]),
    on(2005, 12, &[30]),
    on(2006, 12, &[29]),
    on(2007, 12, &[31]),
    on(2008, 12, &[31]),
    on(2009, 12, &[31]),
    on(2010, 12, &[31]),
    on(2011, 12, &[30]),
    on(2012, 12, &[31]),
    on(2013, 12, &[31]),
];

/// South Korea calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Independence Movement Day (Mar 1)
/// * Arbour Day (Apr 5, until 2005)
/// * Labour Day (May 1)
/// * Children's Day (May 5)
/// * Memorial Day (Jun 6)
/// * Constitution Day (Jul 17, until 2007)
/// * Liberation Day (Aug 15)
/// * National Foundation Day (Oct 3)
/// * Christmas Day (Dec 25)
/// * Lunar New Year, Buddha's Birthday and Harvest Moon Day, 2004–2013
/// * Election days, 2004–2012
///
/// The [`SouthKoreaMarket::Krx`] variant also closes on the last trading day
/// of each year, 2004–2013.
///
/// Corresponds to `QuantLib::SouthKorea`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SouthKorea {
    market: SouthKoreaMarket,
}

impl SouthKorea {
    /// Create the calendar for the given market.
    pub fn new(market: SouthKoreaMarket) -> Self {
        Self { market }
    }

    /// The market this calendar was built for.
    pub fn market(&self) -> SouthKoreaMarket {
        self.market
    }
}

impl Calendar for SouthKorea {
    fn name(&self) -> &str {
        match self.market {
            SouthKoreaMarket::Settlement => "South-Korean settlement",
            SouthKoreaMarket::Krx => "South-Korea exchange",
        }
    }

    fn is_business_day(&self, date: Date) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        let (y, m, d) = date.ymd();
        !self
            .market
            .rule_tables()
            .iter()
            .flat_map(|table| table.iter())
            .any(|rule| rule.matches(y, m, d))
    }
}
