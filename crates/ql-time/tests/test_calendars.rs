//! Integration tests for the `Calendar` trait and the South Korea calendars.

use proptest::prelude::*;
use ql_time::{BusinessDayConvention, Calendar, Date, Period, SouthKorea, SouthKoreaMarket};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) && !cal.is_weekend(d) {
            holidays.push(d);
        }
        d += 1;
    }
    holidays
}

#[test]
fn test_south_korea_fixed_holidays_2004() {
    let cal = SouthKorea::new(SouthKoreaMarket::Settlement);
    assert!(cal.is_holiday(date(2004, 1, 1)), "New Year's Day");
    assert!(cal.is_holiday(date(2004, 3, 1)), "Independence Movement Day");
    assert!(cal.is_business_day(date(2004, 1, 2)));
}

#[test]
fn test_south_korea_weekends_are_holidays() {
    let cal = SouthKorea::default();
    let mut d = date(2004, 1, 1);
    let end = date(2004, 12, 31);
    while d <= end {
        if d.weekday().is_weekend() {
            assert!(cal.is_holiday(d), "{d} should be a holiday");
        }
        d += 1;
    }
}

#[test]
fn test_south_korea_settlement_holidays_2004() {
    let expected = vec![
        date(2004, 1, 1),
        date(2004, 1, 21),
        date(2004, 1, 22),
        date(2004, 1, 23),
        date(2004, 3, 1),
        date(2004, 4, 5),
        date(2004, 4, 15),
        date(2004, 5, 5),
        date(2004, 5, 26),
        date(2004, 9, 27),
        date(2004, 9, 28),
        date(2004, 9, 29),
    ];
    let cal = SouthKorea::default();
    // Labour Day, Memorial Day, Constitution Day, Liberation Day, Foundation
    // Day and Christmas all fall on weekends in 2004
    let holidays = holiday_list(&cal, date(2004, 1, 1), date(2004, 12, 31));
    assert_eq!(holidays, expected);
}

#[test]
fn test_krx_adds_year_end_closing() {
    let settlement = SouthKorea::new(SouthKoreaMarket::Settlement);
    let krx = SouthKorea::new(SouthKoreaMarket::Krx);
    let from = date(2005, 1, 1);
    let to = date(2005, 12, 31);
    let s = holiday_list(&settlement, from, to);
    let k = holiday_list(&krx, from, to);
    assert_eq!(k.len(), s.len() + 1);
    assert!(s.iter().all(|d| k.contains(d)));
    assert_eq!(k.last(), Some(&date(2005, 12, 30)));
}

#[test]
fn test_south_korea_adjust() {
    let cal = SouthKorea::default();
    // Lunar New Year 2004 runs Wed 21st to Fri 23rd, then a weekend
    assert_eq!(
        cal.adjust(date(2004, 1, 21), BusinessDayConvention::Following).unwrap(),
        date(2004, 1, 26)
    );
    assert_eq!(
        cal.adjust(date(2004, 1, 21), BusinessDayConvention::Preceding).unwrap(),
        date(2004, 1, 20)
    );
}

#[test]
fn test_south_korea_advance() {
    let cal = SouthKorea::default();
    assert_eq!(
        cal.advance(
            date(2004, 1, 20),
            Period::days(1),
            BusinessDayConvention::Following,
            false
        )
        .unwrap(),
        date(2004, 1, 26)
    );
    assert_eq!(cal.business_days_between(date(2004, 1, 20), date(2004, 1, 26)), 1);
}

proptest! {
    #[test]
    fn prop_business_day_count_inverts_advance(offset in 0i32..3650, n in 0i32..60) {
        let cal = SouthKorea::new(SouthKoreaMarket::Krx);
        let start = date(2004, 1, 1) + offset;
        let end = cal.advance_business_days(start, n).unwrap();
        prop_assert!(n == 0 || cal.is_business_day(end));
        prop_assert_eq!(cal.business_days_between(start, end), n);
    }

    #[test]
    fn prop_adjusted_dates_are_business_days(offset in 0i32..3650) {
        let cal = SouthKorea::default();
        let d = date(2004, 1, 1) + offset;
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
        ] {
            let adjusted = cal.adjust(d, convention).unwrap();
            prop_assert!(cal.is_business_day(adjusted));
            prop_assert_eq!(adjusted == d, cal.is_business_day(d));
        }
    }
}
