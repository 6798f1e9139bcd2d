//! Court calendar tests

use crate::common::{d, test_calendar};
use chrono::Days;
use engine::calendar::CourtCalendar;
use pretty_assertions::assert_eq;
use shared_types::CalendarConfig;

#[test]
fn weekends_are_not_business_days() {
    let cal = test_calendar();
    assert!(!cal.is_business_day(d(2024, 4, 6))); // Saturday
    assert!(!cal.is_business_day(d(2024, 4, 7))); // Sunday
    assert!(cal.is_business_day(d(2024, 4, 8))); // Monday
}

#[test]
fn holidays_are_not_business_days() {
    let cal = test_calendar();
    assert!(!cal.is_business_day(d(2024, 5, 1)));
    assert!(cal.is_business_day(d(2024, 5, 2)));
}

#[test]
fn extension_days_remain_business_days() {
    let cal = test_calendar();
    // 2024-12-20 is a Friday inside the recess: countable, but not a
    // valid deadline boundary.
    assert!(cal.is_business_day(d(2024, 12, 20)));
    assert!(cal.is_extension_day(d(2024, 12, 20)));
}

#[test]
fn next_business_day_lands_on_given_date_when_valid() {
    let cal = test_calendar();
    assert_eq!(cal.next_business_day(d(2024, 4, 8), false), d(2024, 4, 8));
    assert_eq!(cal.next_business_day(d(2024, 4, 8), true), d(2024, 4, 8));
}

#[test]
fn next_business_day_skips_weekend_and_holiday() {
    let cal = test_calendar();
    // Maundy Thursday + Good Friday + weekend.
    assert_eq!(cal.next_business_day(d(2024, 3, 28), false), d(2024, 4, 1));
}

#[test]
fn next_business_day_honors_extension_flag() {
    let cal = test_calendar();
    // Without the flag the extension Friday is acceptable.
    assert_eq!(cal.next_business_day(d(2024, 5, 31), false), d(2024, 5, 31));
    // With the flag it rolls past the weekend.
    assert_eq!(cal.next_business_day(d(2024, 5, 31), true), d(2024, 6, 3));
}

#[test]
fn next_business_day_crosses_year_end_recess() {
    let cal = test_calendar();
    // Every day from Dec 20 through Jan 6 is a weekend, holiday, or
    // extension day; the first full business day is Jan 7.
    assert_eq!(cal.next_business_day(d(2024, 12, 20), true), d(2025, 1, 7));
}

#[test]
fn scan_terminates_on_a_broken_calendar() {
    // A holiday set blanketing more than ten years of consecutive days
    // is a configuration error; the scan must stop at its cap instead
    // of walking forever.
    let mut holidays = Vec::new();
    let mut day = d(2024, 1, 1);
    for _ in 0..3700 {
        holidays.push(day);
        day = day.succ_opt().unwrap();
    }
    let cal = CourtCalendar::new(&CalendarConfig {
        holidays,
        extension_days: Vec::new(),
    });
    let reached = cal.next_business_day(d(2024, 1, 1), false);
    assert_eq!(
        reached,
        d(2024, 1, 1).checked_add_days(Days::new(3650)).unwrap()
    );
}

#[test]
fn add_business_days_zero_is_identity() {
    let cal = test_calendar();
    assert_eq!(cal.add_business_days(d(2024, 4, 12), 0), d(2024, 4, 12));
}

#[test]
fn add_business_days_skips_weekends_and_holidays() {
    let cal = test_calendar();
    // Friday Apr 12 counts as day 1; 14 further business days land on
    // Friday May 3 (May 1 is a holiday).
    assert_eq!(cal.add_business_days(d(2024, 4, 12), 14), d(2024, 5, 3));
}

#[test]
fn add_business_days_skips_extension_days() {
    let cal = test_calendar();
    // Wed May 29 + 1: May 30 is a holiday, May 31 an extension day,
    // weekend follows, so the next countable day is Mon Jun 3.
    assert_eq!(cal.add_business_days(d(2024, 5, 29), 1), d(2024, 6, 3));
}
