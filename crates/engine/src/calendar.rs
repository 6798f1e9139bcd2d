//! Court calendar: business-day predicate and forward search.
//!
//! Weekends are always non-business regardless of set membership.
//! Extension days ("prorrogações") count as calendar days but can never
//! serve as a deadline start or end, so deadline walks skip them.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use shared_types::CalendarConfig;
use std::collections::HashSet;

/// Defensive bound on forward scans. The calendars are finite, so any
/// scan that runs this long indicates a broken configuration; the
/// search stops and logs instead of looping forever.
const MAX_SCAN_DAYS: u32 = 3650;

/// Holiday and extension-day sets with O(1) membership checks.
#[derive(Debug, Clone, Default)]
pub struct CourtCalendar {
    holidays: HashSet<NaiveDate>,
    extension_days: HashSet<NaiveDate>,
}

impl CourtCalendar {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            holidays: config.holidays.iter().copied().collect(),
            extension_days: config.extension_days.iter().copied().collect(),
        }
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_extension_day(&self, date: NaiveDate) -> bool {
        self.extension_days.contains(&date)
    }

    /// Monday–Friday and not a holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// First business day on or after `date`. With `skip_extension` the
    /// result must also not be an extension day.
    pub fn next_business_day(&self, date: NaiveDate, skip_extension: bool) -> NaiveDate {
        let mut current = date;
        for _ in 0..MAX_SCAN_DAYS {
            if self.is_business_day(current)
                && !(skip_extension && self.is_extension_day(current))
            {
                return current;
            }
            current = match current.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        tracing::error!(
            from = %date,
            "calendar scan exceeded {MAX_SCAN_DAYS} days; check holiday configuration"
        );
        current
    }

    /// Advance `further` business days past `start`, skipping extension
    /// days at every step. `start` itself counts as the first day of
    /// the period, so a 15-day deadline passes `further = 14`.
    pub fn add_business_days(&self, start: NaiveDate, further: u32) -> NaiveDate {
        let mut current = start;
        for _ in 0..further {
            let next = current
                .checked_add_days(Days::new(1))
                .unwrap_or(current);
            current = self.next_business_day(next, true);
        }
        current
    }
}

/// Plain calendar-day addition, saturating at the date range limit.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days))).unwrap_or(date)
}
