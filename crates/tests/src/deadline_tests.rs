//! Deadline computation tests. Expected dates are walked by hand
//! against the fixture calendar in `common`.

use crate::common::{d, dated_snapshot, test_calendar};
use engine::deadline::compute_timeliness;
use pretty_assertions::assert_eq;
use shared_types::{CaseSnapshot, DeadlineScheme, PeriodUnit, TimelinessStatus, YesNo};

#[test]
fn missing_dates_yield_pending_verdict() {
    let cal = test_calendar();
    let verdict = compute_timeliness(&CaseSnapshot::default(), &cal);
    assert!(verdict.is_pending());
    assert_eq!(verdict.message.as_deref(), Some("Use a calculadora de prazos."));
    assert_eq!(verdict.due_date, None);
}

#[test]
fn plain_fifteen_business_days_without_read() {
    let cal = test_calendar();
    // Dispatch Mon Apr 1 → auto notification Thu Apr 11. Window opens
    // Fri Apr 12 (day 1) and closes 14 business days later on May 3
    // (May 1 is a holiday).
    let verdict = compute_timeliness(&dated_snapshot(d(2024, 4, 1), d(2024, 5, 3)), &cal);
    assert_eq!(verdict.notification_date, Some(d(2024, 4, 11)));
    assert_eq!(verdict.term_start, Some(d(2024, 4, 12)));
    assert_eq!(verdict.due_date, Some(d(2024, 5, 3)));
    assert_eq!(verdict.period_days, Some(15));
    assert_eq!(verdict.period_unit, Some(PeriodUnit::BusinessDays));
    assert_eq!(verdict.status, TimelinessStatus::OnTime);
}

#[test]
fn filing_after_due_date_is_late() {
    let cal = test_calendar();
    let verdict = compute_timeliness(&dated_snapshot(d(2024, 4, 1), d(2024, 5, 6)), &cal);
    assert_eq!(verdict.due_date, Some(d(2024, 5, 3)));
    assert_eq!(verdict.status, TimelinessStatus::Late);
}

#[test]
fn electronic_read_before_auto_date_wins() {
    let cal = test_calendar();
    let snapshot = CaseSnapshot {
        electronic_read: YesNo::Yes,
        read_date: Some(d(2024, 4, 5)),
        ..dated_snapshot(d(2024, 4, 1), d(2024, 4, 26))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    assert_eq!(verdict.notification_date, Some(d(2024, 4, 5)));
    assert_eq!(verdict.term_start, Some(d(2024, 4, 8)));
    assert_eq!(verdict.due_date, Some(d(2024, 4, 26)));
    assert_eq!(verdict.status, TimelinessStatus::OnTime);
}

#[test]
fn read_exactly_on_auto_date_counts_as_read() {
    let cal = test_calendar();
    let snapshot = CaseSnapshot {
        electronic_read: YesNo::Yes,
        read_date: Some(d(2024, 4, 11)),
        ..dated_snapshot(d(2024, 4, 1), d(2024, 5, 3))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    assert_eq!(verdict.notification_date, Some(d(2024, 4, 11)));
    assert_eq!(verdict.due_date, Some(d(2024, 5, 3)));
}

#[test]
fn read_after_auto_date_is_ignored() {
    let cal = test_calendar();
    let snapshot = CaseSnapshot {
        electronic_read: YesNo::Yes,
        read_date: Some(d(2024, 4, 12)),
        ..dated_snapshot(d(2024, 4, 1), d(2024, 5, 3))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    // Auto notification applies as if no read happened.
    assert_eq!(verdict.notification_date, Some(d(2024, 4, 11)));
    assert_eq!(verdict.due_date, Some(d(2024, 5, 3)));
}

#[test]
fn read_date_requires_electronic_read_flag() {
    let cal = test_calendar();
    let snapshot = CaseSnapshot {
        electronic_read: YesNo::No,
        read_date: Some(d(2024, 4, 5)),
        ..dated_snapshot(d(2024, 4, 1), d(2024, 5, 3))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    assert_eq!(verdict.notification_date, Some(d(2024, 4, 11)));
}

#[test]
fn minors_statute_uses_ten_calendar_days() {
    let cal = test_calendar();
    let snapshot = CaseSnapshot {
        minors_statute: YesNo::Yes,
        ..dated_snapshot(d(2024, 4, 1), d(2024, 4, 22))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    // Start Fri Apr 12 + 9 calendar days = Sun Apr 21, adjusted to the
    // next business day.
    assert_eq!(verdict.term_start, Some(d(2024, 4, 12)));
    assert_eq!(verdict.due_date, Some(d(2024, 4, 22)));
    assert_eq!(verdict.period_days, Some(10));
    assert_eq!(verdict.period_unit, Some(PeriodUnit::CalendarDays));
    assert_eq!(verdict.status, TimelinessStatus::OnTime);
}

#[test]
fn doubled_scheme_doubles_length_only() {
    let cal = test_calendar();
    let snapshot = CaseSnapshot {
        deadline_scheme: DeadlineScheme::Doubled,
        ..dated_snapshot(d(2024, 4, 1), d(2024, 5, 24))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    assert_eq!(verdict.period_days, Some(30));
    assert_eq!(verdict.period_unit, Some(PeriodUnit::BusinessDays));
    assert_eq!(verdict.due_date, Some(d(2024, 5, 24)));
    assert_eq!(verdict.status, TimelinessStatus::OnTime);
}

#[test]
fn doubled_minors_deadline_is_twenty_calendar_days() {
    let cal = test_calendar();
    let snapshot = CaseSnapshot {
        minors_statute: YesNo::Yes,
        deadline_scheme: DeadlineScheme::Doubled,
        ..dated_snapshot(d(2024, 4, 1), d(2024, 5, 2))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    assert_eq!(verdict.period_days, Some(20));
    assert_eq!(verdict.period_unit, Some(PeriodUnit::CalendarDays));
    // Start Apr 12 + 19 calendar days lands on the May 1 holiday and
    // rolls to May 2.
    assert_eq!(verdict.due_date, Some(d(2024, 5, 2)));
    assert_eq!(verdict.status, TimelinessStatus::OnTime);
}

#[test]
fn calendar_due_date_on_extension_day_rolls_forward() {
    let cal = test_calendar();
    // Dispatch Sat May 11 → auto Tue May 21 → start Wed May 22. Ten
    // calendar days end on Fri May 31, an extension day, so the due
    // date rolls to Mon Jun 3.
    let snapshot = CaseSnapshot {
        minors_statute: YesNo::Yes,
        ..dated_snapshot(d(2024, 5, 11), d(2024, 6, 3))
    };
    let verdict = compute_timeliness(&snapshot, &cal);
    assert_eq!(verdict.term_start, Some(d(2024, 5, 22)));
    assert_eq!(verdict.due_date, Some(d(2024, 6, 3)));
    assert_eq!(verdict.status, TimelinessStatus::OnTime);
}

#[test]
fn window_opening_in_recess_starts_after_it() {
    let cal = test_calendar();
    // Dispatch Mon Dec 9 → auto Thu Dec 19. The day after falls into
    // the year-end recess; the window opens on the first full business
    // day, Tue Jan 7, and runs 15 business days to Mon Jan 27.
    let verdict = compute_timeliness(&dated_snapshot(d(2024, 12, 9), d(2025, 1, 27)), &cal);
    assert_eq!(verdict.notification_date, Some(d(2024, 12, 19)));
    assert_eq!(verdict.term_start, Some(d(2025, 1, 7)));
    assert_eq!(verdict.due_date, Some(d(2025, 1, 27)));
    assert_eq!(verdict.status, TimelinessStatus::OnTime);
}
