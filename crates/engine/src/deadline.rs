//! Deadline ("tempestividade") computation.
//!
//! Derives the notification date, the start and due dates of the filing
//! window, and the on-time/late verdict from the snapshot's date facts.
//! Returns a pending verdict instead of an error whenever the required
//! dates are missing — the form is evaluated on every keystroke.

use shared_types::{
    CaseSnapshot, DeadlineScheme, PeriodUnit, Timeliness, TimelinessStatus,
};

use crate::calendar::{add_days, CourtCalendar};

/// Calendar days after dispatch at which notification is presumed even
/// without a read event.
const AUTO_NOTIFICATION_DAYS: u32 = 10;

/// Base deadline in business days for ordinary appeals.
const BASE_PERIOD: u32 = 15;
/// Base deadline in calendar days under the minors statute (ECA).
const BASE_PERIOD_ECA: u32 = 10;

/// Compute the timeliness verdict for a snapshot.
pub fn compute_timeliness(snapshot: &CaseSnapshot, calendar: &CourtCalendar) -> Timeliness {
    let (Some(dispatch), Some(filing)) = (snapshot.dispatch_date, snapshot.filing_date) else {
        return Timeliness::pending("Use a calculadora de prazos.");
    };

    // Deadline length and unit. Doubling doubles the length only; the
    // unit always follows the minors-statute flag.
    let (base, unit) = if snapshot.minors_statute.is_yes() {
        (BASE_PERIOD_ECA, PeriodUnit::CalendarDays)
    } else {
        (BASE_PERIOD, PeriodUnit::BusinessDays)
    };
    let period = if snapshot.deadline_scheme == DeadlineScheme::Doubled {
        base * 2
    } else {
        base
    };

    // Notification: presumed at dispatch + 10 calendar days, unless an
    // electronic read happened on or before that date (<=, inclusive).
    // Land on a business day; extension days are fine here.
    let auto = add_days(dispatch, AUTO_NOTIFICATION_DAYS);
    let presumed = match snapshot.effective_read_date() {
        Some(read) if read <= auto => read,
        _ => auto,
    };
    let notification = calendar.next_business_day(presumed, false);

    // Start of the window: the day after notification, adjusted so it
    // can open the count. Calendar-day deadlines only move when the
    // candidate is an extension day.
    let candidate = add_days(notification, 1);
    let start = match unit {
        PeriodUnit::BusinessDays => calendar.next_business_day(candidate, true),
        PeriodUnit::CalendarDays if calendar.is_extension_day(candidate) => {
            calendar.next_business_day(add_days(candidate, 1), true)
        }
        PeriodUnit::CalendarDays => candidate,
    };

    // Due date: the start counts as day 1.
    let mut due = match unit {
        PeriodUnit::BusinessDays => calendar.add_business_days(start, period - 1),
        PeriodUnit::CalendarDays => add_days(start, period - 1),
    };
    // The landing day must be a business day and not an extension day.
    // Calendar-day counting does not filter along the way, so this can
    // move the due date even after the walk above.
    if !calendar.is_business_day(due) || calendar.is_extension_day(due) {
        due = calendar.next_business_day(due, true);
    }

    let status = if filing <= due {
        TimelinessStatus::OnTime
    } else {
        TimelinessStatus::Late
    };

    tracing::debug!(
        %notification,
        start = %start,
        due = %due,
        period,
        ?unit,
        ?status,
        "timeliness computed"
    );

    Timeliness {
        status,
        notification_date: Some(notification),
        term_start: Some(start),
        due_date: Some(due),
        period_days: Some(period),
        period_unit: Some(unit),
        message: None,
    }
}
