//! Timeliness ("tempestividade") verdict for a filed appeal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Verdict on whether the appeal met its filing deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimelinessStatus {
    #[serde(rename = "tempestivo")]
    OnTime,
    #[serde(rename = "intempestivo")]
    Late,
    /// Required dates are missing; no verdict can be derived yet.
    #[default]
    #[serde(rename = "pendente")]
    Pending,
}

/// Unit the deadline length is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    #[serde(rename = "úteis")]
    BusinessDays,
    #[serde(rename = "corridos")]
    CalendarDays,
}

impl PeriodUnit {
    /// Display label as shown to the analyst ("úteis" / "corridos").
    pub fn label(self) -> &'static str {
        match self {
            PeriodUnit::BusinessDays => "úteis",
            PeriodUnit::CalendarDays => "corridos",
        }
    }
}

/// Result of the deadline computation. Recomputed wholesale from the
/// snapshot on every edit; never mutated in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeliness {
    pub status: TimelinessStatus,
    /// Date the party is deemed notified.
    pub notification_date: Option<NaiveDate>,
    /// First day of the filing window (counts as day 1).
    pub term_start: Option<NaiveDate>,
    /// Last day the appeal could be filed on time.
    pub due_date: Option<NaiveDate>,
    /// Deadline length, for display alongside `period_unit`.
    pub period_days: Option<u32>,
    pub period_unit: Option<PeriodUnit>,
    /// Human guidance when the verdict is pending.
    pub message: Option<String>,
}

impl Timeliness {
    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            status: TimelinessStatus::Pending,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == TimelinessStatus::Pending
    }
}
