//! Derived conclusions for one evaluation of a case snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeliness::Timeliness;

/// Full derivation bundle: timeliness verdict, resolved fee amounts and
/// the nine conclusion strings, plus the ordered procedural notes.
///
/// Conclusion strings are surfaced verbatim in summaries and copied
/// into legal drafts — their wording is part of the contract.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outputs {
    pub timeliness: Timeliness,
    /// Superior-court fee due on the filing date (0 when no table applies).
    pub superior_fee_due: f64,
    /// FUNJUS fee due on the filing date.
    pub funjus_fee_due: f64,
    /// "STJ", "STF" or "STJ/STF" when the appeal type is unset.
    pub court_label: String,
    /// Effective-from date of the selected superior-court rate, for audit.
    pub superior_rate_since: Option<NaiveDate>,
    pub funjus_rate_since: Option<NaiveDate>,
    pub counter_arguments: String,
    pub prosecutor: String,
    /// Superior-court fee (GRU) conclusion.
    pub gru: String,
    /// Ancillary fee (FUNJUS) conclusion.
    pub funjus: String,
    pub representation: String,
    pub exclusivity: String,
    pub suspensive_effect: String,
    pub partial_payment: String,
    /// Ordered free-text procedural notes. Order and duplicates are
    /// preserved; summaries and exports print them in this order.
    pub notes: Vec<String>,
}
