//! Deadline and eligibility derivation for appeal triage.
//!
//! Everything is a pure recomputation over a [`CaseSnapshot`]: the
//! business-day calendar, the effective-dated fee tables, the
//! timeliness verdict, the conclusion strings and the required-field
//! set. No stage mutates the snapshot or caches across calls.

pub mod calendar;
pub mod config;
pub mod currency;
pub mod deadline;
pub mod derivation;
pub mod rates;
pub mod validator;

use std::collections::BTreeSet;

use shared_types::{CaseSnapshot, EngineConfig, FieldId, Outputs};

use calendar::CourtCalendar;
use rates::RateBook;

/// Full evaluation of one snapshot: derived outputs plus the fields
/// still required before the triage can be considered complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub outputs: Outputs,
    pub missing_fields: BTreeSet<FieldId>,
}

/// Evaluate a snapshot against an explicit config.
pub fn evaluate_with(snapshot: &CaseSnapshot, config: &EngineConfig) -> Evaluation {
    let calendar = CourtCalendar::new(&config.calendar);
    let rates = RateBook::new(&config.rates);
    let outputs = derivation::compute_outputs(snapshot, &calendar, &rates);
    let missing_fields = validator::compute_field_errors(snapshot, &outputs);
    Evaluation {
        outputs,
        missing_fields,
    }
}

/// Evaluate a snapshot against the globally loaded `config.toml`.
pub fn evaluate(snapshot: &CaseSnapshot) -> Evaluation {
    config::load_engine_config();
    evaluate_with(snapshot, config::engine_config())
}
