//! Effective-dated fee table resolution.

use chrono::NaiveDate;
use shared_types::{AppealType, RateEntry, RateTables};

/// Fee value in force on a given date, with the entry's effective-from
/// date kept for audit/display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedRate {
    pub value: f64,
    pub since: Option<NaiveDate>,
}

/// One fee table, pre-sorted ascending by effective-from date.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// Tables are append-only and stored unordered; a stable sort keeps
    /// the later-inserted entry last among equal effective dates, which
    /// is the entry that wins resolution ties.
    pub fn new(entries: &[RateEntry]) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_by_key(|entry| entry.start);
        Self { entries }
    }

    /// Latest entry whose effective-from date is on or before `on`.
    /// No date or no qualifying entry means the fee is zero.
    pub fn resolve(&self, on: Option<NaiveDate>) -> ResolvedRate {
        let Some(on) = on else {
            return ResolvedRate::default();
        };
        let mut chosen = None;
        for entry in &self.entries {
            if entry.start <= on {
                chosen = Some(entry);
            } else {
                break;
            }
        }
        chosen.map_or(ResolvedRate::default(), |entry| ResolvedRate {
            value: entry.value,
            since: Some(entry.start),
        })
    }
}

/// The three fee tables ready for resolution.
#[derive(Debug, Clone, Default)]
pub struct RateBook {
    pub stj: RateTable,
    pub stf: RateTable,
    pub funjus: RateTable,
}

impl RateBook {
    pub fn new(tables: &RateTables) -> Self {
        Self {
            stj: RateTable::new(&tables.stj),
            stf: RateTable::new(&tables.stf),
            funjus: RateTable::new(&tables.funjus),
        }
    }

    /// Superior-court fee for the declared appeal type. An unset type
    /// selects neither table and owes nothing.
    pub fn superior(&self, appeal_type: AppealType, on: Option<NaiveDate>) -> ResolvedRate {
        match appeal_type {
            AppealType::Special => self.stj.resolve(on),
            AppealType::Extraordinary => self.stf.resolve(on),
            AppealType::Unset => ResolvedRate::default(),
        }
    }

    /// Display label for the superior court the fee belongs to.
    pub fn court_label(appeal_type: AppealType) -> &'static str {
        match appeal_type {
            AppealType::Special => "STJ",
            AppealType::Extraordinary => "STF",
            AppealType::Unset => "STJ/STF",
        }
    }
}
