//! Static engine configuration: court calendar sets and fee tables.
//!
//! Loaded once per process from `config.toml` and treated as read-only
//! for the lifetime of the engine. Every section defaults to empty so a
//! missing or partial file yields weekend-only calendars and zero fees
//! rather than an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Holiday and extension-day date sets for the court calendar.
///
/// The two sets are disjoint: a holiday is never countable, while an
/// extension day ("prorrogação") is countable but cannot serve as a
/// deadline boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    #[serde(default)]
    pub extension_days: Vec<NaiveDate>,
}

/// One effective-dated fee value. Tables are append-only and may be
/// stored out of order; the resolver sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Date this value enters into force.
    pub start: NaiveDate,
    pub value: f64,
}

/// The three independent fee tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTables {
    /// Superior-court fee for special appeals (STJ).
    #[serde(default)]
    pub stj: Vec<RateEntry>,
    /// Superior-court fee for extraordinary appeals (STF).
    #[serde(default)]
    pub stf: Vec<RateEntry>,
    /// Ancillary court-fund fee (FUNJUS).
    #[serde(default)]
    pub funjus: Vec<RateEntry>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub rates: RateTables,
}
