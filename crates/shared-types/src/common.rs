use serde::{Deserialize, Serialize};

/// Tri-state answer used by most boolean questions on the triage form.
///
/// The legacy storage payload records these as `"sim"` / `"não"` / `""`;
/// the string conversions keep that shape, and any unrecognized literal
/// deserializes to `Unset` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum YesNo {
    Yes,
    No,
    #[default]
    Unset,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "sim",
            YesNo::No => "não",
            YesNo::Unset => "",
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }

    pub fn is_no(self) -> bool {
        self == YesNo::No
    }

    pub fn is_unset(self) -> bool {
        self == YesNo::Unset
    }
}

impl From<YesNo> for String {
    fn from(value: YesNo) -> Self {
        value.as_str().to_string()
    }
}

impl From<String> for YesNo {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sim" => YesNo::Yes,
            "não" => YesNo::No,
            _ => YesNo::Unset,
        }
    }
}

/// Whether a case number printed on a payment guide matches the docket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CaseNumberCheck {
    Matches,
    Diverges,
    #[default]
    Unset,
}

impl CaseNumberCheck {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseNumberCheck::Matches => "confere",
            CaseNumberCheck::Diverges => "diverge",
            CaseNumberCheck::Unset => "",
        }
    }
}

impl From<CaseNumberCheck> for String {
    fn from(value: CaseNumberCheck) -> Self {
        value.as_str().to_string()
    }
}

impl From<String> for CaseNumberCheck {
    fn from(value: String) -> Self {
        match value.as_str() {
            "confere" => CaseNumberCheck::Matches,
            "diverge" => CaseNumberCheck::Diverges,
            _ => CaseNumberCheck::Unset,
        }
    }
}

/// Serde helper for legacy date fields stored as `"YYYY-MM-DD"` or `""`.
///
/// Empty or malformed strings deserialize to `None` (the engine treats
/// them as "not yet entered", never as an error), and `None` serializes
/// back to `""` so stored payloads keep their original shape.
pub mod legacy_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
    }
}
