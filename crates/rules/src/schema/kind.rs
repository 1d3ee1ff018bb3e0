//! Recurrence type and calendar granularity enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// How a recurring task repeats. The rule's `anchor` is interpreted per type.
///
/// Persisted as a lowercase string. Values this version does not know about
/// load as [`RecurrenceType::Unknown`] (keeping the original text so it is
/// written back untouched) and never match any date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecurrenceType {
    /// Anchor is the ISO weekday, 1 = Monday .. 7 = Sunday.
    Weekly,
    /// Anchor is the day of the month, 1..=31.
    Monthly,
    /// Anchor is the 1-based ordinal day of the year, 1..=366.
    Yearly,
    Unknown(String),
}

impl RecurrenceType {
    /// Valid anchor values for this type, or `None` for unknown types.
    pub fn anchor_domain(&self) -> Option<RangeInclusive<i32>> {
        match self {
            RecurrenceType::Weekly => Some(1..=7),
            RecurrenceType::Monthly => Some(1..=31),
            RecurrenceType::Yearly => Some(1..=366),
            RecurrenceType::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Yearly => "yearly",
            RecurrenceType::Unknown(raw) => raw,
        }
    }
}

impl From<String> for RecurrenceType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "weekly" => RecurrenceType::Weekly,
            "monthly" => RecurrenceType::Monthly,
            "yearly" => RecurrenceType::Yearly,
            _ => RecurrenceType::Unknown(s),
        }
    }
}

impl From<RecurrenceType> for String {
    fn from(kind: RecurrenceType) -> Self {
        match kind {
            RecurrenceType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar zoom level a date is rendered at. Affects display filtering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    Month,
    Week,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Year => write!(f, "year"),
            Granularity::Month => write!(f, "month"),
            Granularity::Week => write!(f, "week"),
        }
    }
}
