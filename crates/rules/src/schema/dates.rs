//! Serde helpers for local calendar dates stored as ISO strings.
//!
//! Dates are written as `YYYY-MM-DD`. Older saves may hold a full ISO
//! datetime (`2024-01-01T00:00:00.000Z`); only its date part is kept.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
        return Some(date);
    }
    // Datetime forms: take the wall-clock date as written.
    match raw.as_bytes().get(10) {
        Some(b'T') | Some(b' ') => NaiveDate::parse_from_str(&raw[..10], FORMAT).ok(),
        _ => None,
    }
}

pub(crate) fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format(FORMAT).to_string())
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO date '{}'", raw)))
}
