//! Persisted rule and schedule stores.
//!
//! Each store is the single read/write path for its data set: it loads one
//! JSON document from a [`KeyValueStore`](daymark_core::KeyValueStore) key,
//! hands out slices for projection, and writes the whole document back on
//! every change (last writer wins).

mod error;
mod recurrence;
mod schedule;


use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

pub use self::error::{Result, StoreError};
pub use self::recurrence::RecurrenceStore;
pub use self::schedule::ScheduleStore;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Parse a persisted list entry by entry.
///
/// Entries that fail to parse are logged and returned raw, so the next
/// write can carry them through unchanged instead of dropping them.
fn parse_entries<T: DeserializeOwned>(key: &str, entries: Vec<Value>) -> (Vec<T>, Vec<Value>) {
    let mut parsed = Vec::with_capacity(entries.len());
    let mut unparsed = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<T>(entry.clone()) {
            Ok(item) => parsed.push(item),
            Err(e) => {
                warn!(key, index, error = %e, "keeping unreadable entry as-is");
                unparsed.push(entry);
            }
        }
    }
    (parsed, unparsed)
}

/// Serialize `items` followed by the raw entries that could not be parsed.
fn to_document<T: Serialize>(items: &[T], unparsed: &[Value]) -> Result<String> {
    let mut entries = Vec::with_capacity(items.len() + unparsed.len());
    for item in items {
        entries.push(serde_json::to_value(item)?);
    }
    entries.extend(unparsed.iter().cloned());
    Ok(serde_json::to_string(&entries)?)
}
