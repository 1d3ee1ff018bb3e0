//! Symbolic icon identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbolic icon identifier, e.g. `"briefcase"`.
///
/// Stored as a plain string so data written by a newer icon set still loads;
/// membership in [`Icon::KNOWN`] is checked by validation at write time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    /// The closed icon set offered by the settings screen.
    pub const KNOWN: &'static [&'static str] = &[
        "bed",
        "bell",
        "book",
        "briefcase",
        "cake",
        "calendar",
        "car",
        "check",
        "clock",
        "coffee",
        "dumbbell",
        "gift",
        "heart",
        "home",
        "leaf",
        "moon",
        "music",
        "phone",
        "pill",
        "plane",
        "shopping-cart",
        "star",
        "sun",
        "wallet",
        "zap",
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self("calendar".to_string())
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
