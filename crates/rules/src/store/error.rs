//! Error type for rule and schedule store operations.

use daymark_core::DaymarkError;

use crate::validation::ValidationResult;

/// Errors that can occur while mutating or persisting a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No rule or schedule with this id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The new value failed write-time validation; nothing was stored.
    #[error("Validation error: {}", .0.error_summary())]
    Validation(ValidationResult),

    /// A reorder index points past the end of the list.
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// JSON encoding of the persisted list failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key-value backend failed.
    #[error("Storage backend error: {0}")]
    Backend(#[from] DaymarkError),
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
