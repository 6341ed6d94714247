//! Commerce error types.

use thiserror::Error;

/// Errors from the catalog provider and configuration.
///
/// The personalization engine never lets these reach presentation code: a
/// failed fetch degrades to "no data".
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product service failed.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] vitrine_store::StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while reading catalog data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

/// Recoverable error recorded on a personalization store.
///
/// Stores keep the last one so presentation can decide whether to surface it.
/// None of them unwind: every variant has a defined fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Stored collection was unreadable; the store started empty.
    #[error("Failed to load {key}: {reason}")]
    Load { key: String, reason: String },

    /// Collection could not be written back; memory state was kept.
    #[error("Failed to save {key}: {reason}")]
    Save { key: String, reason: String },

    /// The comparison set is full.
    #[error("{message}")]
    CompareLimit { limit: usize, message: String },
}

impl StoreError {
    /// Check if this is a capacity rejection.
    pub fn is_capacity(&self) -> bool {
        matches!(self, StoreError::CompareLimit { .. })
    }
}
