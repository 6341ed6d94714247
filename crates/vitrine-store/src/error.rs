//! Storage error types.

use thiserror::Error;

/// Errors that can occur when talking to durable storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to read a key.
    #[error("Failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    /// Failed to write a key (quota, permissions, disk).
    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    /// Stored value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The store rejects writes.
    #[error("Store is read-only, refused write to {0}")]
    ReadOnly(String),
}
