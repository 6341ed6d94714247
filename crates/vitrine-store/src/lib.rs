//! Durable key-value storage port for Vitrine.
//!
//! The personalization stores (favorites, comparison set) persist their whole
//! collection under a single key after every mutation. This crate defines the
//! port they write through and two adapters:
//!
//! - [`MemoryStorage`]: shared in-process map, used in tests and embedding
//! - [`FileStorage`]: one JSON file per key in a data directory
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_store::{FileStorage, StorageExt, storage_key};
//!
//! let storage = FileStorage::open(".vitrine")?;
//! let key = storage_key!("vitrine", "favorites");
//!
//! // Store a value
//! storage.set_json(&key, &favorites)?;
//!
//! // Retrieve a value
//! let favorites: Option<Vec<FavoriteEntry>> = storage.get_json(&key)?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use kv::{Storage, StorageExt};
pub use memory::MemoryStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStorage, MemoryStorage, Storage, StorageError, StorageExt};
}
