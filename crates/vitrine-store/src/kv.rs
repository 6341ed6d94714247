//! Storage port and typed JSON helpers.

use std::sync::Arc;

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};

/// A durable string key-value store.
///
/// This is the only surface the personalization stores see. Anything that
/// survives across sessions can sit behind it: browser local storage, a file
/// per key, a database row.
pub trait Storage {
    /// Get the raw value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}

/// Automatic JSON serialization on top of any [`Storage`].
///
/// # Example
///
/// ```rust,ignore
/// let storage = MemoryStorage::new();
/// storage.set_json("vitrine:favorites", &entries)?;
/// let entries: Option<Vec<FavoriteEntry>> = storage.get_json("vitrine:favorites")?;
/// ```
pub trait StorageExt: Storage {
    /// Get and deserialize a value.
    ///
    /// A present but malformed value is reported as
    /// [`StorageError::Serialize`].
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and store a value.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust
/// let key = vitrine_store::storage_key!("vitrine", "favorites");
/// assert_eq!(key, "vitrine:favorites");
/// ```
#[macro_export]
macro_rules! storage_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        count: u32,
    }

    #[test]
    fn test_storage_key_macro() {
        assert_eq!(storage_key!("vitrine", "compare"), "vitrine:compare");
        assert_eq!(storage_key!("vitrine", "user", 42), "vitrine:user:42");
    }

    #[test]
    fn test_json_roundtrip_through_port() {
        let storage = MemoryStorage::new();
        let entries = vec![Entry { id: "a".into(), count: 2 }];

        storage.set_json("k", &entries).unwrap();
        let loaded: Option<Vec<Entry>> = storage.get_json("k").unwrap();

        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_get_json_missing_key() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<Entry>> = storage.get_json("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_json_malformed_value() {
        let storage = MemoryStorage::new();
        storage.set("k", "{not json").unwrap();

        let result: Result<Option<Vec<Entry>>, _> = storage.get_json("k");
        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_blanket_impls() {
        let storage = Arc::new(MemoryStorage::new());
        let by_ref: &MemoryStorage = &storage;

        storage.set("k", "1").unwrap();
        assert_eq!(by_ref.get("k").unwrap().as_deref(), Some("1"));

        let boxed: Box<dyn Storage> = Box::new(storage.as_ref().clone());
        boxed.delete("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
    }
}
