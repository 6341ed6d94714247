//! Favorites: a durable set of bookmarked product ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_store::{Storage, StorageExt};

use crate::catalog::{CatalogProvider, Product};
use crate::error::StoreError;
use crate::ids::ProductId;

/// A bookmarked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: ProductId,
    /// When the product was favorited (ISO-8601 on the wire).
    pub added_at: DateTime<Utc>,
}

/// Durable favorites collection.
///
/// Loaded once from storage, written back in full after every mutation. At
/// most one entry per product id; no size bound.
#[derive(Debug)]
pub struct FavoritesStore<S: Storage> {
    storage: S,
    key: String,
    entries: Vec<FavoriteEntry>,
    error: Option<StoreError>,
}

impl<S: Storage> FavoritesStore<S> {
    /// Load the collection stored under `key`.
    ///
    /// Unreadable or malformed data leaves the store empty with a
    /// [`StoreError::Load`] recorded. Duplicate stored ids keep their first entry.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (stored, error) = match storage.get_json::<Vec<FavoriteEntry>>(&key) {
            Ok(entries) => (entries.unwrap_or_default(), None),
            Err(e) => {
                tracing::warn!(%key, error = %e, "discarding unreadable favorites");
                let error = StoreError::Load {
                    key: key.clone(),
                    reason: e.to_string(),
                };
                (Vec::new(), Some(error))
            }
        };

        // First occurrence of each id wins.
        let mut entries: Vec<FavoriteEntry> = Vec::with_capacity(stored.len());
        for entry in stored {
            if !entries.iter().any(|e| e.id == entry.id) {
                entries.push(entry);
            }
        }
        tracing::debug!(%key, count = entries.len(), "favorites loaded");

        Self {
            storage,
            key,
            entries,
            error,
        }
    }

    /// Favorite a product. No-op if already present.
    pub fn add(&mut self, id: impl Into<ProductId>) {
        let id = id.into();
        if self.is_favorite(&id) {
            return;
        }
        tracing::debug!(product_id = %id, "favorite added");
        self.entries.push(FavoriteEntry {
            id,
            added_at: Utc::now(),
        });
        self.persist();
    }

    /// Drop a product from favorites. No-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        if self.entries.len() < len_before {
            tracing::debug!(product_id = %id, "favorite removed");
            self.persist();
        }
    }

    /// Add if absent, remove if present. Returns the new membership.
    pub fn toggle(&mut self, id: impl Into<ProductId>) -> bool {
        let id = id.into();
        if self.is_favorite(&id) {
            self.remove(&id);
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Check whether a product is favorited.
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    /// Remove every favorite.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Favorited ids in the order they were added.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.entries.iter().map(|e| &e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last load or save failure, if any.
    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Storage key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Fetch the favorited products, skipping any the provider can't supply.
    pub fn resolve<P: CatalogProvider + ?Sized>(&self, provider: &P) -> Vec<Product> {
        self.ids()
            .filter_map(|id| match provider.get_product(id) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(product_id = %id, error = %e, "favorite not resolvable");
                    None
                }
            })
            .collect()
    }

    /// Write the whole collection back. Failure is recorded, memory is kept.
    fn persist(&mut self) {
        match self.storage.set_json(&self.key, &self.entries) {
            Ok(()) => {
                if matches!(self.error, Some(StoreError::Save { .. })) {
                    self.error = None;
                }
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to save favorites");
                self.error = Some(StoreError::Save {
                    key: self.key.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
}
