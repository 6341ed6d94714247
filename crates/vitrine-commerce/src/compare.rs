//! Comparison set: up to three full product records shown side by side.

use std::collections::BTreeSet;

use serde::Serialize;
use vitrine_store::{Storage, StorageExt};

use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::ProductId;

/// Maximum number of products in the comparison set.
pub const MAX_COMPARE_ITEMS: usize = 3;

/// Default capacity rejection message.
pub const DEFAULT_CAPACITY_MESSAGE: &str = "Solo puedes comparar hasta 3 productos";

/// Durable, bounded comparison set.
///
/// Same persistence contract as the favorites store: load once, write the
/// full collection after each mutation, record failures without rolling back.
#[derive(Debug)]
pub struct CompareSet<S: Storage> {
    storage: S,
    key: String,
    capacity_message: String,
    products: Vec<Product>,
    error: Option<StoreError>,
}

impl<S: Storage> CompareSet<S> {
    /// Load the set stored under `key` with the default capacity message.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        Self::load_with_message(storage, key, DEFAULT_CAPACITY_MESSAGE)
    }

    /// Load the set stored under `key`.
    ///
    /// A stored list longer than the bound or holding duplicate ids is cut
    /// back to its first distinct entries.
    pub fn load_with_message(
        storage: S,
        key: impl Into<String>,
        capacity_message: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let (stored, error) = match storage.get_json::<Vec<Product>>(&key) {
            Ok(products) => (products.unwrap_or_default(), None),
            Err(e) => {
                tracing::warn!(%key, error = %e, "discarding unreadable comparison set");
                let error = StoreError::Load {
                    key: key.clone(),
                    reason: e.to_string(),
                };
                (Vec::new(), Some(error))
            }
        };

        let mut products: Vec<Product> = Vec::with_capacity(MAX_COMPARE_ITEMS);
        for product in stored {
            if products.len() == MAX_COMPARE_ITEMS {
                break;
            }
            if !products.iter().any(|p| p.id == product.id) {
                products.push(product);
            }
        }
        tracing::debug!(%key, count = products.len(), "comparison set loaded");

        Self {
            storage,
            key,
            capacity_message: capacity_message.into(),
            products,
            error,
        }
    }

    /// Add a product.
    ///
    /// Already present: no-op, `Ok`. Full: the set is left untouched and the
    /// capacity error is recorded and returned.
    pub fn add(&mut self, product: Product) -> Result<(), StoreError> {
        if self.is_in_compare(&product.id) {
            return Ok(());
        }
        if !self.can_add_more() {
            tracing::info!(product_id = %product.id, limit = MAX_COMPARE_ITEMS, "comparison set full");
            let error = StoreError::CompareLimit {
                limit: MAX_COMPARE_ITEMS,
                message: self.capacity_message.clone(),
            };
            self.error = Some(error.clone());
            return Err(error);
        }

        tracing::debug!(product_id = %product.id, "added to comparison");
        self.products.push(product);
        if self.error.as_ref().is_some_and(StoreError::is_capacity) {
            self.error = None;
        }
        self.persist();
        Ok(())
    }

    /// Remove a product. Always clears a capacity error.
    pub fn remove(&mut self, id: &ProductId) {
        if self.error.as_ref().is_some_and(StoreError::is_capacity) {
            self.error = None;
        }
        let len_before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() < len_before {
            tracing::debug!(product_id = %id, "removed from comparison");
            self.persist();
        }
    }

    /// Empty the set and forget any error.
    pub fn clear(&mut self) {
        self.products.clear();
        self.error = None;
        self.persist();
    }

    /// Whether another distinct product fits.
    pub fn can_add_more(&self) -> bool {
        self.products.len() < MAX_COMPARE_ITEMS
    }

    /// Check whether a product is in the set.
    pub fn is_in_compare(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    /// Products in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Last capacity, load or save error, if any.
    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    /// Forget the last error without touching the set.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Storage key this set persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Side-by-side table for the comparison view.
    pub fn comparison_table(&self) -> ComparisonTable {
        ComparisonTable::build(&self.products)
    }

    fn persist(&mut self) {
        match self.storage.set_json(&self.key, &self.products) {
            Ok(()) => {
                if matches!(self.error, Some(StoreError::Save { .. })) {
                    self.error = None;
                }
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to save comparison set");
                self.error = Some(StoreError::Save {
                    key: self.key.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Placeholder for a specification a product doesn't list.
pub const MISSING_CELL: &str = "-";

/// One attribute across all compared products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

/// Attribute-by-product grid rendered by the comparison view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Product ids, one per column.
    pub columns: Vec<ProductId>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Fixed rows (price, brand, category, stock) followed by the sorted union
    /// of specification names.
    pub fn build(products: &[Product]) -> Self {
        fn row(label: &str, products: &[Product], cell: impl Fn(&Product) -> String) -> ComparisonRow {
            ComparisonRow {
                label: label.to_string(),
                values: products.iter().map(cell).collect(),
            }
        }

        let mut rows = vec![
            row("Precio", products, |p| p.price.base().display()),
            row("Marca", products, |p| p.brand.clone()),
            row("Categoría", products, |p| p.category.clone()),
            row("Stock", products, |p| p.stock_status().message().to_string()),
        ];

        let spec_names: BTreeSet<&str> = products
            .iter()
            .flat_map(|p| p.specifications.keys().map(String::as_str))
            .collect();
        for name in spec_names {
            rows.push(row(name, products, |p| {
                p.specifications
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| MISSING_CELL.to_string())
            }));
        }

        Self {
            columns: products.iter().map(|p| p.id.clone()).collect(),
            rows,
        }
    }

    /// Find a row by label.
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}
