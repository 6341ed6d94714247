//! Product service port and an in-memory adapter.

use std::path::Path;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Criteria for listing products. Unset fields match everything; set fields
/// are combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductFilter {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    /// Case-insensitive substring of the title.
    pub text: Option<String>,
    /// Only products with stock.
    #[serde(default)]
    pub in_stock_only: bool,
}

impl ProductFilter {
    /// Match every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a brand filter.
    pub fn brand(brand: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            ..Self::default()
        }
    }

    /// Create a category filter.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            text: Some(query.into()),
            ..Self::default()
        }
    }

    /// Restrict to products with stock.
    pub fn in_stock(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Check whether a product satisfies every set criterion.
    pub fn matches(&self, product: &Product) -> bool {
        let eq = |want: &Option<String>, have: &str| want.as_deref().map_or(true, |w| w == have);

        eq(&self.brand, &product.brand)
            && eq(&self.category, &product.category)
            && eq(&self.subcategory, &product.subcategory)
            && self.text.as_deref().map_or(true, |q| {
                product.title.to_lowercase().contains(&q.to_lowercase())
            })
            && (!self.in_stock_only || product.is_in_stock())
    }
}

/// The product service the engine reads from.
///
/// Implementations report failures as `Err`; callers in this crate treat any
/// failure as "no data".
pub trait CatalogProvider {
    /// Get a single product.
    fn get_product(&self, id: &ProductId) -> Result<Product, CommerceError>;

    /// List products matching `filter`, in catalog order.
    fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CommerceError>;
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for &P {
    fn get_product(&self, id: &ProductId) -> Result<Product, CommerceError> {
        (**self).get_product(id)
    }

    fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CommerceError> {
        (**self).get_products(filter)
    }
}

/// Catalog held in memory, typically parsed from a JSON array of products.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Create a catalog from products, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Read a JSON array of products from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn get_product(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CommerceError> {
        Ok(self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
