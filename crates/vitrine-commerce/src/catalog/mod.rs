//! Product catalog module.
//!
//! Contains the read-only product record the engine consumes and the port to
//! the product service that supplies it.

mod product;
mod provider;

pub use product::{Price, Product, StockStatus, VariantOption, LOW_STOCK_THRESHOLD};
pub use provider::{CatalogProvider, InMemoryCatalog, ProductFilter};
