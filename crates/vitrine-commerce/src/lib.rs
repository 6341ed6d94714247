//! Product personalization engine for the Vitrine storefront.
//!
//! The product page renders what this crate derives:
//!
//! - **Variants**: per-axis selection, derived price and image
//! - **Favorites**: durable set of bookmarked products
//! - **Compare**: durable comparison set of at most three products
//! - **Related**: affinity ranking of catalog products
//! - **Actions**: the per-product facade wiring the above together
//!
//! Products come from a [`CatalogProvider`]; favorites and comparison state
//! persist through any [`vitrine_store::Storage`].
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//! use vitrine_store::MemoryStorage;
//!
//! let config = PersonalizationConfig::default();
//! let storage = MemoryStorage::new();
//! let mut favorites = FavoritesStore::load(storage.clone(), &config.storage.favorites_key);
//! let mut compare = CompareSet::load(storage, &config.storage.compare_key);
//!
//! let mut selector = VariantSelector::new(&product);
//! selector.select_option("storage", "256gb");
//! println!("Price: {}", selector.current_price());
//!
//! let mut actions = ProductActions::new(&product, &mut favorites, &mut compare, &config.notices);
//! actions.add_to_favorites();
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod actions;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod favorites;
pub mod related;
pub mod variants;

pub use error::{CommerceError, StoreError};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, StoreError};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogProvider, InMemoryCatalog, Price, Product, ProductFilter, StockStatus,
        VariantOption,
    };

    // Personalization
    pub use crate::actions::{Notice, ProductActions, ShareError, ShareOutcome, SharePort};
    pub use crate::compare::{
        CompareSet, ComparisonRow, ComparisonTable, DEFAULT_CAPACITY_MESSAGE, MAX_COMPARE_ITEMS,
    };
    pub use crate::config::{
        AxisRoles, CompareConfig, NoticeConfig, PersonalizationConfig, RelatedConfig, StorageKeys,
    };
    pub use crate::favorites::{FavoriteEntry, FavoritesStore};
    pub use crate::related::{rank_related, related_from_provider, DEFAULT_RELATED_LIMIT};
    pub use crate::variants::{SelectedVariants, VariantSelector};
}
