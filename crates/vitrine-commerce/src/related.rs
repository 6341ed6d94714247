//! Related products ranking.
//!
//! A pure function of its inputs: same current product, catalog and limit
//! always give the same list.

use crate::catalog::{CatalogProvider, Product, ProductFilter};

/// Number of related products shown when the caller doesn't say.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Rank catalog products by affinity with `current`.
///
/// Candidates must share brand, category or subcategory with `current` and
/// never include `current` itself. Same brand ranks first; among brand ties
/// same category ranks first; everything else keeps catalog order. `current`
/// doesn't have to be part of `catalog`.
pub fn rank_related(current: &Product, catalog: &[Product], limit: usize) -> Vec<Product> {
    let mut candidates: Vec<&Product> = catalog
        .iter()
        .filter(|p| p.id != current.id)
        .filter(|p| {
            p.brand == current.brand
                || p.category == current.category
                || p.subcategory == current.subcategory
        })
        .collect();

    // `sort_by_key` is stable; `false` sorts before `true`.
    candidates.sort_by_key(|p| (p.brand != current.brand, p.category != current.category));

    candidates.into_iter().take(limit).cloned().collect()
}

/// Fetch the catalog from the product service and rank it.
///
/// Any provider failure yields an empty list.
pub fn related_from_provider<P: CatalogProvider + ?Sized>(
    provider: &P,
    current: &Product,
    limit: usize,
) -> Vec<Product> {
    match provider.get_products(&ProductFilter::all()) {
        Ok(catalog) => rank_related(current, &catalog, limit),
        Err(e) => {
            tracing::warn!(product_id = %current.id, error = %e, "related products unavailable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCatalog, Price};
    use crate::error::CommerceError;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn product(id: &str, brand: &str, category: &str, subcategory: &str) -> Product {
        Product::new(id, id, Price::new(100, Currency::ARS))
            .with_brand(brand)
            .with_category(category, subcategory)
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_precedence_brand_then_category() {
        let current = product("cur", "X", "P", "s0");
        let catalog = vec![
            product("C", "Y", "P", "s3"),
            product("B", "X", "Q", "s2"),
            product("A", "X", "P", "s1"),
        ];

        assert_eq!(ids(&rank_related(&current, &catalog, 4)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_subcategory_only_matches_rank_last() {
        let current = product("cur", "X", "P", "S");
        let catalog = vec![
            product("sub", "Z", "R", "S"),
            product("cat", "Z", "P", "T"),
            product("none", "Z", "R", "T"),
        ];

        assert_eq!(ids(&rank_related(&current, &catalog, 4)), vec!["cat", "sub"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let current = product("cur", "X", "P", "S");
        let catalog = vec![
            product("1", "X", "P", "S"),
            product("2", "Y", "Q", "S"),
            product("3", "X", "P", "T"),
            product("4", "Y", "R", "S"),
        ];

        assert_eq!(ids(&rank_related(&current, &catalog, 10)), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_excludes_current_product() {
        let current = product("cur", "X", "P", "S");
        let catalog = vec![current.clone(), product("other", "X", "P", "S")];

        let related = rank_related(&current, &catalog, 4);
        assert_eq!(ids(&related), vec!["other"]);
        assert!(related.iter().all(|p| p.id != ProductId::new("cur")));
    }

    #[test]
    fn test_limit_and_edges() {
        let current = product("cur", "X", "P", "S");
        assert!(rank_related(&current, &[], 4).is_empty());

        let catalog: Vec<_> = (0..6)
            .map(|i| product(&i.to_string(), "X", "P", "S"))
            .collect();
        assert_eq!(rank_related(&current, &catalog, DEFAULT_RELATED_LIMIT).len(), 4);
        assert_eq!(rank_related(&current, &catalog, 100).len(), 6);
        assert!(rank_related(&current, &catalog, 0).is_empty());
    }

    #[test]
    fn test_is_deterministic() {
        let current = product("cur", "X", "P", "S");
        let catalog = vec![
            product("a", "Y", "P", "S"),
            product("b", "X", "Q", "T"),
            product("c", "X", "P", "S"),
        ];

        assert_eq!(
            rank_related(&current, &catalog, 4),
            rank_related(&current, &catalog, 4)
        );
    }

    struct DownCatalog;

    impl CatalogProvider for DownCatalog {
        fn get_product(&self, id: &ProductId) -> Result<Product, CommerceError> {
            Err(CommerceError::ProductNotFound(id.to_string()))
        }

        fn get_products(&self, _filter: &ProductFilter) -> Result<Vec<Product>, CommerceError> {
            Err(CommerceError::CatalogUnavailable("timeout".to_string()))
        }
    }

    #[test]
    fn test_provider_failure_degrades_to_empty() {
        let current = product("cur", "X", "P", "S");
        assert!(related_from_provider(&DownCatalog, &current, 4).is_empty());
    }

    #[test]
    fn test_related_from_provider() {
        let current = product("cur", "X", "P", "S");
        let catalog = InMemoryCatalog::new(vec![
            current.clone(),
            product("a", "Y", "P", "T"),
            product("b", "X", "Q", "T"),
        ]);

        assert_eq!(ids(&related_from_provider(&catalog, &current, 4)), vec!["b", "a"]);
    }
}
