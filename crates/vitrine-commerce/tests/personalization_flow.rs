//! End-to-end flows across sessions, backed by files on disk.

use vitrine_commerce::prelude::*;
use vitrine_store::{FileStorage, Storage};

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_json_str(
        r#"[
        {
            "id": "MLA100",
            "title": "Samsung Galaxy S24",
            "price": { "amount": 1000, "currency": "ARS" },
            "images": ["s24-front.jpg", "s24-back.jpg"],
            "variants": {
                "storage": [
                    { "name": "128 GB", "value": "128gb", "priceModifier": -50000 },
                    { "name": "256 GB", "value": "256gb", "priceModifier": 0 }
                ],
                "color": [
                    { "name": "Negro", "value": "black", "available": false, "image": "s24-black.jpg" },
                    { "name": "Violeta", "value": "violet", "image": "s24-violet.jpg" }
                ]
            },
            "brand": "Samsung",
            "category": "Celulares",
            "subcategory": "Smartphones",
            "stock": 12
        },
        { "id": "MLA101", "title": "Galaxy A55", "price": { "amount": 700, "currency": "ARS" },
          "brand": "Samsung", "category": "Celulares", "subcategory": "Smartphones", "stock": 3 },
        { "id": "MLA102", "title": "Galaxy Tab S9", "price": { "amount": 900, "currency": "ARS" },
          "brand": "Samsung", "category": "Tablets", "subcategory": "Android" },
        { "id": "MLA103", "title": "iPhone 15", "price": { "amount": 1500, "currency": "ARS" },
          "brand": "Apple", "category": "Celulares", "subcategory": "Smartphones", "stock": 8 },
        { "id": "MLA104", "title": "Moto G84", "price": { "amount": 400, "currency": "ARS" },
          "brand": "Motorola", "category": "Celulares", "subcategory": "Smartphones" },
        { "id": "MLA105", "title": "Smart TV", "price": { "amount": 2000, "currency": "ARS" },
          "brand": "LG", "category": "Televisores", "subcategory": "LED" }
    ]"#,
    )
    .unwrap()
}

#[test]
fn variant_selection_scenario() {
    let catalog = catalog();
    let product = catalog.get_product(&"MLA100".into()).unwrap();
    let mut selector = VariantSelector::new(&product);

    assert_eq!(selector.current_price().amount, -49_000);
    assert_eq!(selector.current_image(), "s24-black.jpg");
    assert!(!selector.is_selection_available());

    selector.select_option("storage", "256gb");
    selector.select_option("color", "violet");
    assert_eq!(selector.current_price().amount, 1000);
    assert_eq!(selector.current_image(), "s24-violet.jpg");
    assert!(selector.is_selection_available());
}

#[test]
fn state_survives_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = PersonalizationConfig::default();
    let catalog = catalog();
    let product = catalog.get_product(&"MLA100".into()).unwrap();

    {
        let storage = FileStorage::open(dir.path()).unwrap();
        let mut favorites = FavoritesStore::load(storage.clone(), &config.storage.favorites_key);
        let mut compare = CompareSet::load(storage, &config.storage.compare_key);

        let mut actions =
            ProductActions::new(&product, &mut favorites, &mut compare, &config.notices);
        assert!(actions.add_to_favorites());
        actions.add_to_compare().unwrap();
    }

    let storage = FileStorage::open(dir.path()).unwrap();
    let favorites = FavoritesStore::load(storage.clone(), &config.storage.favorites_key);
    let compare = CompareSet::load(storage, &config.storage.compare_key);

    assert!(favorites.error().is_none());
    assert!(favorites.is_favorite(&product.id));
    assert_eq!(compare.products(), &[product.clone()]);

    let resolved = favorites.resolve(&catalog);
    assert_eq!(resolved, vec![product]);
}

#[test]
fn compare_capacity_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    let catalog = catalog();
    let mut compare = CompareSet::load(storage.clone(), "vitrine:compare");

    for id in ["MLA100", "MLA101", "MLA103"] {
        compare.add(catalog.get_product(&id.into()).unwrap()).unwrap();
    }
    assert_eq!(compare.len(), 3);
    assert!(!compare.can_add_more());

    let err = compare
        .add(catalog.get_product(&"MLA104".into()).unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), "Solo puedes comparar hasta 3 productos");
    assert_eq!(compare.len(), 3);

    compare.remove(&"MLA101".into());
    assert!(compare.error().is_none());
    compare
        .add(catalog.get_product(&"MLA104".into()).unwrap())
        .unwrap();

    let reloaded = CompareSet::load(storage, "vitrine:compare");
    let ids: Vec<_> = reloaded.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["MLA100", "MLA103", "MLA104"]);
}

#[test]
fn corrupt_files_reset_without_crashing() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    storage.set("vitrine:favorites", "[{\"id\": \"MLA1\", \"addedAt\": 42}]").unwrap();

    let mut favorites = FavoritesStore::load(storage.clone(), "vitrine:favorites");
    assert!(favorites.is_empty());
    assert!(matches!(favorites.error(), Some(StoreError::Load { .. })));

    favorites.add("MLA2");
    let reloaded = FavoritesStore::load(storage, "vitrine:favorites");
    assert!(reloaded.error().is_none());
    assert!(reloaded.is_favorite(&"MLA2".into()));
}

#[test]
fn related_products_for_page() {
    let catalog = catalog();
    let product = catalog.get_product(&"MLA100".into()).unwrap();

    let related = related_from_provider(&catalog, &product, DEFAULT_RELATED_LIMIT);
    let ids: Vec<_> = related.iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec!["MLA101", "MLA102", "MLA103", "MLA104"]);
}
