//! Per-product action surface consumed by the product page.

use thiserror::Error;
use vitrine_store::Storage;

use crate::catalog::Product;
use crate::compare::CompareSet;
use crate::config::NoticeConfig;
use crate::error::StoreError;
use crate::favorites::FavoritesStore;

/// Message surfaced to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Buy and cart are not part of this storefront.
    NotImplemented(String),
    /// The share fallback copied the page link.
    LinkCopied(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::NotImplemented(m) | Notice::LinkCopied(m) => m,
        }
    }
}

/// Errors from the platform share capabilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The platform has no native share sheet.
    #[error("Native share is not available")]
    Unavailable,

    /// The share sheet was opened but failed.
    #[error("Share failed: {0}")]
    Failed(String),

    /// Writing to the clipboard failed.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Platform share capabilities (native share sheet and clipboard).
pub trait SharePort {
    /// Open the native share sheet. `Err(ShareError::Unavailable)` when the
    /// platform has none.
    fn share(&self, title: &str, url: &str) -> Result<(), ShareError>;

    /// Put text on the clipboard.
    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}

/// Result of [`ProductActions::share`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet handled it.
    Shared,
    /// Fallback: link copied to the clipboard.
    Copied { url: String, notice: Notice },
    /// Neither path worked.
    Failed(ShareError),
}

/// Actions and derived flags for one product page.
///
/// The flags are snapshots taken at construction; build a new facade after
/// acting to read fresh values.
pub struct ProductActions<'a, F: Storage, C: Storage> {
    product: &'a Product,
    favorites: &'a mut FavoritesStore<F>,
    compare: &'a mut CompareSet<C>,
    notices: &'a NoticeConfig,
    pub is_favorite: bool,
    pub is_in_compare: bool,
    pub can_add_to_compare: bool,
}

impl<'a, F: Storage, C: Storage> ProductActions<'a, F, C> {
    pub fn new(
        product: &'a Product,
        favorites: &'a mut FavoritesStore<F>,
        compare: &'a mut CompareSet<C>,
        notices: &'a NoticeConfig,
    ) -> Self {
        let is_favorite = favorites.is_favorite(&product.id);
        let is_in_compare = compare.is_in_compare(&product.id);
        let can_add_to_compare = compare.can_add_more();

        Self {
            product,
            favorites,
            compare,
            notices,
            is_favorite,
            is_in_compare,
            can_add_to_compare,
        }
    }

    /// Checkout is out of scope; always returns the not-implemented notice.
    pub fn buy_now(&self) -> Notice {
        tracing::debug!(product_id = %self.product.id, "buy now requested");
        Notice::NotImplemented(self.notices.not_implemented.clone())
    }

    /// Cart is out of scope; always returns the not-implemented notice.
    pub fn add_to_cart(&self) -> Notice {
        tracing::debug!(product_id = %self.product.id, "add to cart requested");
        Notice::NotImplemented(self.notices.not_implemented.clone())
    }

    /// Toggle the product in favorites. Returns the new membership.
    pub fn add_to_favorites(&mut self) -> bool {
        self.favorites.toggle(self.product.id.clone())
    }

    /// Add the product to the comparison set.
    ///
    /// There is no toggle here; removal happens from the comparison view.
    pub fn add_to_compare(&mut self) -> Result<(), StoreError> {
        self.compare.add(self.product.clone())
    }

    /// Page URL of this product.
    pub fn page_url(&self) -> String {
        self.notices.product_url(&self.product.id)
    }

    /// Share the page: native share sheet if present, else copy the link.
    pub fn share<P: SharePort + ?Sized>(&self, port: &P) -> ShareOutcome {
        let url = self.page_url();
        match port.share(&self.product.title, &url) {
            Ok(()) => ShareOutcome::Shared,
            Err(ShareError::Unavailable) => match port.copy_to_clipboard(&url) {
                Ok(()) => ShareOutcome::Copied {
                    url,
                    notice: Notice::LinkCopied(self.notices.link_copied.clone()),
                },
                Err(e) => {
                    tracing::warn!(product_id = %self.product.id, error = %e, "share fallback failed");
                    ShareOutcome::Failed(e)
                }
            },
            Err(e) => {
                tracing::warn!(product_id = %self.product.id, error = %e, "share failed");
                ShareOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use crate::money::Currency;
    use std::cell::RefCell;
    use vitrine_store::MemoryStorage;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Producto {id}"), Price::new(1000, Currency::ARS))
    }

    fn stores() -> (FavoritesStore<MemoryStorage>, CompareSet<MemoryStorage>) {
        (
            FavoritesStore::load(MemoryStorage::new(), "fav"),
            CompareSet::load(MemoryStorage::new(), "cmp"),
        )
    }

    #[derive(Default)]
    struct FakePlatform {
        native: Option<Result<(), ShareError>>,
        clipboard_broken: bool,
        clipboard: RefCell<Option<String>>,
    }

    impl SharePort for FakePlatform {
        fn share(&self, _title: &str, _url: &str) -> Result<(), ShareError> {
            self.native.clone().unwrap_or(Err(ShareError::Unavailable))
        }

        fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
            if self.clipboard_broken {
                return Err(ShareError::Clipboard("denied".to_string()));
            }
            *self.clipboard.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_flags_are_snapshots() {
        let (mut favorites, mut compare) = stores();
        let notices = NoticeConfig::default();
        let p = product("MLA1");

        let mut actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);
        assert!(!actions.is_favorite);
        assert!(!actions.is_in_compare);
        assert!(actions.can_add_to_compare);

        assert!(actions.add_to_favorites());
        actions.add_to_compare().unwrap();
        assert!(!actions.is_favorite);

        let actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);
        assert!(actions.is_favorite);
        assert!(actions.is_in_compare);
    }

    #[test]
    fn test_favorites_toggle_through_facade() {
        let (mut favorites, mut compare) = stores();
        let notices = NoticeConfig::default();
        let p = product("MLA1");

        let mut actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);
        assert!(actions.add_to_favorites());
        assert!(!actions.add_to_favorites());
        drop(actions);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_compare_add_reports_capacity() {
        let (mut favorites, mut compare) = stores();
        for id in ["a", "b", "c"] {
            compare.add(product(id)).unwrap();
        }
        let notices = NoticeConfig::default();
        let p = product("d");

        let mut actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);
        assert!(!actions.can_add_to_compare);
        let err = actions.add_to_compare().unwrap_err();
        assert!(err.is_capacity());
        assert_eq!(err.to_string(), "Solo puedes comparar hasta 3 productos");
    }

    #[test]
    fn test_buy_and_cart_are_stubs() {
        let (mut favorites, mut compare) = stores();
        let notices = NoticeConfig::default();
        let p = product("MLA1");
        let actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);

        assert_eq!(
            actions.buy_now(),
            Notice::NotImplemented("Funcionalidad no implementada".to_string())
        );
        assert_eq!(actions.add_to_cart().message(), "Funcionalidad no implementada");
    }

    #[test]
    fn test_share_native() {
        let (mut favorites, mut compare) = stores();
        let notices = NoticeConfig::default();
        let p = product("MLA1");
        let actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);

        let platform = FakePlatform {
            native: Some(Ok(())),
            ..FakePlatform::default()
        };
        assert_eq!(actions.share(&platform), ShareOutcome::Shared);
        assert!(platform.clipboard.borrow().is_none());
    }

    #[test]
    fn test_share_falls_back_to_clipboard() {
        let (mut favorites, mut compare) = stores();
        let notices = NoticeConfig::default();
        let p = product("MLA1");
        let actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);

        let platform = FakePlatform::default();
        let outcome = actions.share(&platform);

        let url = "https://www.vitrine.example/p/MLA1".to_string();
        assert_eq!(
            outcome,
            ShareOutcome::Copied {
                url: url.clone(),
                notice: Notice::LinkCopied("Enlace copiado al portapapeles".to_string()),
            }
        );
        assert_eq!(platform.clipboard.borrow().as_deref(), Some(url.as_str()));
    }

    #[test]
    fn test_share_failures_are_reported_not_raised() {
        let (mut favorites, mut compare) = stores();
        let notices = NoticeConfig::default();
        let p = product("MLA1");
        let actions = ProductActions::new(&p, &mut favorites, &mut compare, &notices);

        let broken = FakePlatform {
            clipboard_broken: true,
            ..FakePlatform::default()
        };
        assert!(matches!(
            actions.share(&broken),
            ShareOutcome::Failed(ShareError::Clipboard(_))
        ));

        let cancelled = FakePlatform {
            native: Some(Err(ShareError::Failed("cancelled".to_string()))),
            ..FakePlatform::default()
        };
        assert!(matches!(
            actions.share(&cancelled),
            ShareOutcome::Failed(ShareError::Failed(_))
        ));
        assert!(cancelled.clipboard.borrow().is_none());
    }
}
