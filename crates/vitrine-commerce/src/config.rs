//! Engine configuration.
//!
//! Every field has a default, so an empty TOML document (or none at all)
//! yields the storefront's stock behavior.

use serde::{Deserialize, Serialize};

use crate::compare::DEFAULT_CAPACITY_MESSAGE;
use crate::related::DEFAULT_RELATED_LIMIT;

/// Top-level personalization configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    #[serde(default)]
    pub storage: StorageKeys,

    #[serde(default)]
    pub variants: AxisRoles,

    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub related: RelatedConfig,

    #[serde(default)]
    pub notices: NoticeConfig,
}

/// Durable storage keys for the two persisted collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,

    #[serde(default = "default_compare_key")]
    pub compare_key: String,
}

fn default_favorites_key() -> String {
    vitrine_store::storage_key!("vitrine", "favorites")
}

fn default_compare_key() -> String {
    vitrine_store::storage_key!("vitrine", "compare")
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            favorites_key: default_favorites_key(),
            compare_key: default_compare_key(),
        }
    }
}

/// Which axes drive price and image derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRoles {
    /// Axis whose options carry price modifiers.
    #[serde(default = "default_price_axis")]
    pub price_axis: String,

    /// Axis whose options carry images.
    #[serde(default = "default_image_axis")]
    pub image_axis: String,
}

fn default_price_axis() -> String {
    "storage".to_string()
}

fn default_image_axis() -> String {
    "color".to_string()
}

impl Default for AxisRoles {
    fn default() -> Self {
        Self {
            price_axis: default_price_axis(),
            image_axis: default_image_axis(),
        }
    }
}

/// Comparison set settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Message recorded when a fourth product is rejected.
    #[serde(default = "default_capacity_message")]
    pub capacity_message: String,
}

fn default_capacity_message() -> String {
    DEFAULT_CAPACITY_MESSAGE.to_string()
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            capacity_message: default_capacity_message(),
        }
    }
}

/// Related products settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedConfig {
    #[serde(default = "default_related_limit")]
    pub default_limit: usize,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            default_limit: default_related_limit(),
        }
    }
}

/// User-facing notices raised by the action facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// Shown by the buy and cart stubs.
    #[serde(default = "default_not_implemented")]
    pub not_implemented: String,

    /// Shown after the share fallback copied the link.
    #[serde(default = "default_link_copied")]
    pub link_copied: String,

    /// Prefix for product page URLs (`<base_url>/<id>`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_not_implemented() -> String {
    "Funcionalidad no implementada".to_string()
}

fn default_link_copied() -> String {
    "Enlace copiado al portapapeles".to_string()
}

fn default_base_url() -> String {
    "https://www.vitrine.example/p".to_string()
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            not_implemented: default_not_implemented(),
            link_copied: default_link_copied(),
            base_url: default_base_url(),
        }
    }
}

impl NoticeConfig {
    /// Page URL for a product.
    pub fn product_url(&self, id: &crate::ids::ProductId) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PersonalizationConfig::default();
        assert_eq!(config.storage.favorites_key, "vitrine:favorites");
        assert_eq!(config.storage.compare_key, "vitrine:compare");
        assert_eq!(config.variants.price_axis, "storage");
        assert_eq!(config.variants.image_axis, "color");
        assert_eq!(
            config.compare.capacity_message,
            "Solo puedes comparar hasta 3 productos"
        );
        assert_eq!(config.related.default_limit, 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PersonalizationConfig = serde_json::from_str(
            r#"{"variants": {"price_axis": "capacidad"}, "compare": {}}"#,
        )
        .unwrap();

        assert_eq!(config.variants.price_axis, "capacidad");
        assert_eq!(config.variants.image_axis, "color");
        assert_eq!(config.compare, CompareConfig::default());
        assert_eq!(config.notices, NoticeConfig::default());
    }

    #[test]
    fn test_product_url() {
        let notices = NoticeConfig {
            base_url: "https://shop.test/p/".to_string(),
            ..NoticeConfig::default()
        };
        assert_eq!(notices.product_url(&"MLA1".into()), "https://shop.test/p/MLA1");
    }
}
