//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitrine_commerce::config::PersonalizationConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog and the persisted state live.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Engine settings (`[storage]`, `[variants]`, `[compare]`, ...).
    #[serde(flatten)]
    pub personalization: PersonalizationConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if path.extension().is_some_and(|e| e == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// File locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON array of products.
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Directory holding the persisted favorites and comparison set.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_catalog() -> String {
    "catalog.json".to_string()
}

fn default_data_dir() -> String {
    ".vitrine".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            data_dir: default_data_dir(),
        }
    }
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config() -> String {
    r#"# Vitrine storefront configuration

[paths]
catalog = "catalog.json"
data_dir = ".vitrine"

[storage]
favorites_key = "vitrine:favorites"
compare_key = "vitrine:compare"

[variants]
# Axis whose options carry price modifiers
price_axis = "storage"
# Axis whose options carry images
image_axis = "color"

[compare]
capacity_message = "Solo puedes comparar hasta 3 productos"

[related]
default_limit = 4

[notices]
not_implemented = "Funcionalidad no implementada"
link_copied = "Enlace copiado al portapapeles"
base_url = "https://www.vitrine.example/p"
"#
    .to_string()
}
