//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use vitrine_commerce::prelude::*;
use vitrine_store::FileStorage;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

/// Overrides from global flags, applied on top of the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub catalog: Option<String>,
    pub data_dir: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, overrides: Overrides, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = if let Some(path) = config_path {
            CliConfig::load(Path::new(path))?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        if let Some(catalog) = overrides.catalog {
            config.paths.catalog = catalog;
        }
        if let Some(data_dir) = overrides.data_dir {
            config.paths.data_dir = data_dir;
        }

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["vitrine.toml", ".vitrine.toml", "vitrine.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "skipping config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the product catalog.
    pub fn catalog(&self) -> Result<InMemoryCatalog> {
        let path = self.resolve_path(&self.config.paths.catalog);
        InMemoryCatalog::from_path(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))
    }

    /// Open the directory holding persisted state.
    pub fn storage(&self) -> Result<FileStorage> {
        let dir = self.resolve_path(&self.config.paths.data_dir);
        FileStorage::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))
    }

    /// Favorites as persisted in the data directory.
    pub fn favorites(&self) -> Result<FavoritesStore<FileStorage>> {
        let store = FavoritesStore::load(
            self.storage()?,
            &self.config.personalization.storage.favorites_key,
        );
        self.report_store_error(store.error());
        Ok(store)
    }

    /// Comparison set as persisted in the data directory.
    pub fn compare(&self) -> Result<CompareSet<FileStorage>> {
        let set = CompareSet::load_with_message(
            self.storage()?,
            &self.config.personalization.storage.compare_key,
            &self.config.personalization.compare.capacity_message,
        );
        self.report_store_error(set.error());
        Ok(set)
    }

    /// Print a store error as a warning. Store errors never abort a command.
    pub fn report_store_error(&self, error: Option<&StoreError>) {
        if let Some(e) = error {
            self.output.warn(&e.to_string());
        }
    }
}
