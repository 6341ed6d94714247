//! CLI command implementations.

pub mod actions;
pub mod compare;
pub mod config;
pub mod favorites;
pub mod related;
pub mod show;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,

    /// Select a variant option, e.g. `--select storage=256gb`.
    #[arg(short, long = "select", value_parser = parse_selection)]
    pub selections: Vec<(String, String)>,
}

/// Arguments for the favorites command.
#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: Option<FavoritesCommand>,
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// List favorite products.
    List,
    /// Add a product to favorites.
    Add {
        /// Product ID.
        id: String,
    },
    /// Remove a product from favorites.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Add the product if absent, remove it if present.
    Toggle {
        /// Product ID.
        id: String,
    },
    /// Remove every favorite.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    #[command(subcommand)]
    pub command: Option<CompareCommand>,
}

#[derive(Subcommand)]
pub enum CompareCommand {
    /// List products in the comparison set.
    List,
    /// Add a product to the comparison set.
    Add {
        /// Product ID.
        id: String,
    },
    /// Remove a product from the comparison set.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Empty the comparison set.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the side-by-side comparison table.
    Table,
}

/// Arguments for the related command.
#[derive(Args)]
pub struct RelatedArgs {
    /// Product ID.
    pub id: String,

    /// Maximum number of products (default from config).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for single-product actions (share, buy, cart).
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default vitrine.toml.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse `axis=value`.
fn parse_selection(s: &str) -> Result<(String, String)> {
    let (axis, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected axis=value, got '{}'", s))?;

    let (axis, value) = (axis.trim(), value.trim());
    if axis.is_empty() || value.is_empty() {
        return Err(anyhow!("expected axis=value, got '{}'", s));
    }

    Ok((axis.to_string(), value.to_string()))
}
