//! Vitrine CLI - product page personalization from the terminal.
//!
//! Commands:
//! - `vitrine show` - Render a product with a variant selection
//! - `vitrine favorites` - Manage favorites
//! - `vitrine compare` - Manage the comparison set
//! - `vitrine related` - List related products
//! - `vitrine share` - Print the product link
//! - `vitrine buy` / `vitrine cart` - Checkout placeholders
//! - `vitrine config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::actions::Stub;
use commands::{CompareArgs, ConfigArgs, FavoritesArgs, ProductArgs, RelatedArgs, ShowArgs};

/// Vitrine CLI - Browse products, keep favorites and compare them
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Product catalog (JSON array)
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Directory for persisted favorites and compare state
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a product page
    Show(ShowArgs),

    /// Manage favorites
    Favorites(FavoritesArgs),

    /// Manage the comparison set
    Compare(CompareArgs),

    /// List related products
    Related(RelatedArgs),

    /// Share a product link
    Share(ProductArgs),

    /// Buy a product now
    Buy(ProductArgs),

    /// Add a product to the cart
    Cart(ProductArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let overrides = context::Overrides {
        catalog: cli.catalog,
        data_dir: cli.data_dir,
    };
    let ctx = context::Context::load(cli.config.as_deref(), overrides, output)?;
    ctx.output.debug(&format!(
        "catalog: {}, data dir: {}",
        ctx.config.paths.catalog, ctx.config.paths.data_dir
    ));

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Favorites(args) => commands::favorites::run(args, &ctx),
        Commands::Compare(args) => commands::compare::run(args, &ctx),
        Commands::Related(args) => commands::related::run(args, &ctx),
        Commands::Share(args) => commands::actions::share(args, &ctx),
        Commands::Buy(args) => commands::actions::stub(args, Stub::BuyNow, &ctx),
        Commands::Cart(args) => commands::actions::stub(args, Stub::AddToCart, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
