//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let p = &ctx.config.personalization;
    ctx.output.header("Current Configuration");

    ctx.output.info("[paths]");
    ctx.output.kv("catalog", &ctx.config.paths.catalog);
    ctx.output.kv("data_dir", &ctx.config.paths.data_dir);

    ctx.output.info("[storage]");
    ctx.output.kv("favorites_key", &p.storage.favorites_key);
    ctx.output.kv("compare_key", &p.storage.compare_key);

    ctx.output.info("[variants]");
    ctx.output.kv("price_axis", &p.variants.price_axis);
    ctx.output.kv("image_axis", &p.variants.image_axis);

    ctx.output.info("[compare]");
    ctx.output.kv("capacity_message", &p.compare.capacity_message);

    ctx.output.info("[related]");
    ctx.output.kv("default_limit", &p.related.default_limit.to_string());

    ctx.output.info("[notices]");
    ctx.output.kv("not_implemented", &p.notices.not_implemented);
    ctx.output.kv("link_copied", &p.notices.link_copied);
    ctx.output.kv("base_url", &p.notices.base_url);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("vitrine.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}
