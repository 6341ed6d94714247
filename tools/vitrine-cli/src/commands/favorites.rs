//! Favorites commands.

use anyhow::Result;
use dialoguer::Confirm;
use serde::Serialize;
use vitrine_commerce::prelude::*;

use super::{FavoritesArgs, FavoritesCommand};
use crate::context::Context;

/// Run the favorites command.
pub fn run(args: FavoritesArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(FavoritesCommand::List) {
        FavoritesCommand::List => list_favorites(ctx),
        FavoritesCommand::Add { id } => add_favorite(&id, ctx),
        FavoritesCommand::Remove { id } => remove_favorite(&id, ctx),
        FavoritesCommand::Toggle { id } => toggle_favorite(&id, ctx),
        FavoritesCommand::Clear { yes } => clear_favorites(yes, ctx),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteRow {
    #[serde(flatten)]
    entry: FavoriteEntry,
    title: Option<String>,
}

fn list_favorites(ctx: &Context) -> Result<()> {
    let favorites = ctx.favorites()?;
    // Missing catalog still lists ids.
    let catalog = ctx.catalog().ok();

    let rows: Vec<FavoriteRow> = favorites
        .entries()
        .iter()
        .map(|entry| FavoriteRow {
            title: catalog
                .as_ref()
                .and_then(|c| c.get_product(&entry.id).ok())
                .map(|p| p.title),
            entry: entry.clone(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Favorites");
    if rows.is_empty() {
        ctx.output.info("No favorites yet");
        return Ok(());
    }

    for row in &rows {
        let title = row.title.as_deref().unwrap_or("(not in catalog)");
        ctx.output.list_item(&format!(
            "{}  {}  {}",
            row.entry.id,
            title,
            row.entry.added_at.format("%Y-%m-%d %H:%M"),
        ));
    }

    Ok(())
}

fn add_favorite(id: &str, ctx: &Context) -> Result<()> {
    let mut favorites = ctx.favorites()?;
    favorites.add(id);
    finish(&favorites, ctx, &format!("Added {} to favorites", id))
}

fn remove_favorite(id: &str, ctx: &Context) -> Result<()> {
    let mut favorites = ctx.favorites()?;
    favorites.remove(&ProductId::new(id));
    finish(&favorites, ctx, &format!("Removed {} from favorites", id))
}

fn toggle_favorite(id: &str, ctx: &Context) -> Result<()> {
    let mut favorites = ctx.favorites()?;
    let msg = if favorites.toggle(id) {
        format!("Added {} to favorites", id)
    } else {
        format!("Removed {} from favorites", id)
    };
    finish(&favorites, ctx, &msg)
}

fn clear_favorites(yes: bool, ctx: &Context) -> Result<()> {
    let mut favorites = ctx.favorites()?;
    if favorites.is_empty() {
        ctx.output.info("No favorites to clear");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} favorites?", favorites.len()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Clear cancelled");
            return Ok(());
        }
    }

    favorites.clear();
    finish(&favorites, ctx, "Favorites cleared")
}

fn finish<S: vitrine_store::Storage>(
    favorites: &FavoritesStore<S>,
    ctx: &Context,
    msg: &str,
) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "favorites": favorites.entries(),
            "error": favorites.error().map(ToString::to_string),
        }));
        return Ok(());
    }

    match favorites.error() {
        Some(e) => ctx.output.warn(&e.to_string()),
        None => ctx.output.success(msg),
    }
    Ok(())
}
