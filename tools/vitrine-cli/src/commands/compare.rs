//! Comparison set commands.

use anyhow::Result;
use dialoguer::Confirm;
use vitrine_commerce::prelude::*;
use vitrine_store::Storage;

use super::{CompareArgs, CompareCommand};
use crate::context::Context;
use crate::output::column_widths;

/// Run the compare command.
pub fn run(args: CompareArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CompareCommand::List) {
        CompareCommand::List => list_compare(ctx),
        CompareCommand::Add { id } => add_to_compare(&id, ctx),
        CompareCommand::Remove { id } => remove_from_compare(&id, ctx),
        CompareCommand::Clear { yes } => clear_compare(yes, ctx),
        CompareCommand::Table => show_table(ctx),
    }
}

fn list_compare(ctx: &Context) -> Result<()> {
    let compare = ctx.compare()?;

    if ctx.output.is_json() {
        ctx.output.json(&compare.products());
        return Ok(());
    }

    ctx.output.header(&format!(
        "Compare ({}/{})",
        compare.len(),
        MAX_COMPARE_ITEMS
    ));
    if compare.is_empty() {
        ctx.output.info("No products to compare");
        return Ok(());
    }

    for product in compare.products() {
        ctx.output.list_item(&format!(
            "{}  {}  {}",
            product.id,
            product.title,
            product.price.base().display()
        ));
    }

    Ok(())
}

fn add_to_compare(id: &str, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.get_product(&ProductId::new(id))?;
    let mut compare = ctx.compare()?;

    match compare.add(product) {
        Ok(()) => finish(&compare, ctx, &format!("Added {} to compare", id)),
        // Capacity is recoverable: print the message and keep the exit code clean.
        Err(e) if e.is_capacity() => {
            if ctx.output.is_json() {
                return finish(&compare, ctx, "");
            }
            ctx.output.warn(&e.to_string());
            Ok(())
        }
        Err(e) => {
            ctx.output.warn(&e.to_string());
            Ok(())
        }
    }
}

fn remove_from_compare(id: &str, ctx: &Context) -> Result<()> {
    let mut compare = ctx.compare()?;
    compare.remove(&ProductId::new(id));
    finish(&compare, ctx, &format!("Removed {} from compare", id))
}

fn clear_compare(yes: bool, ctx: &Context) -> Result<()> {
    let mut compare = ctx.compare()?;
    if compare.is_empty() {
        ctx.output.info("Nothing to clear");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} products from compare?", compare.len()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Clear cancelled");
            return Ok(());
        }
    }

    compare.clear();
    finish(&compare, ctx, "Compare cleared")
}

fn show_table(ctx: &Context) -> Result<()> {
    let compare = ctx.compare()?;
    let table = compare.comparison_table();

    if ctx.output.is_json() {
        ctx.output.json(&table);
        return Ok(());
    }

    if table.columns.is_empty() {
        ctx.output.info("No products to compare");
        return Ok(());
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len() + 1);
    rows.push(
        std::iter::once(String::new())
            .chain(table.columns.iter().map(ToString::to_string))
            .collect(),
    );
    for row in &table.rows {
        rows.push(
            std::iter::once(row.label.clone())
                .chain(row.values.iter().cloned())
                .collect(),
        );
    }

    let widths = column_widths(&rows);
    for row in &rows {
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }

    Ok(())
}

fn finish<S: Storage>(compare: &CompareSet<S>, ctx: &Context, msg: &str) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "compare": compare.products(),
            "canAddMore": compare.can_add_more(),
            "error": compare.error().map(ToString::to_string),
        }));
        return Ok(());
    }

    match compare.error() {
        Some(e) => ctx.output.warn(&e.to_string()),
        None => ctx.output.success(msg),
    }
    Ok(())
}
