//! Related products command.

use anyhow::Result;
use vitrine_commerce::prelude::*;

use super::RelatedArgs;
use crate::context::Context;

/// Run the related command.
pub fn run(args: RelatedArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.get_product(&ProductId::new(args.id))?;
    let limit = args
        .limit
        .unwrap_or(ctx.config.personalization.related.default_limit);

    let related = related_from_provider(&catalog, &product, limit);

    if ctx.output.is_json() {
        ctx.output.json(&related);
        return Ok(());
    }

    ctx.output.header(&format!("Related to {}", product.title));
    if related.is_empty() {
        ctx.output.info("No related products");
        return Ok(());
    }

    for p in &related {
        ctx.output.list_item(&format!(
            "{}  {}  {}  {}",
            p.id,
            p.title,
            p.brand,
            p.price.base().display()
        ));
    }

    Ok(())
}
