//! Product page rendering.

use anyhow::Result;
use serde::Serialize;
use vitrine_commerce::prelude::*;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductView<'a> {
    id: &'a ProductId,
    title: &'a str,
    price: Money,
    image: String,
    selected: &'a SelectedVariants,
    selection_available: bool,
    stock_status: StockStatus,
    is_favorite: bool,
    is_in_compare: bool,
    can_add_to_compare: bool,
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.get_product(&ProductId::new(args.id))?;

    let mut selector =
        VariantSelector::with_roles(&product, ctx.config.personalization.variants.clone());
    for (axis, value) in args.selections {
        if !selector.options(&axis).iter().any(|o| o.value == value) {
            ctx.output
                .warn(&format!("'{}' is not an option of '{}'", value, axis));
        }
        selector.select_option(axis, value);
    }

    let mut favorites = ctx.favorites()?;
    let mut compare = ctx.compare()?;
    let actions = ProductActions::new(
        &product,
        &mut favorites,
        &mut compare,
        &ctx.config.personalization.notices,
    );

    let view = ProductView {
        id: &product.id,
        title: &product.title,
        price: selector.current_price(),
        image: selector.current_image(),
        selected: selector.selected(),
        selection_available: selector.is_selection_available(),
        stock_status: product.stock_status(),
        is_favorite: actions.is_favorite,
        is_in_compare: actions.is_in_compare,
        can_add_to_compare: actions.can_add_to_compare,
    };

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(view.title);
    ctx.output.kv("id", view.id.as_str());
    if !product.brand.is_empty() {
        ctx.output.kv("brand", &product.brand);
    }
    ctx.output.kv("price", &view.price.display());
    if let Some(original) = product.price.original().filter(|_| product.price.is_on_sale()) {
        ctx.output.kv("before", &original.display());
    }
    if !view.image.is_empty() {
        ctx.output.kv("image", &view.image);
    }
    ctx.output.kv("stock", &stock_badge(view.stock_status));

    for (axis, options) in &product.variants {
        let choices: Vec<String> = options
            .iter()
            .map(|o| {
                let mark = if selector.selected_value(axis) == Some(o.value.as_str()) {
                    "*"
                } else {
                    " "
                };
                let unavailable = if o.available { "" } else { " (sin stock)" };
                format!("{}{}{}", mark, o.value, unavailable)
            })
            .collect();
        ctx.output.kv(axis, &choices.join("  "));
    }

    if !view.selection_available {
        ctx.output
            .warn("The selected combination includes an unavailable option");
    }

    ctx.output.kv("favorite", yes_no(view.is_favorite));
    ctx.output.kv("in compare", yes_no(view.is_in_compare));
    if !view.is_in_compare && !view.can_add_to_compare {
        ctx.output.kv("compare", &ctx.config.personalization.compare.capacity_message);
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
