//! Share, buy and cart actions.

use anyhow::Result;
use vitrine_commerce::prelude::*;

use super::ProductArgs;
use crate::context::Context;

/// Terminal share capabilities: no share sheet, and the "clipboard" is stdout.
///
/// With `echo` off the copied text is only reported through the outcome.
pub struct TerminalShare {
    pub echo: bool,
}

impl SharePort for TerminalShare {
    fn share(&self, _title: &str, _url: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        if self.echo {
            println!("{}", text);
        }
        Ok(())
    }
}

/// Which stubbed action to run.
#[derive(Debug, Clone, Copy)]
pub enum Stub {
    BuyNow,
    AddToCart,
}

/// Run the share command.
pub fn share(args: ProductArgs, ctx: &Context) -> Result<()> {
    with_actions(&args.id, ctx, |actions| {
        let port = TerminalShare {
            echo: !ctx.output.is_json(),
        };
        let outcome = actions.share(&port);

        if ctx.output.is_json() {
            ctx.output.json(&outcome_json(&outcome, &actions.page_url()));
            return;
        }

        match outcome {
            ShareOutcome::Shared => ctx.output.success("Shared"),
            ShareOutcome::Copied { notice, .. } => ctx.output.success(notice.message()),
            ShareOutcome::Failed(e) => ctx.output.warn(&e.to_string()),
        }
    })
}

fn outcome_json(outcome: &ShareOutcome, page_url: &str) -> serde_json::Value {
    match outcome {
        ShareOutcome::Shared => serde_json::json!({ "outcome": "shared", "url": page_url }),
        ShareOutcome::Copied { url, notice } => serde_json::json!({
            "outcome": "copied",
            "url": url,
            "notice": notice.message(),
        }),
        ShareOutcome::Failed(e) => serde_json::json!({
            "outcome": "failed",
            "url": page_url,
            "error": e.to_string(),
        }),
    }
}

/// Run the buy or cart command.
pub fn stub(args: ProductArgs, which: Stub, ctx: &Context) -> Result<()> {
    with_actions(&args.id, ctx, |actions| {
        let notice = match which {
            Stub::BuyNow => actions.buy_now(),
            Stub::AddToCart => actions.add_to_cart(),
        };

        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "notice": notice.message() }));
        } else {
            ctx.output.info(notice.message());
        }
    })
}

fn with_actions(
    id: &str,
    ctx: &Context,
    f: impl FnOnce(&ProductActions<'_, vitrine_store::FileStorage, vitrine_store::FileStorage>),
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.get_product(&ProductId::new(id))?;
    let mut favorites = ctx.favorites()?;
    let mut compare = ctx.compare()?;

    let actions = ProductActions::new(
        &product,
        &mut favorites,
        &mut compare,
        &ctx.config.personalization.notices,
    );
    f(&actions);
    Ok(())
}
