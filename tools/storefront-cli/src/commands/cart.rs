//! Run a scripted cart session.

use anyhow::{bail, Context as _, Result};
use serde_json::json;
use storefront_catalog::{ListingQuery, ProductListing};

use super::CartArgs;
use crate::context::Context;
use crate::render;
use crate::session::{CartCommand, Session};

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read cart script: {}", path.display()))?;
    let steps: Vec<CartCommand> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cart script: {}", path.display()))?;

    let listing = ProductListing::new(ctx.product_source(args.use_static), ListingQuery::All);
    let mut session = Session::new(listing, ctx.config.display.description_limit);

    let spinner = ctx.output.spinner("Loading products...");
    session.load(ctx.config.catalog.retries).await;
    spinner.finish_and_clear();

    if let Some(message) = session.listing().error_message() {
        bail!("{}", message);
    }

    let mut results = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let result = session.execute(step);
        if result.is_applied() {
            ctx.output.step(index + 1, steps.len(), &result.describe());
        } else {
            ctx.output
                .warn(&format!("[{}/{}] {}", index + 1, steps.len(), result.describe()));
            if args.strict {
                bail!("Step {} was not applied: {}", index + 1, result.describe());
            }
        }
        results.push(json!({
            "step": index + 1,
            "applied": result.is_applied(),
            "result": result.describe(),
        }));
    }

    let summary = session.summary();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "steps": results,
            "summary": summary,
        }));
    } else {
        render::order_summary(&ctx.output, &summary);
    }

    Ok(())
}
