//! List categories.

use anyhow::{Context as _, Result};

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let source = ctx.product_source(args.use_static);

    let spinner = ctx.output.spinner("Loading categories...");
    let categories = source.categories().await;
    spinner.finish_and_clear();

    let categories = categories.context("Failed to fetch categories. Please try again later.")?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(category);
    }

    Ok(())
}
