//! List products.

use anyhow::{bail, Result};
use storefront_catalog::{ListingQuery, LoadState, ProductListing};

use super::ProductsArgs;
use crate::context::Context;
use crate::render;
use crate::session::Session;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let query = match args.category {
        Some(category) => ListingQuery::Category(category),
        None => ListingQuery::All,
    };
    let retries = args.retries.unwrap_or(ctx.config.catalog.retries);

    let listing = ProductListing::new(ctx.product_source(args.use_static), query);
    let mut session = Session::new(listing, ctx.config.display.description_limit);

    let spinner = ctx.output.spinner("Loading products...");
    session.load(retries).await;
    spinner.finish_and_clear();

    match session.listing().state() {
        LoadState::Loaded(products) => {
            if ctx.output.is_json() {
                ctx.output.json(products);
            } else {
                render::products(&ctx.output, products);
            }
            Ok(())
        }
        LoadState::Failed { message, error } => {
            ctx.output.debug(&format!(
                "{} ({} attempt(s))",
                error,
                session.listing().attempts()
            ));
            bail!("{}", message)
        }
        LoadState::Idle | LoadState::Loading => bail!("Product listing did not finish loading"),
    }
}
