//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use storefront_cart::ProductId;
use storefront_catalog::{ListingQuery, ProductListing, ProductSource};

use super::ShopArgs;
use crate::context::Context;
use crate::render;
use crate::session::{CartCommand, Session};

const HELP: [(&str, &str); 11] = [
    ("list", "show products"),
    ("add ID [QTY]", "add a product (default 1)"),
    ("set ID QTY", "type a quantity for a cart line"),
    ("inc ID", "one more of a cart line"),
    ("dec ID", "one fewer of a cart line"),
    ("rm ID", "remove a cart line"),
    ("clear", "empty the cart"),
    ("cart", "show the order summary"),
    ("retry", "load the products again"),
    ("help", "show this list"),
    ("quit", "leave the shop"),
];

/// One line typed at the shop prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopInput {
    Cart(CartCommand),
    List,
    Summary,
    Retry,
    Help,
    Quit,
}

/// Parse a prompt line.
pub fn parse_shop_line(line: &str) -> Result<ShopInput, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(ShopInput::Help);
    };
    let args: Vec<&str> = words.collect();

    let input = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("list" | "ls" | "products", []) => ShopInput::List,
        ("cart" | "summary", []) => ShopInput::Summary,
        ("retry", []) => ShopInput::Retry,
        ("help" | "?", []) => ShopInput::Help,
        ("quit" | "exit" | "q", []) => ShopInput::Quit,
        ("clear", []) => ShopInput::Cart(CartCommand::Clear),
        ("add", [id]) => ShopInput::Cart(CartCommand::Add {
            product: parse_id(id)?,
            quantity: 1,
        }),
        ("add", [id, quantity]) => ShopInput::Cart(CartCommand::Add {
            product: parse_id(id)?,
            quantity: quantity
                .parse()
                .map_err(|_| format!("Not a quantity: {}", quantity))?,
        }),
        ("set", [id, rest @ ..]) if !rest.is_empty() => ShopInput::Cart(CartCommand::Type {
            product: parse_id(id)?,
            input: rest.join(" "),
        }),
        ("inc" | "+", [id]) => ShopInput::Cart(CartCommand::Increase {
            product: parse_id(id)?,
        }),
        ("dec" | "-", [id]) => ShopInput::Cart(CartCommand::Decrease {
            product: parse_id(id)?,
        }),
        ("rm" | "remove", [id]) => ShopInput::Cart(CartCommand::Remove {
            product: parse_id(id)?,
        }),
        (other, _) => return Err(format!("Unknown command: {} (type `help`)", other)),
    };

    Ok(input)
}

fn parse_id(raw: &str) -> Result<ProductId, String> {
    raw.parse::<u64>()
        .map(ProductId::new)
        .map_err(|_| format!("Not a product ID: {}", raw))
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop is interactive; use `storefront cart --script` for JSON output");
    }

    let query = match args.category {
        Some(category) => ListingQuery::Category(category),
        None => ListingQuery::All,
    };
    let listing = ProductListing::new(ctx.product_source(args.use_static), query);
    let mut session = Session::new(listing, ctx.config.display.description_limit);

    let spinner = ctx.output.spinner("Loading products...");
    session.load(ctx.config.catalog.retries).await;
    spinner.finish_and_clear();
    show_listing(ctx, &session);

    loop {
        let line = Input::<String>::new()
            .with_prompt("shop")
            .allow_empty(true)
            .interact_text()?;

        let input = match parse_shop_line(&line) {
            Ok(input) => input,
            Err(message) => {
                ctx.output.warn(&message);
                continue;
            }
        };

        match input {
            ShopInput::Quit => break,
            ShopInput::Help => {
                for (usage, what) in HELP {
                    ctx.output.kv(usage, what);
                }
            }
            ShopInput::List => show_listing(ctx, &session),
            ShopInput::Summary => render::order_summary(&ctx.output, &session.summary()),
            ShopInput::Retry => {
                let spinner = ctx.output.spinner("Loading products...");
                session.retry().await;
                spinner.finish_and_clear();
                show_listing(ctx, &session);
            }
            ShopInput::Cart(CartCommand::Clear) if !args.yes => {
                let confirmed = Confirm::new()
                    .with_prompt("Are you sure you want to clear your cart?")
                    .default(false)
                    .interact()?;

                if confirmed {
                    report(ctx, &mut session, &CartCommand::Clear);
                }
            }
            ShopInput::Cart(command) => report(ctx, &mut session, &command),
        }
    }

    let summary = session.summary();
    if !summary.is_empty() {
        ctx.output.info(&format!("Leaving with {} in the cart.", summary.item_label));
    }

    Ok(())
}

fn show_listing<S: ProductSource>(ctx: &Context, session: &Session<S>) {
    match session.listing().products() {
        Some(products) => render::products(&ctx.output, products),
        None => {
            if let Some(message) = session.listing().error_message() {
                ctx.output.error(message);
                ctx.output.info("Type `retry` to try again.");
            }
        }
    }
}

fn report<S: ProductSource>(ctx: &Context, session: &mut Session<S>, command: &CartCommand) {
    let result = session.execute(command);
    if result.is_applied() {
        ctx.output.success(&result.describe());
        let state = session.store().state();
        ctx.output.debug(&format!(
            "{} line(s), {} unit(s) in the cart",
            state.unique_item_count(),
            state.total_items()
        ));
    } else {
        ctx.output.warn(&result.describe());
    }
}
