//! Storefront CLI - browse the product catalog and run a shopping cart.
//!
//! Commands:
//! - `storefront products` - List products, optionally for one category
//! - `storefront categories` - List category labels
//! - `storefront cart` - Run a scripted cart session and print the summary
//! - `storefront shop` - Interactive cart session
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CategoriesArgs, ConfigArgs, ProductsArgs, ShopArgs};

/// Storefront CLI - Browse products and manage a shopping cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products from the catalog
    Products(ProductsArgs),

    /// List product categories
    Categories(CategoriesArgs),

    /// Run a scripted cart session
    Cart(CartArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
