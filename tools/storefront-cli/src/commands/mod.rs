//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show products with this category label.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Use the built-in catalog instead of the remote API.
    #[arg(long = "static")]
    pub use_static: bool,

    /// Extra attempts after a failed load (default: from config).
    #[arg(short, long)]
    pub retries: Option<u32>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Use the built-in catalog instead of the remote API.
    #[arg(long = "static")]
    pub use_static: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// JSON file with the cart steps to run.
    #[arg(short, long)]
    pub script: String,

    /// Use the built-in catalog instead of the remote API.
    #[arg(long = "static")]
    pub use_static: bool,

    /// Stop at the first rejected step.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Only list products with this category label.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Use the built-in catalog instead of the remote API.
    #[arg(long = "static")]
    pub use_static: bool,

    /// Skip confirmation prompts.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Write JSON instead of TOML
        #[arg(long = "as-json")]
        as_json: bool,
    },
}
