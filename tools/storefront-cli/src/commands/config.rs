//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, as_json } => init_config(force, as_json, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("base_url", &ctx.config.catalog.base_url);
    ctx.output.kv("source", &ctx.config.catalog.source.to_string());
    ctx.output.kv("retries", &ctx.config.catalog.retries.to_string());

    ctx.output.info("[display]");
    ctx.output.kv(
        "description_limit",
        &ctx.config.display.description_limit.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, as_json: bool, ctx: &Context) -> Result<()> {
    let name = if as_json { "storefront.json" } else { "storefront.toml" };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if as_json {
        StorefrontConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
