//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_catalog::{FakeStoreClient, ProductSource, StaticCatalog};
use tracing::debug;

use crate::config::{CatalogSourceKind, StorefrontConfig};
use crate::output::Output;

/// Config file names, checked in each directory from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Where the configuration was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd) {
                Some(path) => {
                    let config = StorefrontConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (StorefrontConfig::default(), None),
            }
        };

        debug!(path = ?config_path, source = %config.catalog.source, "configuration loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// The catalog to load products from. `force_static` overrides the config.
    pub fn product_source(&self, force_static: bool) -> Box<dyn ProductSource> {
        let kind = if force_static {
            CatalogSourceKind::Static
        } else {
            self.config.catalog.source
        };

        match kind {
            CatalogSourceKind::Remote => {
                Box::new(FakeStoreClient::new(self.config.catalog.base_url.clone()))
            }
            CatalogSourceKind::Static => Box::new(StaticCatalog::builtin()),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
