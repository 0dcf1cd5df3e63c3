//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_cart::cart::DEFAULT_DESCRIPTION_LIMIT;
use storefront_catalog::FAKESTORE_BASE_URL;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Where products come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Terminal rendering.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Which catalog backs the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSourceKind {
    /// FakeStore-compatible HTTP API.
    #[default]
    Remote,
    /// The built-in product list.
    Static,
}

impl std::fmt::Display for CatalogSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Static => write!(f, "static"),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Remote API or built-in list.
    #[serde(default)]
    pub source: CatalogSourceKind,

    /// Extra attempts after a failed product load (default: 0).
    #[serde(default)]
    pub retries: u32,
}

fn default_base_url() -> String {
    FAKESTORE_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            source: CatalogSourceKind::default(),
            retries: 0,
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of each description shown on cart lines.
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

fn default_description_limit() -> usize {
    DEFAULT_DESCRIPTION_LIMIT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_limit: default_description_limit(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
# FakeStore-compatible catalog API.
base_url = "{base_url}"
# "remote" fetches over HTTP, "static" uses the built-in products.
source = "remote"
# Extra attempts after a failed product load.
retries = 0

[display]
# Characters of each product description shown in the cart.
description_limit = {limit}
"#,
        base_url = FAKESTORE_BASE_URL,
        limit = DEFAULT_DESCRIPTION_LIMIT
    )
}
