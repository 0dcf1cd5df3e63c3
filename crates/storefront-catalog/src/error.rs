//! Catalog error types.

use storefront_cart::ProductId;
use thiserror::Error;

/// Errors that can occur while loading catalog data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Non-success HTTP response.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// Transport failure before a response arrived.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body was not the expected JSON.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

impl CatalogError {
    /// Check if this came from the network rather than from the catalog's data.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Connection(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Deserialization(e.to_string())
    }
}
