//! FakeStore catalog API.

use async_trait::async_trait;
use serde::Deserialize;
use storefront_cart::catalog::{Product, Rating};
use storefront_cart::{Money, ProductId};
use tracing::info;

use crate::client::FetchClient;
use crate::error::CatalogError;
use crate::source::ProductSource;

/// Public FakeStore endpoint.
pub const FAKESTORE_BASE_URL: &str = "https://fakestoreapi.com";

/// Stock given to every remote product. FakeStore has no inventory.
pub const REMOTE_DEFAULT_STOCK: i64 = 1;

/// A product record as FakeStore serves it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FakeStoreProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: Option<FakeStoreRating>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct FakeStoreRating {
    pub rate: f64,
    pub count: u64,
}

impl From<FakeStoreProduct> for Product {
    fn from(remote: FakeStoreProduct) -> Self {
        Product {
            id: ProductId::new(remote.id),
            name: remote.title,
            description: remote.description,
            price: Money::from_decimal(remote.price.max(0.0)),
            image: remote.image,
            category: remote.category,
            stock: REMOTE_DEFAULT_STOCK,
            rating: remote.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
        }
    }
}

/// Client for the FakeStore catalog.
#[derive(Debug, Clone)]
pub struct FakeStoreClient {
    fetch: FetchClient,
}

impl Default for FakeStoreClient {
    fn default() -> Self {
        Self::new(FAKESTORE_BASE_URL)
    }
}

impl FakeStoreClient {
    /// Create a client against a FakeStore-compatible base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_fetch_client(FetchClient::new().with_base_url(base_url))
    }

    /// Create a client on top of a configured fetch client.
    pub fn with_fetch_client(fetch: FetchClient) -> Self {
        Self { fetch }
    }

    async fn fetch_products(&self, path: &str) -> Result<Vec<Product>, CatalogError> {
        let records: Vec<FakeStoreProduct> = self.fetch.get_json(path).await?;
        info!(path, count = records.len(), "loaded products from catalog");
        Ok(records.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl ProductSource for FakeStoreClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch_products("/products").await
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        let body = self.fetch.get_bytes(&format!("/products/{}", id)).await?;

        // Unknown IDs come back as a 200 with an empty (or null) body.
        let text = String::from_utf8_lossy(&body);
        let text = text.trim();
        if text.is_empty() || text == "null" {
            return Err(CatalogError::ProductNotFound(id));
        }

        let record: FakeStoreProduct = serde_json::from_str(text)?;
        Ok(Product::from(record))
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.fetch.get_json("/products/categories").await
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.fetch_products(&format!("/products/category/{}", category))
            .await
    }
}
