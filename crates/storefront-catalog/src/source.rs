//! The product source abstraction.

use async_trait::async_trait;
use storefront_cart::catalog::Product;
use storefront_cart::ProductId;

use crate::error::CatalogError;

/// Somewhere product listings can be loaded from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Every product in the catalog.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// A single product.
    async fn product_by_id(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Category labels.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Products carrying a category label.
    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
}

#[async_trait]
impl<T: ProductSource + ?Sized> ProductSource for Box<T> {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).list_products().await
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        (**self).product_by_id(id).await
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        (**self).categories().await
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        (**self).products_in_category(category).await
    }
}
