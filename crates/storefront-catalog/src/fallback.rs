//! Built-in product catalog.
//!
//! Used when the storefront runs without network access to the remote
//! catalog. Unlike remote products these carry real stock levels.

use async_trait::async_trait;
use storefront_cart::catalog::Product;
use storefront_cart::{Money, ProductId};

use crate::error::CatalogError;
use crate::source::ProductSource;

/// In-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Catalog over an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The eight products the storefront ships with.
    pub fn builtin() -> Self {
        let rows: [(u64, &str, &str, f64, &str, &str, i64); 8] = [
            (
                1,
                "Wireless Bluetooth Headphones",
                "High-quality wireless headphones with active noise cancellation and 30-hour battery life.",
                199.99,
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
                "Electronics",
                15,
            ),
            (
                2,
                "Smart Fitness Watch",
                "Track your fitness goals with this advanced smartwatch featuring heart rate monitoring and GPS.",
                299.99,
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop",
                "Electronics",
                8,
            ),
            (
                3,
                "Organic Cotton T-Shirt",
                "Comfortable and sustainable organic cotton t-shirt available in multiple colors.",
                29.99,
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop",
                "Clothing",
                25,
            ),
            (
                4,
                "Stainless Steel Water Bottle",
                "Insulated stainless steel water bottle that keeps drinks cold for 24 hours or hot for 12 hours.",
                34.99,
                "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=400&h=400&fit=crop",
                "Lifestyle",
                20,
            ),
            (
                5,
                "Wireless Phone Charger",
                "Fast wireless charging pad compatible with all Qi-enabled devices.",
                49.99,
                "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=400&h=400&fit=crop",
                "Electronics",
                12,
            ),
            (
                6,
                "Yoga Mat",
                "Non-slip yoga mat made from eco-friendly materials, perfect for all types of yoga practice.",
                59.99,
                "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=400&h=400&fit=crop",
                "Sports",
                18,
            ),
            (
                7,
                "Coffee Mug",
                "Ceramic coffee mug with ergonomic handle and heat-resistant design.",
                19.99,
                "https://images.unsplash.com/photo-1514228742587-6b1558fcf93a?w=400&h=400&fit=crop",
                "Lifestyle",
                30,
            ),
            (
                8,
                "Laptop Stand",
                "Adjustable aluminum laptop stand for improved ergonomics and better airflow.",
                79.99,
                "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400&h=400&fit=crop",
                "Electronics",
                10,
            ),
        ];

        let products = rows
            .into_iter()
            .map(|(id, name, description, price, image, category, stock)| {
                Product::new(ProductId::new(id), name, Money::from_decimal(price))
                    .with_description(description)
                    .with_image(image)
                    .with_category(category)
                    .with_stock(stock)
            })
            .collect();

        Self::new(products)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl ProductSource for StaticCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_catalog() {
        let catalog = StaticCatalog::builtin();
        let products = catalog.list_products().await.unwrap();

        assert_eq!(products.len(), 8);
        assert_eq!(products[0].name, "Wireless Bluetooth Headphones");
        assert_eq!(products[0].price, Money::new(19999));
        assert_eq!(products[7].stock, 10);
    }

    #[tokio::test]
    async fn test_categories_in_first_seen_order() {
        let categories = StaticCatalog::builtin().categories().await.unwrap();
        assert_eq!(categories, vec!["Electronics", "Clothing", "Lifestyle", "Sports"]);
    }

    #[tokio::test]
    async fn test_products_in_category() {
        let lifestyle = StaticCatalog::builtin()
            .products_in_category("Lifestyle")
            .await
            .unwrap();
        let names: Vec<_> = lifestyle.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Stainless Steel Water Bottle", "Coffee Mug"]);
    }

    #[tokio::test]
    async fn test_product_lookup() {
        let catalog = StaticCatalog::builtin();
        assert_eq!(
            catalog.product_by_id(ProductId::new(6)).await.unwrap().name,
            "Yoga Mat"
        );
        assert_eq!(
            catalog.product_by_id(ProductId::new(42)).await.unwrap_err(),
            CatalogError::ProductNotFound(ProductId::new(42))
        );
    }
}
