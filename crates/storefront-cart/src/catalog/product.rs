//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once fetched. The cart shares them by reference
/// (`Arc<Product>`) and never copies one to change it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog-assigned product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Category label.
    pub category: String,
    /// Units available; zero means out of stock.
    pub stock: i64,
    /// Average review score, when the catalog has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Create a product with a single unit in stock and no other details.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: String::new(),
            stock: 1,
            rating: None,
        }
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock.max(0);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Some(Rating { rate, count });
        self
    }

    /// Check if at least `requested` units are in stock.
    pub fn is_in_stock(&self, requested: i64) -> bool {
        self.stock >= requested
    }

    /// Check if the product is sold out.
    pub fn is_sold_out(&self) -> bool {
        self.stock <= 0
    }
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average score.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}
