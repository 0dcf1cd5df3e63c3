//! Cart actions.

use std::sync::Arc;

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A request to change the cart.
///
/// Payload fields are optional so that partial payloads coming from a UI
/// still deserialize; the reducer treats them as no-ops. Unknown `type`
/// tags land in [`CartAction::Unknown`].
///
/// ```
/// use storefront_cart::cart::CartAction;
/// let action: CartAction = serde_json::from_str(r#"{"type": "REMOVE_ITEM", "productId": 4}"#).unwrap();
/// assert!(matches!(action, CartAction::RemoveItem { product_id: Some(_) }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add units of a product, merging with an existing entry.
    AddItem {
        #[serde(default)]
        product: Option<Arc<Product>>,
        #[serde(default)]
        quantity: Option<i64>,
    },
    /// Set the quantity of a product's entry; zero or less removes it.
    UpdateQuantity {
        #[serde(default, rename = "productId")]
        product_id: Option<ProductId>,
        #[serde(default)]
        quantity: Option<i64>,
    },
    /// Remove a product's entry.
    RemoveItem {
        #[serde(default, rename = "productId")]
        product_id: Option<ProductId>,
    },
    /// Empty the cart.
    ClearCart,
    /// Any action type the cart does not know.
    #[serde(other)]
    Unknown,
}

impl CartAction {
    /// Add `quantity` units of `product`.
    pub fn add_item(product: Arc<Product>, quantity: i64) -> Self {
        Self::AddItem {
            product: Some(product),
            quantity: Some(quantity),
        }
    }

    /// Set a product's quantity.
    pub fn update_quantity(product_id: ProductId, quantity: i64) -> Self {
        Self::UpdateQuantity {
            product_id: Some(product_id),
            quantity: Some(quantity),
        }
    }

    /// Remove a product.
    pub fn remove_item(product_id: ProductId) -> Self {
        Self::RemoveItem {
            product_id: Some(product_id),
        }
    }

    /// Empty the cart.
    pub fn clear_cart() -> Self {
        Self::ClearCart
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "add_item",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::RemoveItem { .. } => "remove_item",
            Self::ClearCart => "clear_cart",
            Self::Unknown => "unknown",
        }
    }
}
