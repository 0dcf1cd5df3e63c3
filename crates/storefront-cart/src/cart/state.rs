//! Cart state and cart entry types.

use std::sync::Arc;

use crate::cart::helpers::{calculate_total_items, calculate_total_price};
use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::{CartEntryId, ProductId};
use crate::money::Money;
use serde::Serialize;

/// One line in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartEntry {
    /// Session-unique entry identifier.
    pub id: CartEntryId,
    /// The product this line is for.
    pub product: Arc<Product>,
    /// Quantity, always between 1 and the product's stock.
    pub quantity: i64,
}

impl CartEntry {
    pub(crate) fn new(id: CartEntryId, product: Arc<Product>, quantity: i64) -> Self {
        Self {
            id,
            product,
            quantity,
        }
    }

    /// ID of the referenced product.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

/// The cart: ordered entries plus totals derived from them.
///
/// Totals are private and only ever produced by [`CartState::from_entries`],
/// so they cannot drift from the entries they summarize.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CartState {
    entries: Vec<CartEntry>,
    total_items: i64,
    total_price: Money,
}

impl CartState {
    /// The empty cart a session starts with.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from entries, computing both totals from scratch.
    pub fn from_entries(entries: Vec<CartEntry>) -> Result<Self, CartError> {
        let total_items = calculate_total_items(&entries).ok_or(CartError::Overflow)?;
        let total_price = calculate_total_price(&entries).ok_or(CartError::Overflow)?;
        Ok(Self {
            entries,
            total_items,
            total_price,
        })
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of all entry quantities.
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Sum of quantity times unit price over all entries.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry for a product.
    pub fn entry_for(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id() == product_id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.entry_for(product_id).is_some()
    }
}
