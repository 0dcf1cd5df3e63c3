//! Order summary read model for the cart page.

use crate::cart::helpers::item_subtotal;
use crate::cart::{CartState, LineControls};
use crate::ids::{CartEntryId, ProductId};
use crate::money::Money;
use serde::Serialize;

/// Characters of a product description shown on a cart line.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 100;

/// Everything the cart page renders, computed from one snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderSummary {
    /// One row per cart entry, in cart order.
    pub lines: Vec<LineSummary>,
    /// Total units in the cart.
    pub total_items: i64,
    /// Label such as "1 item" or "3 items".
    pub item_label: String,
    /// Final total.
    pub total_price: Money,
    /// Checkout is not offered by the storefront.
    pub checkout_available: bool,
}

impl OrderSummary {
    /// Build the summary for a cart state.
    pub fn from_state(state: &CartState, description_limit: usize) -> Self {
        let lines = state
            .entries()
            .iter()
            .map(|entry| {
                let controls = LineControls::new(entry);
                LineSummary {
                    entry_id: entry.id,
                    product_id: entry.product_id(),
                    name: entry.product.name.clone(),
                    description: truncate_description(&entry.product.description, description_limit),
                    unit_price: entry.product.price,
                    stock: entry.product.stock,
                    quantity: entry.quantity,
                    // Totals already passed the overflow check, so each line fits too.
                    subtotal: item_subtotal(entry).unwrap_or_default(),
                    can_increase: controls.can_increase(),
                    can_decrease: controls.can_decrease(),
                }
            })
            .collect();

        Self {
            lines,
            total_items: state.total_items(),
            item_label: item_label(state.total_items()),
            total_price: state.total_price(),
            checkout_available: false,
        }
    }

    /// Check if there is nothing to summarize.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One cart line as displayed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSummary {
    pub entry_id: CartEntryId,
    pub product_id: ProductId,
    pub name: String,
    /// Description cut to the display limit, with "..." when shortened.
    pub description: String,
    pub unit_price: Money,
    pub stock: i64,
    pub quantity: i64,
    pub subtotal: Money,
    pub can_increase: bool,
    pub can_decrease: bool,
}

fn item_label(count: i64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

fn truncate_description(description: &str, limit: usize) -> String {
    match description.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::Product;
    use std::sync::Arc;

    #[test]
    fn test_item_label() {
        assert_eq!(item_label(0), "0 items");
        assert_eq!(item_label(1), "1 item");
        assert_eq!(item_label(7), "7 items");
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("short", 100), "short");
        assert_eq!(truncate_description("abcdef", 3), "abc...");
        assert_eq!(truncate_description("abc", 3), "abc");
        assert_eq!(truncate_description("caf\u{e9} cr\u{e8}me", 4), "caf\u{e9}...");
    }

    #[test]
    fn test_summary_from_state() {
        let mut store = CartStore::new();
        let watch = Arc::new(
            Product::new(ProductId::new(2), "Smart Fitness Watch", Money::new(29999))
                .with_stock(8)
                .with_description("x".repeat(150)),
        );
        let shirt = Arc::new(
            Product::new(ProductId::new(3), "Organic Cotton T-Shirt", Money::new(2999))
                .with_stock(1),
        );
        store.add_item(watch, 2);
        store.add_item(shirt, 1);

        let summary = OrderSummary::from_state(&store.state(), DEFAULT_DESCRIPTION_LIMIT);

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.item_label, "3 items");
        assert_eq!(summary.total_price, Money::new(62997));
        assert!(!summary.checkout_available);

        let first = &summary.lines[0];
        assert_eq!(first.subtotal, Money::new(59998));
        assert_eq!(first.description.len(), 103);
        assert!(first.can_increase);
        assert!(first.can_decrease);

        let second = &summary.lines[1];
        assert!(!second.can_increase);
        assert!(!second.can_decrease);
    }

    #[test]
    fn test_empty_summary() {
        let summary = OrderSummary::from_state(&CartState::empty(), DEFAULT_DESCRIPTION_LIMIT);
        assert!(summary.is_empty());
        assert_eq!(summary.item_label, "0 items");
    }
}
