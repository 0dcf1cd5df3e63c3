//! Terminal rendering of product lists and the order summary.

use std::sync::Arc;

use console::style;
use storefront_cart::cart::OrderSummary;
use storefront_cart::catalog::Product;
use storefront_cart::format_currency;

use crate::output::{stock_badge, Output};

const PRODUCT_WIDTHS: [usize; 5] = [4, 36, 18, 10, 10];
const LINE_WIDTHS: [usize; 5] = [4, 36, 10, 5, 10];

/// Print a product table.
pub fn products(output: &Output, products: &[Arc<Product>]) {
    if products.is_empty() {
        output.info("No products found.");
        return;
    }

    output.table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &PRODUCT_WIDTHS);
    for product in products {
        let id = product.id.to_string();
        let price = format_currency(product.price);
        let stock = stock_badge(product.stock);
        output.table_row(
            &[&id, &product.name, &product.category, &price, &stock],
            &PRODUCT_WIDTHS,
        );
    }
}

/// Print the cart page: one row per line, then the totals.
pub fn order_summary(output: &Output, summary: &OrderSummary) {
    if summary.is_empty() {
        output.info("Your cart is empty.");
        output.list_item("Browse products with `storefront products` to get started.");
        return;
    }

    output.header("Shopping Cart");
    output.table_row(&["ID", "ITEM", "PRICE", "QTY", "SUBTOTAL"], &LINE_WIDTHS);
    for line in &summary.lines {
        let id = line.product_id.to_string();
        let price = format_currency(line.unit_price);
        let quantity = line.quantity.to_string();
        let subtotal = format_currency(line.subtotal);
        output.table_row(&[&id, &line.name, &price, &quantity, &subtotal], &LINE_WIDTHS);
        if !line.description.is_empty() {
            output.table_row(&["", &line.description], &[LINE_WIDTHS[0], 0]);
        }
        if !line.can_increase {
            output.table_row(&["", "(no more in stock)"], &[LINE_WIDTHS[0], 0]);
        }
    }

    output.header("Order Summary");
    output.kv(
        &format!("Subtotal ({})", summary.item_label),
        &format_currency(summary.total_price),
    );
    output.kv("Shipping", "Free");
    output.kv(
        "Total",
        &style(format_currency(summary.total_price)).bold().to_string(),
    );
    if !summary.checkout_available {
        output.kv("Checkout", &style("unavailable").dim().to_string());
    }
}
