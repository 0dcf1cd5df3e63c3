//! Pure helpers shared by the reducer and the cart page.

use crate::cart::CartEntry;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// Total number of units across all entries, or None on overflow.
pub fn calculate_total_items(entries: &[CartEntry]) -> Option<i64> {
    entries
        .iter()
        .try_fold(0i64, |total, entry| total.checked_add(entry.quantity))
}

/// Total price across all entries, or None on overflow.
pub fn calculate_total_price(entries: &[CartEntry]) -> Option<Money> {
    entries.iter().try_fold(Money::zero(), |total, entry| {
        total.checked_add(&item_subtotal(entry)?)
    })
}

/// Quantity times unit price for one entry, or None on overflow.
pub fn item_subtotal(entry: &CartEntry) -> Option<Money> {
    entry.product.price.checked_multiply(entry.quantity)
}

/// Find the entry holding a product.
pub fn find_entry(entries: &[CartEntry], product_id: ProductId) -> Option<&CartEntry> {
    entries.iter().find(|e| e.product_id() == product_id)
}

/// Check if a product has at least `requested` units in stock.
pub fn is_in_stock(product: &Product, requested: i64) -> bool {
    product.is_in_stock(requested)
}

/// Bound a requested quantity into `[1, max_stock]`.
///
/// Anything below 1 (including NaN) becomes 1, anything above the stock
/// becomes the stock, and everything else is floored to a whole unit. The
/// lower bound is checked first.
pub fn clamp_quantity(requested: f64, max_stock: i64) -> i64 {
    if requested.is_nan() || requested < 1.0 {
        return 1;
    }
    if requested > max_stock as f64 {
        return max_stock;
    }
    requested.floor() as i64
}
