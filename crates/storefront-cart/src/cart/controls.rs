//! Per-line quantity controls on the cart page.

use crate::cart::helpers::clamp_quantity;
use crate::cart::{CartAction, CartEntry};

/// The stepper, input box, and remove button for one cart line.
///
/// Each control turns a user gesture into the action to dispatch, or `None`
/// when the control is disabled.
#[derive(Debug, Clone, Copy)]
pub struct LineControls<'a> {
    entry: &'a CartEntry,
}

impl<'a> LineControls<'a> {
    pub fn new(entry: &'a CartEntry) -> Self {
        Self { entry }
    }

    /// Whether the "+" button is enabled.
    pub fn can_increase(&self) -> bool {
        self.entry.quantity < self.entry.product.stock
    }

    /// Whether the "-" button is enabled.
    pub fn can_decrease(&self) -> bool {
        self.entry.quantity > 1
    }

    pub fn increase(&self) -> Option<CartAction> {
        self.can_increase().then(|| {
            CartAction::update_quantity(self.entry.product_id(), self.entry.quantity + 1)
        })
    }

    pub fn decrease(&self) -> Option<CartAction> {
        self.can_decrease().then(|| {
            CartAction::update_quantity(self.entry.product_id(), self.entry.quantity - 1)
        })
    }

    /// Typed quantity, bounded to the line's stock before it is dispatched.
    pub fn set_from_input(&self, input: &str) -> CartAction {
        let requested = parse_quantity_input(input);
        let quantity = clamp_quantity(requested as f64, self.entry.product.stock);
        CartAction::update_quantity(self.entry.product_id(), quantity)
    }

    pub fn remove(&self) -> CartAction {
        CartAction::remove_item(self.entry.product_id())
    }
}

/// Read a typed quantity leniently.
///
/// Leading whitespace is skipped and the longest signed integer prefix is
/// used, so `"3 pcs"` reads as 3. Input with no digits, or a zero, reads as 1.
/// A digit run too long for `i64` saturates, so it still clamps to stock.
pub fn parse_quantity_input(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return 1;
    }

    match digits[..end].parse::<i64>() {
        Ok(0) => 1,
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
