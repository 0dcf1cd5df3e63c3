//! The cart reducer.
//!
//! [`apply`] is the only way a cart state changes. It never fails: an action
//! that cannot be applied hands back the input state unchanged together with
//! the reason, so callers stay resilient to partial payloads while tests can
//! still tell a no-op from a change.

use std::sync::Arc;

use crate::cart::helpers::find_entry;
use crate::cart::{CartAction, CartEntry, CartState};
use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::{EntryIdGenerator, ProductId};

/// What happened to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action produced the returned state.
    Applied,
    /// The action was a no-op for the given reason.
    Rejected(CartError),
}

impl Outcome {
    /// Check if the action changed the cart.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<&CartError> {
        match self {
            Outcome::Applied => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

/// Result of one reducer step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State after the action.
    pub state: CartState,
    /// Whether the action applied.
    pub outcome: Outcome,
}

impl Transition {
    fn applied(state: CartState) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
        }
    }

    fn rejected(state: &CartState, reason: CartError) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::Rejected(reason),
        }
    }
}

/// Advance the cart by one action.
///
/// New entries draw their IDs from `ids`, which must live as long as the
/// session so IDs are never reused.
pub fn apply(state: &CartState, action: &CartAction, ids: &mut EntryIdGenerator) -> Transition {
    let result = match action {
        CartAction::AddItem { product, quantity } => match (product, quantity) {
            (None, _) => Err(CartError::MissingProduct),
            (_, None) => Err(CartError::MissingQuantity),
            (Some(product), Some(quantity)) => add_item(state, product, *quantity, ids),
        },
        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => match (product_id, quantity) {
            (None, _) => Err(CartError::MissingProductId),
            (_, None) => Err(CartError::MissingQuantity),
            (Some(product_id), Some(quantity)) => update_quantity(state, *product_id, *quantity),
        },
        CartAction::RemoveItem { product_id } => match product_id {
            None => Err(CartError::MissingProductId),
            Some(product_id) => remove_item(state, *product_id),
        },
        CartAction::ClearCart => Ok(CartState::empty()),
        CartAction::Unknown => Err(CartError::UnknownAction),
    };

    match result {
        Ok(next) => Transition::applied(next),
        Err(reason) => Transition::rejected(state, reason),
    }
}

fn add_item(
    state: &CartState,
    product: &Arc<Product>,
    quantity: i64,
    ids: &mut EntryIdGenerator,
) -> Result<CartState, CartError> {
    if quantity <= 0 {
        return Err(CartError::InvalidQuantity(quantity));
    }
    if product.is_sold_out() {
        return Err(CartError::OutOfStock(product.id));
    }

    let entries = if find_entry(state.entries(), product.id).is_some() {
        state
            .entries()
            .iter()
            .map(|entry| {
                if entry.product_id() == product.id {
                    // The line keeps the product it was created with and must
                    // stay within that product's stock as well.
                    let stock = product.stock.min(entry.product.stock);
                    let merged = entry.quantity.saturating_add(quantity).min(stock);
                    CartEntry::new(entry.id, entry.product.clone(), merged)
                } else {
                    entry.clone()
                }
            })
            .collect()
    } else {
        let mut entries = state.entries().to_vec();
        entries.push(CartEntry::new(
            ids.next_for(product.id),
            product.clone(),
            quantity.min(product.stock),
        ));
        entries
    };

    CartState::from_entries(entries)
}

fn update_quantity(
    state: &CartState,
    product_id: ProductId,
    quantity: i64,
) -> Result<CartState, CartError> {
    if quantity <= 0 {
        return remove_item(state, product_id);
    }
    if find_entry(state.entries(), product_id).is_none() {
        return Err(CartError::ItemNotInCart(product_id));
    }

    let entries = state
        .entries()
        .iter()
        .map(|entry| {
            if entry.product_id() == product_id {
                let capped = quantity.min(entry.product.stock);
                CartEntry::new(entry.id, entry.product.clone(), capped)
            } else {
                entry.clone()
            }
        })
        .collect();

    CartState::from_entries(entries)
}

fn remove_item(state: &CartState, product_id: ProductId) -> Result<CartState, CartError> {
    if find_entry(state.entries(), product_id).is_none() {
        return Err(CartError::ItemNotInCart(product_id));
    }

    let entries = state
        .entries()
        .iter()
        .filter(|entry| entry.product_id() != product_id)
        .cloned()
        .collect();

    CartState::from_entries(entries)
}
