//! Cart error types.
//!
//! None of these ever escape the reducer as a failure. A transition that hits
//! one of them leaves the state untouched and reports the reason through
//! [`Outcome::Rejected`](crate::cart::Outcome::Rejected).

use crate::ids::ProductId;
use thiserror::Error;

/// Reasons a cart action was not applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The action carried no product.
    #[error("Action is missing a product")]
    MissingProduct,

    /// The action carried no product ID.
    #[error("Action is missing a product ID")]
    MissingProductId,

    /// The action carried no quantity.
    #[error("Action is missing a quantity")]
    MissingQuantity,

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// The product has no stock to put in the cart.
    #[error("Product out of stock: {0}")]
    OutOfStock(ProductId),

    /// The action type is not one the cart understands.
    #[error("Unrecognized cart action")]
    UnknownAction,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart totals")]
    Overflow,
}
