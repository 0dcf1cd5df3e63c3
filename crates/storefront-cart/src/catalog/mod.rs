//! Product catalog module.
//!
//! Contains the product shape shared by the catalog gateway and the cart.

mod product;

pub use product::{Product, Rating};
