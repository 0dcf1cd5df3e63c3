//! Cart engine for the storefront.
//!
//! This crate holds everything the cart needs to stay consistent:
//!
//! - **Catalog**: the immutable `Product` shape handed over by the catalog gateway
//! - **Money**: integer-cent amounts and en-US display formatting
//! - **Cart**: the state reducer, its actions, the observable store, and the
//!   read models used by the cart page
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_cart::prelude::*;
//!
//! let headphones = Arc::new(
//!     Product::new(ProductId::new(1), "Wireless Headphones", Money::from_decimal(199.99))
//!         .with_stock(15),
//! );
//!
//! let mut store = CartStore::new();
//! assert!(store.add_item(headphones.clone(), 2).is_applied());
//! assert!(store.add_item(headphones, 20).is_applied());
//!
//! let state = store.state();
//! assert_eq!(state.total_items(), 15);
//! assert_eq!(format_currency(state.total_price()), "$2,999.85");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CartError;
pub use ids::*;
pub use money::{format_currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::*;
    pub use crate::money::{format_currency, Money};

    // Catalog
    pub use crate::catalog::{Product, Rating};

    // Cart
    pub use crate::cart::{
        apply, clamp_quantity, item_subtotal, CartAction, CartEntry, CartState, CartStore,
        LineControls, LineSummary, OrderSummary, Outcome, Transition,
    };
}
