//! Shopping cart module.
//!
//! Contains the cart state, its actions and reducer, the observable store,
//! and the read models the cart page renders from.

mod action;
mod controls;
mod helpers;
mod reducer;
mod state;
mod store;
mod summary;

pub use action::CartAction;
pub use controls::{parse_quantity_input, LineControls};
pub use helpers::{
    calculate_total_items, calculate_total_price, clamp_quantity, find_entry, is_in_stock,
    item_subtotal,
};
pub use reducer::{apply, Outcome, Transition};
pub use state::{CartEntry, CartState};
pub use store::CartStore;
pub use summary::{LineSummary, OrderSummary, DEFAULT_DESCRIPTION_LIMIT};
