//! Observable cart store for a single session.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::cart::{apply, CartAction, CartState, Outcome};
use crate::catalog::Product;
use crate::ids::{EntryIdGenerator, ProductId};

/// Holds a session's cart and publishes every new snapshot.
///
/// The store is driven from one place (the UI event loop) and read from many:
/// each surface that needs the cart calls [`CartStore::subscribe`] and gets a
/// `watch` receiver that always holds the latest state. Rejected actions
/// publish nothing.
#[derive(Debug)]
pub struct CartStore {
    ids: EntryIdGenerator,
    snapshots: watch::Sender<Arc<CartState>>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Arc::new(CartState::empty()));
        Self {
            ids: EntryIdGenerator::new(),
            snapshots,
        }
    }

    /// Apply one action to the current cart.
    pub fn dispatch(&mut self, action: CartAction) -> Outcome {
        let current = self.state();
        let transition = apply(&current, &action, &mut self.ids);

        match &transition.outcome {
            Outcome::Applied => {
                debug!(
                    action = action.kind(),
                    total_items = transition.state.total_items(),
                    total_cents = transition.state.total_price().amount_cents,
                    "cart action applied"
                );
                self.snapshots.send_replace(Arc::new(transition.state));
            }
            Outcome::Rejected(reason) => {
                debug!(action = action.kind(), %reason, "cart action ignored");
            }
        }

        transition.outcome
    }

    /// Add units of a product.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: i64) -> Outcome {
        self.dispatch(CartAction::add_item(product, quantity))
    }

    /// Set a product's quantity; zero or less removes it.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> Outcome {
        self.dispatch(CartAction::update_quantity(product_id, quantity))
    }

    /// Remove a product.
    pub fn remove_item(&mut self, product_id: ProductId) -> Outcome {
        self.dispatch(CartAction::remove_item(product_id))
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> Outcome {
        self.dispatch(CartAction::ClearCart)
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<CartState> {
        self.snapshots.borrow().clone()
    }

    /// Receive every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CartState>> {
        self.snapshots.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
