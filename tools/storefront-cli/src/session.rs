//! A shopping session: one product listing plus one cart.

use serde::Deserialize;
use storefront_cart::cart::{CartAction, CartStore, LineControls, OrderSummary, Outcome};
use storefront_cart::ProductId;
use storefront_catalog::{LoadState, ProductListing, ProductSource};
use tracing::debug;

/// A visitor's request against the cart.
///
/// Also the step format of cart scripts: `{"op": "add", "product": 1, "quantity": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CartCommand {
    /// Add a listed product.
    Add {
        product: ProductId,
        #[serde(default = "default_add_quantity")]
        quantity: i64,
    },
    /// Set a quantity directly. Zero or less removes the line.
    Update { product: ProductId, quantity: i64 },
    /// Type into a line's quantity box.
    Type { product: ProductId, input: String },
    /// Press a line's "+" button.
    Increase { product: ProductId },
    /// Press a line's "-" button.
    Decrease { product: ProductId },
    /// Remove a line.
    Remove { product: ProductId },
    /// Empty the cart.
    Clear,
}

fn default_add_quantity() -> i64 {
    1
}

/// What happened to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// The command was turned into an action and dispatched.
    Dispatched { action: &'static str, outcome: Outcome },
    /// The button the command presses is disabled; nothing was dispatched.
    Disabled(String),
}

impl CommandResult {
    /// True when the cart changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Dispatched { outcome, .. } if outcome.is_applied())
    }

    /// One-line description for the terminal.
    pub fn describe(&self) -> String {
        match self {
            Self::Dispatched {
                action,
                outcome: Outcome::Applied,
            } => format!("{} applied", action),
            Self::Dispatched {
                action,
                outcome: Outcome::Rejected(reason),
            } => format!("{} rejected: {}", action, reason),
            Self::Disabled(reason) => reason.clone(),
        }
    }
}

/// Product listing and cart for one visitor.
pub struct Session<S> {
    listing: ProductListing<S>,
    store: CartStore,
    description_limit: usize,
}

impl<S: ProductSource> Session<S> {
    /// Create a session over a listing that may not be loaded yet.
    pub fn new(listing: ProductListing<S>, description_limit: usize) -> Self {
        Self {
            listing,
            store: CartStore::new(),
            description_limit,
        }
    }

    /// Load products, re-trying up to `retries` more times after a failure.
    pub async fn load(&mut self, retries: u32) -> &LoadState {
        self.listing.load().await;
        for _ in 0..retries {
            if !matches!(self.listing.state(), LoadState::Failed { .. }) {
                break;
            }
            self.listing.retry().await;
        }
        self.listing.state()
    }

    /// One more full load attempt.
    pub async fn retry(&mut self) -> &LoadState {
        self.listing.retry().await
    }

    pub fn listing(&self) -> &ProductListing<S> {
        &self.listing
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// The order summary for the current cart.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_state(&self.store.state(), self.description_limit)
    }

    /// Translate a command into a cart action, the way the page's buttons
    /// would, and dispatch it.
    pub fn execute(&mut self, command: &CartCommand) -> CommandResult {
        let action = match self.action_for(command) {
            Ok(action) => action,
            Err(reason) => {
                debug!(?command, %reason, "command not dispatched");
                return CommandResult::Disabled(reason);
            }
        };

        let kind = action.kind();
        let outcome = self.store.dispatch(action);
        CommandResult::Dispatched {
            action: kind,
            outcome,
        }
    }

    fn action_for(&self, command: &CartCommand) -> Result<CartAction, String> {
        let state = self.store.state();

        let action = match command {
            CartCommand::Add { product, quantity } => CartAction::AddItem {
                // Unlisted products travel as a missing product.
                product: self.listing.find(*product),
                quantity: Some(*quantity),
            },
            CartCommand::Update { product, quantity } => {
                CartAction::update_quantity(*product, *quantity)
            }
            CartCommand::Type { product, input } => match state.entry_for(*product) {
                Some(entry) => LineControls::new(entry).set_from_input(input),
                None => CartAction::update_quantity(
                    *product,
                    storefront_cart::cart::parse_quantity_input(input),
                ),
            },
            CartCommand::Increase { product } => {
                let entry = state
                    .entry_for(*product)
                    .ok_or_else(|| format!("Product {} is not in the cart", product))?;
                LineControls::new(entry)
                    .increase()
                    .ok_or_else(|| format!("No more stock for {}", entry.product.name))?
            }
            CartCommand::Decrease { product } => {
                let entry = state
                    .entry_for(*product)
                    .ok_or_else(|| format!("Product {} is not in the cart", product))?;
                LineControls::new(entry)
                    .decrease()
                    .ok_or_else(|| format!("{} is already at quantity 1", entry.product.name))?
            }
            CartCommand::Remove { product } => CartAction::remove_item(*product),
            CartCommand::Clear => CartAction::clear_cart(),
        };

        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_cart::{CartError, Money};
    use storefront_catalog::{ListingQuery, StaticCatalog};

    async fn loaded_session() -> Session<StaticCatalog> {
        let listing = ProductListing::new(StaticCatalog::builtin(), ListingQuery::All);
        let mut session = Session::new(listing, 100);
        session.load(0).await;
        session
    }

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_script_step_format() {
        let steps: Vec<CartCommand> = serde_json::from_str(
            r#"[
                {"op": "add", "product": 1, "quantity": 2},
                {"op": "add", "product": 7},
                {"op": "update", "product": 1, "quantity": 0},
                {"op": "type", "product": 7, "input": "12"},
                {"op": "increase", "product": 7},
                {"op": "decrease", "product": 7},
                {"op": "remove", "product": 7},
                {"op": "clear"}
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 8);
        assert_eq!(steps[0], CartCommand::Add { product: id(1), quantity: 2 });
        assert_eq!(steps[1], CartCommand::Add { product: id(7), quantity: 1 });
        assert_eq!(
            steps[3],
            CartCommand::Type {
                product: id(7),
                input: "12".to_string()
            }
        );
        assert_eq!(steps[7], CartCommand::Clear);
    }

    #[test]
    fn test_unknown_op_is_an_error() {
        assert!(serde_json::from_str::<CartCommand>(r#"{"op": "checkout"}"#).is_err());
    }

    #[tokio::test]
    async fn test_add_and_summarize() {
        let mut session = loaded_session().await;

        let result = session.execute(&CartCommand::Add { product: id(1), quantity: 2 });
        assert!(result.is_applied());
        assert_eq!(result.describe(), "add_item applied");

        let summary = session.summary();
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_price, Money::new(39998));
    }

    #[tokio::test]
    async fn test_unlisted_product_is_missing() {
        let mut session = loaded_session().await;
        let result = session.execute(&CartCommand::Add { product: id(99), quantity: 1 });

        assert_eq!(
            result,
            CommandResult::Dispatched {
                action: "add_item",
                outcome: Outcome::Rejected(CartError::MissingProduct),
            }
        );
        assert!(session.summary().is_empty());
    }

    #[tokio::test]
    async fn test_typed_quantity_is_clamped_to_stock() {
        let mut session = loaded_session().await;
        session.execute(&CartCommand::Add { product: id(8), quantity: 1 });
        session.execute(&CartCommand::Type {
            product: id(8),
            input: "500".to_string(),
        });

        // Laptop Stand has 10 in stock.
        assert_eq!(session.summary().total_items, 10);
    }

    #[tokio::test]
    async fn test_buttons_disabled_at_bounds() {
        let mut session = loaded_session().await;
        session.execute(&CartCommand::Add { product: id(3), quantity: 1 });

        let result = session.execute(&CartCommand::Decrease { product: id(3) });
        assert_eq!(
            result,
            CommandResult::Disabled("Organic Cotton T-Shirt is already at quantity 1".to_string())
        );

        session.execute(&CartCommand::Update { product: id(3), quantity: 25 });
        let result = session.execute(&CartCommand::Increase { product: id(3) });
        assert!(matches!(result, CommandResult::Disabled(_)));
        assert_eq!(session.summary().total_items, 25);
    }

    #[tokio::test]
    async fn test_increase_absent_line_is_disabled() {
        let mut session = loaded_session().await;
        let result = session.execute(&CartCommand::Increase { product: id(2) });
        assert_eq!(
            result,
            CommandResult::Disabled("Product 2 is not in the cart".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_to_zero_removes() {
        let mut session = loaded_session().await;
        session.execute(&CartCommand::Add { product: id(5), quantity: 3 });
        session.execute(&CartCommand::Update { product: id(5), quantity: 0 });
        assert!(session.summary().is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_is_rejected() {
        let mut session = loaded_session().await;
        let result = session.execute(&CartCommand::Remove { product: id(4) });
        assert_eq!(
            result.describe(),
            "remove_item rejected: Item not in cart: 4"
        );
    }

    #[tokio::test]
    async fn test_clear() {
        let mut session = loaded_session().await;
        session.execute(&CartCommand::Add { product: id(1), quantity: 1 });
        session.execute(&CartCommand::Add { product: id(6), quantity: 2 });

        assert!(session.execute(&CartCommand::Clear).is_applied());
        assert!(session.store().state().is_empty());
    }
}
