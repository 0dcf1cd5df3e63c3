//! Drives long action sequences through the reducer and checks the cart
//! invariants after every step.

use std::collections::HashSet;
use std::sync::Arc;

use storefront_cart::prelude::*;

/// Small deterministic generator so sequences are reproducible.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn range(&mut self, low: i64, high: i64) -> i64 {
        low + (self.next() % (high - low + 1) as u64) as i64
    }
}

fn catalog() -> Vec<Arc<Product>> {
    [(1, 19999, 15), (2, 29999, 8), (3, 2999, 25), (4, 3499, 1), (5, 4999, 0), (6, 5999, 3)]
        .into_iter()
        .map(|(id, cents, stock)| {
            Arc::new(
                Product::new(ProductId::new(id), format!("Product {id}"), Money::new(cents))
                    .with_stock(stock),
            )
        })
        .collect()
}

fn random_action(rng: &mut XorShift, products: &[Arc<Product>]) -> CartAction {
    let product = products[rng.range(0, products.len() as i64 - 1) as usize].clone();
    match rng.range(0, 9) {
        0..=3 => CartAction::add_item(product, rng.range(-2, 30)),
        4..=5 => CartAction::update_quantity(product.id, rng.range(-3, 30)),
        6 => CartAction::remove_item(product.id),
        7 => CartAction::AddItem {
            product: None,
            quantity: Some(rng.range(1, 5)),
        },
        8 => CartAction::Unknown,
        _ => {
            if rng.range(0, 4) == 0 {
                CartAction::ClearCart
            } else {
                CartAction::add_item(product, 1)
            }
        }
    }
}

fn assert_invariants(state: &CartState) {
    let expected_items: i64 = state.entries().iter().map(|e| e.quantity).sum();
    let expected_price = Money::try_sum(
        state
            .entries()
            .iter()
            .filter_map(item_subtotal)
            .collect::<Vec<_>>()
            .iter(),
    )
    .unwrap();

    assert_eq!(state.total_items(), expected_items);
    assert_eq!(state.total_price(), expected_price);

    let mut seen = HashSet::new();
    for entry in state.entries() {
        assert!(entry.quantity >= 1, "entry below one unit: {:?}", entry);
        assert!(
            entry.quantity <= entry.product.stock,
            "entry above stock: {:?}",
            entry
        );
        assert!(seen.insert(entry.product_id()), "duplicate entry for {}", entry.product_id());
    }
}

#[test]
fn test_invariants_hold_after_every_step() {
    let products = catalog();

    for seed in [1u64, 7, 42, 1234, 98765] {
        let mut rng = XorShift(seed);
        let mut ids = EntryIdGenerator::new();
        let mut state = CartState::empty();

        for _ in 0..500 {
            let action = random_action(&mut rng, &products);
            let transition = apply(&state, &action, &mut ids);

            if !transition.outcome.is_applied() {
                assert_eq!(transition.state, state, "rejected {:?} changed the cart", action);
            }

            state = transition.state;
            assert_invariants(&state);
        }
    }
}

#[test]
fn test_entry_ids_never_come_back() {
    let products = catalog();
    let mut rng = XorShift(2024);
    let mut store = CartStore::new();
    let mut live: HashSet<CartEntryId> = HashSet::new();
    let mut retired: HashSet<CartEntryId> = HashSet::new();

    for _ in 0..500 {
        store.dispatch(random_action(&mut rng, &products));
        let current: HashSet<CartEntryId> = store.state().entries().iter().map(|e| e.id).collect();

        for id in &current {
            assert!(!retired.contains(id), "entry ID {} was reused", id);
        }
        retired.extend(live.difference(&current).copied());
        live = current;
    }
}

#[test]
fn test_clear_cart_from_any_state() {
    let products = catalog();
    let mut rng = XorShift(99);
    let mut ids = EntryIdGenerator::new();
    let mut state = CartState::empty();

    for _ in 0..200 {
        state = apply(&state, &random_action(&mut rng, &products), &mut ids).state;
        let cleared = apply(&state, &CartAction::ClearCart, &mut ids);
        assert_eq!(cleared.state, CartState::empty());
        assert!(cleared.outcome.is_applied());
    }
}

#[test]
fn test_update_to_zero_equals_remove() {
    let products = catalog();
    let mut rng = XorShift(5);
    let mut ids = EntryIdGenerator::new();
    let mut state = CartState::empty();

    for _ in 0..300 {
        state = apply(&state, &random_action(&mut rng, &products), &mut ids).state;
        for entry in state.entries() {
            let id = entry.product_id();
            let updated = apply(&state, &CartAction::update_quantity(id, 0), &mut ids);
            let removed = apply(&state, &CartAction::remove_item(id), &mut ids);
            assert_eq!(updated, removed);
        }
    }
}

#[test]
fn test_documented_scenarios() {
    let mut ids = EntryIdGenerator::new();
    let product1 = Arc::new(
        Product::new(ProductId::new(1), "Headphones", Money::from_decimal(10.0)).with_stock(5),
    );

    let state = apply(&CartState::empty(), &CartAction::add_item(product1.clone(), 3), &mut ids).state;
    assert_eq!(state.unique_item_count(), 1);
    assert_eq!(state.entries()[0].quantity, 3);
    assert_eq!(state.total_items(), 3);
    assert_eq!(state.total_price(), Money::from_decimal(30.0));

    let clamped = apply(&state, &CartAction::add_item(product1, 10), &mut ids).state;
    assert_eq!(clamped.entries()[0].quantity, 5);
    assert_eq!(clamped.total_items(), 5);

    let removed = apply(&state, &CartAction::update_quantity(ProductId::new(1), -1), &mut ids).state;
    assert!(removed.is_empty());
    assert_eq!(removed.total_items(), 0);
    assert_eq!(removed.total_price(), Money::zero());

    let malformed = CartAction::AddItem {
        product: None,
        quantity: Some(2),
    };
    let unchanged = apply(&state, &malformed, &mut ids);
    assert_eq!(unchanged.state, state);
    assert_eq!(unchanged.outcome, Outcome::Rejected(CartError::MissingProduct));
}
