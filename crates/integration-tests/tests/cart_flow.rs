//! Cart invariants across operation sequences.

#![allow(clippy::unwrap_used)]

use sweetstack_core::ProductId;
use sweetstack_integration_tests::{cake, fresh_state};
use sweetstack_storefront::stores::CartLine;

/// The cart's one real invariant: the total always equals the sum over the
/// lines, no matter what sequence of operations got us here.
fn assert_total_consistent(state: &sweetstack_storefront::state::AppState) {
    let expected: u64 = state.cart.lines().iter().map(CartLine::line_total).sum();
    assert_eq!(state.cart.total(), expected);
}

#[test]
fn total_tracks_every_operation() {
    let mut state = fresh_state();

    state.cart.add(cake(&state, "1"), 2);
    assert_total_consistent(&state);

    state.cart.add(cake(&state, "3"), 1);
    assert_total_consistent(&state);
    assert_eq!(state.cart.total(), 20000);

    state.cart.update_quantity(&ProductId::new("1"), 1);
    assert_total_consistent(&state);

    state.cart.remove(&ProductId::new("1"));
    assert_total_consistent(&state);
    assert_eq!(state.cart.total(), 7000);

    state.cart.clear();
    assert_total_consistent(&state);
    assert_eq!(state.cart.total(), 0);
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let mut state = fresh_state();
    state.cart.add(cake(&state, "2"), 3);
    state.cart.add(cake(&state, "2"), 4);

    assert_eq!(state.cart.lines().len(), 1);
    let line = state.cart.lines().first().unwrap();
    assert_eq!(line.quantity, 7);
    assert_total_consistent(&state);
}

#[test]
fn zero_quantity_update_removes_the_line() {
    let mut state = fresh_state();
    state.cart.add(cake(&state, "4"), 2);
    state.cart.update_quantity(&ProductId::new("4"), 0);

    assert!(state.cart.is_empty());
    assert!(!state.cart.lines().iter().any(|l| l.id == ProductId::new("4")));
    assert_eq!(state.cart.total(), 0);
}

#[test]
fn each_store_writes_its_own_namespaced_blob() {
    let storage = sweetstack_storefront::persistence::MemoryStorage::handle();
    let mut state = sweetstack_integration_tests::state_over(storage.clone());

    state.cart.add(cake(&state, "1"), 2);
    state.wishlist.add(cake(&state, "2"));

    let blob = storage.read("sweet-stack-cart").unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed["total"], 13000);
    assert_eq!(parsed["lines"].as_array().map(Vec::len), Some(1));

    // The wishlist lives under its own key; the delivery key is untouched.
    assert!(storage.read("sweet-stack-wishlist").unwrap().is_some());
    assert!(storage.read("sweet-stack-delivery").unwrap().is_none());
}

#[test]
fn cart_state_survives_a_restart() {
    let storage = sweetstack_storefront::persistence::MemoryStorage::handle();
    {
        let mut state = sweetstack_integration_tests::state_over(storage.clone());
        let chocolate = cake(&state, "1");
        state.cart.add(chocolate, 2);
    }

    // A second session over the same storage sees the same cart.
    let state = sweetstack_integration_tests::state_over(storage);
    assert_eq!(state.cart.lines().len(), 1);
    assert_eq!(state.cart.total(), 13000);
}
