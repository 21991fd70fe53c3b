//! Wishlist and comparison list behavior.

#![allow(clippy::unwrap_used)]

use sweetstack_core::ProductId;
use sweetstack_integration_tests::{cake, fresh_state};

#[test]
fn wishlist_deduplicates_by_id() {
    let mut state = fresh_state();
    let lemon = cake(&state, "6");

    state.wishlist.add(lemon.clone());
    state.wishlist.add(lemon);

    assert_eq!(state.wishlist.items().len(), 1);
    assert!(state.wishlist.contains(&ProductId::new("6")));
}

#[test]
fn compare_keeps_the_first_four() {
    let mut state = fresh_state();

    for id in ["1", "2", "3", "4", "5"] {
        let product = cake(&state, id);
        state.compare.add(product);
    }

    let stored: Vec<_> = state.compare.items().iter().map(|p| p.id.as_str().to_owned()).collect();
    assert_eq!(stored, ["1", "2", "3", "4"]);
    assert!(!state.compare.contains(&ProductId::new("5")));
}

#[test]
fn compare_clear_then_refill() {
    let mut state = fresh_state();
    for id in ["1", "2", "3", "4"] {
        state.compare.add(cake(&state, id));
    }
    state.compare.clear();
    assert!(state.compare.items().is_empty());

    assert!(state.compare.add(cake(&state, "5")));
    assert!(state.compare.contains(&ProductId::new("5")));
}

#[test]
fn lists_are_independent_of_the_cart() {
    let mut state = fresh_state();
    let velvet = cake(&state, "3");

    state.wishlist.add(velvet.clone());
    state.compare.add(velvet.clone());
    state.cart.add(velvet, 1);
    state.cart.clear();

    // Clearing the cart leaves the other stores alone.
    assert!(state.wishlist.contains(&ProductId::new("3")));
    assert!(state.compare.contains(&ProductId::new("3")));
}
