//! Integration tests for Sweet Stack.
//!
//! The tests exercise the storefront the way a UI would: everything goes
//! through [`AppState`] and the public store operations, with storage
//! backed by memory (or a temp directory where persistence across
//! restarts is the point).
//!
//! # Test Categories
//!
//! - `cart_flow` - cart invariants across operation sequences
//! - `browse_lists` - wishlist and comparison list behavior
//! - `checkout_flow` - payment, order placement, and the delivery hand-off
//! - `delivery_tracking` - the status machine and event log

use sweetstack_storefront::persistence::{MemoryStorage, StorageHandle};
use sweetstack_storefront::state::AppState;

/// A fresh application state over in-memory storage.
#[must_use]
pub fn fresh_state() -> AppState {
    AppState::load(MemoryStorage::handle())
}

/// A fresh application state over the given storage.
#[must_use]
pub fn state_over(storage: StorageHandle) -> AppState {
    AppState::load(storage)
}

/// Clone a catalog product out of the state, panicking on unknown ids.
///
/// # Panics
///
/// Panics if the id is not in the catalog - tests only.
#[must_use]
pub fn cake(state: &AppState, id: &str) -> sweetstack_storefront::catalog::Product {
    state
        .catalog()
        .get(&sweetstack_core::ProductId::new(id))
        .cloned()
        .unwrap_or_else(|| panic!("no product {id} in the catalog"))
}
