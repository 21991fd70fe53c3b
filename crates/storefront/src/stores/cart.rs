//! The shopping cart store.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use sweetstack_core::ProductId;

use crate::catalog::Product;
use crate::persistence::StorageHandle;

const CART_KEY: &str = "sweet-stack-cart";

/// One cart row: a distinct product and its quantity.
///
/// The line id equals the product id - there is at most one line per
/// product, and adding the same product again merges quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// `price × quantity` for this line.
    #[must_use]
    pub const fn line_total(&self) -> u64 {
        self.product.price.times(self.quantity)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CartState {
    lines: Vec<CartLine>,
    total: u64,
}

/// The shopping cart: lines plus a derived running total.
///
/// Invariants, re-established after every mutation:
/// - at most one line per product id
/// - every line has quantity ≥ 1 (a zero quantity removes the line)
/// - `total` equals the sum of `price × quantity` over all lines
pub struct CartStore {
    state: CartState,
    storage: StorageHandle,
    revision: watch::Sender<u64>,
}

impl CartStore {
    /// Rehydrate the cart from storage, or start empty.
    #[must_use]
    pub fn load(storage: StorageHandle) -> Self {
        let mut state: CartState = super::load_state(&storage, CART_KEY);
        // Never trust a persisted total over the lines it was derived from.
        state.total = derived_total(&state.lines);
        let (revision, _) = watch::channel(0);
        Self {
            state,
            storage,
            revision,
        }
    }

    /// Add a product to the cart, merging into an existing line.
    ///
    /// A zero quantity is ignored.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.state.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.state.lines.push(CartLine {
                id: product.id.clone(),
                product,
                quantity,
            });
        }
        self.commit();
    }

    /// Set a line's quantity exactly. Zero removes the line.
    ///
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.state.lines.iter_mut().find(|l| &l.id == id) {
            line.quantity = quantity;
            self.commit();
        }
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.state.lines.len();
        self.state.lines.retain(|l| &l.id != id);
        if self.state.lines.len() != before {
            self.commit();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.state.lines.clear();
        self.commit();
    }

    /// The current cart lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    /// The running total: `Σ price × quantity` over all lines.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.state.total
    }

    /// Total number of items (quantities summed across lines).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.state.lines.iter().map(|l| l.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lines.is_empty()
    }

    /// Subscribe to change notifications. The value is a revision counter.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn commit(&mut self) {
        self.state.total = derived_total(&self.state.lines);
        super::persist_state(&self.storage, CART_KEY, &self.state);
        self.revision.send_modify(|r| *r += 1);
    }
}

fn derived_total(lines: &[CartLine]) -> u64 {
    lines.iter().map(CartLine::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::persistence::MemoryStorage;

    fn cart() -> CartStore {
        CartStore::load(MemoryStorage::handle())
    }

    fn cake(id: &str) -> Product {
        Catalog::new().get(&ProductId::new(id)).unwrap().clone()
    }

    fn check_total(store: &CartStore) {
        let expected: u64 = store.lines().iter().map(CartLine::line_total).sum();
        assert_eq!(store.total(), expected);
    }

    #[test]
    fn test_add_merges_quantities() {
        let mut store = cart();
        store.add(cake("1"), 2);
        check_total(&store);
        store.add(cake("1"), 3);
        check_total(&store);

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines().first().map(|l| l.quantity), Some(5));
    }

    #[test]
    fn test_totals_follow_the_lines() {
        // A (6500 × 2) + B (7000 × 1) = 20000; remove A → 7000; clear → 0.
        let mut store = cart();
        store.add(cake("1"), 2);
        store.add(cake("3"), 1);
        assert_eq!(store.total(), 20000);

        store.remove(&ProductId::new("1"));
        assert_eq!(store.total(), 7000);

        store.clear();
        assert_eq!(store.total(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut store = cart();
        store.add(cake("2"), 4);
        store.update_quantity(&ProductId::new("2"), 2);
        assert_eq!(store.lines().first().map(|l| l.quantity), Some(2));
        check_total(&store);
    }

    #[test]
    fn test_zero_quantity_removes_the_line() {
        let mut store = cart();
        store.add(cake("2"), 4);
        store.update_quantity(&ProductId::new("2"), 0);
        assert!(store.is_empty());
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut store = cart();
        store.add(cake("1"), 1);
        store.remove(&ProductId::new("999"));
        store.update_quantity(&ProductId::new("999"), 3);
        assert_eq!(store.lines().len(), 1);
        check_total(&store);
    }

    #[test]
    fn test_zero_quantity_add_is_ignored() {
        let mut store = cart();
        store.add(cake("1"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut store = cart();
        store.add(cake("1"), 2);
        store.add(cake("2"), 1);
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_rehydrates_from_storage() {
        let storage = MemoryStorage::handle();
        {
            let mut store = CartStore::load(storage.clone());
            store.add(cake("1"), 2);
        }
        let store = CartStore::load(storage);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.total(), 13000);
    }

    #[test]
    fn test_subscription_sees_mutations() {
        let mut store = cart();
        let rx = store.subscribe();
        let before = *rx.borrow();
        store.add(cake("1"), 1);
        assert!(*rx.borrow() > before);
    }
}
