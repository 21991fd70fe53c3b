//! The wishlist store.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use sweetstack_core::ProductId;

use crate::catalog::Product;
use crate::persistence::StorageHandle;

const WISHLIST_KEY: &str = "sweet-stack-wishlist";

#[derive(Debug, Default, Serialize, Deserialize)]
struct WishlistState {
    items: Vec<Product>,
}

/// Saved-for-later products. A product is either in or out - there is no
/// quantity, and adding an existing product is a no-op.
pub struct WishlistStore {
    state: WishlistState,
    storage: StorageHandle,
    revision: watch::Sender<u64>,
}

impl WishlistStore {
    /// Rehydrate the wishlist from storage, or start empty.
    #[must_use]
    pub fn load(storage: StorageHandle) -> Self {
        let state = super::load_state(&storage, WISHLIST_KEY);
        let (revision, _) = watch::channel(0);
        Self {
            state,
            storage,
            revision,
        }
    }

    /// Save a product. Duplicates are ignored.
    pub fn add(&mut self, product: Product) {
        if self.contains(&product.id) {
            return;
        }
        self.state.items.push(product);
        self.commit();
    }

    /// Remove a saved product. Unknown ids are ignored.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.state.items.len();
        self.state.items.retain(|p| &p.id != id);
        if self.state.items.len() != before {
            self.commit();
        }
    }

    /// Whether a product is saved.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.state.items.iter().any(|p| &p.id == id)
    }

    /// The saved products, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.state.items
    }

    /// Subscribe to change notifications. The value is a revision counter.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn commit(&mut self) {
        super::persist_state(&self.storage, WISHLIST_KEY, &self.state);
        self.revision.send_modify(|r| *r += 1);
    }
}
