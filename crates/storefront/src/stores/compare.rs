//! The comparison list store.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use sweetstack_core::ProductId;

use crate::catalog::Product;
use crate::persistence::StorageHandle;

const COMPARE_KEY: &str = "sweet-stack-compare";

#[derive(Debug, Default, Serialize, Deserialize)]
struct CompareState {
    items: Vec<Product>,
}

/// Products picked for side-by-side comparison.
///
/// Deduplicated and capped at [`Self::MAX_ITEMS`]. The cap is enforced at
/// the add boundary: a fifth distinct product is rejected, never truncated
/// in.
pub struct CompareStore {
    state: CompareState,
    storage: StorageHandle,
    revision: watch::Sender<u64>,
}

impl CompareStore {
    /// Maximum number of products that can be compared at once.
    pub const MAX_ITEMS: usize = 4;

    /// Rehydrate the comparison list from storage, or start empty.
    #[must_use]
    pub fn load(storage: StorageHandle) -> Self {
        let state = super::load_state(&storage, COMPARE_KEY);
        let (revision, _) = watch::channel(0);
        Self {
            state,
            storage,
            revision,
        }
    }

    /// Add a product to the comparison list.
    ///
    /// Returns `true` if the product was stored. Duplicates and additions
    /// past the cap are rejected and return `false`.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        if self.state.items.len() >= Self::MAX_ITEMS {
            debug!(id = %product.id, "comparison list is full");
            return false;
        }
        self.state.items.push(product);
        self.commit();
        true
    }

    /// Remove a product. Unknown ids are ignored.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.state.items.len();
        self.state.items.retain(|p| &p.id != id);
        if self.state.items.len() != before {
            self.commit();
        }
    }

    /// Whether a product is in the comparison list.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.state.items.iter().any(|p| &p.id == id)
    }

    /// Empty the comparison list.
    pub fn clear(&mut self) {
        self.state.items.clear();
        self.commit();
    }

    /// The compared products, in insertion order.
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
        super::persist_state(&self.storage, COMPARE_KEY, &self.state);
        self.revision.send_modify(|r| *r += 1);
    }
}
