//! The client state stores.
//!
//! Each store owns one slice of cross-page state, persists it as a JSON
//! blob after every committed mutation, and bumps a `tokio::sync::watch`
//! revision channel so views can subscribe to changes. Mutations run
//! synchronously inside UI event handlers; there are no concurrent writers,
//! so the stores take `&mut self` and need no locking.
//!
//! Persistence is fire-and-forget: a failed or unserializable write is
//! logged and the in-memory state stays authoritative.

mod cart;
mod compare;
mod delivery;
mod settings;
mod wishlist;

pub use cart::{CartLine, CartStore};
pub use compare::CompareStore;
pub use delivery::{Courier, Delivery, DeliveryEvent, DeliveryStore, Location, TransitionError};
pub use settings::{SettingsStore, SettingsUpdate, SiteSettings};
pub use wishlist::WishlistStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::persistence::StorageHandle;

/// Rehydrate a store's state blob, falling back to the default on a missing
/// key, a read failure, or a corrupt blob.
fn load_state<T: DeserializeOwned + Default>(storage: &StorageHandle, key: &str) -> T {
    match storage.read(key) {
        Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "discarding corrupt state blob");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted state");
            T::default()
        }
    }
}

/// Serialize and write a store's state blob, logging failures.
fn persist_state<T: Serialize>(storage: &StorageHandle, key: &str, state: &T) {
    match serde_json::to_string(state) {
        Ok(blob) => {
            if let Err(e) = storage.write(key, &blob) {
                tracing::warn!(key, error = %e, "failed to persist state");
            }
        }
        Err(e) => tracing::warn!(key, error = %e, "failed to serialize state"),
    }
}
