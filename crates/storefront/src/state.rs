//! Application state shared across pages.
//!
//! `AppState` is the explicit owned container for everything that crosses
//! pages: the catalog plus the five stores and the order log. It is built
//! once at application start from a storage handle and handed to the UI
//! layer by mutable reference - there are no hidden globals, and because
//! all mutation happens on the single UI thread, no interior mutability
//! either.

use crate::catalog::Catalog;
use crate::checkout::OrderLog;
use crate::persistence::StorageHandle;
use crate::stores::{CartStore, CompareStore, DeliveryStore, SettingsStore, WishlistStore};

/// Everything the storefront's pages read from and dispatch into.
pub struct AppState {
    catalog: Catalog,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub compare: CompareStore,
    pub settings: SettingsStore,
    pub deliveries: DeliveryStore,
    pub orders: OrderLog,
}

impl AppState {
    /// Build the catalog and rehydrate every store from `storage`.
    #[must_use]
    pub fn load(storage: StorageHandle) -> Self {
        Self {
            catalog: Catalog::new(),
            cart: CartStore::load(storage.clone()),
            wishlist: WishlistStore::load(storage.clone()),
            compare: CompareStore::load(storage.clone()),
            settings: SettingsStore::load(storage.clone()),
            deliveries: DeliveryStore::load(storage.clone()),
            orders: OrderLog::load(storage),
        }
    }

    /// The immutable product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
