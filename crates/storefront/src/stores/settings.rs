//! The site settings store.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use sweetstack_core::CurrencyCode;

use crate::persistence::StorageHandle;

const SETTINGS_KEY: &str = "sweet-stack-settings";

/// Site configuration consumed by checkout and display formatting.
///
/// Exactly one record exists per profile. Field validity is type-enforced:
/// the currency is a closed enum and the delivery fee is unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub store_name: String,
    pub store_email: String,
    pub store_phone: String,
    pub currency: CurrencyCode,
    /// Brand color as a CSS hex value.
    pub primary_color: String,
    /// Flat delivery fee added to every order at checkout.
    pub delivery_fee: u64,
    #[serde(default)]
    pub logo: Option<String>,
    pub enable_mpesa: bool,
    pub enable_paystack: bool,
    pub enable_guest_checkout: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            store_name: "Sweet Stack Cakes".to_owned(),
            store_email: "contact@sweetstackcakes.com".to_owned(),
            store_phone: "+234 123 456 7890".to_owned(),
            currency: CurrencyCode::Ngn,
            primary_color: "#f59e0b".to_owned(),
            delivery_fee: 1500,
            logo: None,
            enable_mpesa: true,
            enable_paystack: true,
            enable_guest_checkout: true,
        }
    }
}

/// A partial settings update. Unset fields leave the current value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub store_name: Option<String>,
    pub store_email: Option<String>,
    pub store_phone: Option<String>,
    pub currency: Option<CurrencyCode>,
    pub primary_color: Option<String>,
    pub delivery_fee: Option<u64>,
    pub logo: Option<String>,
    pub enable_mpesa: Option<bool>,
    pub enable_paystack: Option<bool>,
    pub enable_guest_checkout: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsState {
    #[serde(default)]
    settings: Option<SiteSettings>,
}

/// The settings singleton with merge-update and reset semantics.
pub struct SettingsStore {
    settings: SiteSettings,
    storage: StorageHandle,
    revision: watch::Sender<u64>,
}

impl SettingsStore {
    /// Rehydrate the settings from storage, or start from the defaults.
    #[must_use]
    pub fn load(storage: StorageHandle) -> Self {
        let state: SettingsState = super::load_state(&storage, SETTINGS_KEY);
        let (revision, _) = watch::channel(0);
        Self {
            settings: state.settings.unwrap_or_default(),
            storage,
            revision,
        }
    }

    /// The current settings.
    #[must_use]
    pub const fn get(&self) -> &SiteSettings {
        &self.settings
    }

    /// Merge the supplied fields into the current settings.
    pub fn update(&mut self, update: SettingsUpdate) {
        let s = &mut self.settings;
        if let Some(v) = update.store_name {
            s.store_name = v;
        }
        if let Some(v) = update.store_email {
            s.store_email = v;
        }
        if let Some(v) = update.store_phone {
            s.store_phone = v;
        }
        if let Some(v) = update.currency {
            s.currency = v;
        }
        if let Some(v) = update.primary_color {
            s.primary_color = v;
        }
        if let Some(v) = update.delivery_fee {
            s.delivery_fee = v;
        }
        if let Some(v) = update.logo {
            s.logo = Some(v);
        }
        if let Some(v) = update.enable_mpesa {
            s.enable_mpesa = v;
        }
        if let Some(v) = update.enable_paystack {
            s.enable_paystack = v;
        }
        if let Some(v) = update.enable_guest_checkout {
            s.enable_guest_checkout = v;
        }
        self.commit();
    }

    /// Restore the documented defaults.
    pub fn reset(&mut self) {
        self.settings = SiteSettings::default();
        self.commit();
    }

    /// Subscribe to change notifications. The value is a revision counter.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn commit(&mut self) {
        let state = SettingsState {
            settings: Some(self.settings.clone()),
        };
        super::persist_state(&self.storage, SETTINGS_KEY, &state);
        self.revision.send_modify(|r| *r += 1);
    }
}
