//! The mock admin surface against the live catalog.

#![allow(clippy::unwrap_used)]

use sweetstack_admin::auth::{self, LoginError};
use sweetstack_admin::dashboard;
use sweetstack_admin::products::{ProductManager, ProductPatch};
use sweetstack_core::{Price, ProductId};
use sweetstack_integration_tests::fresh_state;

#[test]
fn only_the_demo_credentials_log_in() {
    assert!(auth::login("admin", "password").is_ok());
    assert_eq!(
        auth::login("admin", "wrong"),
        Err(LoginError::InvalidCredentials)
    );
}

#[test]
fn admin_edits_never_reach_the_catalog() {
    let state = fresh_state();
    let mut manager = ProductManager::from_catalog(state.catalog());
    let id = ProductId::new("1");

    assert!(manager.delete(&id));
    assert!(manager.update(
        &ProductId::new("2"),
        ProductPatch {
            price: Some(Price::new(9999)),
            ..ProductPatch::default()
        }
    ));

    // The storefront still sells both cakes at the original price.
    assert!(state.catalog().get(&id).is_some());
    let vanilla = state.catalog().get(&ProductId::new("2")).unwrap();
    assert_eq!(vanilla.price, Price::new(6000));

    // A fresh working copy starts from the catalog again.
    let fresh = ProductManager::from_catalog(state.catalog());
    assert_eq!(fresh.list().len(), state.catalog().all().len());
}

#[test]
fn dashboard_fixtures_are_display_ready() {
    let orders = dashboard::sample_orders();
    assert!(!orders.is_empty());
    assert!(orders.iter().all(|o| o.total > 0 && o.items > 0));

    let customers = dashboard::sample_customers();
    assert!(!customers.is_empty());
    assert!(customers.iter().all(|c| c.email.contains('@')));
}
