//! Payment, order placement, and the checkout → delivery hand-off.

#![allow(clippy::unwrap_used)]

use sweetstack_core::{DeliveryStatus, PaymentMethod};
use sweetstack_integration_tests::{cake, fresh_state, state_over};
use sweetstack_storefront::checkout::{self, CheckoutError, ShippingForm};
use sweetstack_storefront::payment::{MockGateway, PaymentRequest};
use sweetstack_storefront::persistence::FileStorage;

fn shipping_form() -> ShippingForm {
    ShippingForm {
        first_name: "Ada".to_owned(),
        last_name: "Obi".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: "0801 234 5678".to_owned(),
        address: "10 Victoria Island".to_owned(),
        city: "Lagos".to_owned(),
        state: "Lagos".to_owned(),
    }
}

#[tokio::test]
async fn paid_cart_becomes_an_order_and_a_delivery() {
    let mut state = fresh_state();
    state.cart.add(cake(&state, "1"), 2);
    state.cart.add(cake(&state, "3"), 1);
    let cart_total = state.cart.total();
    let fee = state.settings.get().delivery_fee;

    let receipt = MockGateway::instant()
        .charge(PaymentRequest {
            amount: cart_total + fee,
            method: PaymentMethod::Card,
            email: None,
            phone: None,
        })
        .await
        .unwrap();

    let order = checkout::place_order(&mut state, &shipping_form(), &receipt).unwrap();

    // The order carries the cart snapshot and the fee-inclusive total.
    assert_eq!(order.total, cart_total);
    assert_eq!(order.grand_total, cart_total + fee);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.transaction_id, receipt.transaction_id);

    // The delivery store owns a matching record with the initial event.
    let delivery = state.deliveries.all().first().unwrap();
    assert_eq!(delivery.order_id, order.id);
    assert_eq!(delivery.status, DeliveryStatus::Pending);
    assert_eq!(delivery.lines, order.lines);
    assert_eq!(
        delivery.events.first().map(|e| e.label.as_str()),
        Some("Order Confirmed")
    );
    assert!(delivery.estimated_arrival > delivery.order_date);

    // The cart is cleared last; the order log keeps the record.
    assert!(state.cart.is_empty());
    assert_eq!(state.orders.all().len(), 1);
}

#[tokio::test]
async fn delivery_snapshot_does_not_follow_the_cart() {
    let mut state = fresh_state();
    state.cart.add(cake(&state, "2"), 1);

    let receipt = MockGateway::instant()
        .charge(PaymentRequest {
            amount: state.cart.total(),
            method: PaymentMethod::Card,
            email: None,
            phone: None,
        })
        .await
        .unwrap();
    checkout::place_order(&mut state, &shipping_form(), &receipt).unwrap();

    // Refill the cart after checkout; the delivery's lines stay frozen.
    state.cart.add(cake(&state, "7"), 3);
    let delivery = state.deliveries.all().first().unwrap();
    assert_eq!(delivery.lines.len(), 1);
    assert_eq!(delivery.lines.first().unwrap().quantity, 1);
}

#[tokio::test]
async fn disabled_payment_methods_reject_the_order() {
    let mut state = fresh_state();
    state.cart.add(cake(&state, "1"), 1);
    state.settings.update(sweetstack_storefront::stores::SettingsUpdate {
        enable_paystack: Some(false),
        ..Default::default()
    });

    let receipt = MockGateway::instant()
        .charge(PaymentRequest {
            amount: state.cart.total(),
            method: PaymentMethod::Paystack,
            email: Some("ada@example.com".to_owned()),
            phone: None,
        })
        .await
        .unwrap();

    let err = checkout::place_order(&mut state, &shipping_form(), &receipt);
    assert!(matches!(
        err,
        Err(CheckoutError::PaymentMethodDisabled(PaymentMethod::Paystack))
    ));
    // Nothing was mutated.
    assert!(!state.cart.is_empty());
    assert!(state.orders.all().is_empty());
    assert!(state.deliveries.all().is_empty());
}

#[tokio::test]
async fn orders_and_deliveries_survive_a_restart_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let storage: sweetstack_storefront::persistence::StorageHandle =
        std::sync::Arc::new(FileStorage::open(tmp.path().join("state")).unwrap());

    let delivery_id = {
        let mut state = state_over(storage.clone());
        state.cart.add(cake(&state, "8"), 1);
        let receipt = MockGateway::instant()
            .charge(PaymentRequest {
                amount: state.cart.total(),
                method: PaymentMethod::Card,
                email: None,
                phone: None,
            })
            .await
            .unwrap();
        checkout::place_order(&mut state, &shipping_form(), &receipt).unwrap();
        state.deliveries.all().first().unwrap().id.clone()
    };

    let state = state_over(storage);
    assert_eq!(state.orders.all().len(), 1);
    assert!(state.deliveries.get(&delivery_id).is_some());
    assert!(state.cart.is_empty());
}
