//! Checkout: shipping validation, order construction, delivery hand-off.
//!
//! Checkout is the only boundary where a [`Delivery`] is created. Once the
//! payment gateway resolves, [`place_order`] snapshots the cart into an
//! [`Order`], appends it to the order log, hands a freshly-built delivery
//! record to the delivery store, and clears the cart - in that order.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use sweetstack_core::{
    CourierId, DeliveryId, DeliveryStatus, Email, OrderId, OrderStatus, PaymentMethod,
};

use crate::payment::{PaymentReceipt, reference};
use crate::persistence::StorageHandle;
use crate::state::AppState;
use crate::stores::{CartLine, Courier, Delivery, DeliveryEvent, Location};

const ORDERS_KEY: &str = "sweet-stack-orders";

/// How long after confirmation we promise the cake at the door.
const DELIVERY_WINDOW_MINUTES: i64 = 45;

/// The bakery's pickup point.
fn store_location() -> Location {
    Location {
        lat: 6.5244,
        lng: 3.3792,
        address: "23 Allen Avenue, Ikeja, Lagos".to_owned(),
    }
}

// =============================================================================
// Shipping form
// =============================================================================

/// Raw shipping form fields, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShippingForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

/// A single failed form constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validated shipping details.
#[derive(Debug, Clone)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

impl ShippingForm {
    /// Check every field and collect the failures.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per failed constraint; store state is
    /// never touched by validation.
    pub fn validate(&self) -> Result<ShippingDetails, Vec<FieldError>> {
        let mut errors = Vec::new();

        let require_len = |errors: &mut Vec<FieldError>, field, value: &str, min, message: &str| {
            if value.trim().len() < min {
                errors.push(FieldError {
                    field,
                    message: message.to_owned(),
                });
            }
        };

        require_len(&mut errors, "first_name", &self.first_name, 2, "First name is required");
        require_len(&mut errors, "last_name", &self.last_name, 2, "Last name is required");
        require_len(&mut errors, "address", &self.address, 5, "Address is required");
        require_len(&mut errors, "city", &self.city, 2, "City is required");
        require_len(&mut errors, "state", &self.state, 2, "State is required");

        let email = match Email::parse(self.email.trim()) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(FieldError {
                    field: "email",
                    message: "Please enter a valid email address".to_owned(),
                });
                None
            }
        };

        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        if digits < 10 {
            errors.push(FieldError {
                field: "phone",
                message: "Phone number must be at least 10 digits".to_owned(),
            });
        }

        match email {
            Some(email) if errors.is_empty() => Ok(ShippingDetails {
                first_name: self.first_name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                email,
                phone: self.phone.trim().to_owned(),
                address: self.address.trim().to_owned(),
                city: self.city.trim().to_owned(),
                state: self.state.trim().to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Who placed the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
}

/// Where the order ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
}

/// A completed order, as appended to the order log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub shipping: ShippingAddress,
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub delivery_fee: u64,
    pub grand_total: u64,
    pub payment_method: PaymentMethod,
    pub transaction_id: String,
    pub status: OrderStatus,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OrderLogState {
    orders: Vec<Order>,
}

/// The append-only log of completed orders.
pub struct OrderLog {
    state: OrderLogState,
    storage: StorageHandle,
}

impl OrderLog {
    /// Rehydrate the order log from storage, or start empty.
    #[must_use]
    pub fn load(storage: StorageHandle) -> Self {
        let state: OrderLogState = match storage.read(ORDERS_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding corrupt order log");
                OrderLogState::default()
            }),
            Ok(None) => OrderLogState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read order log");
                OrderLogState::default()
            }
        };
        Self { state, storage }
    }

    /// Append an order and persist.
    pub fn append(&mut self, order: Order) {
        self.state.orders.push(order);
        match serde_json::to_string(&self.state) {
            Ok(blob) => {
                if let Err(e) = self.storage.write(ORDERS_KEY, &blob) {
                    tracing::warn!(error = %e, "failed to persist order log");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize order log"),
        }
    }

    /// All completed orders, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.state.orders
    }
}

// =============================================================================
// Placing an order
// =============================================================================

/// Why an order could not be placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("invalid shipping details")]
    Validation(Vec<FieldError>),
    #[error("{0} payments are disabled")]
    PaymentMethodDisabled(PaymentMethod),
}

/// Complete a paid order.
///
/// Builds the [`Order`] from the cart and validated shipping details,
/// appends it to the order log, constructs the [`Delivery`] record (with a
/// fabricated courier and an initial "Order Confirmed" event) and hands it
/// to the delivery store, then clears the cart.
///
/// # Errors
///
/// Returns [`CheckoutError`] if the cart is empty, the form fails
/// validation, or the receipt's payment method is disabled in the site
/// settings. Nothing is mutated on error.
pub fn place_order(
    state: &mut AppState,
    form: &ShippingForm,
    receipt: &PaymentReceipt,
) -> Result<Order, CheckoutError> {
    if state.cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let details = form.validate().map_err(CheckoutError::Validation)?;

    let settings = state.settings.get().clone();
    match receipt.method {
        PaymentMethod::Mpesa if !settings.enable_mpesa => {
            return Err(CheckoutError::PaymentMethodDisabled(receipt.method));
        }
        PaymentMethod::Paystack if !settings.enable_paystack => {
            return Err(CheckoutError::PaymentMethodDisabled(receipt.method));
        }
        _ => {}
    }

    let created = Utc::now();
    let lines = state.cart.lines().to_vec();
    let total = state.cart.total();

    let order = Order {
        id: OrderId::new(format!("ORD-{}", reference())),
        customer: Customer {
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone: details.phone,
        },
        shipping: ShippingAddress {
            address: details.address,
            city: details.city,
            state: details.state,
        },
        lines: lines.clone(),
        total,
        delivery_fee: settings.delivery_fee,
        grand_total: total + settings.delivery_fee,
        payment_method: receipt.method,
        transaction_id: receipt.transaction_id.clone(),
        status: OrderStatus::Processing,
        created,
    };

    info!(order = %order.id, total = order.grand_total, "order placed");
    state.orders.append(order.clone());

    let delivery = build_delivery(&order, lines, created);
    state.deliveries.add(delivery);

    state.cart.clear();
    Ok(order)
}

fn build_delivery(order: &Order, lines: Vec<CartLine>, created: DateTime<Utc>) -> Delivery {
    Delivery {
        id: DeliveryId::new(format!("DEL-{}", reference())),
        order_id: order.id.clone(),
        order_date: created,
        status: DeliveryStatus::Pending,
        estimated_arrival: created + Duration::minutes(DELIVERY_WINDOW_MINUTES),
        lines,
        current_location: store_location(),
        destination: destination_for(&order.shipping),
        courier: assign_courier(),
        events: vec![DeliveryEvent {
            time: created,
            label: "Order Confirmed".to_owned(),
            description: "Your order has been confirmed and is being prepared.".to_owned(),
        }],
    }
}

/// Fabricate destination coordinates near the store.
///
/// There is no geocoder anywhere in the system; the map display only needs
/// a plausible point, so jitter the store's own coordinates.
fn destination_for(shipping: &ShippingAddress) -> Location {
    let mut rng = rand::rng();
    let origin = store_location();
    Location {
        lat: origin.lat + rng.random_range(-0.08..=0.08),
        lng: origin.lng + rng.random_range(-0.08..=0.08),
        address: format!("{}, {}, {}", shipping.address, shipping.city, shipping.state),
    }
}

/// Pick a courier from the demo roster.
fn assign_courier() -> Courier {
    let mut roster = vec![
        Courier::new(
            CourierId::new("dp1"),
            "John Doe",
            "+2341234567890",
            Some("https://i.pravatar.cc/150?img=32".to_owned()),
            4.8,
        ),
        Courier::new(
            CourierId::new("dp2"),
            "Amina Bello",
            "+2348098765432",
            Some("https://i.pravatar.cc/150?img=47".to_owned()),
            4.9,
        ),
        Courier::new(
            CourierId::new("dp3"),
            "Chidi Okafor",
            "+2347011122233",
            Some("https://i.pravatar.cc/150?img=12".to_owned()),
            4.6,
        ),
    ];
    let idx = rand::rng().random_range(0..roster.len());
    roster.swap_remove(idx)
}
