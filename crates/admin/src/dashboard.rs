//! Fabricated dashboard fixtures.
//!
//! The orders and customers tabs display demo data only; there is no order
//! management behind them. The fixtures live here so every consumer shows
//! the same rows.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use sweetstack_core::{OrderId, OrderStatus, PaymentMethod};

/// A row on the demo orders tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: OrderId,
    pub customer_name: String,
    pub items: u32,
    /// Order total in the store currency's major unit.
    pub total: u64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub placed: DateTime<Utc>,
}

/// A row on the demo customers tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub orders: u32,
    /// Lifetime spend in the store currency's major unit.
    pub total_spent: u64,
    pub joined: DateTime<Utc>,
}

/// Demo rows for the orders tab.
#[must_use]
pub fn sample_orders() -> Vec<AdminOrder> {
    let now = Utc::now();
    vec![
        AdminOrder {
            id: OrderId::new("ORD-7D1A42F0"),
            customer_name: "Ada Obi".to_owned(),
            items: 3,
            total: 20000,
            payment_method: PaymentMethod::Card,
            status: OrderStatus::Processing,
            placed: now - Duration::hours(2),
        },
        AdminOrder {
            id: OrderId::new("ORD-3B9C08E1"),
            customer_name: "Tunde Adeyemi".to_owned(),
            items: 1,
            total: 7500,
            payment_method: PaymentMethod::Paystack,
            status: OrderStatus::Delivered,
            placed: now - Duration::days(1),
        },
        AdminOrder {
            id: OrderId::new("ORD-95E2C7AB"),
            customer_name: "Wanjiru Kamau".to_owned(),
            items: 2,
            total: 12000,
            payment_method: PaymentMethod::Mpesa,
            status: OrderStatus::Cancelled,
            placed: now - Duration::days(3),
        },
    ]
}

/// Demo rows for the customers tab.
#[must_use]
pub fn sample_customers() -> Vec<AdminCustomer> {
    let now = Utc::now();
    vec![
        AdminCustomer {
            name: "Ada Obi".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "+234 801 234 5678".to_owned(),
            orders: 4,
            total_spent: 52500,
            joined: now - Duration::days(120),
        },
        AdminCustomer {
            name: "Tunde Adeyemi".to_owned(),
            email: "tunde@example.com".to_owned(),
            phone: "+234 809 876 5432".to_owned(),
            orders: 2,
            total_spent: 14500,
            joined: now - Duration::days(45),
        },
        AdminCustomer {
            name: "Wanjiru Kamau".to_owned(),
            email: "wanjiru@example.com".to_owned(),
            phone: "+254 700 111 222".to_owned(),
            orders: 1,
            total_spent: 12000,
            joined: now - Duration::days(10),
        },
    ]
}
