//! Mock payment gateway.
//!
//! No real gateway protocol exists anywhere in the system: a charge is a
//! fixed simulated delay followed by a synthetic transaction id. The charge
//! is a plain async method, so its lifetime is bound to the caller's task -
//! a view that tears down drops the future and the charge never completes,
//! which replaces the original's unguarded timer callbacks.

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use sweetstack_core::PaymentMethod;

/// A payment attempt.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    /// Amount in the store currency's major unit.
    pub amount: u64,
    pub method: PaymentMethod,
    /// Required for Paystack.
    pub email: Option<String>,
    /// Required for M-Pesa; must carry at least 10 digits.
    pub phone: Option<String>,
}

/// A completed (simulated) payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub method: PaymentMethod,
    pub amount: u64,
}

/// Errors raised before a charge is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("a valid phone number is required for m-pesa payments")]
    InvalidPhone,
    #[error("an email address is required for paystack payments")]
    MissingEmail,
}

/// The simulated payment processor.
#[derive(Debug, Clone)]
pub struct MockGateway {
    card_delay: Duration,
    paystack_delay: Duration,
    mpesa_delay: Duration,
}

impl MockGateway {
    /// A gateway with the production simulation delays.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            card_delay: Duration::from_secs(2),
            paystack_delay: Duration::from_secs(2),
            mpesa_delay: Duration::from_secs(3),
        }
    }

    /// A gateway that resolves immediately. For tests.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            card_delay: Duration::ZERO,
            paystack_delay: Duration::ZERO,
            mpesa_delay: Duration::ZERO,
        }
    }

    /// Run a simulated charge.
    ///
    /// Resolves with a synthetic receipt after the method's delay. Dropping
    /// the returned future cancels the charge.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the request is missing the contact
    /// details the method needs; nothing is charged in that case.
    pub async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        let (delay, transaction_id) = match request.method {
            PaymentMethod::Card => (self.card_delay, format!("CARD-{}", reference())),
            PaymentMethod::Paystack => {
                if request.email.as_deref().is_none_or(str::is_empty) {
                    return Err(PaymentError::MissingEmail);
                }
                (self.paystack_delay, format!("PAYSTACK-{}", reference()))
            }
            PaymentMethod::Mpesa => {
                let digits = request
                    .phone
                    .as_deref()
                    .map_or(0, |p| p.chars().filter(char::is_ascii_digit).count());
                if digits < 10 {
                    return Err(PaymentError::InvalidPhone);
                }
                (
                    self.mpesa_delay,
                    format!("MPESA-{}", Utc::now().timestamp_millis()),
                )
            }
        };

        tokio::time::sleep(delay).await;

        info!(method = %request.method, amount = request.amount, %transaction_id, "payment simulated");
        Ok(PaymentReceipt {
            transaction_id,
            method: request.method,
            amount: request.amount,
        })
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

/// Short uppercase reference for synthetic transaction and order ids.
pub(crate) fn reference() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_card_charge_succeeds() {
        let gateway = MockGateway::instant();
        let receipt = gateway
            .charge(PaymentRequest {
                amount: 20000,
                method: PaymentMethod::Card,
                email: None,
                phone: None,
            })
            .await
            .unwrap();

        assert!(receipt.transaction_id.starts_with("CARD-"));
        assert_eq!(receipt.amount, 20000);
        assert_eq!(receipt.method, PaymentMethod::Card);
    }

    #[tokio::test]
    async fn test_mpesa_requires_a_phone_number() {
        let gateway = MockGateway::instant();

        let missing = gateway
            .charge(PaymentRequest {
                amount: 5000,
                method: PaymentMethod::Mpesa,
                email: None,
                phone: None,
            })
            .await;
        assert_eq!(missing, Err(PaymentError::InvalidPhone));

        let short = gateway
            .charge(PaymentRequest {
                amount: 5000,
                method: PaymentMethod::Mpesa,
                email: None,
                phone: Some("0712".to_owned()),
            })
            .await;
        assert_eq!(short, Err(PaymentError::InvalidPhone));

        let ok = gateway
            .charge(PaymentRequest {
                amount: 5000,
                method: PaymentMethod::Mpesa,
                email: None,
                phone: Some("0712 345 678".to_owned()),
            })
            .await
            .unwrap();
        assert!(ok.transaction_id.starts_with("MPESA-"));
    }

    #[tokio::test]
    async fn test_paystack_requires_an_email() {
        let gateway = MockGateway::instant();
        let missing = gateway
            .charge(PaymentRequest {
                amount: 7000,
                method: PaymentMethod::Paystack,
                email: None,
                phone: None,
            })
            .await;
        assert_eq!(missing, Err(PaymentError::MissingEmail));

        let ok = gateway
            .charge(PaymentRequest {
                amount: 7000,
                method: PaymentMethod::Paystack,
                email: Some("user@example.com".to_owned()),
                phone: None,
            })
            .await
            .unwrap();
        assert!(ok.transaction_id.starts_with("PAYSTACK-"));
    }

    #[test]
    fn test_references_are_unique() {
        let a = reference();
        let b = reference();
        assert_eq!(a.len(), 8);
        assert_ne!(a, b);
    }
}
