//! Subcommand handlers.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod delivery;
pub mod lists;
pub mod settings;

use thiserror::Error;

use sweetstack_admin::auth::LoginError;
use sweetstack_core::{DeliveryId, ProductId};
use sweetstack_storefront::checkout::CheckoutError;
use sweetstack_storefront::payment::PaymentError;
use sweetstack_storefront::persistence::StorageError;
use sweetstack_storefront::stores::TransitionError;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no product with id {0} in the catalog")]
    UnknownProduct(ProductId),

    #[error("no delivery with id {0}")]
    UnknownDelivery(DeliveryId),

    #[error("delivery {0} has already reached a final status")]
    DeliveryFinished(DeliveryId),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Login(#[from] LoginError),
}
