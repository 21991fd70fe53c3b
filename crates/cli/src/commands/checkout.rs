//! Checkout command: simulated payment, then order placement.

use clap::Args;

use sweetstack_core::{PaymentMethod, format_amount};
use sweetstack_storefront::checkout::{self, ShippingForm};
use sweetstack_storefront::payment::{MockGateway, PaymentRequest};
use sweetstack_storefront::state::AppState;

use super::CliError;
use super::catalog::print_line;

#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub city: String,

    #[arg(long, default_value = "Lagos")]
    pub state: String,

    /// One of: card, paystack, mpesa
    #[arg(long, default_value = "card", value_parser = parse_method)]
    pub method: PaymentMethod,
}

fn parse_method(s: &str) -> Result<PaymentMethod, String> {
    s.parse()
}

pub async fn run(state: &mut AppState, args: CheckoutArgs) -> Result<(), CliError> {
    if state.cart.is_empty() {
        print_line("Your cart is empty - nothing to check out.");
        return Ok(());
    }

    let settings = state.settings.get();
    let currency = settings.currency;
    let grand_total = state.cart.total() + settings.delivery_fee;

    print_line(&format!(
        "Charging {} via {}...",
        format_amount(grand_total, currency),
        args.method,
    ));

    let receipt = MockGateway::new()
        .charge(PaymentRequest {
            amount: grand_total,
            method: args.method,
            email: Some(args.email.clone()),
            phone: Some(args.phone.clone()),
        })
        .await?;

    let form = ShippingForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        city: args.city,
        state: args.state,
    };

    let order = checkout::place_order(state, &form, &receipt)?;

    print_line(&format!(
        "Order {} placed - paid {} ({})",
        order.id,
        format_amount(order.grand_total, currency),
        receipt.transaction_id,
    ));
    if let Some(delivery) = state.deliveries.all().last() {
        print_line(&format!(
            "Track your delivery with: sweet delivery show {}",
            delivery.id
        ));
    }
    Ok(())
}
