//! Site settings commands.

use clap::{Args, Subcommand};

use sweetstack_core::CurrencyCode;
use sweetstack_storefront::state::AppState;
use sweetstack_storefront::stores::SettingsUpdate;

use super::CliError;
use super::catalog::print_line;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the current settings
    Show,
    /// Change one or more settings
    Set(SetArgs),
    /// Restore the default settings
    Reset,
}

#[derive(Args)]
pub struct SetArgs {
    #[arg(long)]
    pub store_name: Option<String>,

    #[arg(long)]
    pub store_email: Option<String>,

    #[arg(long)]
    pub store_phone: Option<String>,

    /// One of: NGN, KES, USD, EUR, GBP
    #[arg(long, value_parser = parse_currency)]
    pub currency: Option<CurrencyCode>,

    /// Brand color as a CSS hex value
    #[arg(long)]
    pub primary_color: Option<String>,

    /// Flat delivery fee added at checkout
    #[arg(long)]
    pub delivery_fee: Option<u64>,

    #[arg(long)]
    pub enable_mpesa: Option<bool>,

    #[arg(long)]
    pub enable_paystack: Option<bool>,

    #[arg(long)]
    pub enable_guest_checkout: Option<bool>,
}

fn parse_currency(s: &str) -> Result<CurrencyCode, String> {
    s.parse()
}

pub fn run(state: &mut AppState, action: SettingsAction) -> Result<(), CliError> {
    match action {
        SettingsAction::Show => show(state),
        SettingsAction::Set(args) => {
            state.settings.update(SettingsUpdate {
                store_name: args.store_name,
                store_email: args.store_email,
                store_phone: args.store_phone,
                currency: args.currency,
                primary_color: args.primary_color,
                delivery_fee: args.delivery_fee,
                logo: None,
                enable_mpesa: args.enable_mpesa,
                enable_paystack: args.enable_paystack,
                enable_guest_checkout: args.enable_guest_checkout,
            });
            show(state);
        }
        SettingsAction::Reset => {
            state.settings.reset();
            show(state);
        }
    }
    Ok(())
}

fn show(state: &AppState) {
    let s = state.settings.get();
    print_line(&format!("{} <{}> {}", s.store_name, s.store_email, s.store_phone));
    print_line(&format!(
        "Currency: {} · Delivery fee: {} · Brand color: {}",
        s.currency,
        sweetstack_core::format_amount(s.delivery_fee, s.currency),
        s.primary_color,
    ));
    print_line(&format!(
        "Payments: mpesa={} paystack={} · Guest checkout: {}",
        s.enable_mpesa, s.enable_paystack, s.enable_guest_checkout,
    ));
}
