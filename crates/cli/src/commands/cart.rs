//! Cart commands.

use clap::Subcommand;

use sweetstack_core::{ProductId, format_amount};
use sweetstack_storefront::state::AppState;

use super::CliError;
use super::catalog::print_line;

#[derive(Subcommand)]
pub enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,
        /// How many to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity exactly (0 removes it)
    Update {
        /// Product id
        id: String,
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Show the cart
    Show,
}

pub fn run(state: &mut AppState, action: CartAction) -> Result<(), CliError> {
    match action {
        CartAction::Add { id, quantity } => {
            let id = ProductId::new(id);
            let product = state
                .catalog()
                .get(&id)
                .cloned()
                .ok_or(CliError::UnknownProduct(id))?;
            print_line(&format!("Added {quantity} × {} to the cart", product.name));
            state.cart.add(product, quantity);
        }
        CartAction::Update { id, quantity } => {
            state.cart.update_quantity(&ProductId::new(id), quantity);
        }
        CartAction::Remove { id } => state.cart.remove(&ProductId::new(id)),
        CartAction::Clear => state.cart.clear(),
        CartAction::Show => show(state),
    }
    Ok(())
}

fn show(state: &AppState) {
    if state.cart.is_empty() {
        print_line("Your cart is empty.");
        return;
    }
    let currency = state.settings.get().currency;
    for line in state.cart.lines() {
        print_line(&format!(
            "{:>2} × {:<28} {:>10}",
            line.quantity,
            line.product.name,
            format_amount(line.line_total(), currency),
        ));
    }
    print_line(&format!(
        "Total ({} items): {}",
        state.cart.item_count(),
        format_amount(state.cart.total(), currency),
    ));
}
