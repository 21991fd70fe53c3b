//! Wishlist and comparison list commands.

use clap::Subcommand;

use sweetstack_core::ProductId;
use sweetstack_storefront::state::AppState;
use sweetstack_storefront::stores::CompareStore;

use super::CliError;
use super::catalog::print_line;

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Save a product for later
    Add {
        /// Product id
        id: String,
    },
    /// Remove a saved product
    Remove {
        /// Product id
        id: String,
    },
    /// Show the wishlist
    Show,
}

#[derive(Subcommand)]
pub enum CompareAction {
    /// Add a product to the comparison list (max 4)
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product from the comparison list
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the comparison list
    Clear,
    /// Show the comparison list
    Show,
}

pub fn run_wishlist(state: &mut AppState, action: WishlistAction) -> Result<(), CliError> {
    match action {
        WishlistAction::Add { id } => {
            let id = ProductId::new(id);
            let product = state
                .catalog()
                .get(&id)
                .cloned()
                .ok_or(CliError::UnknownProduct(id))?;
            state.wishlist.add(product);
        }
        WishlistAction::Remove { id } => state.wishlist.remove(&ProductId::new(id)),
        WishlistAction::Show => {
            if state.wishlist.items().is_empty() {
                print_line("Your wishlist is empty.");
            }
            for product in state.wishlist.items() {
                print_line(&format!("{:>3}  {}", product.id, product.name));
            }
        }
    }
    Ok(())
}

pub fn run_compare(state: &mut AppState, action: CompareAction) -> Result<(), CliError> {
    match action {
        CompareAction::Add { id } => {
            let id = ProductId::new(id);
            let product = state
                .catalog()
                .get(&id)
                .cloned()
                .ok_or(CliError::UnknownProduct(id))?;
            let name = product.name.clone();
            if state.compare.add(product) {
                print_line(&format!("Comparing {name}"));
            } else {
                print_line(&format!(
                    "Not added - already listed or the list is full ({} max)",
                    CompareStore::MAX_ITEMS
                ));
            }
        }
        CompareAction::Remove { id } => state.compare.remove(&ProductId::new(id)),
        CompareAction::Clear => state.compare.clear(),
        CompareAction::Show => {
            if state.compare.items().is_empty() {
                print_line("Nothing to compare yet.");
            }
            for product in state.compare.items() {
                print_line(&format!(
                    "{:>3}  {:<28} {:<10} {}",
                    product.id,
                    product.name,
                    product.category,
                    product.price.display(state.settings.get().currency),
                ));
            }
        }
    }
    Ok(())
}
