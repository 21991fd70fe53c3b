//! Admin dashboard commands.
//!
//! Every view requires the demo credentials. Product edits act on a
//! working copy that lives only for this invocation.

use clap::{Args, Subcommand};

use sweetstack_admin::auth;
use sweetstack_admin::dashboard;
use sweetstack_admin::products::ProductManager;
use sweetstack_core::format_amount;
use sweetstack_storefront::state::AppState;

use super::CliError;
use super::catalog::print_line;

#[derive(Args)]
pub struct AdminArgs {
    /// Admin username (demo: admin)
    #[arg(short, long)]
    pub username: String,

    /// Admin password (demo: password)
    #[arg(short, long)]
    pub password: String,

    #[command(subcommand)]
    pub view: AdminView,
}

#[derive(Subcommand)]
pub enum AdminView {
    /// The product management table
    Products,
    /// The demo orders tab
    Orders,
    /// The demo customers tab
    Customers,
}

pub fn run(state: &AppState, args: AdminArgs) -> Result<(), CliError> {
    let session = auth::login(&args.username, &args.password)?;
    print_line(&format!("Logged in as {}", session.username));

    let currency = state.settings.get().currency;
    match args.view {
        AdminView::Products => {
            let manager = ProductManager::from_catalog(state.catalog());
            for product in manager.list() {
                let featured = if product.featured { "yes" } else { "no" };
                print_line(&format!(
                    "{:>3}  {:<28} {:<10} {:>10}  featured: {featured}",
                    product.id,
                    product.name,
                    product.category,
                    format_amount(product.price.amount(), currency),
                ));
            }
        }
        AdminView::Orders => {
            for order in dashboard::sample_orders() {
                print_line(&format!(
                    "{}  {:<20} {:>2} items  {:>10}  {:<10} [{}]",
                    order.id,
                    order.customer_name,
                    order.items,
                    format_amount(order.total, currency),
                    order.payment_method,
                    order.status,
                ));
            }
        }
        AdminView::Customers => {
            for customer in dashboard::sample_customers() {
                print_line(&format!(
                    "{:<20} {:<28} {:>2} orders  {:>10}",
                    customer.name,
                    customer.email,
                    customer.orders,
                    format_amount(customer.total_spent, currency),
                ));
            }
        }
    }
    Ok(())
}
