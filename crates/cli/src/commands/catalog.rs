//! Catalog browsing commands.

use clap::Subcommand;

use sweetstack_core::{Category, ProductId, format_amount};
use sweetstack_storefront::catalog::Product;
use sweetstack_storefront::state::AppState;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List every product
    List,
    /// Show one product in full
    Show {
        /// Product id
        id: String,
    },
    /// List the featured shelf
    Featured,
    /// List products in a category
    Category {
        /// One of: chocolate, vanilla, fruit, specialty
        #[arg(value_parser = parse_category)]
        category: Category,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

pub fn run(state: &AppState, action: &CatalogAction) {
    let currency = state.settings.get().currency;
    match action {
        CatalogAction::List => print_rows(state.catalog().all().iter(), currency),
        CatalogAction::Show { id } => {
            let id = ProductId::new(id.as_str());
            match state.catalog().get(&id) {
                Some(product) => print_detail(product, currency),
                None => print_line(&format!("No product with id {id}")),
            }
        }
        CatalogAction::Featured => {
            print_rows(state.catalog().featured().into_iter(), currency);
        }
        CatalogAction::Category { category } => {
            print_rows(state.catalog().by_category(*category).into_iter(), currency);
        }
    }
}

fn print_rows<'a>(
    products: impl Iterator<Item = &'a Product>,
    currency: sweetstack_core::CurrencyCode,
) {
    for product in products {
        let featured = if product.featured { " *" } else { "" };
        print_line(&format!(
            "{:>3}  {:<28} {:<10} {:>10}{featured}",
            product.id,
            product.name,
            product.category,
            format_amount(product.price.amount(), currency),
        ));
    }
}

fn print_detail(product: &Product, currency: sweetstack_core::CurrencyCode) {
    print_line(&format!("{} ({})", product.name, product.id));
    print_line(&format!("  {}", product.description));
    print_line(&format!(
        "  {} · {}",
        format_amount(product.price.amount(), currency),
        product.category.label(),
    ));
    if !product.ingredients.is_empty() {
        print_line(&format!("  Ingredients: {}", product.ingredients.join(", ")));
    }
    if !product.allergens.is_empty() {
        print_line(&format!("  Allergens: {}", product.allergens.join(", ")));
    }
}

#[allow(clippy::print_stdout)]
pub(super) fn print_line(line: &str) {
    println!("{line}");
}
