//! Sweet Stack CLI - Terminal front end for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! sweet catalog list
//! sweet catalog show 3
//!
//! # Manage the cart
//! sweet cart add 1 --quantity 2
//! sweet cart show
//!
//! # Check out (runs the simulated payment)
//! sweet checkout --first-name Ada --last-name Obi --email ada@example.com \
//!     --phone "0801 234 5678" --address "10 Victoria Island" --city Lagos
//!
//! # Track the delivery
//! sweet delivery list
//! sweet delivery advance DEL-XXXXXXXX
//! ```
//!
//! State persists between invocations as JSON blobs under the data
//! directory (`SWEETSTACK_DATA_DIR`, default `.sweetstack`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sweetstack_storefront::persistence::{FileStorage, StorageHandle};
use sweetstack_storefront::state::AppState;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "sweet")]
#[command(author, version, about = "Sweet Stack storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::lists::WishlistAction,
    },
    /// Manage the comparison list
    Compare {
        #[command(subcommand)]
        action: commands::lists::CompareAction,
    },
    /// View or change site settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Pay for the cart and place the order
    Checkout(commands::checkout::CheckoutArgs),
    /// The admin dashboard (demo credentials required)
    Admin(commands::admin::AdminArgs),
    /// Track deliveries
    Delivery {
        #[command(subcommand)]
        action: commands::delivery::DeliveryAction,
    },
}

#[tokio::main]
async fn main() {
    // Load .env if present, then initialize tracing
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sweetstack=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let data_dir =
        std::env::var("SWEETSTACK_DATA_DIR").unwrap_or_else(|_| ".sweetstack".to_owned());
    let storage: StorageHandle = std::sync::Arc::new(FileStorage::open(data_dir)?);
    let mut state = AppState::load(storage);

    match cli.command {
        Commands::Catalog { action } => commands::catalog::run(&state, &action),
        Commands::Cart { action } => commands::cart::run(&mut state, action)?,
        Commands::Wishlist { action } => commands::lists::run_wishlist(&mut state, action)?,
        Commands::Compare { action } => commands::lists::run_compare(&mut state, action)?,
        Commands::Settings { action } => commands::settings::run(&mut state, action)?,
        Commands::Checkout(args) => commands::checkout::run(&mut state, args).await?,
        Commands::Admin(args) => commands::admin::run(&state, args)?,
        Commands::Delivery { action } => commands::delivery::run(&mut state, action)?,
    }

    Ok(())
}
