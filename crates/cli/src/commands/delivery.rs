//! Delivery tracking commands.

use clap::Subcommand;

use sweetstack_core::{DeliveryId, DeliveryStatus};
use sweetstack_storefront::state::AppState;
use sweetstack_storefront::stores::{Delivery, DeliveryEvent, Location};

use super::CliError;
use super::catalog::print_line;

#[derive(Subcommand)]
pub enum DeliveryAction {
    /// List tracked deliveries
    List,
    /// Show one delivery with its event history
    Show {
        /// Delivery id
        id: String,
    },
    /// Advance a delivery one stage along the happy path
    Advance {
        /// Delivery id
        id: String,
    },
    /// Cancel a delivery
    Cancel {
        /// Delivery id
        id: String,
    },
    /// Update a delivery's current location
    Locate {
        /// Delivery id
        id: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        #[arg(long)]
        address: String,
    },
}

pub fn run(state: &mut AppState, action: DeliveryAction) -> Result<(), CliError> {
    match action {
        DeliveryAction::List => {
            if state.deliveries.all().is_empty() {
                print_line("No deliveries yet.");
            }
            for delivery in state.deliveries.all() {
                print_line(&format!(
                    "{}  order {}  [{}]  eta {}",
                    delivery.id,
                    delivery.order_id,
                    delivery.status,
                    delivery.estimated_arrival.format("%H:%M"),
                ));
            }
        }
        DeliveryAction::Show { id } => {
            let id = DeliveryId::new(id);
            let delivery = state
                .deliveries
                .get(&id)
                .ok_or(CliError::UnknownDelivery(id))?;
            show(delivery);
        }
        DeliveryAction::Advance { id } => {
            let id = DeliveryId::new(id);
            let delivery = state
                .deliveries
                .get(&id)
                .ok_or_else(|| CliError::UnknownDelivery(id.clone()))?;
            let next = delivery
                .status
                .next()
                .ok_or_else(|| CliError::DeliveryFinished(id.clone()))?;
            let (label, description) = stage_event(next);
            state
                .deliveries
                .update_status(&id, next, DeliveryEvent::now(label, description))?;
            print_line(&format!("{id} is now {next}"));
        }
        DeliveryAction::Cancel { id } => {
            let id = DeliveryId::new(id);
            state.deliveries.update_status(
                &id,
                DeliveryStatus::Cancelled,
                DeliveryEvent::now("Cancelled", "Your order has been cancelled."),
            )?;
            print_line(&format!("{id} cancelled"));
        }
        DeliveryAction::Locate {
            id,
            lat,
            lng,
            address,
        } => {
            state
                .deliveries
                .update_location(&DeliveryId::new(id), Location { lat, lng, address });
        }
    }
    Ok(())
}

/// Canned event copy for each stage of the happy path.
const fn stage_event(status: DeliveryStatus) -> (&'static str, &'static str) {
    match status {
        DeliveryStatus::Preparing => (
            "Baking Started",
            "Your order is being prepared in our kitchen.",
        ),
        DeliveryStatus::Pickup => (
            "Order Ready",
            "Your cake is ready and waiting for pickup.",
        ),
        DeliveryStatus::InTransit => (
            "On The Way",
            "Your cake is on the way to your location.",
        ),
        DeliveryStatus::Completed => ("Delivered", "Your order has been delivered. Enjoy!"),
        DeliveryStatus::Pending | DeliveryStatus::Cancelled => ("Status Updated", ""),
    }
}

fn show(delivery: &Delivery) {
    print_line(&format!(
        "Delivery {} for order {} [{}]",
        delivery.id, delivery.order_id, delivery.status,
    ));
    print_line(&format!(
        "  Ordered {} · ETA {}",
        delivery.order_date.format("%Y-%m-%d %H:%M"),
        delivery.estimated_arrival.format("%H:%M"),
    ));
    print_line(&format!("  From: {}", delivery.current_location.address));
    print_line(&format!("  To:   {}", delivery.destination.address));
    print_line(&format!(
        "  Courier: {} ({}) · rating {:.1}",
        delivery.courier.name,
        delivery.courier.phone,
        delivery.courier.rating(),
    ));
    for line in &delivery.lines {
        print_line(&format!("  {} × {}", line.quantity, line.product.name));
    }
    print_line("  History (most recent first):");
    for event in &delivery.events {
        print_line(&format!(
            "    {}  {} - {}",
            event.time.format("%H:%M"),
            event.label,
            event.description,
        ));
    }
}
