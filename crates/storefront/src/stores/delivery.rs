//! The delivery tracking store.
//!
//! Owns every delivery record for the session. A record's status follows
//! the [`DeliveryStatus`] machine; its event log is append-only and kept
//! most-recent-first, which is the contract consumers rely on when showing
//! history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

use sweetstack_core::{CourierId, DeliveryId, DeliveryStatus, OrderId};

use crate::persistence::StorageHandle;
use crate::stores::CartLine;

const DELIVERY_KEY: &str = "sweet-stack-delivery";

/// A coordinate pair plus human-readable address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// The person carrying the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub id: CourierId,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub photo: Option<String>,
    rating: f32,
}

impl Courier {
    /// Create a courier profile. The rating is clamped to the 0-5 scale.
    #[must_use]
    pub fn new(
        id: CourierId,
        name: impl Into<String>,
        phone: impl Into<String>,
        photo: Option<String>,
        rating: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            photo,
            rating: rating.clamp(0.0, 5.0),
        }
    }

    /// Star rating on the 0-5 scale.
    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }
}

/// One entry in a delivery's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryEvent {
    pub time: DateTime<Utc>,
    /// Short status label, e.g. "Order Confirmed".
    pub label: String,
    pub description: String,
}

impl DeliveryEvent {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn now(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// The tracked state of one order's fulfillment and shipment.
///
/// `lines` is a snapshot taken at order time, not a live reference to the
/// cart. Only [`DeliveryStore`] may mutate a record once added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub order_id: OrderId,
    pub order_date: DateTime<Utc>,
    pub status: DeliveryStatus,
    pub estimated_arrival: DateTime<Utc>,
    pub lines: Vec<CartLine>,
    pub current_location: Location,
    pub destination: Location,
    pub courier: Courier,
    /// Status history, most recent first.
    pub events: Vec<DeliveryEvent>,
}

/// A status update that the delivery's state machine does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move delivery from {from} to {to}")]
pub struct TransitionError {
    pub from: DeliveryStatus,
    pub to: DeliveryStatus,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct DeliveryState {
    deliveries: Vec<Delivery>,
}

/// The collection of delivery records.
pub struct DeliveryStore {
    state: DeliveryState,
    storage: StorageHandle,
    revision: watch::Sender<u64>,
}

impl DeliveryStore {
    /// Rehydrate the deliveries from storage, or start empty.
    #[must_use]
    pub fn load(storage: StorageHandle) -> Self {
        let state = super::load_state(&storage, DELIVERY_KEY);
        let (revision, _) = watch::channel(0);
        Self {
            state,
            storage,
            revision,
        }
    }

    /// Insert a fully-formed delivery record.
    ///
    /// Ids are unique across the collection; a record whose id is already
    /// present is dropped with a warning.
    pub fn add(&mut self, delivery: Delivery) {
        if self.get(&delivery.id).is_some() {
            warn!(id = %delivery.id, "ignoring delivery with duplicate id");
            return;
        }
        info!(id = %delivery.id, order = %delivery.order_id, "tracking new delivery");
        self.state.deliveries.push(delivery);
        self.commit();
    }

    /// Look up a delivery by id.
    #[must_use]
    pub fn get(&self, id: &DeliveryId) -> Option<&Delivery> {
        self.state.deliveries.iter().find(|d| &d.id == id)
    }

    /// All tracked deliveries, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Delivery] {
        &self.state.deliveries
    }

    /// Advance a delivery's status and prepend the event to its log.
    ///
    /// Unknown ids leave the collection unchanged and return `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] if the status machine forbids the move
    /// (backwards, repeated, or out of a terminal state); the record is
    /// left untouched.
    pub fn update_status(
        &mut self,
        id: &DeliveryId,
        status: DeliveryStatus,
        event: DeliveryEvent,
    ) -> Result<(), TransitionError> {
        let Some(delivery) = self.state.deliveries.iter_mut().find(|d| &d.id == id) else {
            return Ok(());
        };
        if !delivery.status.can_transition_to(status) {
            return Err(TransitionError {
                from: delivery.status,
                to: status,
            });
        }
        info!(%id, from = %delivery.status, to = %status, "delivery status updated");
        delivery.status = status;
        delivery.events.insert(0, event);
        self.commit();
        Ok(())
    }

    /// Replace a delivery's current location. Appends no event.
    ///
    /// Unknown ids leave the collection unchanged.
    pub fn update_location(&mut self, id: &DeliveryId, location: Location) {
        let Some(delivery) = self.state.deliveries.iter_mut().find(|d| &d.id == id) else {
            return;
        };
        delivery.current_location = location;
        self.commit();
    }

    /// Subscribe to change notifications. The value is a revision counter.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn commit(&mut self) {
        super::persist_state(&self.storage, DELIVERY_KEY, &self.state);
        self.revision.send_modify(|r| *r += 1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    fn sample_delivery(id: &str) -> Delivery {
        Delivery {
            id: DeliveryId::new(id),
            order_id: OrderId::new(format!("ORD-{id}")),
            order_date: Utc::now(),
            status: DeliveryStatus::Pending,
            estimated_arrival: Utc::now(),
            lines: Vec::new(),
            current_location: Location {
                lat: 6.5244,
                lng: 3.3792,
                address: "23 Allen Avenue, Ikeja, Lagos".to_owned(),
            },
            destination: Location {
                lat: 6.4698,
                lng: 3.5852,
                address: "10 Victoria Island, Lagos".to_owned(),
            },
            courier: Courier::new(
                CourierId::new("c1"),
                "John Doe",
                "+2341234567890",
                None,
                4.8,
            ),
            events: vec![DeliveryEvent::now(
                "Order Confirmed",
                "Your order has been confirmed and is being prepared.",
            )],
        }
    }

    fn store() -> DeliveryStore {
        DeliveryStore::load(MemoryStorage::handle())
    }

    #[test]
    fn test_add_and_get() {
        let mut deliveries = store();
        deliveries.add(sample_delivery("del1"));
        assert!(deliveries.get(&DeliveryId::new("del1")).is_some());
        assert!(deliveries.get(&DeliveryId::new("nope")).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut deliveries = store();
        deliveries.add(sample_delivery("del1"));
        let mut dup = sample_delivery("del1");
        dup.order_id = OrderId::new("ORD-other");
        deliveries.add(dup);

        assert_eq!(deliveries.all().len(), 1);
        let kept = deliveries.get(&DeliveryId::new("del1")).unwrap();
        assert_eq!(kept.order_id, OrderId::new("ORD-del1"));
    }

    #[test]
    fn test_status_update_prepends_event() {
        let mut deliveries = store();
        deliveries.add(sample_delivery("del1"));
        let id = DeliveryId::new("del1");

        let ready = DeliveryEvent::now("Order Ready", "Your cake is ready and waiting for pickup.");
        deliveries
            .update_status(&id, DeliveryStatus::Preparing, ready.clone())
            .unwrap();
        let on_the_way = DeliveryEvent::now("On The Way", "Your cake is on the way.");
        deliveries
            .update_status(&id, DeliveryStatus::InTransit, on_the_way.clone())
            .unwrap();

        let delivery = deliveries.get(&id).unwrap();
        assert_eq!(delivery.status, DeliveryStatus::InTransit);
        // Most recent first; prior events keep their relative order.
        let labels: Vec<_> = delivery.events.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["On The Way", "Order Ready", "Order Confirmed"]);
    }

    #[test]
    fn test_invalid_transition_leaves_record_untouched() {
        let mut deliveries = store();
        deliveries.add(sample_delivery("del1"));
        let id = DeliveryId::new("del1");

        deliveries
            .update_status(&id, DeliveryStatus::Completed, DeliveryEvent::now("Delivered", ""))
            .unwrap();

        let err = deliveries
            .update_status(&id, DeliveryStatus::Preparing, DeliveryEvent::now("Oops", ""))
            .unwrap_err();
        assert_eq!(err.from, DeliveryStatus::Completed);
        assert_eq!(err.to, DeliveryStatus::Preparing);

        let delivery = deliveries.get(&id).unwrap();
        assert_eq!(delivery.status, DeliveryStatus::Completed);
        assert_eq!(delivery.events.len(), 2);
    }

    #[test]
    fn test_unknown_id_updates_are_noops() {
        let mut deliveries = store();
        deliveries.add(sample_delivery("del1"));

        let unknown = DeliveryId::new("nope");
        assert!(
            deliveries
                .update_status(&unknown, DeliveryStatus::Pickup, DeliveryEvent::now("x", ""))
                .is_ok()
        );
        deliveries.update_location(
            &unknown,
            Location {
                lat: 0.0,
                lng: 0.0,
                address: String::new(),
            },
        );
        assert_eq!(deliveries.all().len(), 1);
    }

    #[test]
    fn test_location_update_replaces_without_event() {
        let mut deliveries = store();
        deliveries.add(sample_delivery("del1"));
        let id = DeliveryId::new("del1");

        let midpoint = Location {
            lat: 6.5,
            lng: 3.45,
            address: "Third Mainland Bridge, Lagos".to_owned(),
        };
        deliveries.update_location(&id, midpoint.clone());

        let delivery = deliveries.get(&id).unwrap();
        assert_eq!(delivery.current_location, midpoint);
        assert_eq!(delivery.events.len(), 1);
    }

    #[test]
    fn test_courier_rating_is_clamped() {
        let courier = Courier::new(CourierId::new("c9"), "Jane", "+254700000000", None, 7.2);
        assert!((courier.rating() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rehydrates_from_storage() {
        let storage = MemoryStorage::handle();
        {
            let mut deliveries = DeliveryStore::load(storage.clone());
            deliveries.add(sample_delivery("del1"));
        }
        let deliveries = DeliveryStore::load(storage);
        assert!(deliveries.get(&DeliveryId::new("del1")).is_some());
    }
}
