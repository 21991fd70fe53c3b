//! Status enums for orders, deliveries, and payments.

use serde::{Deserialize, Serialize};

/// Delivery fulfillment status.
///
/// A delivery moves forward through
/// `pending → preparing → pickup → in_transit → completed`, and can be
/// cancelled from any non-terminal state. `completed` and `cancelled` are
/// terminal. Stages may be skipped (a same-day order can go straight from
/// `pending` to `pickup`), but a delivery never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Preparing,
    Pickup,
    InTransit,
    Completed,
    Cancelled,
}

impl DeliveryStatus {
    /// Whether this status ends the delivery's lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Position in the forward progression. `Cancelled` sits outside it.
    const fn stage(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Preparing => 1,
            Self::Pickup => 2,
            Self::InTransit => 3,
            Self::Completed => 4,
            Self::Cancelled => 5,
        }
    }

    /// Whether a delivery in this status may move to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        if matches!(next, Self::Cancelled) {
            return true;
        }
        next.stage() > self.stage()
    }

    /// The canonical next stage, if any. Used by the delivery simulation.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Pickup),
            Self::Pickup => Some(Self::InTransit),
            Self::InTransit => Some(Self::Completed),
            Self::Completed | Self::Cancelled => None,
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Pickup => "pickup",
            Self::InTransit => "in_transit",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "pickup" => Ok(Self::Pickup),
            "in_transit" => Ok(Self::InTransit),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid delivery status: {s}")),
        }
    }
}

/// Payment method selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paystack,
    Mpesa,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Card => "card",
            Self::Paystack => "paystack",
            Self::Mpesa => "mpesa",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "paystack" => Ok(Self::Paystack),
            "mpesa" => Ok(Self::Mpesa),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Order processing status, as shown on the admin order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Processing => "Processing",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        write!(f, "{label}")
    }
}
