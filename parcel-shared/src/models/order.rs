use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DeliveryPartner, OrderId, User, UserId};

/// Order status in the delivery lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Pickup,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Pickup => "pickup",
            OrderStatus::InTransit => "in_transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Delivered and cancelled orders take no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// The nominal successor on the happy path.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Pickup),
            OrderStatus::Pickup => Some(OrderStatus::InTransit),
            OrderStatus::InTransit => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Whether `target` follows `self` in the state machine: one step forward,
    /// or cancellation from any non-terminal state.
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == OrderStatus::Cancelled || self.next() == Some(target)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package size class selected at booking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
}

impl PackageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageSize::Small => "small",
            PackageSize::Medium => "medium",
            PackageSize::Large => "large",
        }
    }

    /// Exact, case-sensitive match on the wire label.
    pub fn from_label(label: &str) -> Option<PackageSize> {
        match label {
            "small" => Some(PackageSize::Small),
            "medium" => Some(PackageSize::Medium),
            "large" => Some(PackageSize::Large),
            _ => None,
        }
    }
}

impl fmt::Display for PackageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single delivery request from a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub delivery_partner_id: Option<UserId>,
    pub pickup_address: String,
    pub pickup_person_name: String,
    pub pickup_person_phone: String,
    pub dropoff_address: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    pub dropoff_lat: Option<f64>,
    pub dropoff_lng: Option<f64>,
    pub package_size: PackageSize,
    pub package_weight: Option<f64>,
    pub distance: Option<f64>,
    pub estimated_price: f64,
    pub actual_price: Option<f64>,
    pub status: OrderStatus,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// The amount a completed order counts towards spend: the settled price
    /// when recorded, otherwise the estimate.
    pub fn charged_amount(&self) -> f64 {
        self.actual_price.unwrap_or(self.estimated_price)
    }
}

/// A priced order ready to be stored. Identity, status and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: UserId,
    pub pickup_address: String,
    pub pickup_person_name: String,
    pub pickup_person_phone: String,
    pub dropoff_address: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub package_size: PackageSize,
    pub distance: Option<f64>,
    pub estimated_price: f64,
    pub special_instructions: Option<String>,
}

/// A courier assigned to an order, together with their operational profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedPartner {
    #[serde(flatten)]
    pub user: User,
    pub partner_details: DeliveryPartner,
}

/// An order joined with its customer and, if assigned, its delivery partner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithDetails {
    #[serde(flatten)]
    pub order: Order,
    pub customer: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_partner: Option<AssignedPartner>,
}
