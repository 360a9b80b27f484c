use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PartnerId, User, UserId};
use crate::de::optional_decimal;

pub const DEFAULT_PARTNER_RATING: f64 = 5.0;

/// Operational profile of a courier, one-to-one with a partner `User`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPartner {
    pub id: PartnerId,
    pub user_id: UserId,
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub license_number: String,
    pub is_available: bool,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    pub rating: f64,
    pub total_deliveries: u32,
    pub created_at: DateTime<Utc>,
}

/// Onboarding payload for a delivery partner profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryPartner {
    pub user_id: UserId,
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub license_number: String,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub current_lat: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub current_lng: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_deliveries: Option<u32>,
}

/// An available partner joined with the account that owns the profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePartner {
    #[serde(flatten)]
    pub partner: DeliveryPartner,
    pub user: User,
}
