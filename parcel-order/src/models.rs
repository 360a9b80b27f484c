use parcel_shared::de::{decimal, optional_decimal};
use parcel_shared::{OrderStatus, UserId};
use serde::Deserialize;

/// Booking payload as posted by the client.
///
/// Client-side fields such as `estimatedPrice`, `status` or
/// `deliveryPartnerId` are ignored: the server prices the order and always
/// starts it in `pending`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_id: UserId,
    pub pickup_address: String,
    pub pickup_person_name: String,
    pub pickup_person_phone: String,
    pub dropoff_address: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub package_size: String,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub distance: Option<f64>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_partner_id: Option<UserId>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub actual_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationUpdate {
    #[serde(deserialize_with = "decimal")]
    pub lat: f64,
    #[serde(deserialize_with = "decimal")]
    pub lng: f64,
}
