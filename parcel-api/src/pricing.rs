use axum::{extract::State, routing::post, Router};
use parcel_catalog::{GeoPoint, PriceEstimate};
use parcel_shared::de::decimal;
use serde::Deserialize;

use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    #[serde(deserialize_with = "decimal")]
    pub pickup_lat: f64,
    #[serde(deserialize_with = "decimal")]
    pub pickup_lng: f64,
    #[serde(deserialize_with = "decimal")]
    pub dropoff_lat: f64,
    #[serde(deserialize_with = "decimal")]
    pub dropoff_lng: f64,
    /// Unknown or missing sizes price with the fallback multiplier.
    #[serde(default)]
    pub package_size: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/calculate-price", post(calculate_price))
}

/// POST /api/calculate-price
/// Straight-line estimate between two points
async fn calculate_price(
    State(state): State<AppState>,
    AppJson(req): AppJson<PriceRequest>,
) -> Result<AppJson<PriceEstimate>, AppError> {
    let from = GeoPoint::new(req.pickup_lat, req.pickup_lng);
    let to = GeoPoint::new(req.dropoff_lat, req.dropoff_lng);
    let estimate = state.orders.pricing().estimate(from, to, &req.package_size);
    tracing::debug!(
        "Estimated {} km {} parcel at {}",
        estimate.distance,
        req.package_size,
        estimate.estimated_price
    );
    Ok(AppJson(estimate))
}
