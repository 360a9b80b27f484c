use axum::{
    extract::State,
    routing::{get, patch, post},
    Router,
};
use parcel_order::LocationUpdate;
use parcel_shared::{AvailablePartner, DeliveryPartner, NewDeliveryPartner, UserId};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PartnerResponse {
    pub partner: DeliveryPartner,
}

#[derive(Debug, Serialize)]
pub struct PartnerListResponse {
    pub partners: Vec<AvailablePartner>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub is_available: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/delivery-partners", post(onboard))
        .route("/api/delivery-partners/available", get(available))
        .route("/api/delivery-partners/{user_id}", get(profile))
        .route("/api/delivery-partners/{user_id}/location", patch(update_location))
        .route("/api/delivery-partners/{user_id}/availability", patch(update_availability))
}

async fn onboard(
    State(state): State<AppState>,
    AppJson(new_partner): AppJson<NewDeliveryPartner>,
) -> Result<AppJson<PartnerResponse>, AppError> {
    let partner = state.partners.onboard(new_partner).await?;
    Ok(AppJson(PartnerResponse { partner }))
}

async fn available(State(state): State<AppState>) -> Result<AppJson<PartnerListResponse>, AppError> {
    let partners = state.partners.available().await?;
    Ok(AppJson(PartnerListResponse { partners }))
}

async fn profile(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<UserId>,
) -> Result<AppJson<PartnerResponse>, AppError> {
    let partner = state.partners.profile(user_id).await?;
    Ok(AppJson(PartnerResponse { partner }))
}

/// PATCH /api/delivery-partners/:userId/location
async fn update_location(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<UserId>,
    AppJson(update): AppJson<LocationUpdate>,
) -> Result<AppJson<MessageResponse>, AppError> {
    state.partners.update_location(user_id, update).await?;
    Ok(AppJson(MessageResponse {
        message: "Location updated successfully",
    }))
}

async fn update_availability(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<UserId>,
    AppJson(req): AppJson<AvailabilityRequest>,
) -> Result<AppJson<MessageResponse>, AppError> {
    state.partners.set_availability(user_id, req.is_available).await?;
    Ok(AppJson(MessageResponse {
        message: "Availability updated successfully",
    }))
}
