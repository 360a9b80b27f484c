use parcel_catalog::GeoPoint;
use parcel_core::{CoreError, CoreResult, Storage};
use parcel_shared::{AvailablePartner, DeliveryPartner, NewDeliveryPartner, UserId};
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::LocationUpdate;

/// Courier roster: onboarding, availability and position reports.
///
/// Only accounts flagged as delivery partners are onboarded. The store
/// rejects a second profile for the same user under its write lock.
pub struct PartnerService {
    store: Arc<dyn Storage>,
}

impl PartnerService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    pub async fn onboard(&self, new_partner: NewDeliveryPartner) -> CoreResult<DeliveryPartner> {
        let user = self
            .store
            .get_user(new_partner.user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("User", new_partner.user_id))?;
        if !user.is_delivery_partner {
            return Err(CoreError::validation(
                "userId",
                "user is not registered as a delivery partner",
            ));
        }
        for (field, value) in [
            ("vehicleType", &new_partner.vehicle_type),
            ("vehicleNumber", &new_partner.vehicle_number),
            ("licenseNumber", &new_partner.license_number),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::validation(field, "is required"));
            }
        }
        if let (Some(lat), Some(lng)) = (new_partner.current_lat, new_partner.current_lng) {
            check_position(GeoPoint::new(lat, lng))?;
        }

        // Conflict when a profile already exists for this user.
        let partner = self.store.create_delivery_partner(new_partner).await?;
        info!("Onboarded delivery partner {} for user {}", partner.id, partner.user_id);
        Ok(partner)
    }

    pub async fn profile(&self, user_id: UserId) -> CoreResult<DeliveryPartner> {
        self.store
            .get_delivery_partner(user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Delivery partner", user_id))
    }

    pub async fn available(&self) -> CoreResult<Vec<AvailablePartner>> {
        self.store.get_available_delivery_partners().await
    }

    /// Silently ignored for users without a partner profile.
    pub async fn update_location(&self, user_id: UserId, update: LocationUpdate) -> CoreResult<()> {
        check_position(GeoPoint::new(update.lat, update.lng))?;
        debug!("Partner {} at {}, {}", user_id, update.lat, update.lng);
        self.store
            .update_delivery_partner_location(user_id, update.lat, update.lng)
            .await
    }

    pub async fn set_availability(&self, user_id: UserId, is_available: bool) -> CoreResult<()> {
        debug!("Partner {} availability set to {}", user_id, is_available);
        self.store
            .update_delivery_partner_availability(user_id, is_available)
            .await
    }
}

fn check_position(point: GeoPoint) -> CoreResult<()> {
    if !point.lat.is_finite() || !(-90.0..=90.0).contains(&point.lat) {
        return Err(CoreError::validation("lat", "must be between -90 and 90"));
    }
    if !point.is_valid() {
        return Err(CoreError::validation("lng", "must be between -180 and 180"));
    }
    Ok(())
}
