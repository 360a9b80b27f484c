//! Demo data for local development.
//!
//! Creates one customer (`demo_customer`) and one delivery partner
//! (`rahul_delivery`) with a bike profile parked in central Mumbai. Both use
//! the password `password123`.

use parcel_core::{CoreResult, Storage};
use parcel_shared::{Masked, NewDeliveryPartner, NewUser};
use tracing::info;

pub const DEMO_CUSTOMER: &str = "demo_customer";
pub const DEMO_PARTNER: &str = "rahul_delivery";

pub async fn seed_demo_data(store: &dyn Storage) -> CoreResult<()> {
    if store.get_user_by_username(DEMO_CUSTOMER).await?.is_some() {
        info!("Demo data already present, skipping seed");
        return Ok(());
    }

    let customer = store
        .create_user(NewUser {
            username: DEMO_CUSTOMER.to_string(),
            password: Masked::from("password123"),
            full_name: "Demo Customer".to_string(),
            phone_number: "+91-9876543210".to_string(),
            email: Some("customer@example.com".to_string()),
            is_delivery_partner: Some(false),
            profile_image: None,
        })
        .await?;

    let partner_user = store
        .create_user(NewUser {
            username: DEMO_PARTNER.to_string(),
            password: Masked::from("password123"),
            full_name: "Rahul Kumar".to_string(),
            phone_number: "+91-9876543211".to_string(),
            email: Some("rahul@example.com".to_string()),
            is_delivery_partner: Some(true),
            profile_image: None,
        })
        .await?;

    store
        .create_delivery_partner(NewDeliveryPartner {
            user_id: partner_user.id,
            vehicle_type: "bike".to_string(),
            vehicle_number: "MH02AB1234".to_string(),
            license_number: "DL123456789".to_string(),
            is_available: Some(true),
            current_lat: Some(19.0760),
            current_lng: Some(72.8777),
            rating: Some(4.8),
            total_deliveries: Some(150),
        })
        .await?;

    info!(
        "Seeded demo customer {} and delivery partner {}",
        customer.id, partner_user.id
    );
    Ok(())
}
