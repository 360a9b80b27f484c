use parcel_catalog::PricingEngine;
use parcel_core::{CoreError, CoreResult, StatusChange, Storage};
use parcel_shared::{NewOrder, Order, OrderId, OrderStatus, OrderWithDetails, PackageSize, UserId};
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{OrderDraft, TransitionRequest};

/// Manages order creation, pricing and status transitions
pub struct OrderManager {
    store: Arc<dyn Storage>,
    pricing: PricingEngine,
    strict_transitions: bool,
}

impl OrderManager {
    pub fn new(store: Arc<dyn Storage>, pricing: PricingEngine) -> Self {
        Self {
            store,
            pricing,
            strict_transitions: false,
        }
    }

    /// When enabled, status changes must follow the lifecycle: one step
    /// forward, or cancellation from a non-terminal state.
    pub fn with_strict_transitions(mut self, strict: bool) -> Self {
        self.strict_transitions = strict;
        self
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Validate and price a booking, then store it as `pending`.
    pub async fn place_order(&self, draft: OrderDraft) -> CoreResult<Order> {
        let pickup_address = required("pickupAddress", draft.pickup_address)?;
        let pickup_person_name = required("pickupPersonName", draft.pickup_person_name)?;
        let pickup_person_phone = required("pickupPersonPhone", draft.pickup_person_phone)?;
        let dropoff_address = required("dropoffAddress", draft.dropoff_address)?;
        let recipient_name = required("recipientName", draft.recipient_name)?;
        let recipient_phone = required("recipientPhone", draft.recipient_phone)?;

        let package_size = PackageSize::from_label(&draft.package_size).ok_or_else(|| {
            CoreError::validation("packageSize", "must be one of small, medium, large")
        })?;

        if let Some(distance) = draft.distance {
            if distance < 0.0 {
                return Err(CoreError::validation("distance", "must not be negative"));
            }
        }

        if self.store.get_user(draft.customer_id).await?.is_none() {
            return Err(CoreError::validation("customerId", "no such customer"));
        }

        let billable_km = self.pricing.billable_distance(draft.distance);
        let estimated_price = self.pricing.quote(billable_km, Some(package_size));

        let order = self
            .store
            .create_order(NewOrder {
                customer_id: draft.customer_id,
                pickup_address,
                pickup_person_name,
                pickup_person_phone,
                dropoff_address,
                recipient_name,
                recipient_phone,
                package_size,
                distance: draft.distance,
                estimated_price,
                special_instructions: draft
                    .special_instructions
                    .filter(|s| !s.trim().is_empty()),
            })
            .await?;

        info!(
            "Order {} placed by customer {}: {} parcel over {} km priced at {}",
            order.id, order.customer_id, package_size, billable_km, estimated_price
        );
        Ok(order)
    }

    pub async fn get_order(&self, id: OrderId) -> CoreResult<OrderWithDetails> {
        self.store
            .get_order(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Order", id))
    }

    /// Move an order to `request.status`, optionally assigning a partner and,
    /// on delivery, recording the settled price.
    pub async fn transition(&self, id: OrderId, request: TransitionRequest) -> CoreResult<Order> {
        if let Some(price) = request.actual_price {
            if request.status != OrderStatus::Delivered {
                return Err(CoreError::validation(
                    "actualPrice",
                    "can only be recorded when the order is delivered",
                ));
            }
            if price < 0.0 {
                return Err(CoreError::validation("actualPrice", "must not be negative"));
            }
        }

        let change = StatusChange::to(request.status)
            .with_partner(request.delivery_partner_id)
            .with_actual_price(request.actual_price)
            .enforcing_lifecycle(self.strict_transitions);

        let update = self
            .store
            .update_order_status(id, change)
            .await
            .map_err(|e| {
                if let CoreError::InvalidTransition { from, to } = &e {
                    warn!("Rejected transition of order {} from {} to {}", id, from, to);
                }
                e
            })?
            .ok_or_else(|| CoreError::not_found("Order", id))?;

        info!("Order {} is now {} (was {})", id, update.order.status, update.previous);

        // Only the write that moved the order into delivered counts it.
        if update.arrived_at_delivered() {
            if let Some(partner_id) = update.order.delivery_partner_id {
                self.store.record_completed_delivery(partner_id).await?;
            }
        }

        Ok(update.order)
    }

    /// All of a customer's orders, newest first.
    pub async fn customer_orders(&self, customer_id: UserId) -> CoreResult<Vec<OrderWithDetails>> {
        self.store.get_orders_by_customer(customer_id).await
    }

    /// A customer's orders that are neither delivered nor cancelled.
    pub async fn active_orders(&self, customer_id: UserId) -> CoreResult<Vec<OrderWithDetails>> {
        self.store.get_active_orders_by_customer(customer_id).await
    }

    /// Orders waiting for a courier, oldest first.
    pub async fn pending_orders(&self) -> CoreResult<Vec<OrderWithDetails>> {
        self.store.get_all_pending_orders().await
    }
}

fn required(field: &str, value: String) -> CoreResult<String> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "is required"));
    }
    Ok(value)
}
