use parcel_core::{CoreResult, Storage};
use parcel_shared::{Order, OrderStatus, UserId};
use serde::Serialize;
use std::sync::Arc;

/// Shown until customer ratings are collected.
pub const PLACEHOLDER_RATING: f64 = 4.8;
pub const PLACEHOLDER_MEMBER_SINCE: &str = "2024-01-01T00:00:00.000Z";

/// Dashboard summary for a customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub total_spent: f64,
    pub average_rating: f64,
    pub member_since: String,
}

impl UserStats {
    /// Summarise a customer's orders. Spend counts delivered orders only, at
    /// the settled price when one was recorded.
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut total_orders = 0;
        let mut completed_orders = 0;
        let mut total_spent = 0.0;
        for order in orders {
            total_orders += 1;
            if order.status == OrderStatus::Delivered {
                completed_orders += 1;
                total_spent += order.charged_amount();
            }
        }
        Self {
            total_orders,
            completed_orders,
            total_spent,
            average_rating: PLACEHOLDER_RATING,
            member_since: PLACEHOLDER_MEMBER_SINCE.to_string(),
        }
    }
}

pub struct StatsService {
    store: Arc<dyn Storage>,
}

impl StatsService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    /// Unknown users get an all-zero summary.
    pub async fn user_stats(&self, user_id: UserId) -> CoreResult<UserStats> {
        let orders = self.store.get_orders_by_customer(user_id).await?;
        Ok(UserStats::from_orders(orders.iter().map(|o| &o.order)))
    }
}
