use async_trait::async_trait;
use parcel_shared::{
    AvailablePartner, DeliveryPartner, NewDeliveryPartner, NewOrder, NewUser, Order, OrderId,
    OrderStatus, OrderWithDetails, User, UserId, UserUpdate,
};

use crate::CoreResult;

/// Fields written by a status transition. Partner and actual price are only
/// touched when supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub delivery_partner_id: Option<UserId>,
    pub actual_price: Option<f64>,
    /// When set, the store rejects the write with
    /// `CoreError::InvalidTransition` unless the current status may move to
    /// `status`. The check and the write happen in the same critical section.
    pub enforce_lifecycle: bool,
}

impl StatusChange {
    pub fn to(status: OrderStatus) -> Self {
        Self {
            status,
            delivery_partner_id: None,
            actual_price: None,
            enforce_lifecycle: false,
        }
    }

    pub fn with_partner(mut self, partner: Option<UserId>) -> Self {
        self.delivery_partner_id = partner;
        self
    }

    pub fn with_actual_price(mut self, price: Option<f64>) -> Self {
        self.actual_price = price;
        self
    }

    pub fn enforcing_lifecycle(mut self, enforce: bool) -> Self {
        self.enforce_lifecycle = enforce;
        self
    }
}

/// Outcome of a status write: the stored order and the status it held just
/// before the write, read in the same critical section.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub order: Order,
    pub previous: OrderStatus,
}

impl StatusUpdate {
    /// True only for the write that moved the order into `delivered`.
    pub fn arrived_at_delivered(&self) -> bool {
        self.order.status == OrderStatus::Delivered && self.previous != OrderStatus::Delivered
    }
}

/// Repository trait for account data access
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: UserId) -> CoreResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> CoreResult<Option<User>>;

    /// Fails with `CoreError::Conflict` when the handle is taken.
    async fn create_user(&self, user: NewUser) -> CoreResult<User>;

    /// `Ok(None)` when no user has this id. A handle change that collides
    /// with another account fails with `CoreError::Conflict`.
    async fn update_user(&self, id: UserId, update: UserUpdate) -> CoreResult<Option<User>>;
}

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a new order in `pending` with no partner, no actual price and
    /// no coordinates.
    async fn create_order(&self, order: NewOrder) -> CoreResult<Order>;

    /// `Ok(None)` when the order is missing or its customer cannot be
    /// resolved. A missing partner only drops the `delivery_partner` join.
    async fn get_order(&self, id: OrderId) -> CoreResult<Option<OrderWithDetails>>;

    /// Most recent first.
    async fn get_orders_by_customer(&self, customer_id: UserId) -> CoreResult<Vec<OrderWithDetails>>;

    async fn get_active_orders_by_customer(
        &self,
        customer_id: UserId,
    ) -> CoreResult<Vec<OrderWithDetails>> {
        let orders = self.get_orders_by_customer(customer_id).await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.order.status.is_active())
            .collect())
    }

    /// `Ok(None)` when the order is missing.
    async fn update_order_status(&self, id: OrderId, change: StatusChange) -> CoreResult<Option<StatusUpdate>>;

    /// Pending orders joined with their customer only.
    async fn get_all_pending_orders(&self) -> CoreResult<Vec<OrderWithDetails>>;
}

/// Repository trait for delivery partner profiles
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// Fails with `CoreError::Conflict` when the user already has a profile.
    async fn create_delivery_partner(&self, partner: NewDeliveryPartner) -> CoreResult<DeliveryPartner>;

    async fn get_delivery_partner(&self, user_id: UserId) -> CoreResult<Option<DeliveryPartner>>;

    async fn get_available_delivery_partners(&self) -> CoreResult<Vec<AvailablePartner>>;

    /// No-op when the user has no partner profile.
    async fn update_delivery_partner_location(&self, user_id: UserId, lat: f64, lng: f64) -> CoreResult<()>;

    /// No-op when the user has no partner profile.
    async fn update_delivery_partner_availability(&self, user_id: UserId, is_available: bool) -> CoreResult<()>;

    /// Bumps the completed-delivery counter. No-op when the user has no
    /// partner profile.
    async fn record_completed_delivery(&self, user_id: UserId) -> CoreResult<()>;
}

/// Everything the services need from a backing store.
pub trait Storage: UserRepository + OrderRepository + PartnerRepository {}

impl<T> Storage for T where T: UserRepository + OrderRepository + PartnerRepository {}
