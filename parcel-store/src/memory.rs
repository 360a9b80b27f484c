use async_trait::async_trait;
use chrono::Utc;
use parcel_core::{
    CoreError, CoreResult, OrderRepository, PartnerRepository, StatusChange, StatusUpdate,
    UserRepository,
};
use parcel_shared::{
    AssignedPartner, AvailablePartner, DeliveryPartner, NewDeliveryPartner, NewOrder, NewUser,
    Order, OrderId, OrderStatus, OrderWithDetails, PartnerId, User, UserId, UserUpdate,
    DEFAULT_PARTNER_RATING,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

const DUPLICATE_USERNAME: &str = "Username already exists";
const DUPLICATE_PARTNER: &str = "Delivery partner profile already exists";

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    orders: HashMap<OrderId, Order>,
    partners: HashMap<PartnerId, DeliveryPartner>,
}

impl Tables {
    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| u.username == username && Some(u.id) != except)
    }

    fn partner_for_user(&self, user_id: UserId) -> Option<&DeliveryPartner> {
        self.partners.values().find(|p| p.user_id == user_id)
    }

    fn partner_for_user_mut(&mut self, user_id: UserId) -> Option<&mut DeliveryPartner> {
        self.partners.values_mut().find(|p| p.user_id == user_id)
    }

    /// Customer join only. `None` when the customer is gone.
    fn with_customer(&self, order: &Order) -> Option<OrderWithDetails> {
        let customer = self.users.get(&order.customer_id)?;
        Some(OrderWithDetails {
            order: order.clone(),
            customer: customer.clone(),
            delivery_partner: None,
        })
    }

    /// Full join. The partner is attached only when both the account and the
    /// profile resolve.
    fn with_details(&self, order: &Order) -> Option<OrderWithDetails> {
        let mut joined = self.with_customer(order)?;
        joined.delivery_partner = order.delivery_partner_id.and_then(|partner_id| {
            let user = self.users.get(&partner_id)?;
            let details = self.partner_for_user(partner_id)?;
            Some(AssignedPartner {
                user: user.clone(),
                partner_details: details.clone(),
            })
        });
        Some(joined)
    }
}

/// Process-memory store. One lock guards every table so each operation is a
/// single critical section; identities come from per-table counters.
pub struct MemStore {
    tables: RwLock<Tables>,
    next_user_id: AtomicI64,
    next_order_id: AtomicI64,
    next_partner_id: AtomicI64,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            next_user_id: AtomicI64::new(1),
            next_order_id: AtomicI64::new(1),
            next_partner_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemStore {
    async fn get_user(&self, id: UserId) -> CoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> CoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.username_taken(&new_user.username, None) {
            return Err(CoreError::Conflict(DUPLICATE_USERNAME.to_string()));
        }

        let user = User {
            id: self.next_user_id.fetch_add(1, Ordering::SeqCst),
            username: new_user.username,
            password: new_user.password,
            full_name: new_user.full_name,
            phone_number: new_user.phone_number,
            email: new_user.email,
            is_delivery_partner: new_user.is_delivery_partner.unwrap_or(false),
            profile_image: new_user.profile_image,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        debug!("Stored user {} ({})", user.id, user.username);
        Ok(user)
    }

    async fn update_user(&self, id: UserId, update: UserUpdate) -> CoreResult<Option<User>> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Ok(None);
        }
        if let Some(username) = update.username.as_deref() {
            if tables.username_taken(username, Some(id)) {
                return Err(CoreError::Conflict(DUPLICATE_USERNAME.to_string()));
            }
        }

        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        update.apply_to(user);
        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl OrderRepository for MemStore {
    async fn create_order(&self, new_order: NewOrder) -> CoreResult<Order> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let order = Order {
            id: self.next_order_id.fetch_add(1, Ordering::SeqCst),
            customer_id: new_order.customer_id,
            delivery_partner_id: None,
            pickup_address: new_order.pickup_address,
            pickup_person_name: new_order.pickup_person_name,
            pickup_person_phone: new_order.pickup_person_phone,
            dropoff_address: new_order.dropoff_address,
            recipient_name: new_order.recipient_name,
            recipient_phone: new_order.recipient_phone,
            pickup_lat: None,
            pickup_lng: None,
            dropoff_lat: None,
            dropoff_lng: None,
            package_size: new_order.package_size,
            package_weight: None,
            distance: new_order.distance,
            estimated_price: new_order.estimated_price,
            actual_price: None,
            status: OrderStatus::Pending,
            special_instructions: new_order.special_instructions,
            created_at: now,
            updated_at: now,
        };
        tables.orders.insert(order.id, order.clone());
        debug!("Stored order {} for customer {}", order.id, order.customer_id);
        Ok(order)
    }

    async fn get_order(&self, id: OrderId) -> CoreResult<Option<OrderWithDetails>> {
        let tables = self.tables.read().await;
        Ok(tables.orders.get(&id).and_then(|o| tables.with_details(o)))
    }

    async fn get_orders_by_customer(&self, customer_id: UserId) -> CoreResult<Vec<OrderWithDetails>> {
        let tables = self.tables.read().await;
        let mut orders: Vec<OrderWithDetails> = tables
            .orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .filter_map(|o| tables.with_details(o))
            .collect();

        orders.sort_by(|a, b| {
            b.order
                .created_at
                .cmp(&a.order.created_at)
                .then(b.order.id.cmp(&a.order.id))
        });
        Ok(orders)
    }

    async fn update_order_status(&self, id: OrderId, change: StatusChange) -> CoreResult<Option<StatusUpdate>> {
        let mut tables = self.tables.write().await;
        let Some(order) = tables.orders.get_mut(&id) else {
            return Ok(None);
        };
        if change.enforce_lifecycle && !order.status.can_transition_to(change.status) {
            return Err(CoreError::InvalidTransition {
                from: order.status,
                to: change.status,
            });
        }

        let previous = order.status;
        order.status = change.status;
        if let Some(partner_id) = change.delivery_partner_id {
            order.delivery_partner_id = Some(partner_id);
        }
        if let Some(price) = change.actual_price {
            order.actual_price = Some(price);
        }
        order.updated_at = Utc::now();
        Ok(Some(StatusUpdate {
            order: order.clone(),
            previous,
        }))
    }

    async fn get_all_pending_orders(&self) -> CoreResult<Vec<OrderWithDetails>> {
        let tables = self.tables.read().await;
        let mut pending: Vec<OrderWithDetails> = tables
            .orders
            .values()
            .filter(|o| o.status == OrderStatus::Pending)
            .filter_map(|o| tables.with_customer(o))
            .collect();

        pending.sort_by(|a, b| {
            a.order
                .created_at
                .cmp(&b.order.created_at)
                .then(a.order.id.cmp(&b.order.id))
        });
        Ok(pending)
    }
}

#[async_trait]
impl PartnerRepository for MemStore {
    async fn create_delivery_partner(&self, new_partner: NewDeliveryPartner) -> CoreResult<DeliveryPartner> {
        let mut tables = self.tables.write().await;
        if tables.partner_for_user(new_partner.user_id).is_some() {
            return Err(CoreError::Conflict(DUPLICATE_PARTNER.to_string()));
        }

        let partner = DeliveryPartner {
            id: self.next_partner_id.fetch_add(1, Ordering::SeqCst),
            user_id: new_partner.user_id,
            vehicle_type: new_partner.vehicle_type,
            vehicle_number: new_partner.vehicle_number,
            license_number: new_partner.license_number,
            is_available: new_partner.is_available.unwrap_or(true),
            current_lat: new_partner.current_lat,
            current_lng: new_partner.current_lng,
            rating: new_partner.rating.unwrap_or(DEFAULT_PARTNER_RATING),
            total_deliveries: new_partner.total_deliveries.unwrap_or(0),
            created_at: Utc::now(),
        };
        tables.partners.insert(partner.id, partner.clone());
        debug!("Stored delivery partner {} for user {}", partner.id, partner.user_id);
        Ok(partner)
    }

    async fn get_delivery_partner(&self, user_id: UserId) -> CoreResult<Option<DeliveryPartner>> {
        Ok(self.tables.read().await.partner_for_user(user_id).cloned())
    }

    async fn get_available_delivery_partners(&self) -> CoreResult<Vec<AvailablePartner>> {
        let tables = self.tables.read().await;
        let mut available: Vec<AvailablePartner> = tables
            .partners
            .values()
            .filter(|p| p.is_available)
            .filter_map(|p| {
                let user = tables.users.get(&p.user_id)?;
                Some(AvailablePartner {
                    partner: p.clone(),
                    user: user.clone(),
                })
            })
            .collect();

        available.sort_by_key(|a| a.partner.id);
        Ok(available)
    }

    async fn update_delivery_partner_location(&self, user_id: UserId, lat: f64, lng: f64) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(partner) = tables.partner_for_user_mut(user_id) {
            partner.current_lat = Some(lat);
            partner.current_lng = Some(lng);
        }
        Ok(())
    }

    async fn update_delivery_partner_availability(&self, user_id: UserId, is_available: bool) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(partner) = tables.partner_for_user_mut(user_id) {
            partner.is_available = is_available;
        }
        Ok(())
    }

    async fn record_completed_delivery(&self, user_id: UserId) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(partner) = tables.partner_for_user_mut(user_id) {
            partner.total_deliveries = partner.total_deliveries.saturating_add(1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_shared::{Masked, PackageSize};
    use std::sync::Arc;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: Masked::from("password123"),
            full_name: format!("{username} full name"),
            phone_number: "+91-9000000000".to_string(),
            email: None,
            is_delivery_partner: None,
            profile_image: None,
        }
    }

    fn new_order(customer_id: UserId) -> NewOrder {
        NewOrder {
            customer_id,
            pickup_address: "12 Marine Drive".to_string(),
            pickup_person_name: "Sender".to_string(),
            pickup_person_phone: "+91-9111111111".to_string(),
            dropoff_address: "4 Linking Road".to_string(),
            recipient_name: "Recipient".to_string(),
            recipient_phone: "+91-9222222222".to_string(),
            package_size: PackageSize::Small,
            distance: Some(3.0),
            estimated_price: 86.0,
            special_instructions: None,
        }
    }

    fn new_partner(user_id: UserId) -> NewDeliveryPartner {
        NewDeliveryPartner {
            user_id,
            vehicle_type: "bike".to_string(),
            vehicle_number: "MH02AB1234".to_string(),
            license_number: "DL123456789".to_string(),
            is_available: None,
            current_lat: None,
            current_lng: None,
            rating: None,
            total_deliveries: None,
        }
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let store = MemStore::new();
        let first = store.create_user(new_user("asha")).await.unwrap();
        assert_eq!(first.id, 1);
        assert!(!first.is_delivery_partner);

        let err = store.create_user(new_user("asha")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));

        let second = store.create_user(new_user("ravi")).await.unwrap();
        assert_eq!(second.id, 2);
        assert_eq!(store.get_user_by_username("ravi").await.unwrap().unwrap().id, 2);
    }

    #[tokio::test]
    async fn concurrent_registrations_of_one_handle_admit_exactly_one() {
        let store = Arc::new(MemStore::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.create_user(new_user("race")).await }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
    }

    #[tokio::test]
    async fn update_user_applies_fields_and_guards_handle() {
        let store = MemStore::new();
        let asha = store.create_user(new_user("asha")).await.unwrap();
        store.create_user(new_user("ravi")).await.unwrap();

        let update = UserUpdate {
            full_name: Some("Asha R".to_string()),
            email: Some(Some("asha@example.com".to_string())),
            ..UserUpdate::default()
        };
        let updated = store.update_user(asha.id, update).await.unwrap().unwrap();
        assert_eq!(updated.full_name, "Asha R");
        assert_eq!(updated.email.as_deref(), Some("asha@example.com"));
        assert_eq!(updated.created_at, asha.created_at);
        assert!(updated.password.matches("password123"));

        let clash = UserUpdate {
            username: Some("ravi".to_string()),
            ..UserUpdate::default()
        };
        assert!(matches!(store.update_user(asha.id, clash).await, Err(CoreError::Conflict(_))));

        // Keeping one's own handle is not a clash.
        let same = UserUpdate {
            username: Some("asha".to_string()),
            ..UserUpdate::default()
        };
        assert!(store.update_user(asha.id, same).await.unwrap().is_some());

        assert!(store.update_user(999, UserUpdate::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn new_orders_start_pending_and_unassigned() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let order = store.create_order(new_order(customer.id)).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.delivery_partner_id, None);
        assert_eq!(order.actual_price, None);
        assert_eq!(order.pickup_lat, None);
        assert_eq!(order.package_weight, None);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[tokio::test]
    async fn customer_orders_are_newest_first_and_active_is_a_filtered_subset() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let other = store.create_user(new_user("ravi")).await.unwrap();

        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(store.create_order(new_order(customer.id)).await.unwrap().id);
        }
        store.create_order(new_order(other.id)).await.unwrap();

        store
            .update_order_status(ids[1], StatusChange::to(OrderStatus::Delivered))
            .await
            .unwrap();
        store
            .update_order_status(ids[3], StatusChange::to(OrderStatus::Cancelled))
            .await
            .unwrap();

        let all = store.get_orders_by_customer(customer.id).await.unwrap();
        assert_eq!(all.len(), 5);
        for pair in all.windows(2) {
            assert!(pair[0].order.created_at >= pair[1].order.created_at);
        }
        assert_eq!(all[0].order.id, ids[4]);

        let active = store.get_active_orders_by_customer(customer.id).await.unwrap();
        let expected: Vec<OrderId> = all
            .iter()
            .filter(|o| !o.order.status.is_terminal())
            .map(|o| o.order.id)
            .collect();
        let actual: Vec<OrderId> = active.iter().map(|o| o.order.id).collect();
        assert_eq!(actual, expected);
        assert_eq!(actual.len(), 3);
    }

    #[tokio::test]
    async fn status_update_preserves_partner_unless_supplied() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let order = store.create_order(new_order(customer.id)).await.unwrap();

        let accepted = store
            .update_order_status(order.id, StatusChange::to(OrderStatus::Accepted).with_partner(Some(7)))
            .await
            .unwrap()
            .unwrap()
            .order;
        assert_eq!(accepted.delivery_partner_id, Some(7));
        assert!(accepted.updated_at >= order.updated_at);

        let delivered = store
            .update_order_status(order.id, StatusChange::to(OrderStatus::Delivered))
            .await
            .unwrap()
            .unwrap()
            .order;
        assert_eq!(delivered.delivery_partner_id, Some(7));
        assert_eq!(delivered.actual_price, None);

        let reassigned = store
            .update_order_status(
                order.id,
                StatusChange::to(OrderStatus::Delivered)
                    .with_partner(Some(8))
                    .with_actual_price(Some(90.0)),
            )
            .await
            .unwrap()
            .unwrap()
            .order;
        assert_eq!(reassigned.delivery_partner_id, Some(8));
        assert_eq!(reassigned.actual_price, Some(90.0));

        assert!(store
            .update_order_status(404, StatusChange::to(OrderStatus::Accepted))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn status_update_reports_the_previous_status() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let order = store.create_order(new_order(customer.id)).await.unwrap();

        let first = store
            .update_order_status(order.id, StatusChange::to(OrderStatus::Delivered))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.previous, OrderStatus::Pending);
        assert!(first.arrived_at_delivered());

        let again = store
            .update_order_status(order.id, StatusChange::to(OrderStatus::Delivered))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(again.previous, OrderStatus::Delivered);
        assert!(!again.arrived_at_delivered());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_deliveries_of_one_order_arrive_once() {
        let store = Arc::new(MemStore::new());
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let order_id = store.create_order(new_order(customer.id)).await.unwrap().id;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .update_order_status(order_id, StatusChange::to(OrderStatus::Delivered))
                    .await
            }));
        }

        let mut arrivals = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().unwrap().arrived_at_delivered() {
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
    }

    #[tokio::test]
    async fn lifecycle_enforcement_rejects_illegal_moves_without_writing() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let order = store.create_order(new_order(customer.id)).await.unwrap();

        let err = store
            .update_order_status(
                order.id,
                StatusChange::to(OrderStatus::Delivered).with_partner(Some(3)).enforcing_lifecycle(true),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition { from: OrderStatus::Pending, to: OrderStatus::Delivered }
        ));

        let unchanged = store.get_order(order.id).await.unwrap().unwrap();
        assert_eq!(unchanged.order.status, OrderStatus::Pending);
        assert_eq!(unchanged.order.delivery_partner_id, None);

        let accepted = store
            .update_order_status(order.id, StatusChange::to(OrderStatus::Accepted).enforcing_lifecycle(true))
            .await
            .unwrap()
            .unwrap()
            .order;
        assert_eq!(accepted.status, OrderStatus::Accepted);
    }

    #[tokio::test]
    async fn get_order_joins_partner_only_when_profile_resolves() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let courier = store.create_user(new_user("rahul")).await.unwrap();
        let order = store.create_order(new_order(customer.id)).await.unwrap();

        store
            .update_order_status(order.id, StatusChange::to(OrderStatus::Accepted).with_partner(Some(courier.id)))
            .await
            .unwrap();

        // Account exists but no partner profile yet.
        let joined = store.get_order(order.id).await.unwrap().unwrap();
        assert_eq!(joined.customer.id, customer.id);
        assert!(joined.delivery_partner.is_none());

        store.create_delivery_partner(new_partner(courier.id)).await.unwrap();
        let joined = store.get_order(order.id).await.unwrap().unwrap();
        let partner = joined.delivery_partner.unwrap();
        assert_eq!(partner.user.id, courier.id);
        assert_eq!(partner.partner_details.vehicle_number, "MH02AB1234");
    }

    #[tokio::test]
    async fn order_with_unknown_customer_is_not_found_and_skipped_in_listings() {
        let store = MemStore::new();
        let orphan = store.create_order(new_order(77)).await.unwrap();

        assert!(store.get_order(orphan.id).await.unwrap().is_none());
        assert!(store.get_orders_by_customer(77).await.unwrap().is_empty());
        assert!(store.get_all_pending_orders().await.unwrap().is_empty());
        assert!(store.get_order(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pending_feed_lists_only_pending_orders_without_partner_join() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();
        let first = store.create_order(new_order(customer.id)).await.unwrap();
        let second = store.create_order(new_order(customer.id)).await.unwrap();
        store
            .update_order_status(second.id, StatusChange::to(OrderStatus::Accepted))
            .await
            .unwrap();
        let third = store.create_order(new_order(customer.id)).await.unwrap();

        let pending = store.get_all_pending_orders().await.unwrap();
        let ids: Vec<OrderId> = pending.iter().map(|o| o.order.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
        assert!(pending.iter().all(|o| o.delivery_partner.is_none()));
    }

    #[tokio::test]
    async fn partner_profile_defaults_and_setters() {
        let store = MemStore::new();
        let courier = store.create_user(new_user("rahul")).await.unwrap();
        let partner = store.create_delivery_partner(new_partner(courier.id)).await.unwrap();

        assert!(partner.is_available);
        assert_eq!(partner.rating, DEFAULT_PARTNER_RATING);
        assert_eq!(partner.total_deliveries, 0);

        store.update_delivery_partner_location(courier.id, 19.1, 72.9).await.unwrap();
        store.record_completed_delivery(courier.id).await.unwrap();
        let refreshed = store.get_delivery_partner(courier.id).await.unwrap().unwrap();
        assert_eq!(refreshed.current_lat, Some(19.1));
        assert_eq!(refreshed.current_lng, Some(72.9));
        assert_eq!(refreshed.total_deliveries, 1);

        let available = store.get_available_delivery_partners().await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].user.username, "rahul");

        store.update_delivery_partner_availability(courier.id, false).await.unwrap();
        assert!(store.get_available_delivery_partners().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_profile_for_one_user_is_a_conflict() {
        let store = MemStore::new();
        let courier = store.create_user(new_user("rahul")).await.unwrap();
        store.create_delivery_partner(new_partner(courier.id)).await.unwrap();

        let err = store.create_delivery_partner(new_partner(courier.id)).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_profile_creation_admits_exactly_one() {
        let store = Arc::new(MemStore::new());
        let courier_id = store.create_user(new_user("rahul")).await.unwrap().id;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create_delivery_partner(new_partner(courier_id)).await
            }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
    }

    #[tokio::test]
    async fn partner_setters_ignore_users_without_profile() {
        let store = MemStore::new();
        let customer = store.create_user(new_user("asha")).await.unwrap();

        store.update_delivery_partner_location(customer.id, 1.0, 2.0).await.unwrap();
        store.update_delivery_partner_availability(customer.id, false).await.unwrap();
        store.record_completed_delivery(customer.id).await.unwrap();
        assert!(store.get_delivery_partner(customer.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn available_partners_skip_profiles_without_account() {
        let store = MemStore::new();
        store.create_delivery_partner(new_partner(500)).await.unwrap();
        assert!(store.get_available_delivery_partners().await.unwrap().is_empty());
    }
}
