use parcel_catalog::PricingEngine;
use parcel_core::Storage;
use parcel_order::{AccountService, OrderManager, PartnerService, StatsService};
use parcel_store::app_config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub orders: Arc<OrderManager>,
    pub partners: Arc<PartnerService>,
    pub stats: Arc<StatsService>,
}

impl AppState {
    /// Wire every service onto one shared store.
    pub fn new(store: Arc<dyn Storage>, config: &Config) -> Self {
        let pricing = PricingEngine::new(config.pricing.clone());
        let orders = OrderManager::new(store.clone(), pricing)
            .with_strict_transitions(config.orders.strict_transitions);

        Self {
            accounts: Arc::new(AccountService::new(store.clone())),
            orders: Arc::new(orders),
            partners: Arc::new(PartnerService::new(store.clone())),
            stats: Arc::new(StatsService::new(store)),
        }
    }
}
