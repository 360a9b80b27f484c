pub mod accounts;
pub mod manager;
pub mod models;
pub mod partners;
pub mod stats;

pub use accounts::AccountService;
pub use manager::OrderManager;
pub use models::{LocationUpdate, LoginRequest, OrderDraft, TransitionRequest};
pub use partners::PartnerService;
pub use stats::{StatsService, UserStats};
