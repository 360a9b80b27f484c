pub mod order;
pub mod partner;
pub mod user;

pub use order::{AssignedPartner, NewOrder, Order, OrderStatus, OrderWithDetails, PackageSize};
pub use partner::{AvailablePartner, DeliveryPartner, NewDeliveryPartner, DEFAULT_PARTNER_RATING};
pub use user::{NewUser, User, UserUpdate};

pub type UserId = i64;
pub type OrderId = i64;
pub type PartnerId = i64;
