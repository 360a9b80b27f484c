pub mod de;
pub mod models;
pub mod pii;

pub use models::{
    AssignedPartner, AvailablePartner, DeliveryPartner, NewDeliveryPartner, NewOrder, NewUser,
    Order, OrderId, OrderStatus, OrderWithDetails, PackageSize, PartnerId, User, UserId,
    UserUpdate, DEFAULT_PARTNER_RATING,
};
pub use pii::Masked;
