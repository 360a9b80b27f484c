pub mod distance;
pub mod pricing;

pub use distance::GeoPoint;
pub use pricing::{PriceEstimate, PricingConfig, PricingEngine, SizeMultipliers};
