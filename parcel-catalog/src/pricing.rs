use parcel_shared::PackageSize;
use serde::{Deserialize, Serialize};

use crate::distance::{round_2dp, straight_line_km, GeoPoint, KM_PER_DEGREE};

/// Multipliers applied to the distance component per package size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeMultipliers {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    /// Applied when the caller names a size we do not recognise.
    pub fallback: f64,
}

impl Default for SizeMultipliers {
    fn default() -> Self {
        Self {
            small: 1.0,
            medium: 1.5,
            large: 2.0,
            fallback: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Flat fee charged on every delivery, in whole currency units
    pub base_price: f64,

    /// Charge per kilometre before the size multiplier
    pub per_km_rate: f64,

    pub size_multipliers: SizeMultipliers,

    /// Distance assumed when an order is booked without one
    pub default_distance_km: f64,

    /// Degrees-to-kilometres factor for the straight-line estimator
    pub km_per_degree: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: 50.0,
            per_km_rate: 12.0,
            size_multipliers: SizeMultipliers::default(),
            default_distance_km: 5.0,
            km_per_degree: KM_PER_DEGREE,
        }
    }
}

/// Result of a coordinate-based estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    pub estimated_price: f64,
    /// Kilometres, rounded to two decimals
    pub distance: f64,
}

/// Linear delivery pricing: `round(base + km * rate * size_multiplier)`.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn size_multiplier(&self, size: Option<PackageSize>) -> f64 {
        let m = &self.config.size_multipliers;
        match size {
            Some(PackageSize::Small) => m.small,
            Some(PackageSize::Medium) => m.medium,
            Some(PackageSize::Large) => m.large,
            None => m.fallback,
        }
    }

    /// Price for a distance and package size, rounded to whole units.
    pub fn quote(&self, distance_km: f64, size: Option<PackageSize>) -> f64 {
        let raw = self.config.base_price
            + distance_km * self.config.per_km_rate * self.size_multiplier(size);
        raw.round()
    }

    /// Same as [`quote`](Self::quote) but for a raw wire label; unknown labels
    /// price with the fallback multiplier.
    pub fn quote_label(&self, distance_km: f64, label: &str) -> f64 {
        self.quote(distance_km, PackageSize::from_label(label))
    }

    /// Distance used when booking; falls back to the configured default.
    pub fn billable_distance(&self, distance_km: Option<f64>) -> f64 {
        distance_km.unwrap_or(self.config.default_distance_km)
    }

    pub fn estimate_distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        straight_line_km(from, to, self.config.km_per_degree)
    }

    /// Estimate for a trip between two points. The price uses the unrounded
    /// distance; only the reported distance is rounded.
    pub fn estimate(&self, from: GeoPoint, to: GeoPoint, label: &str) -> PriceEstimate {
        let distance = self.estimate_distance(from, to);
        PriceEstimate {
            estimated_price: self.quote_label(distance, label),
            distance: round_2dp(distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_parcel_over_eight_and_a_half_km() {
        let engine = PricingEngine::default();
        // 50 + 8.5 * 12 * 1.5 = 203
        assert_eq!(engine.quote(8.5, Some(PackageSize::Medium)), 203.0);
    }

    #[test]
    fn zero_distance_is_base_price() {
        let engine = PricingEngine::default();
        for size in [PackageSize::Small, PackageSize::Medium, PackageSize::Large] {
            assert_eq!(engine.quote(0.0, Some(size)), 50.0);
        }
    }

    #[test]
    fn monotonic_in_distance() {
        let engine = PricingEngine::default();
        for size in [None, Some(PackageSize::Small), Some(PackageSize::Medium), Some(PackageSize::Large)] {
            let mut last = f64::MIN;
            for step in 0..200 {
                let price = engine.quote(step as f64 * 0.37, size);
                assert!(price >= last, "price dropped at step {step} for {size:?}");
                last = price;
            }
        }
    }

    #[test]
    fn larger_parcels_never_cost_less() {
        let engine = PricingEngine::default();
        for step in 0..100 {
            let d = step as f64 * 0.5;
            let small = engine.quote(d, Some(PackageSize::Small));
            let medium = engine.quote(d, Some(PackageSize::Medium));
            let large = engine.quote(d, Some(PackageSize::Large));
            assert!(large >= medium && medium >= small);
        }
    }

    #[test]
    fn unknown_label_uses_fallback_multiplier() {
        let engine = PricingEngine::default();
        assert_eq!(engine.quote_label(10.0, "oversized"), engine.quote_label(10.0, "small"));
        assert_eq!(engine.quote_label(10.0, "oversized"), 170.0);
    }

    #[test]
    fn rounds_half_up_for_positive_amounts() {
        let engine = PricingEngine::new(PricingConfig {
            base_price: 0.0,
            per_km_rate: 1.0,
            ..PricingConfig::default()
        });
        assert_eq!(engine.quote(2.5, Some(PackageSize::Small)), 3.0);
        assert_eq!(engine.quote(2.49, Some(PackageSize::Small)), 2.0);
    }

    #[test]
    fn missing_distance_defaults_to_five_km() {
        let engine = PricingEngine::default();
        assert_eq!(engine.billable_distance(None), 5.0);
        assert_eq!(engine.billable_distance(Some(1.25)), 1.25);
    }

    #[test]
    fn estimate_between_two_mumbai_points() {
        let engine = PricingEngine::default();
        let estimate = engine.estimate(
            GeoPoint::new(19.0760, 72.8777),
            GeoPoint::new(19.0896, 72.8656),
            "small",
        );
        // sqrt(0.0136^2 + 0.0121^2) * 111 ~= 2.0206 km
        assert_eq!(estimate.distance, 2.02);
        assert_eq!(estimate.estimated_price, 74.0);
    }

    #[test]
    fn config_deserializes_with_partial_overrides() {
        let config: PricingConfig =
            serde_json::from_str(r#"{"base_price": 40, "size_multipliers": {"large": 3.0}}"#).unwrap();
        assert_eq!(config.base_price, 40.0);
        assert_eq!(config.per_km_rate, 12.0);
        assert_eq!(config.size_multipliers.large, 3.0);
        assert_eq!(config.size_multipliers.medium, 1.5);
    }
}
