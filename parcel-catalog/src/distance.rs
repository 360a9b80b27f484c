use serde::{Deserialize, Serialize};

/// Rough degrees-to-kilometres factor used by the straight-line estimator.
pub const KM_PER_DEGREE: f64 = 111.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Euclidean distance between two coordinate pairs, scaled by
/// `km_per_degree`. Not geodesic: it ignores latitude convergence entirely.
pub fn straight_line_km(from: GeoPoint, to: GeoPoint, km_per_degree: f64) -> f64 {
    let d_lat = to.lat - from.lat;
    let d_lng = to.lng - from.lng;
    (d_lat * d_lat + d_lng * d_lng).sqrt() * km_per_degree
}

/// Round to two decimal places for display.
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
