use serde::{Deserialize, Serialize};

/// A geographical coordinate, longitude first.
///
/// Field order matches the `[lng, lat]` pairs the map frontend consumes;
/// the serialized form is that two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Creates a new coordinate from longitude and latitude.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lng >= -180.0 && self.lng <= 180.0 && self.lat >= -90.0 && self.lat <= 90.0
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl From<(f64, f64)> for LngLat {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl From<LngLat> for (f64, f64) {
    fn from(coord: LngLat) -> Self {
        (coord.lng, coord.lat)
    }
}
