use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from a GeoJSON position.
    ///
    /// GeoJSON orders positions as `[longitude, latitude, ...]` while the map
    /// works in `(lat, lng)`, so the first two components are swapped here.
    /// Returns `None` for positions with fewer than two components or a
    /// `null` longitude or latitude.
    pub fn from_position(position: &[Option<f64>]) -> Option<Self> {
        match position {
            [Some(lng), Some(lat), ..] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    /// `[lat, lng]` pair, the shape Leaflet expects.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
