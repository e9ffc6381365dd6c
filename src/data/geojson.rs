//! Wire types for the two GeoJSON feeds
//!
//! Only the earthquake feed is decoded into typed records. The tectonic
//! boundaries are kept as raw JSON and handed to the renderer untouched.

use crate::core::geo::LatLng;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// Geometry of a single earthquake: `[longitude, latitude, depth_km]`
///
/// Only the position is read. The geometry `type` is not checked, and `null`
/// components are kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuakeGeometry {
    #[serde(default)]
    pub coordinates: Vec<Option<f64>>,
}

impl QuakeGeometry {
    pub fn coordinates(&self) -> &[Option<f64>] {
        &self.coordinates
    }
}

/// The subset of USGS properties the map reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuakeProperties {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub mag: Option<f64>,
}

/// One earthquake event from the feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<QuakeGeometry>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub properties: QuakeProperties,
}

impl EarthquakeFeature {
    /// Map position of the event. `None` when the feature has no geometry or
    /// the position lacks a numeric longitude or latitude.
    pub fn location(&self) -> Option<LatLng> {
        self.geometry
            .as_ref()
            .and_then(|geometry| LatLng::from_position(geometry.coordinates()))
    }

    /// Hypocenter depth in kilometers, the third position component.
    pub fn depth(&self) -> Option<f64> {
        self.depth_component().flatten()
    }

    /// Depth used to pick the circle color. A `null` depth counts as 0 km and
    /// an absent one as NaN, so they land in the shallowest and the deepest
    /// bucket respectively.
    pub fn color_depth(&self) -> f64 {
        match self.depth_component() {
            Some(Some(depth)) => depth,
            Some(None) => 0.0,
            None => f64::NAN,
        }
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.properties.mag
    }

    pub fn title(&self) -> &str {
        self.properties.title.as_deref().unwrap_or("")
    }

    fn depth_component(&self) -> Option<Option<f64>> {
        self.geometry
            .as_ref()
            .and_then(|geometry| geometry.coordinates().get(2).copied())
    }
}

/// Root object of the earthquake feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeCollection {
    #[serde(deserialize_with = "each_feature")]
    pub features: Vec<EarthquakeFeature>,
}

impl EarthquakeCollection {
    /// Decode the feed. Only a missing or non-array `features` member fails;
    /// a record that is not a feature object becomes a feature without
    /// geometry.
    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| crate::Error::ParseError(format!("Invalid earthquake GeoJSON: {}", e)))
    }
}

/// Decode a field, falling back to `None` when its shape is unexpected.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

fn each_feature<'de, D>(deserializer: D) -> std::result::Result<Vec<EarthquakeFeature>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(records
        .into_iter()
        .map(|record| serde_json::from_value(record).unwrap_or_default())
        .collect())
}

/// Plate boundary FeatureCollection, passed through as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TectonicBoundaries(pub serde_json::Value);

impl TectonicBoundaries {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Number of boundary segments, when the payload is a FeatureCollection.
    pub fn feature_count(&self) -> Option<usize> {
        self.0.get("features").and_then(|f| f.as_array()).map(Vec::len)
    }
}
