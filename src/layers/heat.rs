use crate::{
    core::{constants, geo::LatLng},
    layers::base::{LayerKind, LayerProperties, VisualLayer},
};

/// Configuration for the heat layer
#[derive(Debug, Clone, PartialEq)]
pub struct HeatOptions {
    /// Radius of influence for each data point (in pixels)
    pub radius: f64,
    /// Blur factor; 0 gives hard-edged blobs
    pub blur: f64,
    /// Opacity ceiling of the densest areas
    pub max_opacity: f64,
}

impl Default for HeatOptions {
    fn default() -> Self {
        Self {
            radius: constants::HEAT_RADIUS,
            blur: constants::HEAT_BLUR,
            max_opacity: constants::HEAT_MAX_OPACITY,
        }
    }
}

/// Density overlay built from unweighted points
#[derive(Debug, Clone, PartialEq)]
pub struct HeatLayer {
    properties: LayerProperties,
    points: Vec<LatLng>,
    options: HeatOptions,
}

impl HeatLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: Vec<LatLng>) -> Self {
        Self::with_options(id, name, points, HeatOptions::default())
    }

    pub fn with_options(
        id: impl Into<String>,
        name: impl Into<String>,
        points: Vec<LatLng>,
        options: HeatOptions,
    ) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::Heat),
            points,
            options,
        }
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn heat_options(&self) -> &HeatOptions {
        &self.options
    }

    /// Get the number of data points
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl VisualLayer for HeatLayer {
    crate::impl_layer_properties!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "radius": self.options.radius,
            "blur": self.options.blur,
            "maxOpacity": self.options.max_opacity
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_defaults() {
        let layer = HeatLayer::new("heat", "Heatmap", vec![LatLng::new(1.0, 2.0)]);
        assert_eq!(layer.point_count(), 1);
        assert_eq!(
            layer.options(),
            serde_json::json!({ "radius": 50.0, "blur": 0.0, "maxOpacity": 1.0 })
        );
    }
}
