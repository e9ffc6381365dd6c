use crate::{
    data::geojson::TectonicBoundaries,
    layers::base::{LayerKind, LayerProperties, VisualLayer},
};

/// Overlay drawn straight from a GeoJSON document with the renderer's
/// default line style
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonLayer {
    properties: LayerProperties,
    data: TectonicBoundaries,
}

impl GeoJsonLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: TectonicBoundaries) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::GeoJson),
            data,
        }
    }

    pub fn data(&self) -> &TectonicBoundaries {
        &self.data
    }
}

impl VisualLayer for GeoJsonLayer {
    crate::impl_layer_properties!(properties);

    fn options(&self) -> serde_json::Value {
        self.data.as_value().clone()
    }
}
