use crate::{
    core::constants,
    layers::base::{LayerKind, LayerProperties, VisualLayer},
};

/// Raster base layer backed by an XYZ tile provider
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    properties: LayerProperties,
    /// Template with `{s}`, `{z}`, `{x}` and `{y}` placeholders
    pub url_template: String,
    pub attribution: String,
    pub subdomains: Vec<String>,
}

impl TileLayer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::BaseTile),
            url_template: url_template.into(),
            attribution: attribution.into(),
            subdomains: constants::TILE_SUBDOMAINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Standard OpenStreetMap street tiles
    pub fn street(id: impl Into<String>) -> Self {
        Self::new(
            id,
            constants::STREET_LABEL,
            constants::STREET_TILE_URL,
            constants::STREET_ATTRIBUTION,
        )
    }

    /// OpenTopoMap topographic tiles
    pub fn topo(id: impl Into<String>) -> Self {
        Self::new(
            id,
            constants::TOPO_LABEL,
            constants::TOPO_TILE_URL,
            constants::TOPO_ATTRIBUTION,
        )
    }

}

impl VisualLayer for TileLayer {
    crate::impl_layer_properties!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.url_template,
            "attribution": self.attribution,
            "subdomains": self.subdomains
        })
    }
}
