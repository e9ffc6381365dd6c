use crate::layers::{
    base::{LayerKind, LayerProperties, VisualLayer},
    marker::Marker,
};

/// Group of point markers that the renderer aggregates into cluster icons
/// until the user zooms in.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerClusterGroup {
    properties: LayerProperties,
    markers: Vec<Marker>,
}

impl MarkerClusterGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::MarkerCluster),
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl VisualLayer for MarkerClusterGroup {
    crate::impl_layer_properties!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::Value::Array(self.markers.iter().map(Marker::options).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_cluster_group_collects_markers() {
        let mut group = MarkerClusterGroup::new("cluster", "Cluster Markers");
        assert!(group.is_empty());
        assert!(!group.is_visible());

        group.add_marker(Marker::new(LatLng::new(1.0, 2.0)).with_popup("<h1>a</h1>"));
        group.add_marker(Marker::new(LatLng::new(3.0, 4.0)));

        assert_eq!(group.len(), 2);
        assert_eq!(group.kind(), LayerKind::MarkerCluster);
        assert_eq!(
            group.options(),
            serde_json::json!([
                { "position": [1.0, 2.0], "popup": "<h1>a</h1>" },
                { "position": [3.0, 4.0], "popup": null }
            ])
        );
    }
}
