use crate::layers::base::VisualLayer;

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// Leaflet's name for the corner
    pub fn as_leaflet(&self) -> &'static str {
        match self {
            Position::TopLeft => "topleft",
            Position::TopRight => "topright",
            Position::BottomLeft => "bottomleft",
            Position::BottomRight => "bottomright",
        }
    }
}

/// A label in the layer control pointing at a layer id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEntry {
    pub label: String,
    pub layer_id: String,
}

/// Layer switcher: base layers are mutually exclusive, overlays toggle
/// independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerControl {
    pub position: Position,
    base_layers: Vec<ControlEntry>,
    overlays: Vec<ControlEntry>,
}

impl LayerControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base layer under its own name
    pub fn with_base_layer(mut self, layer: &dyn VisualLayer) -> Self {
        self.base_layers.push(ControlEntry {
            label: layer.name().to_string(),
            layer_id: layer.id().to_string(),
        });
        self
    }

    /// Add an overlay under its own name
    pub fn with_overlay(mut self, layer: &dyn VisualLayer) -> Self {
        self.overlays.push(ControlEntry {
            label: layer.name().to_string(),
            layer_id: layer.id().to_string(),
        });
        self
    }

    pub fn base_layers(&self) -> &[ControlEntry] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[ControlEntry] {
        &self.overlays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{heat::HeatLayer, tile::TileLayer};

    #[test]
    fn test_control_keeps_insertion_order() {
        let street = TileLayer::street("street");
        let topo = TileLayer::topo("topo");
        let heat = HeatLayer::new("heat", "Heatmap", Vec::new());

        let control = LayerControl::new()
            .with_base_layer(&street)
            .with_base_layer(&topo)
            .with_overlay(&heat);

        let labels: Vec<&str> = control.base_layers().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Street", "Topography"]);
        assert_eq!(control.overlays()[0].layer_id, "heat");
        assert_eq!(control.position, Position::TopRight);
    }
}
