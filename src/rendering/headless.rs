//! Renderer that draws nothing and records what it was asked to draw

use crate::{
    core::config::MapOptions,
    layers::{
        base::VisualLayer, circle::CircleLayer, cluster::MarkerClusterGroup,
        geojson::GeoJsonLayer, heat::HeatLayer, tile::TileLayer,
    },
    prelude::HashMap,
    rendering::MapRenderer,
    ui::{controls::LayerControl, legend::Legend},
    Error, Result,
};

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    InitMap { element_id: String, zoom: f64 },
    TileLayer { id: String, visible: bool },
    ClusterGroup { id: String, markers: usize, visible: bool },
    CircleLayer { id: String, circles: usize, visible: bool },
    HeatLayer { id: String, points: usize, visible: bool },
    GeoJsonLayer { id: String, visible: bool },
    LayerControl { base: Vec<String>, overlays: Vec<String> },
    Legend { entries: usize },
}

/// Records calls and enforces the ordering a real surface would: the map
/// must be initialised first, layer ids are unique, and the layer control
/// only refers to layers that exist.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    calls: Vec<RenderCall>,
    layers: HashMap<String, bool>,
    initialised: bool,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// True once `init_map` has been called
    pub fn is_mounted(&self) -> bool {
        self.initialised
    }

    fn register(&mut self, layer: &dyn VisualLayer) -> Result<()> {
        if !self.initialised {
            return Err(Error::Render(format!(
                "layer '{}' added before the map was initialised",
                layer.id()
            )));
        }
        if self.layers.contains_key(layer.id()) {
            return Err(Error::Layer(format!("duplicate layer id '{}'", layer.id())));
        }
        self.layers.insert(layer.id().to_string(), layer.is_visible());
        Ok(())
    }
}

impl MapRenderer for HeadlessRenderer {
    fn init_map(&mut self, options: &MapOptions) -> Result<()> {
        if self.initialised {
            return Err(Error::Render("map already initialised".to_string()));
        }
        self.initialised = true;
        self.calls.push(RenderCall::InitMap {
            element_id: options.element_id.clone(),
            zoom: options.zoom,
        });
        Ok(())
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) -> Result<()> {
        self.register(layer)?;
        self.calls.push(RenderCall::TileLayer {
            id: layer.id().to_string(),
            visible: layer.is_visible(),
        });
        Ok(())
    }

    fn add_cluster_group(&mut self, group: &MarkerClusterGroup) -> Result<()> {
        self.register(group)?;
        self.calls.push(RenderCall::ClusterGroup {
            id: group.id().to_string(),
            markers: group.len(),
            visible: group.is_visible(),
        });
        Ok(())
    }

    fn add_circle_layer(&mut self, layer: &CircleLayer) -> Result<()> {
        self.register(layer)?;
        self.calls.push(RenderCall::CircleLayer {
            id: layer.id().to_string(),
            circles: layer.len(),
            visible: layer.is_visible(),
        });
        Ok(())
    }

    fn add_heat_layer(&mut self, layer: &HeatLayer) -> Result<()> {
        self.register(layer)?;
        self.calls.push(RenderCall::HeatLayer {
            id: layer.id().to_string(),
            points: layer.point_count(),
            visible: layer.is_visible(),
        });
        Ok(())
    }

    fn add_geojson_layer(&mut self, layer: &GeoJsonLayer) -> Result<()> {
        self.register(layer)?;
        self.calls.push(RenderCall::GeoJsonLayer {
            id: layer.id().to_string(),
            visible: layer.is_visible(),
        });
        Ok(())
    }

    fn add_layer_control(&mut self, control: &LayerControl) -> Result<()> {
        let entries = control.base_layers().iter().chain(control.overlays());
        for entry in entries {
            if !self.layers.contains_key(&entry.layer_id) {
                return Err(Error::Layer(format!(
                    "layer control refers to unknown layer '{}'",
                    entry.layer_id
                )));
            }
        }

        self.calls.push(RenderCall::LayerControl {
            base: control.base_layers().iter().map(|e| e.label.clone()).collect(),
            overlays: control.overlays().iter().map(|e| e.label.clone()).collect(),
        });
        Ok(())
    }

    fn add_legend(&mut self, legend: &Legend) -> Result<()> {
        if !self.initialised {
            return Err(Error::Render("legend added before the map was initialised".to_string()));
        }
        self.calls.push(RenderCall::Legend {
            entries: legend.entries().len(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_before_init_is_rejected() {
        let mut renderer = HeadlessRenderer::new();
        let result = renderer.add_tile_layer(&TileLayer::street("street"));
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn test_duplicate_layer_is_rejected() {
        let mut renderer = HeadlessRenderer::new();
        renderer.init_map(&MapOptions::default()).unwrap();
        renderer.add_tile_layer(&TileLayer::street("base")).unwrap();
        let result = renderer.add_tile_layer(&TileLayer::topo("base"));
        assert!(matches!(result, Err(Error::Layer(_))));
    }

    #[test]
    fn test_control_with_unknown_layer_is_rejected() {
        let mut renderer = HeadlessRenderer::new();
        renderer.init_map(&MapOptions::default()).unwrap();
        let control = LayerControl::new().with_overlay(&TileLayer::topo("topo"));
        assert!(renderer.add_layer_control(&control).is_err());
    }
}
