use crate::{
    core::config::MapOptions,
    layers::{
        base::VisualLayer, circle::CircleLayer, cluster::MarkerClusterGroup,
        geojson::GeoJsonLayer, heat::HeatLayer, tile::TileLayer,
    },
    rendering::MapRenderer,
    ui::{controls::LayerControl, legend::Legend},
    Result,
};

#[cfg(feature = "debug")]
use log::info;

#[derive(Debug, Clone, PartialEq)]
pub struct BaseLayers {
    pub street: TileLayer,
    pub topo: TileLayer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlays {
    pub circles: CircleLayer,
    pub cluster: MarkerClusterGroup,
    pub heat: HeatLayer,
    pub tectonic: GeoJsonLayer,
}

/// Fully assembled map, ready to be mounted on a renderer.
///
/// The map is built once and never rebuilt; the renderer owns whatever it
/// creates from it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuakeMap {
    pub options: MapOptions,
    pub base: BaseLayers,
    pub overlays: Overlays,
    pub control: LayerControl,
    pub legend: Legend,
}

impl QuakeMap {
    /// All layers in mount order: base layers first, then overlays
    pub fn layers(&self) -> Vec<&dyn VisualLayer> {
        let layers: [&dyn VisualLayer; 6] = [
            &self.base.street,
            &self.base.topo,
            &self.overlays.circles,
            &self.overlays.cluster,
            &self.overlays.heat,
            &self.overlays.tectonic,
        ];
        layers.to_vec()
    }

    /// Ids of the layers shown when the map first appears
    pub fn visible_layer_ids(&self) -> Vec<&str> {
        self.layers()
            .into_iter()
            .filter(|layer| layer.is_visible())
            .map(|layer| layer.id())
            .collect()
    }

    /// Hand every part of the map to `renderer`, in a fixed order: map
    /// initialisation, base layers, overlays, layer control, legend.
    pub fn mount<R>(&self, renderer: &mut R) -> Result<()>
    where
        R: MapRenderer + ?Sized,
    {
        renderer.init_map(&self.options)?;

        renderer.add_tile_layer(&self.base.street)?;
        renderer.add_tile_layer(&self.base.topo)?;

        renderer.add_circle_layer(&self.overlays.circles)?;
        renderer.add_cluster_group(&self.overlays.cluster)?;
        renderer.add_heat_layer(&self.overlays.heat)?;
        renderer.add_geojson_layer(&self.overlays.tectonic)?;

        renderer.add_layer_control(&self.control)?;
        renderer.add_legend(&self.legend)?;

        #[cfg(feature = "debug")]
        info!(
            "Mounted map on #{} with {} earthquakes",
            self.options.element_id,
            self.overlays.circles.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{core::builder::MapBuilder, data::geojson::TectonicBoundaries};

    #[test]
    fn test_visible_layer_ids() {
        let map = MapBuilder::new().build(&[], TectonicBoundaries::new(serde_json::Value::Null));
        assert_eq!(map.visible_layer_ids(), vec!["street", "circles", "tectonic"]);
        assert_eq!(map.layers().len(), 6);
    }
}
