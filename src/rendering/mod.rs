//! Rendering backends
//!
//! The map itself is library-agnostic; a [`MapRenderer`] turns its parts into
//! something a user can look at. [`leaflet::LeafletHtmlRenderer`] produces a
//! standalone Leaflet page, [`headless::HeadlessRenderer`] only records calls.

pub mod headless;
pub mod leaflet;

use crate::{
    core::config::MapOptions,
    layers::{
        circle::CircleLayer, cluster::MarkerClusterGroup, geojson::GeoJsonLayer, heat::HeatLayer,
        tile::TileLayer,
    },
    ui::{controls::LayerControl, legend::Legend},
    Result,
};

// Re-export main types
pub use headless::{HeadlessRenderer, RenderCall};
pub use leaflet::LeafletHtmlRenderer;

/// Capabilities a mapping backend has to provide.
///
/// `init_map` is always called first. Each layer carries its initial
/// visibility; the renderer shows it or keeps it hidden accordingly.
pub trait MapRenderer {
    fn init_map(&mut self, options: &MapOptions) -> Result<()>;

    fn add_tile_layer(&mut self, layer: &TileLayer) -> Result<()>;

    fn add_cluster_group(&mut self, group: &MarkerClusterGroup) -> Result<()>;

    fn add_circle_layer(&mut self, layer: &CircleLayer) -> Result<()>;

    fn add_heat_layer(&mut self, layer: &HeatLayer) -> Result<()>;

    fn add_geojson_layer(&mut self, layer: &GeoJsonLayer) -> Result<()>;

    fn add_layer_control(&mut self, control: &LayerControl) -> Result<()>;

    fn add_legend(&mut self, legend: &Legend) -> Result<()>;
}
