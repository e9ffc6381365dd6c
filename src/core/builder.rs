//! Map builder: earthquake features in, mount-ready map out
//!
//! Every feature with a usable location yields exactly one cluster marker,
//! one circle and one heat point. Features without geometry are skipped and
//! show up in none of the three.

use crate::{
    core::{
        config::MapOptions,
        constants,
        map::{BaseLayers, Overlays, QuakeMap},
    },
    data::geojson::{EarthquakeFeature, TectonicBoundaries},
    layers::{
        base::VisualLayer,
        circle::{Circle, CircleLayer, CircleStyle},
        cluster::MarkerClusterGroup,
        geojson::GeoJsonLayer,
        heat::{HeatLayer, HeatOptions},
        marker::Marker,
        tile::TileLayer,
    },
    ui::{
        controls::LayerControl,
        legend::Legend,
        style::{choose_color, marker_size},
    },
};

#[cfg(feature = "debug")]
use log::debug;

pub const STREET_LAYER_ID: &str = "street";
pub const TOPO_LAYER_ID: &str = "topo";
pub const CIRCLES_LAYER_ID: &str = "circles";
pub const CLUSTER_LAYER_ID: &str = "cluster";
pub const HEAT_LAYER_ID: &str = "heat";
pub const TECTONIC_LAYER_ID: &str = "tectonic";

/// The three layers derived from the earthquake features
#[derive(Debug, Clone, PartialEq)]
pub struct QuakeLayers {
    pub cluster: MarkerClusterGroup,
    pub circles: CircleLayer,
    pub heat: HeatLayer,
}

/// Builder for the earthquake map
#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    options: MapOptions,
    heat_options: HeatOptions,
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial view and mount element
    pub fn with_map_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_heat_options(mut self, options: HeatOptions) -> Self {
        self.heat_options = options;
        self
    }

    /// Popup shared by the marker and the circle of one event
    pub fn popup_html(feature: &EarthquakeFeature) -> String {
        format!("<h1>{}</h1>", feature.title())
    }

    /// Derive the marker cluster, circle overlay and heat overlay.
    pub fn build_layers(&self, features: &[EarthquakeFeature]) -> QuakeLayers {
        let mut cluster = MarkerClusterGroup::new(CLUSTER_LAYER_ID, constants::CLUSTER_LABEL);
        let mut circles = CircleLayer::new(CIRCLES_LAYER_ID, constants::CIRCLES_LABEL);
        let mut heat_points = Vec::with_capacity(features.len());

        for feature in features {
            let Some(point) = feature.location() else {
                continue;
            };
            let popup = Self::popup_html(feature);

            cluster.add_marker(Marker::new(point).with_popup(popup.clone()));
            heat_points.push(point);

            let style = CircleStyle::filled(choose_color(feature.color_depth()));
            circles.push(
                Circle::new(point, marker_size(feature.magnitude()), style).with_popup(popup),
            );
        }

        #[cfg(feature = "debug")]
        debug!(
            "Derived {} map points from {} features",
            heat_points.len(),
            features.len()
        );

        let heat = HeatLayer::with_options(
            HEAT_LAYER_ID,
            constants::HEATMAP_LABEL,
            heat_points,
            self.heat_options.clone(),
        );

        QuakeLayers {
            cluster,
            circles,
            heat,
        }
    }

    /// Assemble the complete map: base tiles, overlays with their initial
    /// visibility, the layer control and the depth legend.
    pub fn build(&self, features: &[EarthquakeFeature], tectonic: TectonicBoundaries) -> QuakeMap {
        let QuakeLayers {
            mut cluster,
            mut circles,
            mut heat,
        } = self.build_layers(features);
        let mut tectonic = GeoJsonLayer::new(TECTONIC_LAYER_ID, constants::TECTONIC_LABEL, tectonic);
        let mut street = TileLayer::street(STREET_LAYER_ID);
        let mut topo = TileLayer::topo(TOPO_LAYER_ID);

        street.set_visible(true);
        tectonic.set_visible(true);
        circles.set_visible(true);
        topo.set_visible(false);
        cluster.set_visible(false);
        heat.set_visible(false);

        let control = LayerControl::new()
            .with_base_layer(&street)
            .with_base_layer(&topo)
            .with_overlay(&circles)
            .with_overlay(&cluster)
            .with_overlay(&heat)
            .with_overlay(&tectonic);

        QuakeMap {
            options: self.options.clone(),
            base: BaseLayers { street, topo },
            overlays: Overlays {
                circles,
                cluster,
                heat,
                tectonic,
            },
            control,
            legend: Legend::depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::data::geojson::{QuakeGeometry, QuakeProperties};
    use serde_json::json;

    fn feature(coordinates: Option<Vec<f64>>, title: &str, mag: Option<f64>) -> EarthquakeFeature {
        EarthquakeFeature {
            id: None,
            geometry: coordinates.map(|coordinates| QuakeGeometry {
                coordinates: coordinates.into_iter().map(Some).collect(),
            }),
            properties: QuakeProperties {
                title: Some(title.to_string()),
                mag,
            },
        }
    }

    #[test]
    fn test_single_feature_transformation() {
        let features = vec![feature(
            Some(vec![-111.5, 38.2, 12.0]),
            "M 4.1 Quake",
            Some(4.1),
        )];
        let layers = MapBuilder::new().build_layers(&features);

        let marker = &layers.cluster.markers()[0];
        assert_eq!(marker.position(), LatLng::new(38.2, -111.5));
        assert_eq!(marker.popup(), Some("<h1>M 4.1 Quake</h1>"));

        let circle = &layers.circles.circles()[0];
        assert_eq!(circle.center, LatLng::new(38.2, -111.5));
        assert_eq!(circle.radius, 4.1 * 10000.0);
        assert!((circle.radius - 41000.0).abs() < 1e-6);
        assert_eq!(circle.style.fill_color, "#D4EE00");
        assert_eq!(circle.style.color, "black");
        assert_eq!(circle.style.weight, 0.8);
        assert_eq!(circle.style.fill_opacity, 0.6);
        assert_eq!(circle.popup.as_deref(), marker.popup());

        assert_eq!(layers.heat.points(), &[LatLng::new(38.2, -111.5)]);
    }

    #[test]
    fn test_null_geometry_is_skipped_everywhere() {
        let features = vec![
            feature(Some(vec![10.0, 20.0, 5.0]), "a", Some(1.0)),
            feature(None, "b", Some(2.0)),
            feature(Some(vec![11.0, 21.0, 95.0]), "c", None),
            feature(None, "d", None),
            feature(Some(vec![12.0, 22.0, 40.0]), "e", Some(-1.0)),
        ];
        let layers = MapBuilder::new().build_layers(&features);

        assert_eq!(layers.cluster.len(), 3);
        assert_eq!(layers.circles.len(), 3);
        assert_eq!(layers.heat.point_count(), 3);

        let radii: Vec<f64> = layers.circles.circles().iter().map(|c| c.radius).collect();
        assert_eq!(radii, vec![10000.0, 1.0, 1.0]);
        let colors: Vec<&str> = layers
            .circles
            .circles()
            .iter()
            .map(|c| c.style.fill_color.as_str())
            .collect();
        assert_eq!(colors, vec!["#98EE00", "#EA2C2C", "#EECC00"]);
    }

    #[test]
    fn test_missing_depth_uses_deepest_bucket() {
        let layers = MapBuilder::new().build_layers(&[feature(Some(vec![1.0, 2.0]), "x", Some(3.0))]);
        assert_eq!(layers.circles.circles()[0].style.fill_color, "#EA2C2C");
    }

    #[test]
    fn test_empty_feed() {
        let layers = MapBuilder::new().build_layers(&[]);
        assert!(layers.cluster.is_empty());
        assert!(layers.circles.is_empty());
        assert_eq!(layers.heat.point_count(), 0);
    }

    #[test]
    fn test_build_sets_default_visibility() {
        let map = MapBuilder::new().build(&[], TectonicBoundaries::new(json!({ "features": [] })));

        assert!(map.base.street.is_visible());
        assert!(!map.base.topo.is_visible());
        assert!(map.overlays.circles.is_visible());
        assert!(map.overlays.tectonic.is_visible());
        assert!(!map.overlays.cluster.is_visible());
        assert!(!map.overlays.heat.is_visible());

        let overlays: Vec<&str> = map.control.overlays().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            overlays,
            vec!["Circles", "Cluster Markers", "Heatmap", "Tectonic Plates"]
        );
        assert_eq!(map.options.center, LatLng::new(38.0, -111.0));
        assert_eq!(map.options.zoom, 5.5);
    }

    #[test]
    fn test_tectonic_data_is_untouched() {
        let raw = json!({ "type": "FeatureCollection", "features": [{ "type": "Feature", "geometry": null, "properties": {} }] });
        let map = MapBuilder::new().build(&[], TectonicBoundaries::new(raw.clone()));
        assert_eq!(map.overlays.tectonic.data().as_value(), &raw);
    }
}
