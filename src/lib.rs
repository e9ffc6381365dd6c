//! # quakemap
//!
//! Builds an interactive earthquake map from two public GeoJSON feeds: the
//! USGS weekly earthquake summary and the PB2002 tectonic plate boundaries.
//!
//! The crate is split the same way the map itself is assembled:
//! [`DataLoader`] fetches both feeds, [`MapBuilder`] turns the earthquake
//! features into marker, circle and heat layers, and the resulting
//! [`QuakeMap`] is mounted onto any [`MapRenderer`] backend.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    builder::{MapBuilder, QuakeLayers},
    config::{FeedConfig, FetchOrdering, MapOptions, QuakeMapConfig},
    geo::LatLng,
    map::QuakeMap,
};

pub use data::{
    geojson::{EarthquakeCollection, EarthquakeFeature, TectonicBoundaries},
    loader::{DataLoader, FeedClient, HttpFeedClient, QuakeData},
};

pub use layers::{
    base::{LayerKind, LayerProperties, VisualLayer},
    circle::{Circle, CircleLayer, CircleStyle},
    cluster::MarkerClusterGroup,
    geojson::GeoJsonLayer,
    heat::{HeatLayer, HeatOptions},
    marker::Marker,
    tile::TileLayer,
};

pub use rendering::{headless::HeadlessRenderer, leaflet::LeafletHtmlRenderer, MapRenderer};

pub use ui::{
    controls::{LayerControl, Position},
    legend::Legend,
    style::{choose_color, marker_size},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feed {url} answered with HTTP {status}")]
    Feed { url: String, status: u16 },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
