//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    builder::{MapBuilder, QuakeLayers},
    config::{FeedConfig, FetchOrdering, MapOptions, QuakeMapConfig},
    geo::LatLng,
    map::QuakeMap,
};

pub use crate::data::{
    geojson::{
        EarthquakeCollection, EarthquakeFeature, QuakeGeometry, QuakeProperties,
        TectonicBoundaries,
    },
    loader::{DataLoader, FeedClient, HttpFeedClient, QuakeData},
};

pub use crate::layers::{
    base::{LayerKind, LayerProperties, VisualLayer},
    circle::{Circle, CircleLayer, CircleStyle},
    cluster::MarkerClusterGroup,
    geojson::GeoJsonLayer,
    heat::{HeatLayer, HeatOptions},
    marker::Marker,
    tile::TileLayer,
};

pub use crate::rendering::{
    headless::{HeadlessRenderer, RenderCall},
    leaflet::LeafletHtmlRenderer,
    MapRenderer,
};

pub use crate::ui::{
    controls::{LayerControl, Position},
    legend::{Legend, LegendEntry},
    style::{choose_color, marker_size, DepthBucket, DEPTH_BUCKETS},
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
