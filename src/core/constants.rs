//! Feed endpoints, tile providers and styling constants for the earthquake map.
//! Keeping them in a single place makes it easier to tweak map-wide magic numbers.

/// USGS weekly summary feed, all magnitudes.
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 plate boundary line geometries.
pub const TECTONIC_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// DOM element the map is mounted on. The host page provides it.
pub const MAP_ELEMENT_ID: &str = "map";

/// Initial map center as (lat, lng).
pub const DEFAULT_CENTER: (f64, f64) = (38.0, -111.0);

/// Initial zoom. Fractional zooms are allowed.
pub const DEFAULT_ZOOM: f64 = 5.5;

/// Subdomains substituted for `{s}` in tile URL templates.
pub const TILE_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

pub const STREET_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const STREET_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const TOPO_TILE_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";

pub const TOPO_ATTRIBUTION: &str = "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)";

/// Circle outline color.
pub const CIRCLE_STROKE_COLOR: &str = "black";

/// Circle outline width in pixels.
pub const CIRCLE_STROKE_WEIGHT: f64 = 0.8;

pub const CIRCLE_FILL_OPACITY: f64 = 0.6;

/// Meters of circle radius per unit of magnitude.
pub const METERS_PER_MAGNITUDE: f64 = 10_000.0;

/// Radius used for zero, negative or missing magnitudes.
pub const MIN_CIRCLE_RADIUS: f64 = 1.0;

/// Heat layer point radius in pixels.
pub const HEAT_RADIUS: f64 = 50.0;

pub const HEAT_BLUR: f64 = 0.0;

pub const HEAT_MAX_OPACITY: f64 = 1.0;

// Layer control labels
pub const STREET_LABEL: &str = "Street";
pub const TOPO_LABEL: &str = "Topography";
pub const CIRCLES_LABEL: &str = "Circles";
pub const CLUSTER_LABEL: &str = "Cluster Markers";
pub const HEATMAP_LABEL: &str = "Heatmap";
pub const TECTONIC_LABEL: &str = "Tectonic Plates";
