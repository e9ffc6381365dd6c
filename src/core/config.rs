//! Configuration for feeds and the initial map view
//!
//! Every default resolves to the fixed values in [`crate::constants`]; the
//! structs only exist so callers (and tests) can point the loader elsewhere.

use crate::core::{constants, geo::LatLng};

/// Order in which the two feeds are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchOrdering {
    /// The tectonic request starts only after the earthquake feed resolved.
    #[default]
    Sequential,
    /// Both requests are in flight at once and joined.
    Parallel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub earthquake_url: String,
    pub tectonic_url: String,
    pub ordering: FetchOrdering,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            earthquake_url: constants::EARTHQUAKE_FEED_URL.to_string(),
            tectonic_url: constants::TECTONIC_FEED_URL.to_string(),
            ordering: FetchOrdering::default(),
        }
    }
}

/// Initial view of the mounted map
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// Id of the host element the map is mounted on
    pub element_id: String,
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            element_id: constants::MAP_ELEMENT_ID.to_string(),
            center: LatLng::from(constants::DEFAULT_CENTER),
            zoom: constants::DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuakeMapConfig {
    pub feeds: FeedConfig,
    pub map: MapOptions,
}

impl QuakeMapConfig {
    pub fn with_ordering(mut self, ordering: FetchOrdering) -> Self {
        self.feeds.ordering = ordering;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuakeMapConfig::default();
        assert_eq!(config.feeds.ordering, FetchOrdering::Sequential);
        assert!(config.feeds.earthquake_url.ends_with("all_week.geojson"));
        assert!(config.feeds.tectonic_url.ends_with("PB2002_boundaries.json"));
        assert_eq!(config.map.element_id, "map");
        assert_eq!(config.map.center, LatLng::new(38.0, -111.0));
        assert_eq!(config.map.zoom, 5.5);
    }

    #[test]
    fn test_overrides() {
        let config = QuakeMapConfig::default().with_ordering(FetchOrdering::Parallel);
        assert_eq!(config.feeds.ordering, FetchOrdering::Parallel);
        assert!(config.feeds.earthquake_url.contains("earthquake.usgs.gov"));
        assert!(config.feeds.tectonic_url.contains("tectonicplates"));
    }
}
