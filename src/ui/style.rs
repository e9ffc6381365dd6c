//! Magnitude and depth symbology
//!
//! Circle radius scales linearly with magnitude; fill color is picked from six
//! fixed depth buckets. The same bucket table feeds the legend.

use crate::core::constants;

/// One depth band: everything at or above the previous band's limit and at
/// or below `max_depth` gets `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBucket {
    /// Inclusive upper bound in kilometers; `None` for the overflow bucket
    pub max_depth: Option<f64>,
    pub color: &'static str,
    /// Text shown next to the swatch in the legend
    pub label: &'static str,
}

/// Ascending depth buckets, first match wins.
pub const DEPTH_BUCKETS: [DepthBucket; 6] = [
    DepthBucket {
        max_depth: Some(10.0),
        color: "#98EE00",
        label: "-10-10",
    },
    DepthBucket {
        max_depth: Some(30.0),
        color: "#D4EE00",
        label: "10-30",
    },
    DepthBucket {
        max_depth: Some(50.0),
        color: "#EECC00",
        label: "30-50",
    },
    DepthBucket {
        max_depth: Some(70.0),
        color: "#EE9C00",
        label: "50-70",
    },
    DepthBucket {
        max_depth: Some(90.0),
        color: "#EA822C",
        label: "70-90",
    },
    DepthBucket {
        max_depth: None,
        color: "#EA2C2C",
        label: "90+",
    },
];

/// Circle radius in meters for a magnitude.
///
/// Positive magnitudes scale by 10 km per unit; zero, negative, NaN and
/// missing magnitudes all collapse to a 1 m radius.
pub fn marker_size(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(mag) if mag > 0.0 => mag * constants::METERS_PER_MAGNITUDE,
        _ => constants::MIN_CIRCLE_RADIUS,
    }
}

/// Fill color for a hypocenter depth in kilometers.
pub fn choose_color(depth: f64) -> &'static str {
    DEPTH_BUCKETS
        .iter()
        .find(|bucket| bucket.max_depth.map_or(true, |max| depth <= max))
        .map(|bucket| bucket.color)
        .unwrap_or(DEPTH_BUCKETS[DEPTH_BUCKETS.len() - 1].color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_size_positive() {
        assert_eq!(marker_size(Some(4.1)), 4.1 * 10000.0);
        assert_eq!(marker_size(Some(0.5)), 5000.0);
        assert_eq!(marker_size(Some(7.0)), 70000.0);
    }

    #[test]
    fn test_marker_size_collapses_to_minimum() {
        assert_eq!(marker_size(Some(0.0)), 1.0);
        assert_eq!(marker_size(Some(-0.8)), 1.0);
        assert_eq!(marker_size(None), 1.0);
        assert_eq!(marker_size(Some(f64::NAN)), 1.0);
    }

    #[test]
    fn test_choose_color_boundaries_are_inclusive() {
        assert_eq!(choose_color(10.0), "#98EE00");
        assert_eq!(choose_color(10.01), "#D4EE00");
        assert_eq!(choose_color(30.0), "#D4EE00");
        assert_eq!(choose_color(50.0), "#EECC00");
        assert_eq!(choose_color(70.0), "#EE9C00");
        assert_eq!(choose_color(90.0), "#EA822C");
        assert_eq!(choose_color(90.01), "#EA2C2C");
    }

    #[test]
    fn test_choose_color_extremes() {
        assert_eq!(choose_color(-3.5), "#98EE00");
        assert_eq!(choose_color(12.0), "#D4EE00");
        assert_eq!(choose_color(650.0), "#EA2C2C");
        assert_eq!(choose_color(f64::INFINITY), "#EA2C2C");
    }

    #[test]
    fn test_every_depth_maps_to_a_bucket_color() {
        let colors: Vec<&str> = DEPTH_BUCKETS.iter().map(|b| b.color).collect();
        let mut depth = -50.0;
        while depth < 200.0 {
            assert!(colors.contains(&choose_color(depth)));
            depth += 0.25;
        }
    }
}
