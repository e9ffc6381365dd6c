use crate::{
    core::{constants, geo::LatLng},
    layers::base::{LayerKind, LayerProperties, VisualLayer},
};

/// Stroke and fill of a circle
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub color: String,
    pub weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl CircleStyle {
    /// Black outline, 0.8px stroke and 60% fill in the given color
    pub fn filled(fill_color: impl Into<String>) -> Self {
        Self {
            fill_color: fill_color.into(),
            ..Self::default()
        }
    }
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            color: constants::CIRCLE_STROKE_COLOR.to_string(),
            weight: constants::CIRCLE_STROKE_WEIGHT,
            fill_color: "#3388ff".to_string(),
            fill_opacity: constants::CIRCLE_FILL_OPACITY,
        }
    }
}

/// Circle with a radius in meters, so it scales with the map zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: LatLng,
    pub radius: f64,
    pub style: CircleStyle,
    pub popup: Option<String>,
}

impl Circle {
    pub fn new(center: LatLng, radius: f64, style: CircleStyle) -> Self {
        Self {
            center,
            radius,
            style,
            popup: None,
        }
    }

    pub fn with_popup(mut self, html: impl Into<String>) -> Self {
        self.popup = Some(html.into());
        self
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "center": self.center.to_array(),
            "popup": self.popup,
            "options": {
                "fillOpacity": self.style.fill_opacity,
                "color": self.style.color,
                "weight": self.style.weight,
                "fillColor": self.style.fill_color,
                "radius": self.radius
            }
        })
    }
}

/// Plain layer group of circles
#[derive(Debug, Clone, PartialEq)]
pub struct CircleLayer {
    properties: LayerProperties,
    circles: Vec<Circle>,
}

impl CircleLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::Circles),
            circles: Vec::new(),
        }
    }

    pub fn push(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

impl VisualLayer for CircleLayer {
    crate::impl_layer_properties!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::Value::Array(self.circles.iter().map(Circle::options).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = CircleStyle::filled("#EECC00");
        assert_eq!(style.color, "black");
        assert_eq!(style.weight, 0.8);
        assert_eq!(style.fill_opacity, 0.6);
        assert_eq!(style.fill_color, "#EECC00");
    }

    #[test]
    fn test_circle_options_use_leaflet_names() {
        let circle = Circle::new(LatLng::new(38.2, -111.5), 41000.0, CircleStyle::filled("#D4EE00"))
            .with_popup("<h1>M 4.1 Quake</h1>");
        let options = circle.options();

        assert_eq!(options["center"], serde_json::json!([38.2, -111.5]));
        assert_eq!(options["popup"], "<h1>M 4.1 Quake</h1>");
        assert_eq!(options["options"]["fillColor"], "#D4EE00");
        assert_eq!(options["options"]["radius"], 41000.0);
        assert_eq!(options["options"]["weight"], 0.8);
    }
}
