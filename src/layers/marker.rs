use crate::core::geo::LatLng;

/// Point marker with an optional popup. Markers are not layers on their own;
/// they live inside a [`MarkerClusterGroup`](crate::layers::cluster::MarkerClusterGroup).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: LatLng,
    popup: Option<String>,
}

impl Marker {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            popup: None,
        }
    }

    pub fn with_popup(mut self, html: impl Into<String>) -> Self {
        self.popup = Some(html.into());
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": self.position.to_array(),
            "popup": self.popup
        })
    }
}
