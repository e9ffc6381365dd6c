#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Full-map background tiles; exactly one is shown at a time
    BaseTile,
    MarkerCluster,
    Circles,
    Heat,
    GeoJson,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerProperties {
    pub id: String,
    /// Label shown in the layer control
    pub name: String,
    pub kind: LayerKind,
    /// Whether the layer is on when the map is first shown
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            visible: false,
        }
    }
}

/// Common surface of every layer the map can toggle
pub trait VisualLayer {
    fn properties(&self) -> &LayerProperties;

    fn properties_mut(&mut self) -> &mut LayerProperties;

    /// Renderer-facing options, in the shape Leaflet takes them
    fn options(&self) -> serde_json::Value;

    fn id(&self) -> &str {
        &self.properties().id
    }

    fn name(&self) -> &str {
        &self.properties().name
    }

    fn kind(&self) -> LayerKind {
        self.properties().kind
    }

    fn is_visible(&self) -> bool {
        self.properties().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.properties_mut().visible = visible;
    }
}
