//! Leaflet page generator
//!
//! Emits JavaScript that drives Leaflet, Leaflet.markercluster and
//! Leaflet.heat, either as a bare script for an existing host page or wrapped
//! in a minimal standalone document.

use crate::{
    core::config::MapOptions,
    layers::{
        base::VisualLayer, circle::CircleLayer, cluster::MarkerClusterGroup,
        geojson::GeoJsonLayer, heat::HeatLayer, tile::TileLayer,
    },
    prelude::HashMap,
    rendering::MapRenderer,
    ui::{
        controls::{ControlEntry, LayerControl},
        legend::Legend,
    },
    Error, Result,
};
use serde::Serialize;

const MAP_VAR: &str = "quakeMap";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
const HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";

const PAGE_STYLE: &str = "html, body { height: 100%; margin: 0; padding: 0; }
    #{id} { height: 100%; width: 100%; }
    .info.legend { background: white; padding: 6px 10px; line-height: 18px; color: #555; border-radius: 5px; }
    .info.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.9; }";

/// Renderer producing Leaflet JavaScript
#[derive(Debug, Default)]
pub struct LeafletHtmlRenderer {
    title: String,
    element_id: Option<String>,
    statements: Vec<String>,
    /// Layer id -> JavaScript variable holding it
    variables: HashMap<String, String>,
    legend_added: bool,
}

impl LeafletHtmlRenderer {
    pub fn new() -> Self {
        Self::with_title("Earthquakes of the Past Week")
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// The generated script, for embedding into a page that already has the
    /// map element and the Leaflet assets.
    pub fn script(&self) -> Result<String> {
        if self.element_id.is_none() {
            return Err(Error::Render("map was never initialised".to_string()));
        }
        Ok(self.statements.join("\n"))
    }

    /// Minimal standalone page: Leaflet assets, the map element, the script.
    pub fn to_html(&self) -> Result<String> {
        let script = self.script()?;
        let element_id = self.element_id.as_deref().unwrap_or_default();
        let style = PAGE_STYLE.replace("{id}", element_id);

        Ok(format!(
            r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  <link rel="stylesheet" href="{leaflet_css}" />
  <link rel="stylesheet" href="{cluster_css}" />
  <link rel="stylesheet" href="{cluster_default_css}" />
  <style>
    {style}
  </style>
</head>
<body>
  <div id="{element_id}"></div>
  <script src="{leaflet_js}"></script>
  <script src="{cluster_js}"></script>
  <script src="{heat_js}"></script>
  <script>
{script}
  </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            leaflet_css = LEAFLET_CSS,
            cluster_css = CLUSTER_CSS,
            cluster_default_css = CLUSTER_DEFAULT_CSS,
            style = style,
            element_id = escape_html(element_id),
            leaflet_js = LEAFLET_JS,
            cluster_js = CLUSTER_JS,
            heat_js = HEAT_JS,
            script = script,
        ))
    }

    fn push(&mut self, statement: String) {
        self.statements.push(statement);
    }

    /// Declare the JavaScript variable for a layer and remember it for the
    /// layer control.
    fn declare(&mut self, layer: &dyn VisualLayer) -> Result<String> {
        if self.element_id.is_none() {
            return Err(Error::Render(format!(
                "layer '{}' added before the map was initialised",
                layer.id()
            )));
        }
        if self.variables.contains_key(layer.id()) {
            return Err(Error::Layer(format!("duplicate layer id '{}'", layer.id())));
        }

        let variable = format!("layer_{}", js_identifier(layer.id()));
        if self.variables.values().any(|existing| existing == &variable) {
            return Err(Error::Layer(format!(
                "layer id '{}' maps to the already declared variable {}",
                layer.id(),
                variable
            )));
        }
        self.variables
            .insert(layer.id().to_string(), variable.clone());
        Ok(variable)
    }

    fn show_if_visible(&mut self, layer: &dyn VisualLayer, variable: &str) {
        if layer.is_visible() {
            self.push(format!("{}.addTo({});", variable, MAP_VAR));
        }
    }

    fn layer_table(&self, entries: &[ControlEntry]) -> Result<String> {
        let mut pairs = Vec::with_capacity(entries.len());
        for entry in entries {
            let variable = self.variables.get(&entry.layer_id).ok_or_else(|| {
                Error::Layer(format!(
                    "layer control refers to unknown layer '{}'",
                    entry.layer_id
                ))
            })?;
            pairs.push(format!("{}: {}", to_js(&entry.label)?, variable));
        }
        Ok(format!("{{ {} }}", pairs.join(", ")))
    }
}

impl MapRenderer for LeafletHtmlRenderer {
    fn init_map(&mut self, options: &MapOptions) -> Result<()> {
        if self.element_id.is_some() {
            return Err(Error::Render("map already initialised".to_string()));
        }
        self.element_id = Some(options.element_id.clone());
        let statement = format!(
            "const {} = L.map({}, {{ center: {}, zoom: {} }});",
            MAP_VAR,
            to_js(&options.element_id)?,
            to_js(&options.center.to_array())?,
            to_js(&options.zoom)?
        );
        self.push(statement);
        Ok(())
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) -> Result<()> {
        let variable = self.declare(layer)?;
        let statement = format!(
            "const {} = L.tileLayer({}, {});",
            variable,
            to_js(&layer.url_template)?,
            to_js(&serde_json::json!({
                "attribution": layer.attribution,
                "subdomains": layer.subdomains
            }))?
        );
        self.push(statement);
        self.show_if_visible(layer, &variable);
        Ok(())
    }

    fn add_cluster_group(&mut self, group: &MarkerClusterGroup) -> Result<()> {
        let variable = self.declare(group)?;
        let statement = format!(
            "const {var} = L.markerClusterGroup();
{data}.forEach(function (m) {{
  const marker = L.marker(m.position);
  if (m.popup !== null) {{ marker.bindPopup(m.popup); }}
  {var}.addLayer(marker);
}});",
            var = variable,
            data = to_js(&group.options())?
        );
        self.push(statement);
        self.show_if_visible(group, &variable);
        Ok(())
    }

    fn add_circle_layer(&mut self, layer: &CircleLayer) -> Result<()> {
        let variable = self.declare(layer)?;
        let statement = format!(
            "const {var} = L.layerGroup({data}.map(function (c) {{
  const circle = L.circle(c.center, c.options);
  if (c.popup !== null) {{ circle.bindPopup(c.popup); }}
  return circle;
}}));",
            var = variable,
            data = to_js(&layer.options())?
        );
        self.push(statement);
        self.show_if_visible(layer, &variable);
        Ok(())
    }

    fn add_heat_layer(&mut self, layer: &HeatLayer) -> Result<()> {
        let variable = self.declare(layer)?;
        let points: Vec<[f64; 2]> = layer.points().iter().map(|p| p.to_array()).collect();
        let statement = format!(
            "const {} = L.heatLayer({}, {});",
            variable,
            to_js(&points)?,
            to_js(&layer.options())?
        );
        self.push(statement);
        self.show_if_visible(layer, &variable);
        Ok(())
    }

    fn add_geojson_layer(&mut self, layer: &GeoJsonLayer) -> Result<()> {
        let variable = self.declare(layer)?;
        let statement = format!(
            "const {} = L.geoJSON({});",
            variable,
            to_js(layer.data().as_value())?
        );
        self.push(statement);
        self.show_if_visible(layer, &variable);
        Ok(())
    }

    fn add_layer_control(&mut self, control: &LayerControl) -> Result<()> {
        let statement = format!(
            "L.control.layers({}, {}, {{ position: {} }}).addTo({});",
            self.layer_table(control.base_layers())?,
            self.layer_table(control.overlays())?,
            to_js(control.position.as_leaflet())?,
            MAP_VAR
        );
        self.push(statement);
        Ok(())
    }

    fn add_legend(&mut self, legend: &Legend) -> Result<()> {
        if self.element_id.is_none() {
            return Err(Error::Render(
                "legend added before the map was initialised".to_string(),
            ));
        }
        if self.legend_added {
            return Err(Error::Render("legend already added".to_string()));
        }
        let statement = format!(
            "const legend = L.control({{ position: {position} }});
legend.onAdd = function () {{
  const div = L.DomUtil.create(\"div\", {css_class});
  div.innerHTML = {html};
  return div;
}};
legend.addTo({map});",
            position = to_js(legend.position.as_leaflet())?,
            css_class = to_js(&legend.class_name)?,
            html = to_js(&legend.to_html())?,
            map = MAP_VAR
        );
        self.push(statement);
        self.legend_added = true;
        Ok(())
    }
}

/// JSON-encode a value for inline use in a `<script>` block
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn js_identifier(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
