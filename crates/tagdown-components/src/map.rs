//! Interactive map component.
//!
//! ```markdown
//! [MAP]
//! {
//!   "center": {"lat": 48.8566, "lng": 2.3522},
//!   "zoom": 14,
//!   "height": "300px",
//!   "width": "50%",
//!   "markers": [
//!     {"lat": 48.8566, "lng": 2.3522, "popup": "Tour Eiffel"}
//!   ]
//! }
//! [/MAP]
//! ```
//!
//! Renders a uniquely-identified container div sized by inline
//! `height`/`width` and emits the Leaflet initialization script binding a
//! map instance to that container. The unique id lets multiple maps
//! coexist on one page.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tagdown_theme::Theme;
use uuid::Uuid;

use crate::handler::{ComponentHandler, RenderOutput, block_pattern};
use crate::util::{escape_html, escape_js};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| block_pattern("MAP"));

const DEFAULT_HEIGHT: &str = "400px";
const DEFAULT_WIDTH: &str = "100%";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

#[derive(Debug, Deserialize)]
struct MapConfig {
    center: LatLng,
    zoom: u32,
    #[serde(default = "default_height")]
    height: String,
    #[serde(default = "default_width")]
    width: String,
    #[serde(default)]
    markers: Vec<Marker>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct Marker {
    lat: f64,
    lng: f64,
    #[serde(default)]
    popup: String,
}

fn default_height() -> String {
    DEFAULT_HEIGHT.to_owned()
}

fn default_width() -> String {
    DEFAULT_WIDTH.to_owned()
}

/// Handler for `[MAP]` blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapComponent;

impl MapComponent {
    /// Create a map handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ComponentHandler for MapComponent {
    fn name(&self) -> &str {
        "map"
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn process(&self, payload: &str, theme: &Theme) -> RenderOutput {
        let config: MapConfig = match serde_json::from_str(payload.trim()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid map configuration");
                return RenderOutput::invalid_config(theme, self.name());
            }
        };

        // Container ids must be unique per instance so several maps can
        // share a page; the JS variable is derived from the same id.
        let id = format!("map-{}", Uuid::new_v4().simple());
        let var = id.replace('-', "_");

        let html = format!(
            r#"<div id="{id}" style="height: {}; width: {};"></div>"#,
            escape_html(&config.height),
            escape_html(&config.width),
        );

        let mut js = String::new();
        writeln!(
            js,
            "var {var} = L.map('{id}').setView([{}, {}], {});",
            config.center.lat, config.center.lng, config.zoom
        )
        .unwrap();
        writeln!(
            js,
            "L.tileLayer('{TILE_URL}', {{ attribution: '&copy; OpenStreetMap contributors' }}).addTo({var});"
        )
        .unwrap();
        for marker in &config.markers {
            writeln!(
                js,
                "L.marker([{}, {}]).addTo({var}).bindPopup('{}');",
                marker.lat,
                marker.lng,
                escape_js(&marker.popup)
            )
            .unwrap();
        }

        RenderOutput::html(html).with_js(js)
    }
}
