//! Theme configuration: historical defaults plus per-page overrides read
//! from `data-*` attributes on the graph container.

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Settings for the related-articles graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	/// Where the generated graph document is served from.
	pub data_url: String,
	/// Id of the element the graph canvas is mounted into.
	pub container_id: String,
	/// Fixed zoom level. User zooming is disabled.
	pub zoom: f64,
	/// Layout steps run before the first frame is drawn.
	pub layout_iterations: usize,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			data_url: "/assets/graph.json".into(),
			container_id: "cy".into(),
			zoom: 1.2,
			layout_iterations: 300,
		}
	}
}

/// Settings for internal link previews.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig {
	/// Links that get a preview.
	pub link_selector: String,
	/// Fragment of the fetched page shown in the preview.
	pub fragment_selector: String,
	/// Class of the wrapper element the stylesheet reveals on hover.
	pub class_name: String,
}

impl Default for TooltipConfig {
	fn default() -> Self {
		Self {
			link_selector: r#"#main a[href^="/"]"#.into(),
			fragment_selector: "#main .article".into(),
			class_name: "tooltip".into(),
		}
	}
}

/// Complete theme configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeConfig {
	/// Graph view settings.
	pub graph: GraphConfig,
	/// Link preview settings.
	pub tooltip: TooltipConfig,
}

/// Raw attribute values as found on the container element.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
	/// `data-graph-url`
	pub graph_url: Option<String>,
	/// `data-zoom`
	pub zoom: Option<String>,
	/// `data-layout-iterations`
	pub layout_iterations: Option<String>,
}

impl ThemeConfig {
	/// Defaults, overridden by `data-graph-url`, `data-zoom` and
	/// `data-layout-iterations` on the graph container when present.
	pub fn from_document(document: &Document) -> Self {
		let mut config = Self::default();
		if let Some(container) = document.get_element_by_id(&config.graph.container_id) {
			config.apply(Overrides {
				graph_url: container.get_attribute("data-graph-url"),
				zoom: container.get_attribute("data-zoom"),
				layout_iterations: container.get_attribute("data-layout-iterations"),
			});
		}
		config
	}

	/// Apply attribute overrides. Values that do not parse, or that are not
	/// positive, are ignored.
	pub fn apply(&mut self, overrides: Overrides) {
		if let Some(url) = overrides.graph_url.filter(|u| !u.trim().is_empty()) {
			self.graph.data_url = url.trim().to_string();
		}
		if let Some(raw) = overrides.zoom {
			match raw.trim().parse::<f64>() {
				Ok(zoom) if zoom.is_finite() && zoom > 0.0 => self.graph.zoom = zoom,
				_ => warn!("theme: ignoring data-zoom={raw:?}"),
			}
		}
		if let Some(raw) = overrides.layout_iterations {
			match raw.trim().parse::<usize>() {
				Ok(n) if n > 0 => self.graph.layout_iterations = n,
				_ => warn!("theme: ignoring data-layout-iterations={raw:?}"),
			}
		}
	}
}

/// The article the page is showing, as published by the page template in
/// `window.article_id`. Missing or non-string values mean no current node.
pub fn current_article_id(window: &Window) -> String {
	js_sys::Reflect::get(window, &JsValue::from_str("article_id"))
		.ok()
		.and_then(|v| v.as_string())
		.unwrap_or_default()
}
