//! Browser side of the default spade theme: a related-articles graph and
//! hover previews for internal links.

use leptos::prelude::*;
use log::{Level, debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

// Modules
pub mod components;
pub mod config;
pub mod error;
pub mod fetch;
mod pages;

use crate::components::tooltip::attach_link_previews;
use crate::config::{ThemeConfig, current_article_id};
use crate::error::{Result, ThemeError};
use crate::pages::article::ArticleGraph;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Wire the theme into the page once the document has been parsed.
pub fn start() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		error!("theme: {}", ThemeError::NoWindow);
		return;
	};

	if document.ready_state() != "loading" {
		boot(&document);
		return;
	}

	let doc = document.clone();
	let on_ready = Closure::once(move || boot(&doc));
	if let Err(e) = document
		.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
	{
		error!("theme: cannot wait for DOMContentLoaded: {}", ThemeError::from(e));
		return;
	}
	on_ready.forget();
}

fn boot(document: &Document) {
	let config = ThemeConfig::from_document(document);

	if let Err(e) = mount_graph(document, &config) {
		error!("graph: {e}");
	}
	match attach_link_previews(document, &config.tooltip) {
		Ok(n) => info!("tooltip: wired {n} links"),
		Err(e) => error!("tooltip: {e}"),
	}
}

fn mount_graph(document: &Document, config: &ThemeConfig) -> Result<()> {
	let Some(container) = document.get_element_by_id(&config.graph.container_id) else {
		debug!("graph: no #{} on this page", config.graph.container_id);
		return Ok(());
	};
	let container: HtmlElement = container.dyn_into().map_err(|_| {
		ThemeError::Dom(format!("#{} is not an HTML element", config.graph.container_id))
	})?;
	let window = web_sys::window().ok_or(ThemeError::NoWindow)?;

	let graph = config.graph.clone();
	let current_id = current_article_id(&window);
	leptos::mount::mount_to(container, move || {
		view! { <ArticleGraph config=graph.clone() current_id=current_id.clone() /> }
	})
	.forget();
	Ok(())
}
