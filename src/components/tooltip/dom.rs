use std::future::Future;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
	AddEventListenerOptions, Document, DomParser, Element, HtmlAnchorElement, SupportedType,
};

use super::preview::{LinkPreview, PreviewHost};
use crate::config::TooltipConfig;
use crate::error::Result;
use crate::fetch::fetch_text;

/// Shows previews inside an anchor element of the live document.
pub struct AnchorHost {
	anchor: HtmlAnchorElement,
	document: Document,
}

impl AnchorHost {
	/// Previews for `anchor`, built with elements from `document`.
	pub fn new(anchor: HtmlAnchorElement, document: Document) -> Self {
		Self { anchor, document }
	}
}

impl PreviewHost for AnchorHost {
	type Fragment = Element;

	fn extract(&self, html: &str, selector: &str) -> Result<Option<Element>> {
		let parsed = DomParser::new()?.parse_from_string(html, SupportedType::TextHtml)?;
		Ok(parsed.query_selector(selector)?)
	}

	fn attach(&self, fragment: Element, class_name: &str) -> Result<()> {
		let wrapper = self.document.create_element("div")?;
		wrapper.set_class_name(class_name);
		wrapper.append_child(&fragment)?;
		self.anchor.append_child(&wrapper)?;
		Ok(())
	}
}

/// Give every link matching the configured selector a hover preview.
/// Returns how many links were wired.
pub fn attach_link_previews(document: &Document, config: &TooltipConfig) -> Result<usize> {
	attach_link_previews_with(document, config, |url: String| async move {
		fetch_text(&url).await
	})
}

/// Like [`attach_link_previews`], loading pages through `fetch`.
pub fn attach_link_previews_with<F, Fut>(
	document: &Document,
	config: &TooltipConfig,
	fetch: F,
) -> Result<usize>
where
	F: Fn(String) -> Fut + 'static,
	Fut: Future<Output = Result<String>> + 'static,
{
	let links = document.query_selector_all(&config.link_selector)?;
	let config = Rc::new(config.clone());
	let fetch = Rc::new(fetch);
	let mut wired = 0;
	for i in 0..links.length() {
		let Some(anchor) = links
			.item(i)
			.and_then(|node| node.dyn_into::<HtmlAnchorElement>().ok())
		else {
			continue;
		};
		wire(document, anchor, config.clone(), fetch.clone())?;
		wired += 1;
	}
	Ok(wired)
}

fn wire<F, Fut>(
	document: &Document,
	anchor: HtmlAnchorElement,
	config: Rc<TooltipConfig>,
	fetch: Rc<F>,
) -> Result<()>
where
	F: Fn(String) -> Fut + 'static,
	Fut: Future<Output = Result<String>> + 'static,
{
	let preview = LinkPreview::new(anchor.href());
	let host = Rc::new(AnchorHost::new(anchor.clone(), document.clone()));

	let listener = Closure::<dyn FnMut()>::new(move || {
		let (preview, host, config, fetch) =
			(preview.clone(), host.clone(), config.clone(), fetch.clone());
		spawn_local(async move {
			let outcome = preview
				.hover(host.as_ref(), &config, |url| (*fetch)(url))
				.await;
			match outcome {
				Ok(outcome) => debug!("tooltip: {} -> {:?}", preview.href(), outcome),
				Err(e) => error!("tooltip: preview of {} failed: {}", preview.href(), e),
			}
		});
	});

	let options = AddEventListenerOptions::new();
	options.set_once(true);
	anchor.add_event_listener_with_callback_and_add_event_listener_options(
		"mouseenter",
		listener.as_ref().unchecked_ref(),
		&options,
	)?;
	// The browser drops the listener after its single run.
	listener.forget();
	anchor.set_attribute("data-preview", "ready")?;
	Ok(())
}
