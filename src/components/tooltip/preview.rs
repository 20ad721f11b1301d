//! One-shot preview loading for a single link, independent of the DOM.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use log::debug;

use crate::config::TooltipConfig;
use crate::error::Result;

/// Where previews are parsed and shown. The browser implementation is
/// [`AnchorHost`](super::AnchorHost).
pub trait PreviewHost {
	/// A detached piece of the fetched page.
	type Fragment;

	/// Parse `html` and pick the first element matching `selector`.
	fn extract(&self, html: &str, selector: &str) -> Result<Option<Self::Fragment>>;

	/// Wrap `fragment` in an element with `class_name` and show it.
	fn attach(&self, fragment: Self::Fragment, class_name: &str) -> Result<()>;
}

/// What a hover did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewOutcome {
	/// An earlier hover already loaded (or tried to load) the preview.
	AlreadyTriggered,
	/// The preview was attached to the link.
	Attached,
	/// The fetched page had nothing to preview.
	NoFragment,
}

/// Preview state of one link. Clones share the same latch.
#[derive(Clone, Debug)]
pub struct LinkPreview {
	href: String,
	triggered: Rc<Cell<bool>>,
}

impl LinkPreview {
	/// A link that has not been hovered yet.
	pub fn new(href: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			triggered: Rc::new(Cell::new(false)),
		}
	}

	/// Page the preview is fetched from.
	pub fn href(&self) -> &str {
		&self.href
	}

	/// Whether a hover has already claimed the fetch.
	pub fn is_triggered(&self) -> bool {
		self.triggered.get()
	}

	/// Handle a hover. Only the first call fetches; the latch stays set even
	/// when that fetch fails.
	pub async fn hover<H, F, Fut>(
		&self,
		host: &H,
		config: &TooltipConfig,
		fetch: F,
	) -> Result<PreviewOutcome>
	where
		H: PreviewHost,
		F: FnOnce(String) -> Fut,
		Fut: Future<Output = Result<String>>,
	{
		if self.triggered.replace(true) {
			return Ok(PreviewOutcome::AlreadyTriggered);
		}

		let html = fetch(self.href.clone()).await?;
		match host.extract(&html, &config.fragment_selector)? {
			Some(fragment) => {
				host.attach(fragment, &config.class_name)?;
				Ok(PreviewOutcome::Attached)
			}
			None => {
				debug!("tooltip: nothing to preview in {}", self.href);
				Ok(PreviewOutcome::NoFragment)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;
	use crate::error::ThemeError;

	/// Treats any line containing the selector as the matching fragment.
	#[derive(Default)]
	struct FakeHost {
		attached: RefCell<Vec<(String, String)>>,
	}

	impl PreviewHost for FakeHost {
		type Fragment = String;

		fn extract(&self, html: &str, selector: &str) -> Result<Option<String>> {
			Ok(html
				.lines()
				.find(|line| line.contains(selector))
				.map(str::to_string))
		}

		fn attach(&self, fragment: String, class_name: &str) -> Result<()> {
			self.attached
				.borrow_mut()
				.push((class_name.to_string(), fragment));
			Ok(())
		}
	}

	const PAGE: &str = "<header/>\n<div id=\"main\"><div class=\"article\">#main .article body</div></div>";

	#[test]
	fn second_hover_does_not_fetch_again() {
		let (host, config) = (FakeHost::default(), TooltipConfig::default());
		let preview = LinkPreview::new("/rust");
		let fetches = Cell::new(0);
		let fetch = |url: String| {
			fetches.set(fetches.get() + 1);
			assert_eq!(url, "/rust");
			async { Ok(PAGE.to_string()) }
		};

		let first = block_on(preview.hover(&host, &config, fetch)).unwrap();
		let second = block_on(preview.hover(&host, &config, fetch)).unwrap();

		assert_eq!(first, PreviewOutcome::Attached);
		assert_eq!(second, PreviewOutcome::AlreadyTriggered);
		assert_eq!(fetches.get(), 1);
		assert_eq!(host.attached.borrow().len(), 1);
	}

	#[test]
	fn clones_share_the_latch() {
		let (host, config) = (FakeHost::default(), TooltipConfig::default());
		let preview = LinkPreview::new("/rust");
		let other = preview.clone();

		block_on(preview.hover(&host, &config, |_| async { Ok(PAGE.to_string()) })).unwrap();
		assert!(other.is_triggered());
		let again = block_on(other.hover(&host, &config, |_| async {
			Err(ThemeError::Dom("fetched twice".into()))
		}))
		.unwrap();
		assert_eq!(again, PreviewOutcome::AlreadyTriggered);
	}

	#[test]
	fn attached_fragment_uses_tooltip_class() {
		let (host, config) = (FakeHost::default(), TooltipConfig::default());
		block_on(LinkPreview::new("/a").hover(&host, &config, |_| async { Ok(PAGE.to_string()) }))
			.unwrap();

		let attached = host.attached.borrow();
		assert_eq!(attached[0].0, "tooltip");
		assert!(attached[0].1.contains("article body"));
	}

	#[test]
	fn missing_fragment_creates_nothing() {
		let (host, config) = (FakeHost::default(), TooltipConfig::default());
		let outcome = block_on(
			LinkPreview::new("/empty")
				.hover(&host, &config, |_| async { Ok("<p>no article here</p>".to_string()) }),
		)
		.unwrap();

		assert_eq!(outcome, PreviewOutcome::NoFragment);
		assert!(host.attached.borrow().is_empty());
	}

	#[test]
	fn failed_fetch_is_not_retried() {
		let (host, config) = (FakeHost::default(), TooltipConfig::default());
		let preview = LinkPreview::new("/down");

		let err = block_on(preview.hover(&host, &config, |url| async move {
			Err(ThemeError::Status { url, status: 503 })
		}))
		.unwrap_err();
		assert!(matches!(err, ThemeError::Status { status: 503, .. }));

		let again = block_on(preview.hover(&host, &config, |_| async { Ok(PAGE.to_string()) }))
			.unwrap();
		assert_eq!(again, PreviewOutcome::AlreadyTriggered);
		assert!(host.attached.borrow().is_empty());
	}
}
