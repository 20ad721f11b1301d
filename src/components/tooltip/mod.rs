//! Hover previews for internal links.
//!
//! Each link fetches its target once, on first hover, and keeps the
//! extracted fragment inside the anchor for the stylesheet to reveal.

mod dom;
mod preview;

pub use dom::{AnchorHost, attach_link_previews, attach_link_previews_with};
pub use preview::{LinkPreview, PreviewHost, PreviewOutcome};
