//! HTTP helpers on top of `gloo-net`.

use gloo_net::http::Request;
use log::debug;

use crate::components::force_graph::GraphData;
use crate::error::{Result, ThemeError};

/// GET `url` and return the body as text. Non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> Result<String> {
	let response = Request::get(url).send().await?;
	// Error pages are not previewed, and a missing graph document is a failure.
	if !response.ok() {
		return Err(ThemeError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}
	let body = response.text().await?;
	debug!("fetched {} ({} bytes)", url, body.len());
	Ok(body)
}

/// GET and parse the generated graph document.
pub async fn fetch_graph(url: &str) -> Result<GraphData> {
	let body = fetch_text(url).await?;
	GraphData::from_json(&body)
}
