//! Error type shared by the graph and tooltip behaviors.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while loading or wiring theme behaviors.
#[derive(Debug, Error)]
pub enum ThemeError {
	/// The request never produced a response.
	#[error("request failed: {0}")]
	Http(#[from] gloo_net::Error),

	/// The server answered with a non-success status.
	#[error("{url} answered with status {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The graph document is not valid JSON of the expected shape.
	#[error("invalid graph document: {0}")]
	Json(#[from] serde_json::Error),

	/// A DOM call threw.
	#[error("dom operation failed: {0}")]
	Dom(String),

	/// Not running inside a browser window.
	#[error("no browser window or document available")]
	NoWindow,
}

impl From<JsValue> for ThemeError {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &JsValue::from_str("message"))
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{value:?}"));
		ThemeError::Dom(message)
	}
}

/// Shorthand used across the crate.
pub type Result<T, E = ThemeError> = std::result::Result<T, E>;
