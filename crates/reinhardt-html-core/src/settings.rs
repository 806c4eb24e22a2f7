//! Builder settings
//!
//! Settings can be constructed in code or loaded from a TOML document; every
//! field is optional in the document and falls back to its default.
//!
//! ```toml
//! method_field = "_method"
//! token_field = "_token"
//! spoofed_methods = ["DELETE", "PATCH", "PUT"]
//! textarea_cols = 50
//! textarea_rows = 10
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Settings shared by the HTML and form builders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlSettings {
	/// Hidden field carrying a spoofed HTTP method
	pub method_field: String,
	/// Hidden field carrying the CSRF token
	pub token_field: String,
	/// Methods sent as POST with a spoofed method field
	pub spoofed_methods: Vec<String>,
	/// Value of the form's `accept-charset` attribute
	pub charset: String,
	pub textarea_cols: u32,
	pub textarea_rows: u32,
	/// chrono format used for month names in `select_month`
	pub month_format: String,
}

impl Default for HtmlSettings {
	fn default() -> Self {
		Self {
			method_field: "_method".to_string(),
			token_field: "_token".to_string(),
			spoofed_methods: vec!["DELETE".to_string(), "PATCH".to_string(), "PUT".to_string()],
			charset: "UTF-8".to_string(),
			textarea_cols: 50,
			textarea_rows: 10,
			month_format: "%B".to_string(),
		}
	}
}

impl HtmlSettings {
	/// Parse settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::HtmlSettings;
	///
	/// let settings = HtmlSettings::from_toml_str("token_field = \"csrf\"").unwrap();
	/// assert_eq!(settings.token_field, "csrf");
	/// assert_eq!(settings.method_field, "_method");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&source)
	}

	/// Whether `method` (already uppercased) is sent through a spoofed field
	pub fn is_spoofed(&self, method: &str) -> bool {
		self.spoofed_methods
			.iter()
			.any(|spoofed| spoofed.eq_ignore_ascii_case(method))
	}
}
