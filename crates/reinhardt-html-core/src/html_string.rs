use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup that is already safe to embed in a response body
///
/// Every builder operation returns an `HtmlString`; its content is never
/// escaped again by the builders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlString(String);

impl HtmlString {
	/// Wrap markup without escaping it
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::HtmlString;
	///
	/// let html = HtmlString::new("<b>Bold</b>");
	/// assert_eq!(html.as_str(), "<b>Bold</b>");
	/// assert_eq!(html.to_string(), "<b>Bold</b>");
	/// ```
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Append another fragment
	pub fn push(&mut self, other: &HtmlString) {
		self.0.push_str(&other.0);
	}
}

impl fmt::Display for HtmlString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for HtmlString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<String> for HtmlString {
	fn from(s: String) -> Self {
		Self(s)
	}
}

impl From<&str> for HtmlString {
	fn from(s: &str) -> Self {
		Self(s.to_string())
	}
}

impl From<HtmlString> for String {
	fn from(html: HtmlString) -> Self {
		html.0
	}
}

impl FromIterator<HtmlString> for HtmlString {
	fn from_iter<I: IntoIterator<Item = HtmlString>>(iter: I) -> Self {
		Self(iter.into_iter().map(|html| html.0).collect())
	}
}

impl PartialEq<str> for HtmlString {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for HtmlString {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for HtmlString {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}
