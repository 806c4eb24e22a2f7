//! Ordered, unordered and description lists
//!
//! Lists are rendered from JSON values. Arrays produce positional items,
//! objects produce labelled items. A nested collection under a positional
//! item becomes a bare nested list, under a label it becomes
//! `<li>{label}{nested}</li>`. Labels are emitted as given, leaf values are
//! escaped.

use reinhardt_html_core::escape::escape;
use reinhardt_html_core::value::{is_scalar, kind_of, stringify};
use reinhardt_html_core::{Attributes, HtmlError, HtmlResult, HtmlString};
use serde_json::Value;
use std::fmt;

/// Key of a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey<'a> {
	Index(usize),
	Label(&'a str),
}

impl fmt::Display for ListKey<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ListKey::Index(idx) => write!(f, "{}", idx),
			ListKey::Label(label) => f.write_str(label),
		}
	}
}

/// Items of a collection value, `None` for `null`
fn items(list: &Value) -> HtmlResult<Option<Vec<(ListKey<'_>, &Value)>>> {
	match list {
		Value::Null => Ok(None),
		Value::Array(values) => Ok(Some(
			values
				.iter()
				.enumerate()
				.map(|(idx, value)| (ListKey::Index(idx), value))
				.collect(),
		)),
		Value::Object(map) => Ok(Some(
			map.iter()
				.map(|(label, value)| (ListKey::Label(label.as_str()), value))
				.collect(),
		)),
		other => Err(HtmlError::NotIterable(kind_of(other))),
	}
}

/// Render `list` as a `tag` (`ol` or `ul`) list
///
/// An empty or `null` list renders nothing at all.
///
/// # Examples
///
/// ```
/// use reinhardt_html_builder::listing::listing;
/// use reinhardt_html_core::Attributes;
/// use serde_json::json;
///
/// let html = listing("ul", &json!({"x": ["c1", "c2"]}), &Attributes::new()).unwrap();
/// assert_eq!(html, "<ul><li>x<ul><li>c1</li><li>c2</li></ul></li></ul>");
///
/// assert_eq!(listing("ul", &json!([]), &Attributes::new()).unwrap(), "");
/// ```
pub fn listing(tag: &str, list: &Value, attributes: &Attributes) -> HtmlResult<HtmlString> {
	let Some(items) = items(list)? else {
		return Ok(HtmlString::default());
	};
	if items.is_empty() {
		return Ok(HtmlString::default());
	}

	let mut html = String::new();
	for (key, value) in items {
		html.push_str(listing_element(key, tag, value)?.as_str());
	}

	Ok(HtmlString::new(format!(
		"<{tag}{}>{html}</{tag}>",
		attributes.render()
	)))
}

fn listing_element(key: ListKey<'_>, tag: &str, value: &Value) -> HtmlResult<HtmlString> {
	if value.is_array() || value.is_object() {
		return nested_listing(key, tag, value);
	}

	Ok(HtmlString::new(format!("<li>{}</li>", escape(&stringify(value)))))
}

fn nested_listing(key: ListKey<'_>, tag: &str, value: &Value) -> HtmlResult<HtmlString> {
	let nested = listing(tag, value, &Attributes::new())?;
	match key {
		ListKey::Index(_) => Ok(nested),
		ListKey::Label(label) => Ok(HtmlString::new(format!("<li>{}{}</li>", label, nested))),
	}
}

/// Render `list` as a description list
///
/// Each key becomes a `<dt>`; a scalar value yields one `<dd>`, a collection
/// value one `<dd>` per element and `null` none. Keys and values are emitted
/// as given.
///
/// # Examples
///
/// ```
/// use reinhardt_html_builder::listing::description_list;
/// use reinhardt_html_core::Attributes;
/// use serde_json::json;
///
/// let html = description_list(
/// 	&json!({"Rust": ["fast", "safe"], "Year": 2015}),
/// 	&Attributes::new(),
/// )
/// .unwrap();
/// assert_eq!(
/// 	html,
/// 	"<dl><dt>Rust</dt><dd>fast</dd><dd>safe</dd><dt>Year</dt><dd>2015</dd></dl>"
/// );
/// ```
pub fn description_list(list: &Value, attributes: &Attributes) -> HtmlResult<HtmlString> {
	let mut html = format!("<dl{}>", attributes.render());

	for (key, value) in items(list)?.unwrap_or_default() {
		html.push_str(&format!("<dt>{}</dt>", key));

		let terms: Vec<&Value> = match value {
			Value::Null => Vec::new(),
			Value::Array(values) => values.iter().collect(),
			Value::Object(map) => map.values().collect(),
			scalar => vec![scalar],
		};
		for term in terms {
			if !is_scalar(term) {
				return Err(HtmlError::NotScalar {
					key: key.to_string(),
					found: kind_of(term),
				});
			}
			html.push_str(&format!("<dd>{}</dd>", stringify(term)));
		}
	}

	html.push_str("</dl>");
	Ok(HtmlString::new(html))
}
