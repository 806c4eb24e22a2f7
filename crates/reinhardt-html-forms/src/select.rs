//! `<select>` options and option groups
//!
//! Options keep their insertion order. One level of grouping is supported:
//! an entry is either a label or a group of labels rendered as an
//! `<optgroup>`.

use indexmap::IndexMap;
use reinhardt_html_core::escape::escape;
use reinhardt_html_core::value::{kind_of, stringify};
use reinhardt_html_core::{AttributeValue, Attributes, HtmlError, HtmlResult};
use serde_json::Value;

/// Per-option (or per-group) attribute overlays, keyed by option key
pub type OptionAttributes = IndexMap<String, Attributes>;

/// An entry of an [`OptionList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEntry {
	Label(String),
	Group(IndexMap<String, String>),
}

/// Ordered options of a select
///
/// # Examples
///
/// ```
/// use reinhardt_html_forms::select::OptionList;
/// use serde_json::json;
///
/// let sizes = OptionList::from([("L", "Large"), ("S", "Small")]);
/// assert_eq!(sizes.len(), 2);
///
/// let grouped = OptionList::from_value(&json!({
/// 	"Cats": {"leopard": "Leopard"},
/// 	"dog": "Dog"
/// }))
/// .unwrap();
/// assert_eq!(grouped.keys().collect::<Vec<_>>(), ["Cats", "dog"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList(IndexMap<String, OptionEntry>);

impl OptionList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an option (builder style)
	pub fn option(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
		self.0.insert(key.into(), OptionEntry::Label(label.into()));
		self
	}

	/// Append an option group (builder style)
	pub fn group<K, V>(mut self, label: impl Into<String>, options: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let options = options
			.into_iter()
			.map(|(key, label)| (key.into(), label.into()))
			.collect();
		self.0.insert(label.into(), OptionEntry::Group(options));
		self
	}

	/// Build options from a JSON value
	///
	/// Arrays yield positional keys (`"0"`, `"1"`, ...), objects their own
	/// keys. A nested collection becomes an option group.
	pub fn from_value(list: &Value) -> HtmlResult<Self> {
		let entries: Vec<(String, &Value)> = match list {
			Value::Null => Vec::new(),
			Value::Array(items) => items
				.iter()
				.enumerate()
				.map(|(idx, item)| (idx.to_string(), item))
				.collect(),
			Value::Object(map) => map.iter().map(|(key, item)| (key.clone(), item)).collect(),
			other => return Err(HtmlError::NotIterable(kind_of(other))),
		};

		let options = entries
			.into_iter()
			.map(|(key, item)| {
				let entry = match item {
					Value::Array(items) => OptionEntry::Group(
						items
							.iter()
							.enumerate()
							.map(|(idx, label)| (idx.to_string(), stringify(label)))
							.collect(),
					),
					Value::Object(map) => OptionEntry::Group(
						map.iter()
							.map(|(key, label)| (key.clone(), stringify(label)))
							.collect(),
					),
					scalar => OptionEntry::Label(stringify(scalar)),
				};
				(key, entry)
			})
			.collect();

		Ok(Self(options))
	}

	pub fn get(&self, key: &str) -> Option<&OptionEntry> {
		self.0.get(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionEntry)> {
		self.0.iter().map(|(key, entry)| (key.as_str(), entry))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for OptionList
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, label)| (key.into(), OptionEntry::Label(label.into())))
				.collect(),
		)
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for OptionList
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

/// Whether the option `value` is part of `selected`
///
/// Values compare by their string form; an array selection matches any of
/// its elements.
pub fn is_selected(value: &str, selected: &Value) -> bool {
	match selected {
		Value::Array(items) => items.iter().any(|item| stringify(item) == value),
		other => stringify(other) == value,
	}
}

fn selected_flag(value: &str, selected: &Value) -> AttributeValue {
	if is_selected(value, selected) {
		AttributeValue::from("selected")
	} else {
		AttributeValue::Null
	}
}

/// Render a single `<option>`
///
/// `value` and `selected` are set first; overlay attributes with other
/// names are appended.
pub fn render_option(display: &str, value: &str, selected: &Value, overlay: Option<&Attributes>) -> String {
	let mut attributes = Attributes::new()
		.set("value", value)
		.set("selected", selected_flag(value, selected));
	if let Some(overlay) = overlay {
		attributes = attributes.union(overlay);
	}

	format!("<option{}>{}</option>", attributes.render(), escape(display))
}

/// Render an `<optgroup>` with its options
pub fn render_option_group(
	label: &str,
	options: &IndexMap<String, String>,
	selected: &Value,
	group_attributes: Option<&Attributes>,
	option_attributes: &OptionAttributes,
) -> String {
	let mut html = format!(
		"<optgroup label=\"{}\"{}>",
		escape(label),
		group_attributes.map(Attributes::render).unwrap_or_default()
	);
	for (value, display) in options {
		html.push_str(&render_option(display, value, selected, option_attributes.get(value)));
	}
	html.push_str("</optgroup>");
	html
}

/// Render the leading empty-value option used as a placeholder
///
/// It is selected when the selection is empty.
pub fn render_placeholder(display: &str, selected: &Value) -> String {
	let attributes = Attributes::new()
		.set("selected", selected_flag("", selected))
		.set("value", "");

	format!("<option{}>{}</option>", attributes.render(), escape(display))
}

/// Render every entry of `list`
pub fn render_options(
	list: &OptionList,
	selected: &Value,
	option_attributes: &OptionAttributes,
	optgroup_attributes: &OptionAttributes,
) -> String {
	list.iter()
		.map(|(key, entry)| match entry {
			OptionEntry::Label(display) => {
				render_option(display, key, selected, option_attributes.get(key))
			}
			OptionEntry::Group(options) => render_option_group(
				key,
				options,
				selected,
				optgroup_attributes.get(key),
				option_attributes,
			),
		})
		.collect()
}
