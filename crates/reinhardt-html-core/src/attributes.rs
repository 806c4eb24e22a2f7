//! HTML attribute sets and their rendering
//!
//! An [`Attributes`] value is an ordered bag of attribute entries. Entries are
//! rendered in insertion order; re-inserting an existing name replaces its
//! value in place. Positional entries (added with [`Attributes::flag`]) denote
//! boolean attributes and render as `name="name"`.
//!
//! ```
//! use reinhardt_html_core::{Attributes, render_attributes};
//!
//! let attrs = Attributes::new()
//! 	.set("class", "form-control")
//! 	.set("placeholder", None::<String>)
//! 	.flag("required");
//!
//! assert_eq!(
//! 	render_attributes(&attrs),
//! 	r#" class="form-control" required="required""#
//! );
//! ```

use crate::escape::escape;
use crate::value::stringify;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Key of an attribute entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
	/// Positional entry: the value names a boolean attribute
	Index(usize),
	/// Named entry
	Name(String),
}

impl fmt::Display for AttributeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeKey::Index(idx) => write!(f, "{}", idx),
			AttributeKey::Name(name) => f.write_str(name),
		}
	}
}

/// Value of an attribute entry
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttributeValue {
	/// Suppresses the attribute
	#[default]
	Null,
	/// `true` renders the bare name, `false` suppresses it (except for `value`)
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
	/// Space-joined list, typically for `class`
	List(Vec<String>),
}

impl AttributeValue {
	pub fn is_null(&self) -> bool {
		matches!(self, AttributeValue::Null)
	}

	/// Truthiness, used for option flags like `files`
	pub fn is_truthy(&self) -> bool {
		match self {
			AttributeValue::Null => false,
			AttributeValue::Bool(b) => *b,
			AttributeValue::Int(i) => *i != 0,
			AttributeValue::Float(f) => *f != 0.0,
			AttributeValue::Text(s) => !(s.is_empty() || s == "0" || s == "false"),
			AttributeValue::List(items) => !items.is_empty(),
		}
	}

	/// The raw (unescaped) text this value renders as.
	pub fn to_attribute_string(&self) -> String {
		match self {
			AttributeValue::Null | AttributeValue::Bool(false) => String::new(),
			AttributeValue::Bool(true) => "1".to_string(),
			AttributeValue::Int(i) => i.to_string(),
			AttributeValue::Float(f) => f.to_string(),
			AttributeValue::Text(s) => s.clone(),
			AttributeValue::List(items) => items.join(" "),
		}
	}

	/// Text value, if this is a text entry.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttributeValue::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Convert into a JSON value, as used by value resolution.
	pub fn into_json(self) -> Value {
		match self {
			AttributeValue::Null => Value::Null,
			AttributeValue::Bool(b) => Value::Bool(b),
			AttributeValue::Int(i) => Value::from(i),
			AttributeValue::Float(f) => Value::from(f),
			AttributeValue::Text(s) => Value::String(s),
			AttributeValue::List(items) => Value::from(items),
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::Text(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		AttributeValue::Text(value.clone())
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		AttributeValue::Bool(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(value: $ty) -> Self {
					AttributeValue::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for AttributeValue {
	fn from(value: usize) -> Self {
		i64::try_from(value)
			.map(AttributeValue::Int)
			.unwrap_or_else(|_| AttributeValue::Text(value.to_string()))
	}
}

impl From<f64> for AttributeValue {
	fn from(value: f64) -> Self {
		AttributeValue::Float(value)
	}
}

impl From<Vec<String>> for AttributeValue {
	fn from(value: Vec<String>) -> Self {
		AttributeValue::List(value)
	}
}

impl From<Vec<&str>> for AttributeValue {
	fn from(value: Vec<&str>) -> Self {
		AttributeValue::List(value.into_iter().map(str::to_string).collect())
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttributeValue::Null, Into::into)
	}
}

impl From<Value> for AttributeValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => AttributeValue::Null,
			Value::Bool(b) => AttributeValue::Bool(b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => AttributeValue::Int(i),
				None => AttributeValue::Text(n.to_string()),
			},
			Value::String(s) => AttributeValue::Text(s),
			Value::Array(items) => AttributeValue::List(items.iter().map(stringify).collect()),
			Value::Object(_) => AttributeValue::Text(value.to_string()),
		}
	}
}

impl From<&Value> for AttributeValue {
	fn from(value: &Value) -> Self {
		AttributeValue::from(value.clone())
	}
}

/// Ordered set of HTML attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
	entries: IndexMap<AttributeKey, AttributeValue>,
	next_index: usize,
}

impl Attributes {
	/// Create an empty attribute set
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a named attribute (builder style)
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::Attributes;
	///
	/// let attrs = Attributes::new().set("id", "main").set("id", "other");
	/// assert_eq!(attrs.len(), 1);
	/// assert_eq!(attrs.get("id").and_then(|v| v.as_str()), Some("other"));
	/// ```
	pub fn set(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Add a positional boolean attribute (builder style)
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::Attributes;
	///
	/// let attrs = Attributes::new().flag("required").flag("disabled");
	/// assert_eq!(attrs.render(), r#" required="required" disabled="disabled""#);
	/// ```
	pub fn flag(mut self, name: impl Into<String>) -> Self {
		self.push_flag(name);
		self
	}

	/// Set a named attribute, keeping its position if it already exists
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
		self.entries
			.insert(AttributeKey::Name(name.into()), value.into());
	}

	/// Append a positional boolean attribute
	pub fn push_flag(&mut self, name: impl Into<String>) {
		let key = AttributeKey::Index(self.next_index);
		self.next_index += 1;
		self.entries
			.insert(key, AttributeValue::Text(name.into()));
	}

	/// Get a named attribute
	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.entries.get(&AttributeKey::Name(name.to_string()))
	}

	/// Whether a named attribute is present (even if null)
	pub fn contains(&self, name: &str) -> bool {
		self.entries
			.contains_key(&AttributeKey::Name(name.to_string()))
	}

	/// Remove a named attribute, preserving the order of the rest
	pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
		self.entries
			.shift_remove(&AttributeKey::Name(name.to_string()))
	}

	/// Merge `other` into this set.
	///
	/// Named entries of `other` replace existing ones in place or are
	/// appended; positional entries of `other` are appended.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::Attributes;
	///
	/// let defaults = Attributes::new().set("media", "all").set("rel", "stylesheet");
	/// let merged = defaults.merge(Attributes::new().set("media", "print").set("id", "s"));
	/// assert_eq!(merged.render(), r#" media="print" rel="stylesheet" id="s""#);
	/// ```
	pub fn merge(mut self, other: Attributes) -> Self {
		for (key, value) in other.entries {
			match key {
				AttributeKey::Name(name) => self.insert(name, value),
				AttributeKey::Index(_) => {
					self.entries
						.insert(AttributeKey::Index(self.next_index), value);
					self.next_index += 1;
				}
			}
		}
		self
	}

	/// Append the entries of `other` whose names are not already present.
	///
	/// Unlike [`merge`](Self::merge), existing entries always win.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::Attributes;
	///
	/// let base = Attributes::new().set("value", "L").set("selected", None::<&str>);
	/// let html = base
	/// 	.union(&Attributes::new().set("selected", "selected").set("data-size", "large"))
	/// 	.render();
	/// assert_eq!(html, r#" value="L" data-size="large""#);
	/// ```
	pub fn union(mut self, other: &Attributes) -> Self {
		for (key, value) in other.iter() {
			match key {
				AttributeKey::Name(name) if self.contains(name) => {}
				AttributeKey::Name(name) => self.insert(name.clone(), value.clone()),
				AttributeKey::Index(_) => {
					self.entries
						.insert(AttributeKey::Index(self.next_index), value.clone());
					self.next_index += 1;
				}
			}
		}
		self
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
		self.entries.iter()
	}

	/// Render this set as an attribute string, see [`render_attributes`]
	pub fn render(&self) -> String {
		render_attributes(self)
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K, V> From<Vec<(K, V)>> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from(pairs: Vec<(K, V)>) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Attributes::new();
		for (key, value) in iter {
			attributes.insert(key, value);
		}
		attributes
	}
}

/// Attributes from a JSON value
///
/// Object entries become named attributes and array elements positional
/// ones; any other value yields an empty set.
impl From<&Value> for Attributes {
	fn from(value: &Value) -> Self {
		match value {
			Value::Object(map) => map
				.iter()
				.map(|(name, value)| (name.clone(), AttributeValue::from(value)))
				.collect(),
			Value::Array(items) => {
				let mut attributes = Attributes::new();
				for item in items {
					attributes.push_flag(stringify(item));
				}
				attributes
			}
			_ => Attributes::new(),
		}
	}
}

/// Build an [`Attributes`] set from `name => value` pairs
///
/// ```
/// use reinhardt_html_core::attrs;
///
/// let attrs = attrs! { "class" => "btn", "tabindex" => 2 };
/// assert_eq!(attrs.render(), r#" class="btn" tabindex="2""#);
/// assert!(attrs! {}.is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut attributes = $crate::Attributes::new();
		$( attributes.insert($name, $value); )+
		attributes
	}};
}

/// Render an attribute set into an HTML attribute string
///
/// Returns the empty string when nothing renders, otherwise a leading space
/// followed by the space-joined entries in insertion order.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{Attributes, render_attributes};
///
/// assert_eq!(render_attributes(&Attributes::new()), "");
/// assert_eq!(render_attributes(&Attributes::new().set("class", None::<&str>)), "");
/// assert_eq!(
/// 	render_attributes(&Attributes::new().set("a", "1").set("b", "2")),
/// 	r#" a="1" b="2""#
/// );
/// ```
pub fn render_attributes(attributes: &Attributes) -> String {
	let rendered: Vec<String> = attributes
		.iter()
		.filter_map(|(key, value)| attribute_element(key, value))
		.collect();

	if rendered.is_empty() {
		String::new()
	} else {
		format!(" {}", rendered.join(" "))
	}
}

fn attribute_element(key: &AttributeKey, value: &AttributeValue) -> Option<String> {
	if value.is_null() {
		return None;
	}

	match key {
		AttributeKey::Index(_) => {
			let text = escape(&value.to_attribute_string());
			Some(format!(r#"{}="{}""#, text, text))
		}
		AttributeKey::Name(name) => match value {
			AttributeValue::Bool(flag) if name != "value" => flag.then(|| name.clone()),
			_ => Some(format!(
				r#"{}="{}""#,
				name,
				escape(&value.to_attribute_string())
			)),
		},
	}
}
