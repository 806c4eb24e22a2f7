//! Field value resolution
//!
//! The value displayed by a field is chosen in this order:
//!
//! 1. old input flashed by the previous request,
//! 2. the value passed by the caller,
//! 3. the bound model, traversed along the field's path.
//!
//! Field names are normalized with [`transform_key`] before any lookup.

use crate::model::ModelValue;
use crate::session::SessionStore;
use reinhardt_html_core::value::{contains_loosely, is_truthy, loosely_equals};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;

/// Normalize a field name into a lookup path
///
/// Literal dots become underscores, `[]` is dropped and bracket segments
/// become dotted segments.
///
/// # Examples
///
/// ```
/// use reinhardt_html_forms::resolver::transform_key;
///
/// assert_eq!(transform_key("a[b][c]"), "a.b.c");
/// assert_eq!(transform_key("a.b"), "a_b");
/// assert_eq!(transform_key("a[]"), "a");
/// assert_eq!(transform_key("tags[0][name]"), "tags.0.name");
/// ```
pub fn transform_key(key: &str) -> String {
	key.replace('.', "_")
		.replace("[]", "")
		.replace('[', ".")
		.replace(']', "")
}

/// Resolves field values against old input, explicit values and a model
#[derive(Clone)]
pub struct ValueResolver {
	session: Option<Arc<dyn SessionStore>>,
	model: Option<ModelValue>,
	method_field: String,
	input_type: Option<String>,
	payload: HashMap<String, VecDeque<Value>>,
}

impl fmt::Debug for ValueResolver {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValueResolver")
			.field("has_session", &self.session.is_some())
			.field("model", &self.model)
			.field("method_field", &self.method_field)
			.field("input_type", &self.input_type)
			.finish_non_exhaustive()
	}
}

impl Default for ValueResolver {
	fn default() -> Self {
		Self::new("_method")
	}
}

impl ValueResolver {
	/// Create a resolver that never takes old input for `method_field`
	pub fn new(method_field: impl Into<String>) -> Self {
		Self {
			session: None,
			model: None,
			method_field: method_field.into(),
			input_type: None,
			payload: HashMap::new(),
		}
	}

	pub fn set_session(&mut self, session: Option<Arc<dyn SessionStore>>) {
		self.session = session;
	}

	pub fn session(&self) -> Option<&Arc<dyn SessionStore>> {
		self.session.as_ref()
	}

	pub fn set_model(&mut self, model: Option<ModelValue>) {
		self.model = model;
	}

	pub fn model(&self) -> Option<&ModelValue> {
		self.model.as_ref()
	}

	pub fn set_method_field(&mut self, method_field: impl Into<String>) {
		self.method_field = method_field.into();
	}

	/// Record the type of the field being rendered
	pub fn set_input_type(&mut self, input_type: Option<&str>) {
		self.input_type = input_type.map(str::to_string);
	}

	/// Forget the per-field cursors over array old input
	pub fn reset(&mut self) {
		self.payload.clear();
	}

	/// Old input for a field name
	///
	/// An array value is handed out one element per call for repeated fields
	/// (`tags[]`), except for selects and checkboxes which take the whole
	/// array. Once the elements are used up the whole array is returned.
	pub fn old(&mut self, name: &str) -> Option<Value> {
		let session = self.session.as_ref()?;
		let key = transform_key(name);
		let payload = session.old_input(&key).filter(|value| !value.is_null())?;

		let Value::Array(items) = &payload else {
			return Some(payload);
		};

		let takes_whole_array = matches!(self.input_type.as_deref(), Some("select" | "checkbox"));
		if !takes_whole_array {
			let queue = self
				.payload
				.entry(key)
				.or_insert_with(|| items.iter().cloned().collect());
			if let Some(value) = queue.pop_front() {
				return Some(value);
			}
		}

		Some(payload)
	}

	/// Whether a session is present and holds no old input at all
	pub fn old_input_is_empty(&self) -> bool {
		self.session
			.as_ref()
			.is_some_and(|session| !session.has_old_input())
	}

	/// Effective value of a field
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_forms::resolver::ValueResolver;
	/// use reinhardt_html_forms::session::MemorySession;
	/// use serde_json::json;
	/// use std::sync::Arc;
	///
	/// let mut resolver = ValueResolver::default();
	/// resolver.set_model(Some(json!({"name": "Z"}).into()));
	/// assert_eq!(resolver.get_value_attribute(Some("name"), Some(json!("Y"))), Some(json!("Y")));
	/// assert_eq!(resolver.get_value_attribute(Some("name"), None), Some(json!("Z")));
	///
	/// resolver.set_session(Some(Arc::new(
	/// 	MemorySession::new().with_old_input(json!({"name": "X"})),
	/// )));
	/// assert_eq!(resolver.get_value_attribute(Some("name"), Some(json!("Y"))), Some(json!("X")));
	/// ```
	pub fn get_value_attribute(&mut self, name: Option<&str>, explicit: Option<Value>) -> Option<Value> {
		let Some(name) = name else {
			return explicit;
		};

		if name != self.method_field {
			if let Some(old) = self.old(name) {
				tracing::trace!(field = %name, "Value resolved from old input");
				return Some(old);
			}
		}

		if let Some(explicit) = explicit.filter(|value| !value.is_null()) {
			tracing::trace!(field = %name, "Value resolved from explicit value");
			return Some(explicit);
		}

		let value = self.get_model_value_attribute(name);
		if value.is_some() {
			tracing::trace!(field = %name, "Value resolved from bound model");
		}
		value
	}

	/// Value of a field on the bound model
	pub fn get_model_value_attribute(&self, name: &str) -> Option<Value> {
		let model = self.model.as_ref()?;
		model
			.get(&transform_key(name))
			.map(ModelValue::into_value)
			.filter(|value| !value.is_null())
	}

	/// Whether neither old input nor the model has a value for the field
	pub fn missing_old_and_model(&mut self, name: &str) -> bool {
		self.old(name).is_none() && self.get_model_value_attribute(name).is_none()
	}

	/// Checked state of a checkable field
	///
	/// Checkboxes and radios fall back to `checked` when nothing is known
	/// about the field; any other type compares its resolved value with the
	/// candidate `value`.
	pub fn checked_state(
		&mut self,
		input_type: &str,
		name: &str,
		value: &Value,
		checked: Option<bool>,
	) -> bool {
		match input_type {
			"checkbox" => self.checkbox_checked_state(name, value, checked),
			"radio" => self.radio_checked_state(name, value, checked),
			_ => self.compare_values(name, value),
		}
	}

	fn checkbox_checked_state(&mut self, name: &str, value: &Value, checked: Option<bool>) -> bool {
		// A submitted form omits unchecked boxes entirely.
		if self.session.is_some() && !self.old_input_is_empty() && self.old(name).is_none() {
			return false;
		}

		if self.missing_old_and_model(name) {
			return checked.unwrap_or(false);
		}

		match self.get_value_attribute(Some(name), checked.map(Value::Bool)) {
			Some(posted @ (Value::Array(_) | Value::Object(_))) => contains_loosely(&posted, value),
			Some(posted) => is_truthy(&posted),
			None => false,
		}
	}

	fn radio_checked_state(&mut self, name: &str, value: &Value, checked: Option<bool>) -> bool {
		if self.missing_old_and_model(name) {
			return checked.unwrap_or(false);
		}

		self.compare_values(name, value)
	}

	fn compare_values(&mut self, name: &str, value: &Value) -> bool {
		let resolved = self.get_value_attribute(Some(name), None).unwrap_or(Value::Null);
		loosely_equals(&resolved, value)
	}
}
