//! Bound models
//!
//! A form can be bound to a model whose attributes seed field values when no
//! old input or explicit value is present. Plain JSON data works out of the
//! box; richer models implement [`FormModel`], optionally exposing a
//! [`FormAccessor`] that formats values specifically for forms.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Model-specific formatting of form values
pub trait FormAccessor {
	fn form_value(&self, key: &str) -> Option<ModelValue>;
}

/// A model a form can be bound to
pub trait FormModel: Send + Sync + fmt::Debug {
	/// Generic attribute lookup
	fn attribute(&self, key: &str) -> Option<ModelValue>;

	/// Identity used when the model itself is a field value
	fn identity(&self) -> Option<Value> {
		self.attribute("id").map(ModelValue::into_value)
	}

	/// The form accessor capability, when the model has one
	fn form_accessor(&self) -> Option<&dyn FormAccessor> {
		None
	}
}

/// Value reachable from a bound model
#[derive(Debug, Clone)]
pub enum ModelValue {
	Data(Value),
	Model(Arc<dyn FormModel>),
	Collection(Vec<Arc<dyn FormModel>>),
}

impl ModelValue {
	/// Resolve a dotted path
	///
	/// The path is split on its first dot; the head is resolved against this
	/// value and the rest against the result.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_forms::model::ModelValue;
	/// use serde_json::json;
	///
	/// let model = ModelValue::from(json!({"address": {"lines": ["1 Main St"]}}));
	/// let line = model.get("address.lines.0").map(ModelValue::into_value);
	/// assert_eq!(line, Some(json!("1 Main St")));
	/// assert!(model.get("address.zip").is_none());
	/// ```
	pub fn get(&self, path: &str) -> Option<ModelValue> {
		let (head, rest) = match path.split_once('.') {
			Some((head, rest)) => (head, Some(rest)),
			None => (path, None),
		};

		let resolved = self.segment(head)?;
		match rest {
			Some(rest) => resolved.get(rest),
			None => Some(resolved),
		}
	}

	fn segment(&self, key: &str) -> Option<ModelValue> {
		match self {
			ModelValue::Data(Value::Object(map)) => map.get(key).cloned().map(ModelValue::Data),
			ModelValue::Data(Value::Array(items)) => key
				.parse::<usize>()
				.ok()
				.and_then(|idx| items.get(idx))
				.cloned()
				.map(ModelValue::Data),
			ModelValue::Data(_) => None,
			ModelValue::Model(model) => match model.form_accessor() {
				Some(accessor) => accessor.form_value(key),
				None => model.attribute(key),
			},
			ModelValue::Collection(models) => key
				.parse::<usize>()
				.ok()
				.and_then(|idx| models.get(idx))
				.map(|model| ModelValue::Model(Arc::clone(model))),
		}
	}

	/// Plain value of this model value
	///
	/// Models become their identity and collections an array of identities.
	pub fn into_value(self) -> Value {
		match self {
			ModelValue::Data(value) => value,
			ModelValue::Model(model) => model.identity().unwrap_or(Value::Null),
			ModelValue::Collection(models) => Value::Array(
				models
					.iter()
					.map(|model| model.identity().unwrap_or(Value::Null))
					.collect(),
			),
		}
	}
}

impl From<Value> for ModelValue {
	fn from(value: Value) -> Self {
		ModelValue::Data(value)
	}
}

impl From<Arc<dyn FormModel>> for ModelValue {
	fn from(model: Arc<dyn FormModel>) -> Self {
		ModelValue::Model(model)
	}
}

impl From<Vec<Arc<dyn FormModel>>> for ModelValue {
	fn from(models: Vec<Arc<dyn FormModel>>) -> Self {
		ModelValue::Collection(models)
	}
}
