//! Coercion helpers for `serde_json::Value`
//!
//! Field values, old input and list items are all carried as JSON values.
//! These helpers define how such values turn into markup text and how they
//! compare against option keys and checkbox candidates.

use serde_json::Value;

/// Convert a value to the text that is placed into markup.
///
/// `null` and `false` become the empty string, `true` becomes `"1"`,
/// arrays are joined with `,` and objects are rendered as JSON.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::value::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!(null)), "");
/// assert_eq!(stringify(&json!(true)), "1");
/// assert_eq!(stringify(&json!(42)), "42");
/// assert_eq!(stringify(&json!("text")), "text");
/// assert_eq!(stringify(&json!(["a", 1])), "a,1");
/// ```
pub fn stringify(value: &Value) -> String {
	match value {
		Value::Null | Value::Bool(false) => String::new(),
		Value::Bool(true) => "1".to_string(),
		Value::Number(n) => n.to_string(),
		Value::String(s) => s.clone(),
		Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
		Value::Object(_) => value.to_string(),
	}
}

/// Truthiness of a value.
///
/// `null`, `false`, zero, `""`, `"0"` and empty collections are falsy.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !(s.is_empty() || s == "0"),
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

/// Whether a value is a scalar (not an array or object).
pub fn is_scalar(value: &Value) -> bool {
	!matches!(value, Value::Array(_) | Value::Object(_))
}

/// Compare two values the way form state is compared.
///
/// Scalars are compared by their string form, so `1`, `"1"` and `true` are
/// equal. Collections must be structurally equal.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::value::loosely_equals;
/// use serde_json::json;
///
/// assert!(loosely_equals(&json!(1), &json!("1")));
/// assert!(loosely_equals(&json!(true), &json!("1")));
/// assert!(!loosely_equals(&json!("a"), &json!("b")));
/// ```
pub fn loosely_equals(left: &Value, right: &Value) -> bool {
	if is_scalar(left) && is_scalar(right) {
		return stringify(left) == stringify(right);
	}
	left == right
}

/// Whether `needle` is a (loosely equal) member of `haystack`.
///
/// Arrays are searched by element, objects by value. A scalar haystack
/// contains nothing.
pub fn contains_loosely(haystack: &Value, needle: &Value) -> bool {
	match haystack {
		Value::Array(items) => items.iter().any(|item| loosely_equals(item, needle)),
		Value::Object(map) => map.values().any(|item| loosely_equals(item, needle)),
		_ => false,
	}
}

/// Short type name used in error messages.
pub fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
