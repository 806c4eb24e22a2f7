//! Session access for form repopulation
//!
//! The host framework owns the session. Form builders only read the input
//! flashed by the previous request ("old input") and the CSRF token.

use serde_json::{Map, Value};

/// Read access to the request session
pub trait SessionStore: Send + Sync {
	/// Old input at a dotted path (`address.city`, `tags.0`)
	fn old_input(&self, path: &str) -> Option<Value>;

	/// Whether any old input was flashed at all
	fn has_old_input(&self) -> bool;

	/// CSRF token of the session
	fn token(&self) -> Option<String>;
}

/// In-memory [`SessionStore`]
///
/// # Examples
///
/// ```
/// use reinhardt_html_forms::session::{MemorySession, SessionStore};
/// use serde_json::json;
///
/// let session = MemorySession::new()
/// 	.with_old_input(json!({"user": {"email": "jane@example.com"}, "tags": ["a", "b"]}))
/// 	.with_token("secret");
///
/// assert_eq!(session.old_input("user.email"), Some(json!("jane@example.com")));
/// assert_eq!(session.old_input("tags.1"), Some(json!("b")));
/// assert_eq!(session.old_input("user.name"), None);
/// assert_eq!(session.token().as_deref(), Some("secret"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
	old_input: Map<String, Value>,
	token: Option<String>,
}

impl MemorySession {
	pub fn new() -> Self {
		Self::default()
	}

	/// Flash old input; anything but a JSON object clears it
	pub fn with_old_input(mut self, input: Value) -> Self {
		self.old_input = match input {
			Value::Object(map) => map,
			_ => Map::new(),
		};
		self
	}

	pub fn with_token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self
	}
}

impl SessionStore for MemorySession {
	fn old_input(&self, path: &str) -> Option<Value> {
		if let Some(value) = self.old_input.get(path) {
			return Some(value.clone());
		}

		let mut segments = path.split('.');
		let first = segments.next()?;
		let mut current = self.old_input.get(first)?;
		for segment in segments {
			current = match current {
				Value::Object(map) => map.get(segment)?,
				Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
				_ => return None,
			};
		}
		Some(current.clone())
	}

	fn has_old_input(&self) -> bool {
		!self.old_input.is_empty()
	}

	fn token(&self) -> Option<String> {
		self.token.clone()
	}
}
