//! URL generation seam
//!
//! The builders never construct URLs themselves; they ask a [`UrlGenerator`]
//! owned by the host routing system. [`StaticUrlGenerator`] is a small
//! table-driven implementation for hosts without a router of their own, and
//! for tests.

use indexmap::IndexMap;
use url::Url;
use url::form_urlencoded;

/// Named route parameters.
///
/// Keys that parse as integers (`"0"`, `"1"`, ...) are positional and fill
/// placeholders that have no named value.
pub type RouteParams = IndexMap<String, String>;

/// Error type for URL generation
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
	#[error("Invalid URL: {0}")]
	Parse(#[from] url::ParseError),

	#[error("Route [{0}] not defined.")]
	RouteNotDefined(String),

	#[error("Action [{0}] not defined.")]
	ActionNotDefined(String),

	#[error("Missing required parameter [{parameter}] for [{name}].")]
	MissingParameter { name: String, parameter: String },

	#[error("URL [{0}] cannot be used as a root.")]
	CannotBeABase(String),
}

/// URL generation provided by the host framework
pub trait UrlGenerator: Send + Sync {
	/// Absolute URL for a path, with extra path segments appended.
	///
	/// `secure` forces `https` (`Some(true)`) or `http` (`Some(false)`).
	fn to(&self, path: &str, extra: &[String], secure: Option<bool>) -> String;

	/// Absolute URL for a static asset
	fn asset(&self, path: &str, secure: Option<bool>) -> String;

	/// Absolute URL for a named route
	fn route(&self, name: &str, params: &RouteParams) -> Result<String, UrlError>;

	/// Absolute URL for a controller action
	fn action(&self, action: &str, params: &RouteParams) -> Result<String, UrlError>;

	/// Absolute URL of the current request
	fn current(&self) -> String;
}

/// Whether `path` is already a complete URL that must not be rewritten
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com"));
/// assert!(is_valid_url("#section"));
/// assert!(is_valid_url("mailto:someone@example.com"));
/// assert!(!is_valid_url("users/1"));
/// ```
pub fn is_valid_url(path: &str) -> bool {
	const PREFIXES: [&str; 7] = ["#", "//", "http://", "https://", "mailto:", "tel:", "sms:"];

	PREFIXES.iter().any(|prefix| path.starts_with(prefix))
		|| Url::parse(path).is_ok_and(|url| url.has_host())
}

/// Table-driven [`UrlGenerator`]
///
/// Routes and actions are registered as path patterns with `{param}` and
/// `{param?}` placeholders. Parameters that fill no placeholder are appended
/// as a query string.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::url::{RouteParams, StaticUrlGenerator, UrlGenerator};
///
/// let urls = StaticUrlGenerator::new("http://localhost")
/// 	.unwrap()
/// 	.with_route("users.show", "users/{id}");
///
/// let mut params = RouteParams::new();
/// params.insert("id".to_string(), "5".to_string());
/// params.insert("tab".to_string(), "posts".to_string());
///
/// assert_eq!(urls.to("about", &[], None), "http://localhost/about");
/// assert_eq!(
/// 	urls.route("users.show", &params).unwrap(),
/// 	"http://localhost/users/5?tab=posts"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StaticUrlGenerator {
	root: Url,
	asset_root: Option<Url>,
	current: String,
	routes: IndexMap<String, String>,
	actions: IndexMap<String, String>,
}

impl StaticUrlGenerator {
	/// Create a generator rooted at `root`
	pub fn new(root: &str) -> Result<Self, UrlError> {
		Ok(Self {
			root: parse_root(root)?,
			asset_root: None,
			current: String::new(),
			routes: IndexMap::new(),
			actions: IndexMap::new(),
		})
	}

	/// Serve assets from a different root (a CDN, a static prefix)
	pub fn with_asset_root(mut self, root: &str) -> Result<Self, UrlError> {
		self.asset_root = Some(parse_root(root)?);
		Ok(self)
	}

	/// Set the path of the current request
	pub fn with_current(mut self, path: impl Into<String>) -> Self {
		self.current = path.into();
		self
	}

	/// Register a named route pattern
	pub fn with_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
		self.routes.insert(name.into(), pattern.into());
		self
	}

	/// Register a controller action pattern
	pub fn with_action(mut self, action: impl Into<String>, pattern: impl Into<String>) -> Self {
		self.actions.insert(action.into(), pattern.into());
		self
	}

	fn build(&self, root: &Url, path: &str, extra: &[String], secure: Option<bool>) -> String {
		if is_valid_url(path) {
			return path.to_string();
		}

		let mut url = root.clone();
		if let Some(secure) = secure {
			let scheme = if secure { "https" } else { "http" };
			if url.set_scheme(scheme).is_err() {
				tracing::warn!(root = %root, scheme = %scheme, "Keeping root scheme");
			}
		}

		let (path, query) = match path.split_once('?') {
			Some((path, query)) => (path, Some(query)),
			None => (path, None),
		};

		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty();
			segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
			segments.extend(extra.iter().map(String::as_str));
		}
		url.set_query(query);

		let rendered = url.to_string();
		if path.trim_matches('/').is_empty() && extra.is_empty() && query.is_none() {
			rendered.trim_end_matches('/').to_string()
		} else {
			rendered
		}
	}

	fn expand(&self, name: &str, pattern: &str, params: &RouteParams) -> Result<String, UrlError> {
		let mut used: Vec<&str> = Vec::new();
		let mut positional = params.iter().filter(|(key, _)| key.parse::<usize>().is_ok());
		let mut path = String::with_capacity(pattern.len());
		let mut rest = pattern;

		while let Some(start) = rest.find('{') {
			let Some(len) = rest[start..].find('}') else {
				break;
			};
			path.push_str(&rest[..start]);

			let placeholder = &rest[start + 1..start + len];
			let (key, optional) = match placeholder.strip_suffix('?') {
				Some(key) => (key, true),
				None => (placeholder, false),
			};

			let value = match params.get_key_value(key) {
				Some((key, value)) => Some((key, value)),
				None => positional.next(),
			};
			match value {
				Some((key, value)) => {
					used.push(key.as_str());
					path.push_str(value);
				}
				None if optional => {}
				None => {
					return Err(UrlError::MissingParameter {
						name: name.to_string(),
						parameter: key.to_string(),
					});
				}
			}

			rest = &rest[start + len + 1..];
		}
		path.push_str(rest);

		let url = self.build(&self.root, &path, &[], None);
		let query: Vec<(&str, &str)> = params
			.iter()
			.filter(|(key, _)| key.parse::<usize>().is_err() && !used.contains(&key.as_str()))
			.map(|(key, value)| (key.as_str(), value.as_str()))
			.collect();

		if query.is_empty() {
			return Ok(url);
		}

		let query = form_urlencoded::Serializer::new(String::new())
			.extend_pairs(query)
			.finish();
		Ok(format!("{}?{}", url, query))
	}
}

/// Parse a root URL; it must accept path segments
fn parse_root(root: &str) -> Result<Url, UrlError> {
	let url = Url::parse(root)?;
	if url.cannot_be_a_base() {
		return Err(UrlError::CannotBeABase(root.to_string()));
	}
	Ok(url)
}

impl UrlGenerator for StaticUrlGenerator {
	fn to(&self, path: &str, extra: &[String], secure: Option<bool>) -> String {
		self.build(&self.root, path, extra, secure)
	}

	fn asset(&self, path: &str, secure: Option<bool>) -> String {
		let root = self.asset_root.as_ref().unwrap_or(&self.root);
		self.build(root, path, &[], secure)
	}

	fn route(&self, name: &str, params: &RouteParams) -> Result<String, UrlError> {
		let pattern = self
			.routes
			.get(name)
			.ok_or_else(|| UrlError::RouteNotDefined(name.to_string()))?;
		self.expand(name, pattern, params)
	}

	fn action(&self, action: &str, params: &RouteParams) -> Result<String, UrlError> {
		let pattern = self
			.actions
			.get(action)
			.ok_or_else(|| UrlError::ActionNotDefined(action.to_string()))?;
		self.expand(action, pattern, params)
	}

	fn current(&self) -> String {
		self.build(&self.root, &self.current, &[], None)
	}
}
