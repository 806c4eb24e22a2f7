//! Named components and macros
//!
//! A component binds a name to a view and a positional signature. Calling it
//! maps the call arguments onto the signature, filling defaults for missing
//! trailing arguments, and renders the view with the resulting data. A macro
//! is a closure producing markup directly.
//!
//! ```
//! use reinhardt_html_core::component::{ComponentRegistry, Signature, TeraViewRenderer};
//! use serde_json::json;
//!
//! let mut views = TeraViewRenderer::new();
//! views
//! 	.add_template("components.alert", "<div class=\"alert-{{ kind }}\">{{ text }}</div>")
//! 	.unwrap();
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register_component(
//! 	"alert",
//! 	"components.alert",
//! 	Signature::new().param("text").with_default("kind", "info"),
//! );
//!
//! let html = registry
//! 	.dispatch("alert", &[json!("Saved")], Some(&views))
//! 	.unwrap()
//! 	.unwrap();
//! assert_eq!(html, r#"<div class="alert-info">Saved</div>"#);
//! ```

use crate::error::HtmlResult;
use crate::html_string::HtmlString;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tera::{Context, Tera};

/// Error type for view rendering
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
	#[error("View [{0}] not found.")]
	NotFound(String),

	#[error("No view renderer configured for component [{0}]")]
	NoRenderer(String),

	#[error("Template error: {0}")]
	Template(#[from] tera::Error),
}

/// Renders a named view with component data
pub trait ViewRenderer: Send + Sync {
	fn render(&self, view: &str, data: &Map<String, Value>) -> Result<String, ViewError>;
}

/// [`ViewRenderer`] backed by templates registered on a [`Tera`] instance
///
/// Templates registered through [`add_template`](Self::add_template) are
/// autoescaped whatever their name.
#[derive(Debug)]
pub struct TeraViewRenderer {
	tera: Tera,
}

impl Default for TeraViewRenderer {
	fn default() -> Self {
		let mut tera = Tera::default();
		tera.autoescape_on(vec![""]);
		Self { tera }
	}
}

impl TeraViewRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap an already configured Tera instance; its autoescape settings are kept
	pub fn from_tera(tera: Tera) -> Self {
		Self { tera }
	}

	/// Register a template from source
	pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), ViewError> {
		self.tera.add_raw_template(name, source)?;
		Ok(())
	}
}

impl ViewRenderer for TeraViewRenderer {
	fn render(&self, view: &str, data: &Map<String, Value>) -> Result<String, ViewError> {
		if !self.tera.get_template_names().any(|name| name == view) {
			return Err(ViewError::NotFound(view.to_string()));
		}

		let context = Context::from_serialize(data)?;
		Ok(self.tera.render(view, &context)?)
	}
}

/// Ordered component parameters with optional defaults
///
/// Parameters without a default receive `null` when the call omits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature(Vec<(String, Value)>);

impl Signature {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a parameter defaulting to `null`
	pub fn param(mut self, name: impl Into<String>) -> Self {
		self.0.push((name.into(), Value::Null));
		self
	}

	/// Append a parameter with a default value
	pub fn with_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
		self.0.push((name.into(), default.into()));
		self
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Map positional `args` onto the parameters
	///
	/// Arguments beyond the signature are ignored.
	pub fn bind(&self, args: &[Value]) -> Map<String, Value> {
		self.0
			.iter()
			.enumerate()
			.map(|(idx, (name, default))| {
				let value = args.get(idx).cloned().unwrap_or_else(|| default.clone());
				(name.clone(), value)
			})
			.collect()
	}
}

impl<const N: usize> From<[&str; N]> for Signature {
	fn from(names: [&str; N]) -> Self {
		names
			.into_iter()
			.fold(Signature::new(), |signature, name| signature.param(name))
	}
}

/// A registered component
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
	pub view: String,
	pub signature: Signature,
}

/// Macro callback producing markup from call arguments
pub type MacroFn = Arc<dyn Fn(&[Value]) -> HtmlString + Send + Sync>;

/// Runtime registry of components and macros
#[derive(Clone, Default)]
pub struct ComponentRegistry {
	components: IndexMap<String, Component>,
	macros: IndexMap<String, MacroFn>,
}

impl fmt::Debug for ComponentRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentRegistry")
			.field("components", &self.components)
			.field("macros", &self.macros.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a component, replacing any previous one with the same name
	pub fn register_component(
		&mut self,
		name: impl Into<String>,
		view: impl Into<String>,
		signature: impl Into<Signature>,
	) {
		let name = name.into();
		let component = Component {
			view: view.into(),
			signature: signature.into(),
		};
		tracing::debug!(component = %name, view = %component.view, "Registering component");
		self.components.insert(name, component);
	}

	pub fn has_component(&self, name: &str) -> bool {
		self.components.contains_key(name)
	}

	pub fn component(&self, name: &str) -> Option<&Component> {
		self.components.get(name)
	}

	/// Register a macro, replacing any previous one with the same name
	pub fn register_macro<F>(&mut self, name: impl Into<String>, callback: F)
	where
		F: Fn(&[Value]) -> HtmlString + Send + Sync + 'static,
	{
		self.macros.insert(name.into(), Arc::new(callback));
	}

	pub fn has_macro(&self, name: &str) -> bool {
		self.macros.contains_key(name)
	}

	/// View data for a call to the named component
	pub fn component_data(&self, name: &str, args: &[Value]) -> Option<Map<String, Value>> {
		self.components
			.get(name)
			.map(|component| component.signature.bind(args))
	}

	/// Dispatch a call by name, components first, then macros
	///
	/// Returns `None` when nothing is registered under `name`.
	pub fn dispatch(
		&self,
		name: &str,
		args: &[Value],
		renderer: Option<&dyn ViewRenderer>,
	) -> Option<HtmlResult<HtmlString>> {
		if let Some(component) = self.components.get(name) {
			tracing::debug!(component = %name, view = %component.view, "Rendering component");
			let result = match renderer {
				Some(renderer) => renderer
					.render(&component.view, &component.signature.bind(args))
					.map(HtmlString::from)
					.map_err(Into::into),
				None => Err(ViewError::NoRenderer(name.to_string()).into()),
			};
			return Some(result);
		}

		self.macros.get(name).map(|callback| {
			tracing::trace!(name = %name, "Calling macro");
			Ok(callback(args))
		})
	}
}
