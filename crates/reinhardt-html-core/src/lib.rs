//! Core building blocks shared by the Reinhardt HTML and form builders
//!
//! - [`attributes`]: ordered attribute sets and their rendering
//! - [`escape`]: single-pass escaping and entity decoding
//! - [`value`]: coercion of JSON values into markup text
//! - [`url`]: the URL generation seam and a table-driven default
//! - [`component`]: runtime registered components and macros
//! - [`settings`]: field names and defaults, loadable from TOML

pub mod attributes;
pub mod component;
pub mod error;
pub mod escape;
pub mod html_string;
pub mod settings;
pub mod url;
pub mod value;

pub use attributes::{AttributeKey, AttributeValue, Attributes, render_attributes};
pub use component::{
	Component, ComponentRegistry, MacroFn, Signature, TeraViewRenderer, ViewError, ViewRenderer,
};
pub use error::{HtmlError, HtmlResult};
pub use html_string::HtmlString;
pub use settings::{HtmlSettings, SettingsError};
pub use url::{RouteParams, StaticUrlGenerator, UrlError, UrlGenerator};
