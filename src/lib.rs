//! # Reinhardt HTML
//!
//! HTML and form builders producing safe markup fragments.
//!
//! Every operation returns an [`HtmlString`]: markup that is already
//! escaped where it needs to be and is never escaped again. User-supplied
//! text (labels, link titles, list items, attribute values) is escaped on
//! the way in.
//!
//! ## Feature Flags
//!
//! - `builder` - [`HtmlBuilder`]: links, script and style tags, images, lists,
//!   meta tags and obfuscated e-mail links
//! - `forms` - [`FormBuilder`]: forms with method spoofing and CSRF tokens,
//!   inputs, selects, checkboxes and buttons with old-input repopulation
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_html::prelude::*;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let urls: Arc<dyn UrlGenerator> = Arc::new(StaticUrlGenerator::new("https://example.com").unwrap());
//!
//! let html = HtmlBuilder::new(Arc::clone(&urls));
//! assert_eq!(
//! 	html.link("docs", Some("Docs"), &attrs! { "class" => "nav" }, None, true),
//! 	"<a href=\"https://example.com/docs\" class=\"nav\">Docs</a>"
//! );
//!
//! let session = MemorySession::new()
//! 	.with_old_input(json!({"email": "typed@example.com"}))
//! 	.with_token("secret");
//! let mut form = FormBuilder::new(urls, None).with_session(Arc::new(session));
//!
//! let open = form.open(&attrs! { "url" => "login" }).unwrap();
//! assert!(open.as_str().ends_with("<input name=\"_token\" type=\"hidden\" value=\"secret\">"));
//! assert_eq!(
//! 	form.email("email", None, &attrs! {}),
//! 	"<input name=\"email\" type=\"email\" value=\"typed@example.com\">"
//! );
//! ```

pub use reinhardt_html_core as core;
#[cfg(feature = "builder")]
pub use reinhardt_html_builder as builder;
#[cfg(feature = "forms")]
pub use reinhardt_html_forms as forms;

pub use reinhardt_html_core::{
	AttributeValue, Attributes, Component, ComponentRegistry, HtmlError, HtmlResult,
	HtmlSettings, HtmlString, RouteParams, SettingsError, Signature, StaticUrlGenerator,
	TeraViewRenderer, UrlError, UrlGenerator, ViewError, ViewRenderer, attrs, render_attributes,
};

#[cfg(feature = "builder")]
pub use reinhardt_html_builder::HtmlBuilder;

#[cfg(feature = "forms")]
pub use reinhardt_html_forms::{
	FormAccessor, FormBuilder, FormModel, MemorySession, ModelValue, OptionAttributes, OptionList,
	SessionStore, TemporalValue,
};

/// Commonly used types
pub mod prelude {
	pub use crate::{
		AttributeValue, Attributes, HtmlError, HtmlResult, HtmlSettings, HtmlString,
		StaticUrlGenerator, UrlGenerator, attrs,
	};

	#[cfg(feature = "builder")]
	pub use crate::HtmlBuilder;

	#[cfg(feature = "forms")]
	pub use crate::{FormBuilder, FormModel, MemorySession, ModelValue, OptionList, SessionStore};
}
