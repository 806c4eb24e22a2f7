//! HTML markup builder for Reinhardt
//!
//! [`HtmlBuilder`] produces links, script and stylesheet tags, images,
//! lists, meta tags and obfuscated e-mail links as [`HtmlString`] values.
//!
//! ```
//! use reinhardt_html_builder::HtmlBuilder;
//! use reinhardt_html_core::{Attributes, StaticUrlGenerator};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let html = HtmlBuilder::new(Arc::new(StaticUrlGenerator::new("https://example.com").unwrap()));
//!
//! let list = html.ul(&json!(["Rust", "Tera"]), &Attributes::new()).unwrap();
//! assert_eq!(list, "<ul><li>Rust</li><li>Tera</li></ul>");
//! ```
//!
//! [`HtmlString`]: reinhardt_html_core::HtmlString

pub mod builder;
pub mod listing;
pub mod obfuscate;

pub use builder::HtmlBuilder;
pub use listing::{ListKey, description_list, listing};
pub use obfuscate::{obfuscate, obfuscate_with};
