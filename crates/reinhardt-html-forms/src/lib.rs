//! Form builder for Reinhardt
//!
//! [`FormBuilder`] renders `<form>` tags with method spoofing and CSRF
//! tokens, and every common form control. Values shown by the controls are
//! resolved by [`ValueResolver`]: old input from the session first, then the
//! value passed by the caller, then the bound model.
//!
//! - [`session`]: the [`SessionStore`] collaborator and an in-memory store
//! - [`model`]: models a form can be bound to
//! - [`select`]: option lists and their rendering

pub mod builder;
pub mod model;
pub mod resolver;
pub mod select;
pub mod session;

pub use builder::{FormBuilder, TemporalValue};
pub use model::{FormAccessor, FormModel, ModelValue};
pub use resolver::{ValueResolver, transform_key};
pub use select::{OptionAttributes, OptionEntry, OptionList};
pub use session::{MemorySession, SessionStore};
