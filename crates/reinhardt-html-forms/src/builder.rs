//! Form builder
//!
//! [`FormBuilder`] renders form tags and controls. Field values are resolved
//! through a [`ValueResolver`] so that a form re-rendered after a failed
//! submission shows what the user typed, falling back to explicit values and
//! then to the bound model.
//!
//! The builder keeps per-form state: the names rendered through
//! [`label`](FormBuilder::label) (used to infer `id` attributes), the bound
//! model and the cursors over repeated array input. [`close`](FormBuilder::close)
//! clears all of it.

use crate::model::ModelValue;
use crate::resolver::ValueResolver;
use crate::select::{self, OptionAttributes, OptionList};
use crate::session::SessionStore;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use reinhardt_html_core::component::{ComponentRegistry, Signature, ViewRenderer};
use reinhardt_html_core::escape::escape;
use reinhardt_html_core::url::{RouteParams, UrlGenerator};
use reinhardt_html_core::value::{kind_of, stringify};
use reinhardt_html_core::{
	AttributeValue, Attributes, HtmlError, HtmlResult, HtmlSettings, HtmlString,
};
use serde_json::Value;
use std::fmt::{self, Write as _};
use std::sync::Arc;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";
const TIME_FORMAT: &str = "%H:%M";
const MONTH_FORMAT: &str = "%Y-%m";
const WEEK_FORMAT: &str = "%G-W%V";

/// Input types that never display a resolved value
const SKIP_VALUE_TYPES: [&str; 4] = ["file", "password", "checkbox", "radio"];

/// Options of `open` that are not rendered as attributes
const RESERVED_OPTIONS: [&str; 5] = ["method", "url", "route", "action", "files"];

/// Input types reachable through [`FormBuilder::call`]
const BUILT_IN_INPUTS: [&str; 17] = [
	"text",
	"password",
	"range",
	"hidden",
	"search",
	"email",
	"tel",
	"number",
	"date",
	"datetime",
	"datetime-local",
	"time",
	"month",
	"week",
	"url",
	"file",
	"color",
];

/// Value of a date or time input
///
/// Structured values are formatted for the input type; raw values are used
/// as they are.
#[derive(Debug, Clone, PartialEq)]
pub enum TemporalValue {
	DateTime(DateTime<FixedOffset>),
	Raw(Value),
}

impl TemporalValue {
	fn into_value(self, format: &str) -> Value {
		match self {
			TemporalValue::DateTime(datetime) => Value::String(datetime.format(format).to_string()),
			TemporalValue::Raw(value) => value,
		}
	}
}

impl From<DateTime<FixedOffset>> for TemporalValue {
	fn from(datetime: DateTime<FixedOffset>) -> Self {
		TemporalValue::DateTime(datetime)
	}
}

impl From<DateTime<Utc>> for TemporalValue {
	fn from(datetime: DateTime<Utc>) -> Self {
		TemporalValue::DateTime(datetime.fixed_offset())
	}
}

impl From<NaiveDateTime> for TemporalValue {
	fn from(datetime: NaiveDateTime) -> Self {
		TemporalValue::DateTime(datetime.and_utc().fixed_offset())
	}
}

impl From<NaiveDate> for TemporalValue {
	fn from(date: NaiveDate) -> Self {
		TemporalValue::from(date.and_time(NaiveTime::MIN))
	}
}

impl From<Value> for TemporalValue {
	fn from(value: Value) -> Self {
		TemporalValue::Raw(value)
	}
}

impl From<&str> for TemporalValue {
	fn from(value: &str) -> Self {
		TemporalValue::Raw(Value::from(value))
	}
}

/// Builder for forms and form controls
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{StaticUrlGenerator, attrs};
/// use reinhardt_html_forms::FormBuilder;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let urls = StaticUrlGenerator::new("http://localhost").unwrap();
/// let mut form = FormBuilder::new(Arc::new(urls), Some("token".to_string()));
///
/// let open = form.open(&attrs! { "url" => "users" }).unwrap();
/// assert_eq!(
/// 	open,
/// 	concat!(
/// 		"<form method=\"POST\" action=\"http://localhost/users\" accept-charset=\"UTF-8\">",
/// 		"<input name=\"_token\" type=\"hidden\" value=\"token\">"
/// 	)
/// );
///
/// form.label("email", None, &attrs! {}, true);
/// let input = form.email("email", Some(json!("jane@example.com")), &attrs! {});
/// assert_eq!(
/// 	input,
/// 	"<input name=\"email\" type=\"email\" value=\"jane@example.com\" id=\"email\">"
/// );
/// assert_eq!(form.close(), "</form>");
/// ```
#[derive(Clone)]
pub struct FormBuilder {
	url: Arc<dyn UrlGenerator>,
	resolver: ValueResolver,
	view: Option<Arc<dyn ViewRenderer>>,
	csrf_token: Option<String>,
	labels: Vec<String>,
	settings: HtmlSettings,
	components: ComponentRegistry,
}

impl fmt::Debug for FormBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormBuilder")
			.field("resolver", &self.resolver)
			.field("labels", &self.labels)
			.field("settings", &self.settings)
			.field("components", &self.components)
			.finish_non_exhaustive()
	}
}

macro_rules! input_types {
	($($(#[$meta:meta])* $method:ident => $input_type:literal),+ $(,)?) => {
		$(
			$(#[$meta])*
			pub fn $method(
				&mut self,
				name: &str,
				value: Option<Value>,
				attributes: &Attributes,
			) -> HtmlString {
				self.input($input_type, Some(name), value, attributes)
			}
		)+
	};
}

macro_rules! temporal_types {
	($($(#[$meta:meta])* $method:ident => ($input_type:literal, $format:expr)),+ $(,)?) => {
		$(
			$(#[$meta])*
			pub fn $method(
				&mut self,
				name: &str,
				value: Option<TemporalValue>,
				attributes: &Attributes,
			) -> HtmlString {
				let value = value.map(|value| value.into_value($format));
				self.input($input_type, Some(name), value, attributes)
			}
		)+
	};
}

impl FormBuilder {
	/// Create a builder; `csrf_token` overrides the session token
	pub fn new(url: Arc<dyn UrlGenerator>, csrf_token: Option<String>) -> Self {
		let settings = HtmlSettings::default();
		Self {
			url,
			resolver: ValueResolver::new(settings.method_field.clone()),
			view: None,
			csrf_token,
			labels: Vec::new(),
			settings,
			components: ComponentRegistry::new(),
		}
	}

	pub fn with_session(mut self, session: Arc<dyn SessionStore>) -> Self {
		self.set_session_store(session);
		self
	}

	pub fn with_settings(mut self, settings: HtmlSettings) -> Self {
		self.resolver.set_method_field(settings.method_field.clone());
		self.settings = settings;
		self
	}

	/// Set the renderer used for registered components
	pub fn with_view_renderer(mut self, view: Arc<dyn ViewRenderer>) -> Self {
		self.view = Some(view);
		self
	}

	/// Replace the component registry
	pub fn with_components(mut self, components: ComponentRegistry) -> Self {
		self.components = components;
		self
	}

	pub fn settings(&self) -> &HtmlSettings {
		&self.settings
	}

	pub fn set_session_store(&mut self, session: Arc<dyn SessionStore>) {
		self.resolver.set_session(Some(session));
	}

	pub fn session_store(&self) -> Option<&Arc<dyn SessionStore>> {
		self.resolver.session()
	}

	pub fn set_model(&mut self, model: Option<ModelValue>) {
		self.resolver.set_model(model);
	}

	pub fn get_model(&self) -> Option<&ModelValue> {
		self.resolver.model()
	}

	/// Open a form
	///
	/// Recognized options:
	///
	/// - `method`: any method; only `GET` is sent as is, everything else as
	///   `POST`, with a hidden method field for spoofed methods
	/// - `url`: a path, or a list of a path and extra segments
	/// - `route` / `action`: a name, or a list of a name and positional
	///   parameters
	/// - `files`: when truthy, sets a multipart `enctype`
	///
	/// Without `url`, `route` or `action` the form posts to the current URL.
	/// Every other option is rendered as an attribute.
	pub fn open(&mut self, options: &Attributes) -> HtmlResult<HtmlString> {
		let method = options
			.get("method")
			.map(AttributeValue::to_attribute_string)
			.filter(|method| !method.is_empty())
			.unwrap_or_else(|| "post".to_string())
			.to_uppercase();
		let action = self.get_action(options)?;

		let mut rest = options.clone();
		for key in RESERVED_OPTIONS {
			rest.remove(key);
		}
		if options.get("files").is_some_and(AttributeValue::is_truthy) {
			rest.insert("enctype", "multipart/form-data");
		}

		let attributes = Attributes::new()
			.set("method", if method == "GET" { "GET" } else { "POST" })
			.set("action", action)
			.set("accept-charset", self.settings.charset.as_str())
			.merge(rest);

		tracing::debug!(method = %method, "Opening form");
		let appendage = self.get_appendage(&method);

		Ok(HtmlString::new(format!(
			"<form{}>{}",
			attributes.render(),
			appendage
		)))
	}

	/// Bind a model and open the form
	pub fn model(&mut self, model: impl Into<ModelValue>, options: &Attributes) -> HtmlResult<HtmlString> {
		self.set_model(Some(model.into()));
		self.open(options)
	}

	/// Close the form, clearing labels, the bound model and array cursors
	pub fn close(&mut self) -> HtmlString {
		self.labels.clear();
		self.resolver.set_model(None);
		self.resolver.reset();
		tracing::debug!("Closing form");

		HtmlString::new("</form>")
	}

	/// Hidden CSRF token field
	pub fn token(&mut self) -> HtmlString {
		let token = self
			.csrf_token
			.clone()
			.filter(|token| !token.is_empty())
			.or_else(|| self.resolver.session().and_then(|session| session.token()));
		let field = self.settings.token_field.clone();

		self.hidden(&field, token.map(Value::String), &Attributes::new())
	}

	/// `<label>` for a field
	///
	/// Without `value` the text is derived from the name (`first_name`
	/// becomes `First Name`). Labelled names get an inferred `id` when their
	/// field is rendered later.
	pub fn label(
		&mut self,
		name: &str,
		value: Option<&str>,
		attributes: &Attributes,
		escape_html: bool,
	) -> HtmlString {
		self.labels.push(name.to_string());

		let value = format_label(name, value);
		let value = if escape_html { escape(&value) } else { value };

		HtmlString::new(format!(
			"<label for=\"{}\"{}>{}</label>",
			escape(name),
			attributes.render(),
			value
		))
	}

	/// Generic `<input>`
	///
	/// Caller attributes come first, followed by `name` (unless given),
	/// `type`, `value` and `id`.
	pub fn input(
		&mut self,
		input_type: &str,
		name: Option<&str>,
		value: Option<Value>,
		attributes: &Attributes,
	) -> HtmlString {
		self.resolver.set_input_type(Some(input_type));

		let mut attributes = attributes.clone();
		if attributes.get("name").is_none_or(AttributeValue::is_null) {
			attributes.insert("name", name);
		}
		let id = self.get_id_attribute(name, &attributes);

		let value = if SKIP_VALUE_TYPES.contains(&input_type) {
			value
		} else {
			self.resolver.get_value_attribute(name, value)
		};

		attributes.insert("type", input_type);
		attributes.insert("value", value);
		attributes.insert("id", id);

		HtmlString::new(format!("<input{}>", attributes.render()))
	}

	input_types! {
		text => "text",
		range => "range",
		hidden => "hidden",
		search => "search",
		email => "email",
		tel => "tel",
		number => "number",
		url => "url",
		color => "color",
	}

	temporal_types! {
		/// Date input, `YYYY-MM-DD`
		date => ("date", DATE_FORMAT),
		/// Date-time input in RFC 3339 form
		datetime => ("datetime", DATETIME_FORMAT),
		/// Local date-time input, `YYYY-MM-DDTHH:MM`
		datetime_local => ("datetime-local", DATETIME_LOCAL_FORMAT),
		/// Time input, `HH:MM`
		time => ("time", TIME_FORMAT),
		/// Month input, `YYYY-MM`
		month => ("month", MONTH_FORMAT),
		/// ISO week input, `YYYY-Www`
		week => ("week", WEEK_FORMAT),
	}

	/// Password input; its value is always empty
	pub fn password(&mut self, name: &str, attributes: &Attributes) -> HtmlString {
		self.input("password", Some(name), Some(Value::from("")), attributes)
	}

	/// File input; never carries a value
	pub fn file(&mut self, name: &str, attributes: &Attributes) -> HtmlString {
		self.input("file", Some(name), None, attributes)
	}

	/// `<textarea>`
	///
	/// `cols` and `rows` default to the configured size; a `size` attribute
	/// of the form `"COLSxROWS"` sets both.
	pub fn textarea(&mut self, name: &str, value: Option<Value>, attributes: &Attributes) -> HtmlString {
		self.resolver.set_input_type(Some("textarea"));

		let mut attributes = attributes.clone();
		if attributes.get("name").is_none_or(AttributeValue::is_null) {
			attributes.insert("name", name);
		}
		self.set_textarea_size(&mut attributes);
		let id = self.get_id_attribute(Some(name), &attributes);
		attributes.insert("id", id);

		let value = self
			.resolver
			.get_value_attribute(Some(name), value)
			.map(|value| stringify(&value))
			.unwrap_or_default();
		attributes.remove("size");

		HtmlString::new(format!(
			"<textarea{}>{}</textarea>",
			attributes.render(),
			escape(&value)
		))
	}

	fn set_textarea_size(&self, attributes: &mut Attributes) {
		let size = attributes
			.get("size")
			.filter(|size| !size.is_null())
			.map(AttributeValue::to_attribute_string);
		if let Some((cols, rows)) = size.as_deref().and_then(|size| size.split_once('x')) {
			attributes.insert("cols", cols.trim());
			attributes.insert("rows", rows.trim());
			return;
		}

		let cols = attributes
			.get("cols")
			.filter(|cols| !cols.is_null())
			.cloned()
			.unwrap_or_else(|| AttributeValue::from(self.settings.textarea_cols));
		let rows = attributes
			.get("rows")
			.filter(|rows| !rows.is_null())
			.cloned()
			.unwrap_or_else(|| AttributeValue::from(self.settings.textarea_rows));
		attributes.insert("cols", cols);
		attributes.insert("rows", rows);
	}

	/// `<select>` with options
	///
	/// A `placeholder` attribute becomes a leading empty option.
	pub fn select(
		&mut self,
		name: &str,
		list: &OptionList,
		selected: Option<Value>,
		attributes: &Attributes,
	) -> HtmlString {
		self.select_with_attributes(
			name,
			list,
			selected,
			attributes,
			&OptionAttributes::new(),
			&OptionAttributes::new(),
		)
	}

	/// `<select>` with per-option and per-group attribute overlays
	pub fn select_with_attributes(
		&mut self,
		name: &str,
		list: &OptionList,
		selected: Option<Value>,
		attributes: &Attributes,
		option_attributes: &OptionAttributes,
		optgroup_attributes: &OptionAttributes,
	) -> HtmlString {
		self.resolver.set_input_type(Some("select"));
		let selected = self
			.resolver
			.get_value_attribute(Some(name), selected)
			.unwrap_or(Value::Null);

		let mut attributes = attributes.clone();
		let id = self.get_id_attribute(Some(name), &attributes);
		attributes.insert("id", id);
		if attributes.get("name").is_none_or(AttributeValue::is_null) {
			attributes.insert("name", name);
		}

		let mut html = String::new();
		if let Some(placeholder) = attributes.remove("placeholder").filter(|value| !value.is_null()) {
			html.push_str(&select::render_placeholder(
				&placeholder.to_attribute_string(),
				&selected,
			));
		}
		html.push_str(&select::render_options(
			list,
			&selected,
			option_attributes,
			optgroup_attributes,
		));

		HtmlString::new(format!("<select{}>{}</select>", attributes.render(), html))
	}

	/// `<select>` over an inclusive numeric range, descending when
	/// `begin > end`
	pub fn select_range(
		&mut self,
		name: &str,
		begin: i64,
		end: i64,
		selected: Option<Value>,
		attributes: &Attributes,
	) -> HtmlString {
		let values: Vec<i64> = if begin <= end {
			(begin..=end).collect()
		} else {
			(end..=begin).rev().collect()
		};
		let list: OptionList = values
			.iter()
			.map(|value| (value.to_string(), value.to_string()))
			.collect();

		self.select(name, &list, selected, attributes)
	}

	/// Year `<select>`, see [`select_range`](Self::select_range)
	pub fn select_year(
		&mut self,
		name: &str,
		begin: i64,
		end: i64,
		selected: Option<Value>,
		attributes: &Attributes,
	) -> HtmlString {
		self.select_range(name, begin, end, selected, attributes)
	}

	/// Month `<select>` keyed `1` to `12`
	///
	/// Labels use the chrono `format` (the configured month format when
	/// `None`); an unusable format falls back to the month number.
	pub fn select_month(
		&mut self,
		name: &str,
		selected: Option<Value>,
		attributes: &Attributes,
		format: Option<&str>,
	) -> HtmlString {
		let format = format.unwrap_or(&self.settings.month_format).to_string();
		let list: OptionList = (1..=12u32)
			.map(|month| (month.to_string(), month_label(month, &format)))
			.collect();

		self.select(name, &list, selected, attributes)
	}

	/// `<datalist>`; arrays use each element as value and label
	pub fn datalist(&mut self, id: &str, list: &Value) -> HtmlResult<HtmlString> {
		self.resolver.set_input_type(Some("datalist"));

		let options: String = match list {
			Value::Null => String::new(),
			Value::Array(items) => items
				.iter()
				.map(|item| {
					let value = stringify(item);
					select::render_option(&value, &value, &Value::Null, None)
				})
				.collect(),
			Value::Object(map) => map
				.iter()
				.map(|(value, display)| {
					select::render_option(&stringify(display), value, &Value::Null, None)
				})
				.collect(),
			other => return Err(HtmlError::NotIterable(kind_of(other))),
		};
		let attributes = Attributes::new().set("id", id);

		Ok(HtmlString::new(format!(
			"<datalist{}>{}</datalist>",
			attributes.render(),
			options
		)))
	}

	/// Checkbox; `value` defaults to `1`
	pub fn checkbox(
		&mut self,
		name: &str,
		value: Option<Value>,
		checked: Option<bool>,
		attributes: &Attributes,
	) -> HtmlString {
		let value = value.unwrap_or_else(|| Value::from(1));
		self.checkable("checkbox", name, value, checked, attributes)
	}

	/// Radio button; `value` defaults to the name
	pub fn radio(
		&mut self,
		name: &str,
		value: Option<Value>,
		checked: Option<bool>,
		attributes: &Attributes,
	) -> HtmlString {
		let value = value.unwrap_or_else(|| Value::from(name));
		self.checkable("radio", name, value, checked, attributes)
	}

	fn checkable(
		&mut self,
		input_type: &str,
		name: &str,
		value: Value,
		checked: Option<bool>,
		attributes: &Attributes,
	) -> HtmlString {
		self.resolver.set_input_type(Some(input_type));

		let mut attributes = attributes.clone();
		if self.resolver.checked_state(input_type, name, &value, checked) {
			attributes.insert("checked", "checked");
		}

		self.input(input_type, Some(name), Some(value), &attributes)
	}

	/// Reset button
	pub fn reset(&mut self, value: &str, attributes: &Attributes) -> HtmlString {
		self.input("reset", None, Some(Value::from(value)), attributes)
	}

	/// Image submit input for an asset
	pub fn image(&mut self, url: &str, name: Option<&str>, attributes: &Attributes) -> HtmlString {
		let attributes = attributes.clone().set("src", self.url.asset(url, None));
		self.input("image", name, None, &attributes)
	}

	/// Submit button
	pub fn submit(&mut self, value: Option<&str>, attributes: &Attributes) -> HtmlString {
		self.input("submit", None, value.map(Value::from), attributes)
	}

	/// `<button>`, `type="button"` unless given; `value` is inserted as is
	pub fn button(&mut self, value: Option<&str>, attributes: &Attributes) -> HtmlString {
		let mut attributes = attributes.clone();
		if !attributes.contains("type") {
			attributes.insert("type", "button");
		}

		HtmlString::new(format!(
			"<button{}>{}</button>",
			attributes.render(),
			value.unwrap_or_default()
		))
	}

	/// `id` for a field: an explicit `id`, else the name when it was labelled
	pub fn get_id_attribute(&self, name: Option<&str>, attributes: &Attributes) -> AttributeValue {
		if let Some(id) = attributes.get("id") {
			return id.clone();
		}

		match name {
			Some(name) if self.labels.iter().any(|label| label == name) => AttributeValue::from(name),
			_ => AttributeValue::Null,
		}
	}

	/// Effective value of a field, see [`ValueResolver::get_value_attribute`]
	pub fn get_value_attribute(&mut self, name: Option<&str>, value: Option<Value>) -> Option<Value> {
		self.resolver.get_value_attribute(name, value)
	}

	pub fn get_model_value_attribute(&self, name: &str) -> Option<Value> {
		self.resolver.get_model_value_attribute(name)
	}

	pub fn old(&mut self, name: &str) -> Option<Value> {
		self.resolver.old(name)
	}

	pub fn old_input_is_empty(&self) -> bool {
		self.resolver.old_input_is_empty()
	}

	/// Register a component rendered through the view renderer
	pub fn register_component(
		&mut self,
		name: impl Into<String>,
		view: impl Into<String>,
		signature: impl Into<Signature>,
	) {
		self.components.register_component(name, view, signature);
	}

	/// Register a macro
	pub fn register_macro<F>(&mut self, name: impl Into<String>, callback: F)
	where
		F: Fn(&[Value]) -> HtmlString + Send + Sync + 'static,
	{
		self.components.register_macro(name, callback);
	}

	pub fn has_component(&self, name: &str) -> bool {
		self.components.has_component(name)
	}

	pub fn has_macro(&self, name: &str) -> bool {
		self.components.has_macro(name)
	}

	/// Call a component, a macro or a built-in input type by name
	///
	/// Built-in input types take `[name, value, attributes]` arguments, with
	/// attributes given as a JSON object.
	pub fn call(&mut self, name: &str, args: &[Value]) -> HtmlResult<HtmlString> {
		if let Some(result) = self.components.dispatch(name, args, self.view.as_deref()) {
			return result;
		}

		let input_type = name.replace('_', "-");
		if BUILT_IN_INPUTS.contains(&input_type.as_str()) {
			tracing::trace!(input_type = %input_type, "Dispatching built-in input");
			let field = args.first().and_then(Value::as_str);
			let value = args.get(1).filter(|value| !value.is_null()).cloned();
			let attributes = args.get(2).map(Attributes::from).unwrap_or_default();
			return Ok(self.input(&input_type, field, value, &attributes));
		}

		tracing::warn!(method = %name, "Call to unregistered form method");
		Err(HtmlError::UnknownMethod(name.to_string()))
	}

	fn get_action(&self, options: &Attributes) -> HtmlResult<String> {
		if let Some(url) = present(options, "url") {
			let (path, extra) = split_target(url);
			return Ok(self.url.to(&path, &extra, None));
		}

		if let Some(route) = present(options, "route") {
			let (name, params) = split_target(route);
			return Ok(self.url.route(&name, &positional_params(params))?);
		}

		if let Some(action) = present(options, "action") {
			let (name, params) = split_target(action);
			return Ok(self.url.action(&name, &positional_params(params))?);
		}

		Ok(self.url.current())
	}

	fn get_appendage(&mut self, method: &str) -> String {
		let mut appendage = String::new();

		if self.settings.is_spoofed(method) {
			let field = self.settings.method_field.clone();
			let hidden = self.hidden(&field, Some(Value::from(method)), &Attributes::new());
			appendage.push_str(hidden.as_str());
		}

		if method != "GET" {
			appendage.push_str(self.token().as_str());
		}

		appendage
	}
}

fn present<'a>(options: &'a Attributes, name: &str) -> Option<&'a AttributeValue> {
	options.get(name).filter(|value| !value.is_null())
}

/// Split a `url`/`route`/`action` option into its target and parameters
fn split_target(value: &AttributeValue) -> (String, Vec<String>) {
	match value {
		AttributeValue::List(items) => match items.split_first() {
			Some((first, rest)) => (first.clone(), rest.to_vec()),
			None => (String::new(), Vec::new()),
		},
		other => (other.to_attribute_string(), Vec::new()),
	}
}

fn positional_params(params: Vec<String>) -> RouteParams {
	params
		.into_iter()
		.enumerate()
		.map(|(idx, value)| (idx.to_string(), value))
		.collect()
}

fn format_label(name: &str, value: Option<&str>) -> String {
	match value {
		Some(value) if !value.is_empty() => value.to_string(),
		_ => ucwords(&name.replace('_', " ")),
	}
}

/// Uppercase the first character of every word
fn ucwords(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut at_word_start = true;
	for ch in text.chars() {
		if at_word_start {
			result.extend(ch.to_uppercase());
		} else {
			result.push(ch);
		}
		at_word_start = ch.is_whitespace();
	}
	result
}

fn month_label(month: u32, format: &str) -> String {
	let Some(date) = NaiveDate::from_ymd_opt(2000, month, 1) else {
		return month.to_string();
	};

	let mut label = String::new();
	if write!(label, "{}", date.format(format)).is_err() {
		return month.to_string();
	}
	label
}
