//! HTML element builder
//!
//! [`HtmlBuilder`] renders links, asset tags, images, lists and generic
//! elements. URLs are produced by the host's [`UrlGenerator`]; components and
//! macros registered on the builder are reachable through
//! [`HtmlBuilder::call`].

use crate::listing::{description_list, listing};
use crate::obfuscate;
use reinhardt_html_core::component::{ComponentRegistry, Signature, ViewRenderer};
use reinhardt_html_core::escape::{decode, escape};
use reinhardt_html_core::url::{RouteParams, UrlGenerator};
use reinhardt_html_core::{Attributes, HtmlError, HtmlResult, HtmlString, render_attributes};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Builder for general HTML markup
///
/// # Examples
///
/// ```
/// use reinhardt_html_builder::HtmlBuilder;
/// use reinhardt_html_core::{Attributes, StaticUrlGenerator};
/// use std::sync::Arc;
///
/// let urls = StaticUrlGenerator::new("http://localhost").unwrap();
/// let html = HtmlBuilder::new(Arc::new(urls));
///
/// let link = html.link("about", Some("About us"), &Attributes::new(), None, true);
/// assert_eq!(link, r#"<a href="http://localhost/about">About us</a>"#);
/// ```
#[derive(Clone)]
pub struct HtmlBuilder {
	url: Arc<dyn UrlGenerator>,
	view: Option<Arc<dyn ViewRenderer>>,
	components: ComponentRegistry,
}

impl fmt::Debug for HtmlBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HtmlBuilder")
			.field("has_view_renderer", &self.view.is_some())
			.field("components", &self.components)
			.finish_non_exhaustive()
	}
}

impl HtmlBuilder {
	pub fn new(url: Arc<dyn UrlGenerator>) -> Self {
		Self {
			url,
			view: None,
			components: ComponentRegistry::new(),
		}
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

	pub fn url(&self) -> &Arc<dyn UrlGenerator> {
		&self.url
	}

	/// Escape text for markup, leaving existing entities intact
	pub fn entities(&self, value: &str) -> String {
		escape(value)
	}

	/// Decode entities back into characters
	pub fn decode(&self, value: &str) -> String {
		decode(value)
	}

	/// `<script>` tag for an asset
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_builder::HtmlBuilder;
	/// use reinhardt_html_core::{Attributes, StaticUrlGenerator};
	/// use std::sync::Arc;
	///
	/// let html = HtmlBuilder::new(Arc::new(StaticUrlGenerator::new("http://localhost").unwrap()));
	/// assert_eq!(
	/// 	html.script("js/app.js", &Attributes::new().flag("defer"), None),
	/// 	"<script defer=\"defer\" src=\"http://localhost/js/app.js\"></script>\n"
	/// );
	/// ```
	pub fn script(&self, url: &str, attributes: &Attributes, secure: Option<bool>) -> HtmlString {
		let attributes = attributes
			.clone()
			.set("src", self.url.asset(url, secure));

		HtmlString::new(format!("<script{}></script>\n", attributes.render()))
	}

	/// Stylesheet `<link>` tag for an asset
	///
	/// `media`, `type` and `rel` default to a screen stylesheet and may be
	/// overridden; `href` is always the asset URL.
	pub fn style(&self, url: &str, attributes: &Attributes, secure: Option<bool>) -> HtmlString {
		let attributes = Attributes::new()
			.set("media", "all")
			.set("type", "text/css")
			.set("rel", "stylesheet")
			.merge(attributes.clone())
			.set("href", self.url.asset(url, secure));

		HtmlString::new(format!("<link{}>\n", attributes.render()))
	}

	/// `<img>` tag for an asset; `src` always comes first and is the asset URL
	pub fn image(
		&self,
		url: &str,
		alt: Option<&str>,
		attributes: &Attributes,
		secure: Option<bool>,
	) -> HtmlString {
		let src = self.url.asset(url, secure);
		let attributes = Attributes::new()
			.set("src", src.as_str())
			.merge(attributes.clone())
			.set("alt", alt)
			.set("src", src);

		HtmlString::new(format!("<img{}>", attributes.render()))
	}

	/// Favicon `<link>` tag
	pub fn favicon(&self, url: &str, attributes: &Attributes, secure: Option<bool>) -> HtmlString {
		let attributes = Attributes::new()
			.set("rel", "shortcut icon")
			.set("type", "image/x-icon")
			.merge(attributes.clone())
			.set("href", self.url.asset(url, secure));

		HtmlString::new(format!("<link{}>\n", attributes.render()))
	}

	/// Anchor to a path
	///
	/// Without a title the URL itself is the link text. The title is escaped
	/// unless `escape` is false.
	pub fn link(
		&self,
		url: &str,
		title: Option<&str>,
		attributes: &Attributes,
		secure: Option<bool>,
		escape: bool,
	) -> HtmlString {
		let url = self.url.to(url, &[], secure);
		let title = title.unwrap_or(url.as_str());
		let title = if escape {
			self.entities(title)
		} else {
			title.to_string()
		};

		HtmlString::new(format!(
			"<a href=\"{}\"{}>{}</a>",
			self.entities(&url),
			attributes.render(),
			title
		))
	}

	/// Anchor to a path over HTTPS
	pub fn secure_link(
		&self,
		url: &str,
		title: Option<&str>,
		attributes: &Attributes,
		escape: bool,
	) -> HtmlString {
		self.link(url, title, attributes, Some(true), escape)
	}

	/// Anchor to an asset
	pub fn link_asset(
		&self,
		url: &str,
		title: Option<&str>,
		attributes: &Attributes,
		secure: Option<bool>,
		escape: bool,
	) -> HtmlString {
		let url = self.url.asset(url, secure);
		self.link(&url, title, attributes, secure, escape)
	}

	/// Anchor to an asset over HTTPS
	pub fn link_secure_asset(
		&self,
		url: &str,
		title: Option<&str>,
		attributes: &Attributes,
		escape: bool,
	) -> HtmlString {
		self.link_asset(url, title, attributes, Some(true), escape)
	}

	/// Anchor to a named route
	pub fn link_route(
		&self,
		name: &str,
		title: Option<&str>,
		params: &RouteParams,
		attributes: &Attributes,
		secure: Option<bool>,
		escape: bool,
	) -> HtmlResult<HtmlString> {
		let url = self.url.route(name, params)?;
		Ok(self.link(&url, title, attributes, secure, escape))
	}

	/// Anchor to a controller action
	pub fn link_action(
		&self,
		action: &str,
		title: Option<&str>,
		params: &RouteParams,
		attributes: &Attributes,
		secure: Option<bool>,
		escape: bool,
	) -> HtmlResult<HtmlString> {
		let url = self.url.action(action, params)?;
		Ok(self.link(&url, title, attributes, secure, escape))
	}

	/// Obfuscated `mailto:` anchor
	pub fn mailto(
		&self,
		email: &str,
		title: Option<&str>,
		attributes: &Attributes,
		escape: bool,
	) -> HtmlString {
		let email = self.email(email);
		let title = match title {
			Some(title) if !title.is_empty() => title,
			_ => email.as_str(),
		};
		let title = if escape {
			self.entities(title)
		} else {
			title.to_string()
		};

		HtmlString::new(format!(
			"<a href=\"{}{}\"{}>{}</a>",
			self.obfuscate("mailto:"),
			email,
			attributes.render(),
			title
		))
	}

	/// Obfuscated e-mail address
	pub fn email(&self, email: &str) -> String {
		self.obfuscate(email).replace('@', "&#64;")
	}

	/// `num` non-breaking spaces
	pub fn nbsp(&self, num: usize) -> String {
		"&nbsp;".repeat(num)
	}

	/// Ordered list, see [`listing`]
	pub fn ol(&self, list: &Value, attributes: &Attributes) -> HtmlResult<HtmlString> {
		listing("ol", list, attributes)
	}

	/// Unordered list, see [`listing`]
	pub fn ul(&self, list: &Value, attributes: &Attributes) -> HtmlResult<HtmlString> {
		listing("ul", list, attributes)
	}

	/// Description list, see [`description_list`]
	pub fn dl(&self, list: &Value, attributes: &Attributes) -> HtmlResult<HtmlString> {
		description_list(list, attributes)
	}

	/// `<meta>` tag; caller attributes override `name` and `content`
	pub fn meta(&self, name: &str, content: &str, attributes: &Attributes) -> HtmlString {
		let attributes = Attributes::new()
			.set("name", name)
			.set("content", content)
			.merge(attributes.clone());

		HtmlString::new(format!("<meta{}>\n", attributes.render()))
	}

	/// Generic element; `content` is inserted as is
	pub fn tag(&self, tag: &str, content: &str, attributes: &Attributes) -> HtmlString {
		HtmlString::new(format!(
			"<{tag}{}>{content}</{tag}>",
			attributes.render()
		))
	}

	/// Render an attribute set
	pub fn attributes(&self, attributes: &Attributes) -> String {
		render_attributes(attributes)
	}

	/// Obfuscate a string, see [`obfuscate::obfuscate`]
	pub fn obfuscate(&self, value: &str) -> String {
		obfuscate::obfuscate(value)
	}

	pub fn to_html_string(&self, html: impl Into<String>) -> HtmlString {
		HtmlString::new(html)
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

	/// Call a registered component or macro by name
	pub fn call(&self, name: &str, args: &[Value]) -> HtmlResult<HtmlString> {
		match self.components.dispatch(name, args, self.view.as_deref()) {
			Some(result) => result,
			None => {
				tracing::warn!(method = %name, "Call to unregistered HTML method");
				Err(HtmlError::UnknownMethod(name.to_string()))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_html_core::component::TeraViewRenderer;
	use reinhardt_html_core::{StaticUrlGenerator, attrs};
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn html() -> HtmlBuilder {
		let urls = StaticUrlGenerator::new("http://localhost")
			.unwrap()
			.with_route("home", "/")
			.with_route("posts.show", "posts/{post}")
			.with_action("PostController@index", "posts");
		HtmlBuilder::new(Arc::new(urls))
	}

	/// Extract the first `href` attribute value
	fn href(markup: &str) -> &str {
		let start = markup.find("href=\"").unwrap() + 6;
		let end = markup[start..].find('"').unwrap() + start;
		&markup[start..end]
	}

	#[rstest]
	fn test_entities_does_not_double_encode(html: HtmlBuilder) {
		assert_eq!(html.entities("<a> &amp; b"), "&lt;a&gt; &amp; b");
		assert_eq!(html.decode("&lt;a&gt;"), "<a>");
	}

	#[rstest]
	fn test_style_defaults_and_overrides(html: HtmlBuilder) {
		let tag = html.style(
			"css/app.css",
			&attrs! { "media" => "print", "href" => "ignored" },
			None,
		);
		assert_eq!(
			tag,
			"<link media=\"print\" type=\"text/css\" rel=\"stylesheet\" href=\"http://localhost/css/app.css\">\n"
		);
	}

	#[rstest]
	fn test_image(html: HtmlBuilder) {
		let tag = html.image("img/logo.png", Some("Logo"), &attrs! { "class" => "brand" }, None);
		assert_eq!(
			tag,
			"<img src=\"http://localhost/img/logo.png\" class=\"brand\" alt=\"Logo\">"
		);

		let tag = html.image("img/logo.png", None, &Attributes::new(), Some(true));
		assert_eq!(tag, "<img src=\"https://localhost/img/logo.png\">");
	}

	#[rstest]
	fn test_image_escapes_absolute_url(html: HtmlBuilder) {
		let tag = html.image(
			"http://cdn.test/a.png\" onerror=\"alert(1)",
			None,
			&attrs! { "src" => "ignored.png", "width" => 10 },
			None,
		);
		assert_eq!(
			tag,
			"<img src=\"http://cdn.test/a.png&quot; onerror=&quot;alert(1)\" width=\"10\">"
		);
	}

	#[rstest]
	fn test_favicon(html: HtmlBuilder) {
		let tag = html.favicon("favicon.ico", &Attributes::new(), None);
		assert_eq!(
			tag,
			"<link rel=\"shortcut icon\" type=\"image/x-icon\" href=\"http://localhost/favicon.ico\">\n"
		);
	}

	#[rstest]
	fn test_link_defaults_title_to_url(html: HtmlBuilder) {
		let link = html.link("docs", None, &Attributes::new(), None, true);
		assert_eq!(link, "<a href=\"http://localhost/docs\">http://localhost/docs</a>");
	}

	#[rstest]
	#[case(true, "<a href=\"http://localhost/x\">&lt;b&gt;Bold&lt;/b&gt;</a>")]
	#[case(false, "<a href=\"http://localhost/x\"><b>Bold</b></a>")]
	fn test_link_title_escaping(html: HtmlBuilder, #[case] escape: bool, #[case] expected: &str) {
		let link = html.link("x", Some("<b>Bold</b>"), &Attributes::new(), None, escape);
		assert_eq!(link, expected);
	}

	#[rstest]
	fn test_link_escapes_href(html: HtmlBuilder) {
		let link = html.link(
			"https://example.com/?a=1&b=\"2\"",
			Some("Example"),
			&attrs! { "rel" => "nofollow" },
			None,
			true,
		);
		assert_eq!(
			link,
			"<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\" rel=\"nofollow\">Example</a>"
		);
	}

	#[rstest]
	fn test_secure_link_and_assets(html: HtmlBuilder) {
		let link = html.secure_link("account", Some("Account"), &Attributes::new(), true);
		assert_eq!(link, "<a href=\"https://localhost/account\">Account</a>");

		let link = html.link_asset("files/report.pdf", Some("Report"), &Attributes::new(), None, true);
		assert_eq!(link, "<a href=\"http://localhost/files/report.pdf\">Report</a>");

		let link = html.link_secure_asset("files/report.pdf", Some("Report"), &Attributes::new(), true);
		assert_eq!(link, "<a href=\"https://localhost/files/report.pdf\">Report</a>");
	}

	#[rstest]
	fn test_link_route_and_action(html: HtmlBuilder) {
		let mut params = RouteParams::new();
		params.insert("post".to_string(), "42".to_string());

		let link = html
			.link_route("posts.show", Some("Post"), &params, &Attributes::new(), None, true)
			.unwrap();
		assert_eq!(link, "<a href=\"http://localhost/posts/42\">Post</a>");

		let link = html
			.link_action(
				"PostController@index",
				Some("All posts"),
				&RouteParams::new(),
				&Attributes::new(),
				None,
				true,
			)
			.unwrap();
		assert_eq!(link, "<a href=\"http://localhost/posts\">All posts</a>");
	}

	#[rstest]
	fn test_link_route_unknown_is_error(html: HtmlBuilder) {
		let result = html.link_route(
			"nope",
			None,
			&RouteParams::new(),
			&Attributes::new(),
			None,
			true,
		);
		assert!(matches!(result, Err(HtmlError::Url(_))));
	}

	#[rstest]
	fn test_mailto_decodes_to_address(html: HtmlBuilder) {
		// Act
		let link = html.mailto("jane@example.com", None, &attrs! { "class" => "mail" }, true);

		// Assert
		let markup = link.as_str();
		assert_eq!(decode(href(markup)), "mailto:jane@example.com");
		assert!(markup.contains(" class=\"mail\">"));
		let title = &markup[markup.find('>').unwrap() + 1..markup.rfind("</a>").unwrap()];
		assert_eq!(decode(title), "jane@example.com");
	}

	#[rstest]
	fn test_mailto_with_title(html: HtmlBuilder) {
		let link = html.mailto("jane@example.com", Some("Write <Jane>"), &Attributes::new(), true);
		assert!(link.as_str().ends_with(">Write &lt;Jane&gt;</a>"));
	}

	#[rstest]
	fn test_email_never_contains_raw_at(html: HtmlBuilder) {
		for _ in 0..20 {
			let email = html.email("a@b.c");
			assert!(!email.contains('@'));
			assert_eq!(decode(&email), "a@b.c");
		}
	}

	#[rstest]
	fn test_nbsp(html: HtmlBuilder) {
		assert_eq!(html.nbsp(3), "&nbsp;&nbsp;&nbsp;");
		assert_eq!(html.nbsp(0), "");
	}

	#[rstest]
	fn test_lists(html: HtmlBuilder) {
		let list = json!(["one", "two"]);
		assert_eq!(
			html.ol(&list, &Attributes::new()).unwrap(),
			"<ol><li>one</li><li>two</li></ol>"
		);
		assert_eq!(
			html.ul(&list, &attrs! { "class" => "plain" }).unwrap(),
			"<ul class=\"plain\"><li>one</li><li>two</li></ul>"
		);
		assert_eq!(
			html.dl(&json!({"k": "v"}), &Attributes::new()).unwrap(),
			"<dl><dt>k</dt><dd>v</dd></dl>"
		);
	}

	#[rstest]
	fn test_meta(html: HtmlBuilder) {
		let tag = html.meta("description", "A site", &attrs! { "name" => "og:description" });
		assert_eq!(tag, "<meta name=\"og:description\" content=\"A site\">\n");
	}

	#[rstest]
	fn test_tag_keeps_content_raw(html: HtmlBuilder) {
		let inner = html.tag("strong", "Hi", &Attributes::new());
		let tag = html.tag("p", inner.as_str(), &attrs! { "class" => "lead" });
		assert_eq!(tag, "<p class=\"lead\"><strong>Hi</strong></p>");
	}

	#[rstest]
	fn test_attributes(html: HtmlBuilder) {
		assert_eq!(html.attributes(&Attributes::new().flag("required")), " required=\"required\"");
		assert_eq!(html.to_html_string("<br>"), "<br>");
	}

	#[rstest]
	fn test_call_component_and_macro(html: HtmlBuilder) {
		// Arrange
		let mut views = TeraViewRenderer::new();
		views
			.add_template("components.badge", "<span class=\"badge\">{{ label }}</span>")
			.unwrap();
		let mut html = html.with_view_renderer(Arc::new(views));
		html.register_component("badge", "components.badge", ["label"]);
		html.register_macro("hr", |_: &[Value]| HtmlString::new("<hr>"));

		// Act
		let badge = html.call("badge", &[json!("new")]).unwrap();
		let rule = html.call("hr", &[]).unwrap();

		// Assert
		assert_eq!(badge, "<span class=\"badge\">new</span>");
		assert_eq!(rule, "<hr>");
		assert!(html.has_component("badge"));
		assert!(html.has_macro("hr"));
	}

	#[rstest]
	fn test_call_component_escapes_arguments(html: HtmlBuilder) {
		let mut views = TeraViewRenderer::new();
		views
			.add_template("components.badge", "<span class=\"badge\">{{ label }}</span>")
			.unwrap();
		let mut html = html.with_view_renderer(Arc::new(views));
		html.register_component("badge", "components.badge", ["label"]);

		let badge = html.call("badge", &[json!("<script>x</script>")]).unwrap();

		assert_eq!(
			badge,
			"<span class=\"badge\">&lt;script&gt;x&lt;&#x2F;script&gt;</span>"
		);
	}

	#[rstest]
	fn test_call_unknown_method(html: HtmlBuilder) {
		let result = html.call("missing", &[]);
		assert!(matches!(result, Err(HtmlError::UnknownMethod(ref name)) if name == "missing"));
	}
}
