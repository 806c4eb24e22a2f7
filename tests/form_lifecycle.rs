//! End-to-end form rendering: opening, repopulating and closing forms

use reinhardt_html::prelude::*;
use reinhardt_html::{FormAccessor, TemporalValue};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

fn urls() -> Arc<dyn UrlGenerator> {
	Arc::new(
		StaticUrlGenerator::new("http://localhost")
			.unwrap()
			.with_current("posts/create")
			.with_route("posts.update", "posts/{post}")
			.with_route("posts.comments", "posts/{post}/comments/{comment?}"),
	)
}

#[fixture]
fn form() -> FormBuilder {
	FormBuilder::new(urls(), None).with_session(Arc::new(MemorySession::new().with_token("abc")))
}

#[fixture]
fn submitted() -> FormBuilder {
	let session = MemorySession::new()
		.with_old_input(json!({
			"title": "Typed title",
			"tags": ["rust", "web"],
			"category": "2",
			"options": {"notify": "1"}
		}))
		.with_token("abc");
	FormBuilder::new(urls(), None).with_session(Arc::new(session))
}

#[derive(Debug)]
struct Post {
	title: String,
	published_at: &'static str,
}

impl FormModel for Post {
	fn attribute(&self, key: &str) -> Option<ModelValue> {
		match key {
			"id" => Some(json!(12).into()),
			"title" => Some(json!(self.title).into()),
			"published_at" => Some(json!(self.published_at).into()),
			"category" => Some(json!(3).into()),
			_ => None,
		}
	}

	fn form_accessor(&self) -> Option<&dyn FormAccessor> {
		Some(self)
	}
}

impl FormAccessor for Post {
	fn form_value(&self, key: &str) -> Option<ModelValue> {
		match key {
			"published_at" => Some(json!(&self.published_at[..10]).into()),
			other => self.attribute(other),
		}
	}
}

#[rstest]
fn test_put_form_spoofs_method_before_token(mut form: FormBuilder) {
	let html = form
		.open(&attrs! { "method" => "PUT", "route" => vec!["posts.update", "12"] })
		.unwrap();

	assert_eq!(
		html,
		concat!(
			"<form method=\"POST\" action=\"http://localhost/posts/12\" accept-charset=\"UTF-8\">",
			"<input name=\"_method\" type=\"hidden\" value=\"PUT\">",
			"<input name=\"_token\" type=\"hidden\" value=\"abc\">"
		)
	);
}

#[rstest]
fn test_optional_route_parameter(mut form: FormBuilder) {
	let html = form
		.open(&attrs! { "route" => vec!["posts.comments", "3"] })
		.unwrap();
	assert!(html.as_str().contains("action=\"http://localhost/posts/3/comments\""));
}

#[rstest]
fn test_full_form_snapshot(mut form: FormBuilder) {
	// Arrange
	let categories = OptionList::from([("1", "News"), ("2", "Guides")]);

	// Act
	let mut html = form.open(&attrs! { "url" => "posts", "class" => "post-form" }).unwrap();
	html.push(&form.label("title", None, &attrs! {}, true));
	html.push(&form.text("title", None, &attrs! { "required" => true }));
	html.push(&form.select("category", &categories, Some(json!("2")), &attrs! {}));
	html.push(&form.submit(Some("Save"), &attrs! {}));
	html.push(&form.close());

	// Assert
	insta::assert_snapshot!(
		html.as_str(),
		@r#"<form method="POST" action="http://localhost/posts" accept-charset="UTF-8" class="post-form"><input name="_token" type="hidden" value="abc"><label for="title">Title</label><input required name="title" type="text" id="title"><select name="category"><option value="1">News</option><option value="2" selected="selected">Guides</option></select><input type="submit" value="Save"></form>"#
	);
}

#[rstest]
fn test_old_input_repopulates_fields(mut submitted: FormBuilder) {
	let categories = OptionList::from([("1", "News"), ("2", "Guides"), ("3", "Reviews")]);

	let title = submitted.text("title", Some(json!("Explicit")), &attrs! {});
	let first_tag = submitted.text("tags[]", None, &attrs! {});
	let second_tag = submitted.text("tags[]", None, &attrs! {});
	let category = submitted.select("category", &categories, Some(json!("3")), &attrs! {});
	let notify = submitted.checkbox("options[notify]", None, None, &attrs! {});
	let digest = submitted.checkbox("options[digest]", None, Some(true), &attrs! {});

	assert_eq!(title, "<input name=\"title\" type=\"text\" value=\"Typed title\">");
	assert_eq!(first_tag, "<input name=\"tags[]\" type=\"text\" value=\"rust\">");
	assert_eq!(second_tag, "<input name=\"tags[]\" type=\"text\" value=\"web\">");
	assert!(category.as_str().contains("<option value=\"2\" selected=\"selected\">Guides</option>"));
	assert!(!category.as_str().contains("<option value=\"3\" selected"));
	assert!(notify.as_str().contains("checked=\"checked\""));
	assert!(!digest.as_str().contains("checked"));
}

#[rstest]
fn test_model_form_uses_accessor(mut form: FormBuilder) {
	let post: Arc<dyn FormModel> = Arc::new(Post {
		title: "Model title".to_string(),
		published_at: "2024-05-01 10:00:00",
	});

	form.model(post, &attrs! { "method" => "PATCH", "url" => "posts/12" }).unwrap();
	let title = form.text("title", None, &attrs! {});
	let published = form.date("published_at", None::<TemporalValue>, &attrs! {});
	let category = form.radio("category", Some(json!("3")), None, &attrs! {});

	assert_eq!(title, "<input name=\"title\" type=\"text\" value=\"Model title\">");
	assert_eq!(
		published,
		"<input name=\"published_at\" type=\"date\" value=\"2024-05-01\">"
	);
	assert!(category.as_str().contains("checked=\"checked\""));
}

#[rstest]
fn test_close_forgets_labels_and_model(mut form: FormBuilder) {
	form.model(json!({"name": "Jane"}), &attrs! {}).unwrap();
	form.label("name", None, &attrs! {}, true);
	assert_eq!(
		form.text("name", None, &attrs! {}),
		"<input name=\"name\" type=\"text\" value=\"Jane\" id=\"name\">"
	);

	assert_eq!(form.close(), "</form>");

	assert_eq!(form.text("name", None, &attrs! {}), "<input name=\"name\" type=\"text\">");
}

#[rstest]
fn test_settings_from_file_drive_field_names() {
	use std::io::Write;

	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "method_field = \"_verb\"\ntoken_field = \"csrf\"\ntextarea_rows = 3").unwrap();
	let settings = HtmlSettings::from_file(file.path()).unwrap();
	let mut form = FormBuilder::new(urls(), Some("t0k".to_string())).with_settings(settings);

	// Act
	let open = form.open(&attrs! { "method" => "DELETE" }).unwrap();
	let textarea = form.textarea("body", None, &attrs! {});

	// Assert
	assert!(open.as_str().ends_with(concat!(
		"<input name=\"_verb\" type=\"hidden\" value=\"DELETE\">",
		"<input name=\"csrf\" type=\"hidden\" value=\"t0k\">"
	)));
	assert_eq!(textarea, "<textarea name=\"body\" cols=\"50\" rows=\"3\"></textarea>");
}

#[rstest]
fn test_dynamic_dispatch(mut form: FormBuilder) {
	form.register_macro("honeypot", |args: &[Value]| {
		let name = args.first().and_then(Value::as_str).unwrap_or("website");
		HtmlString::new(format!("<input name=\"{}\" type=\"text\" hidden>", name))
	});

	assert_eq!(
		form.call("honeypot", &[json!("url")]).unwrap(),
		"<input name=\"url\" type=\"text\" hidden>"
	);
	assert_eq!(
		form.call("search", &[json!("q"), Value::Null, json!({"placeholder": "Search"})])
			.unwrap(),
		"<input placeholder=\"Search\" name=\"q\" type=\"search\">"
	);
	assert!(matches!(
		form.call("carousel", &[]),
		Err(HtmlError::UnknownMethod(_))
	));
}
