use crate::component::ViewError;
use crate::url::UrlError;

/// Errors raised while building markup
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
	#[error("Expected a list or mapping, got {0}")]
	NotIterable(&'static str),

	#[error("Description list entry [{key}] must hold scalars, got {found}")]
	NotScalar { key: String, found: &'static str },

	#[error("Method {0} does not exist.")]
	UnknownMethod(String),

	#[error("View error: {0}")]
	View(#[from] ViewError),

	#[error("URL error: {0}")]
	Url(#[from] UrlError),
}

pub type HtmlResult<T> = Result<T, HtmlError>;
