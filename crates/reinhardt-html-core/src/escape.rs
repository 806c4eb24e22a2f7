//! HTML escaping and entity decoding
//!
//! Escaping is single-pass: special characters in raw content are encoded,
//! while character references that are already present (`&amp;`, `&#39;`,
//! `&#x27;`) are left untouched so that pre-escaped content is never
//! double-encoded.

/// Escape HTML special characters
///
/// Existing entity references are preserved as-is.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::escape::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;");
/// assert_eq!(escape("Fish &amp; Chips"), "Fish &amp; Chips");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for (idx, ch) in text.char_indices() {
		match ch {
			'&' if starts_with_reference(&text[idx..]) => result.push('&'),
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#039;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Whether `s` (which starts with `&`) opens a well-formed character reference.
fn starts_with_reference(s: &str) -> bool {
	let rest = &s[1..];
	let Some(end) = rest.find(';') else {
		return false;
	};
	let body = &rest[..end];

	if let Some(numeric) = body.strip_prefix('#') {
		return match numeric.strip_prefix(|c| c == 'x' || c == 'X') {
			Some(hex) => {
				!hex.is_empty() && hex.len() <= 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
			}
			None => {
				!numeric.is_empty()
					&& numeric.len() <= 7
					&& numeric.chars().all(|c| c.is_ascii_digit())
			}
		};
	}

	let mut chars = body.chars();
	matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
		&& body.len() <= 32
		&& chars.all(|c| c.is_ascii_alphanumeric())
}

/// Decode HTML entities back into characters
///
/// Handles the common named entities as well as decimal (`&#64;`) and
/// hexadecimal (`&#x40;`) character references. Unknown entities are kept
/// verbatim.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::escape::decode;
///
/// assert_eq!(decode("&lt;div&gt;"), "<div>");
/// assert_eq!(decode("&#102;&#x6f;o"), "foo");
/// assert_eq!(decode("&unknown;"), "&unknown;");
/// ```
pub fn decode(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(pos) = rest.find('&') {
		result.push_str(&rest[..pos]);
		let tail = &rest[pos..];
		match decode_reference(tail) {
			Some((ch, consumed)) => {
				result.push(ch);
				rest = &tail[consumed..];
			}
			None => {
				result.push('&');
				rest = &tail[1..];
			}
		}
	}

	result.push_str(rest);
	result
}

/// Decode the reference at the start of `s`, returning the character and the
/// number of bytes consumed.
fn decode_reference(s: &str) -> Option<(char, usize)> {
	let end = s[1..].find(';')? + 1;
	let body = &s[1..end];

	let ch = if let Some(numeric) = body.strip_prefix('#') {
		let code = match numeric.strip_prefix(|c| c == 'x' || c == 'X') {
			Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
				u32::from_str_radix(hex, 16).ok()?
			}
			Some(_) => return None,
			None if !numeric.is_empty() && numeric.chars().all(|c| c.is_ascii_digit()) => {
				numeric.parse::<u32>().ok()?
			}
			None => return None,
		};
		char::from_u32(code)?
	} else {
		match body {
			"amp" => '&',
			"lt" => '<',
			"gt" => '>',
			"quot" => '"',
			"apos" => '\'',
			"nbsp" => '\u{a0}',
			"copy" => '\u{a9}',
			"reg" => '\u{ae}',
			_ => return None,
		}
	};

	Some((ch, end + 1))
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_removes_markup_characters(s in "[^&]*") {
			let escaped = escape(&s);
			assert!(!escaped.contains('<'));
			assert!(!escaped.contains('>'));
			assert!(!escaped.contains('"'));
			assert!(!escaped.contains('\''));
		}

		#[test]
		fn prop_escape_is_idempotent(s in "\\PC*") {
			let once = escape(&s);
			assert_eq!(escape(&once), once);
		}

		#[test]
		fn prop_decode_without_ampersand_is_identity(s in "[^&]*") {
			assert_eq!(decode(&s), s);
		}
	}
}
