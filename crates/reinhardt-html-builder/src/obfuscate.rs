//! Randomized character-reference encoding
//!
//! Deters naive address harvesting. Every ASCII character is emitted as a
//! decimal reference, a hexadecimal reference or itself; markup-significant
//! characters are always encoded so the output decodes back to the input.

use rand::Rng;

/// Obfuscate `text` using the thread-local random number generator
///
/// The output differs between calls; decoding it always yields `text`.
///
/// # Examples
///
/// ```
/// use reinhardt_html_builder::obfuscate::obfuscate;
/// use reinhardt_html_core::escape::decode;
///
/// let encoded = obfuscate("someone@example.com");
/// assert_eq!(decode(&encoded), "someone@example.com");
/// ```
pub fn obfuscate(text: &str) -> String {
	obfuscate_with(text, &mut rand::rng())
}

/// Obfuscate `text` drawing choices from `rng`
///
/// Non-ASCII characters are passed through unchanged.
pub fn obfuscate_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
	let mut safe = String::with_capacity(text.len() * 6);

	for ch in text.chars() {
		if !ch.is_ascii() {
			safe.push(ch);
			continue;
		}

		let choices = if matches!(ch, '&' | '<' | '>' | '"' | '\'') {
			2
		} else {
			3
		};
		match rng.random_range(0..choices) {
			0 => safe.push_str(&format!("&#{};", ch as u32)),
			1 => safe.push_str(&format!("&#x{:x};", ch as u32)),
			_ => safe.push(ch),
		}
	}

	safe
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use reinhardt_html_core::escape::decode;
	use rstest::rstest;

	#[rstest]
	fn test_obfuscate_with_seed_is_reproducible() {
		let first = obfuscate_with("mailto:", &mut StdRng::seed_from_u64(7));
		let second = obfuscate_with("mailto:", &mut StdRng::seed_from_u64(7));
		assert_eq!(first, second);
	}

	#[rstest]
	fn test_obfuscate_encodes_some_characters() {
		let mut rng = StdRng::seed_from_u64(42);
		let encoded = obfuscate_with("a-rather-long-address@example.com", &mut rng);
		assert!(encoded.contains("&#"));
		assert_eq!(decode(&encoded), "a-rather-long-address@example.com");
	}

	#[rstest]
	fn test_obfuscate_always_encodes_markup_characters() {
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..50 {
			let encoded = obfuscate_with("<&>\"'", &mut rng);
			assert!(!encoded.contains(['<', '>', '"', '\'']));
			assert_eq!(decode(&encoded), "<&>\"'");
		}
	}

	#[rstest]
	fn test_obfuscate_passes_non_ascii_through() {
		let mut rng = StdRng::seed_from_u64(3);
		let encoded = obfuscate_with("jürgen", &mut rng);
		assert!(encoded.contains('ü'));
		assert_eq!(decode(&encoded), "jürgen");
	}

	#[rstest]
	fn test_obfuscate_empty() {
		assert_eq!(obfuscate(""), "");
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(100))]

		#[test]
		fn prop_obfuscate_round_trips_printable_ascii(text in "[ -~]{0,64}") {
			prop_assert_eq!(decode(&obfuscate(&text)), text);
		}
	}
}
