use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	/// Any run of characters that are not ASCII letters (whitespace included)
	static ref RE_NON_LETTERS: Regex = Regex::new(r"[^A-Za-z]+").unwrap();
}

/// Normalizes text to lowercase ASCII letters separated by single spaces.
///
/// - Digits, punctuation, symbols and non-ASCII letters act as separators
/// - Runs of separators collapse to one space
/// - No leading or trailing space is kept
///
/// # Example
///
/// ```
/// use pdf_ngrams_core::normalize;
///
/// assert_eq!(normalize("Le chat, 2 fois!\n  NOIR"), "le chat fois noir");
/// ```
pub fn normalize(text: &str) -> String {
	RE_NON_LETTERS
		.replace_all(text, " ")
		.trim()
		.to_ascii_lowercase()
}
