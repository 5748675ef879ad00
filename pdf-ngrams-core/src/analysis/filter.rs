use super::dictionary::Dictionary;

/// Keeps the dictionary words of at least `min_length` characters.
///
/// Splits `text` on whitespace and returns the retained tokens in the
/// order they appear, borrowed from `text`.
///
/// # Notes
/// - `min_length == 0` imposes no length constraint
/// - An empty dictionary or empty text yields no tokens
/// - Length is counted in characters, not bytes
///
/// # Example
///
/// ```
/// use pdf_ngrams_core::{filter_words, Dictionary};
///
/// let dictionary = Dictionary::from_text("le chat noir");
/// let kept = filter_words("le chat noir est sur la table", &dictionary, 3);
/// assert_eq!(kept, ["chat", "noir"]);
/// ```
pub fn filter_words<'a>(text: &'a str, dictionary: &Dictionary, min_length: usize) -> Vec<&'a str> {
	if dictionary.is_empty() {
		return Vec::new();
	}

	text.split_whitespace()
		.filter(|word| word.chars().count() >= min_length && dictionary.contains(word))
		.collect()
}
