use std::collections::HashSet;
use std::path::Path;

use super::normalizer::normalize;
use crate::diagnostics::DiagnosticSink;
use crate::error::Error;
use crate::io::read_text;
use crate::outcome::Outcome;

/// Closed set of valid words.
///
/// # Invariants
/// - Every word is normalized: non-empty, lowercase ASCII letters only
/// - Words are unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
	words: HashSet<String>,
}

impl Dictionary {
	/// Builds a dictionary from in-memory text.
	///
	/// The text is normalized first, so punctuation, digits and line
	/// breaks all separate words.
	pub fn from_text(text: &str) -> Self {
		normalize(text).split_whitespace().map(str::to_owned).collect()
	}

	/// Loads a dictionary from a word-list file.
	///
	/// The file is read fully as UTF-8 and its handle released before the
	/// words are built.
	///
	/// # Notes
	/// - A missing, unreadable or non UTF-8 file yields an empty dictionary
	///   and a [`Error::DictionaryLoad`] failure; nothing passes the filter
	///   afterwards.
	pub fn load<P: AsRef<Path>>(path: P, sink: &dyn DiagnosticSink) -> Outcome<Self> {
		let path = path.as_ref();
		sink.info(format_args!("Loading dictionary from {}", path.display()));

		match read_text(path) {
			Ok(text) => {
				let dictionary = Self::from_text(&text);
				sink.info(format_args!("Dictionary loaded: {} distinct words", dictionary.len()));
				Outcome::complete(dictionary)
			}
			Err(source) => {
				let failure = Error::DictionaryLoad { path: path.to_owned(), source };
				sink.error(format_args!("{failure}"));
				Outcome::degraded(Self::default(), failure)
			}
		}
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Iterates over the words in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}
}

impl FromIterator<String> for Dictionary {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		Self { words: iter.into_iter().collect() }
	}
}
