use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// An ordered tuple of consecutive tokens.
///
/// Two n-grams are equal iff their tokens are equal element-wise.
/// Displays as its tokens joined with single spaces.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NGram(Vec<String>);

impl NGram {
	pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
		Self(tokens.iter().map(|t| t.as_ref().to_owned()).collect())
	}

	pub fn tokens(&self) -> &[String] {
		&self.0
	}

	/// Number of tokens (the `n` of the n-gram).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join(" "))
	}
}

/// One entry of a most-common ranking.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RankedNGram {
	pub ngram: NGram,
	pub count: usize,
}

impl fmt::Display for RankedNGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "'{}' appears {} times.", self.ngram, self.count)
	}
}

/// Frequency table of the sliding n-grams of a token sequence.
///
/// # Responsibilities
/// - Count every window of `n` consecutive tokens (overlapping windows included)
/// - Remember the order in which each distinct n-gram was first seen
/// - Rank entries by descending count, ties in first-seen order
///
/// # Invariants
/// - Every key has exactly `n` tokens
/// - Every count is >= 1
/// - Iteration order of `counts` is first-occurrence order
#[derive(Clone, Debug, Default)]
pub struct NGramTable {
	/// Window length
	n: usize,

	/// Count per distinct n-gram, in first-occurrence order
	counts: IndexMap<NGram, usize>,
}

impl NGramTable {
	/// Counts every window of `n` consecutive tokens.
	///
	/// # Notes
	/// - `n == 0` counts nothing: zero-length windows are not n-grams.
	/// - `n > tokens.len()` counts nothing.
	/// - Neither case is an error; the table is simply empty.
	pub fn count<S: AsRef<str>>(tokens: &[S], n: usize) -> Self {
		let mut table = Self { n, counts: IndexMap::new() };
		if n == 0 || n > tokens.len() {
			return table;
		}

		for window in tokens.windows(n) {
			*table.counts.entry(NGram::new(window)).or_insert(0) += 1;
		}
		table
	}

	/// Window length the table was built with.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Occurrences of `tokens`, 0 if never seen.
	pub fn get<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
		self.counts.get(&NGram::new(tokens)).copied().unwrap_or(0)
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Number of windows counted, i.e. the sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(ngram, count)` in first-occurrence order.
	pub fn iter(&self) -> impl Iterator<Item = (&NGram, usize)> {
		self.counts.iter().map(|(ngram, count)| (ngram, *count))
	}

	/// Returns the `k` most frequent n-grams, highest count first.
	///
	/// # Notes
	/// - Equal counts keep first-occurrence order (stable sort over an
	///   insertion-ordered map).
	/// - `k` larger than `len()` returns every entry; `k == 0` returns none.
	pub fn most_common(&self, k: usize) -> Vec<RankedNGram> {
		let mut entries: Vec<(&NGram, usize)> = self.iter().collect();
		entries.sort_by(|a, b| b.1.cmp(&a.1));

		entries
			.into_iter()
			.take(k)
			.map(|(ngram, count)| RankedNGram { ngram: ngram.clone(), count })
			.collect()
	}
}
