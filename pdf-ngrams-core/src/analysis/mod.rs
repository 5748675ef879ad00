//! Text-level stages of the analysis.
//!
//! In pipeline order:
//! - Normalization of raw text (`normalizer`)
//! - The closed word list used for filtering (`dictionary`)
//! - Dictionary and length based filtering (`filter`)
//! - Sliding n-gram counting and ranking (`ngram_table`)

/// Maps arbitrary text to lowercase ASCII letters separated by single spaces.
pub mod normalizer;

/// Set of valid words, loaded once from a word-list file.
///
/// Words go through the same normalizer as the document text so both
/// sides compare in the same form.
pub mod dictionary;

/// Order-preserving token filter.
pub mod filter;

/// Frequency table of sliding n-grams.
///
/// Remembers first-occurrence order so that ranking ties resolve
/// deterministically.
pub mod ngram_table;
