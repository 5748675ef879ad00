use std::path::Path;

use serde::Serialize;

use crate::analysis::dictionary::Dictionary;
use crate::analysis::filter::filter_words;
use crate::analysis::ngram_table::{NGramTable, RankedNGram};
use crate::analysis::normalizer::normalize;
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::extract::TextExtractor;
use crate::outcome::Outcome;

/// What to do with failures a stage recovered from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
	/// Keep going with the empty or partial value; failures end up in the report.
	#[default]
	Lenient,

	/// Stop at the first recovered failure.
	Strict,
}

/// Parameters of one analysis run.
///
/// # Notes
/// - `ngram_size == 0` and `top == 0` produce an empty ranking.
/// - `min_length == 0` keeps every dictionary word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
	/// Window length of the n-grams.
	pub ngram_size: usize,

	/// Number of ranked n-grams to keep.
	pub top: usize,

	/// Minimum character count of a retained word.
	pub min_length: usize,

	pub policy: FailurePolicy,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self { ngram_size: 3, top: 1, min_length: 3, policy: FailurePolicy::Lenient }
	}
}

impl AnalysisConfig {
	/// Builds a lenient config from possibly negative user input.
	///
	/// Negative values are clamped to 0, which means "empty result" for
	/// `ngram_size` and `top` and "no constraint" for `min_length`.
	pub fn from_signed(ngram_size: i64, top: i64, min_length: i64) -> Self {
		let clamp = |value: i64| usize::try_from(value).unwrap_or(0);
		Self {
			ngram_size: clamp(ngram_size),
			top: clamp(top),
			min_length: clamp(min_length),
			policy: FailurePolicy::Lenient,
		}
	}
}

/// Result of an analysis run.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
	/// Most frequent n-grams, highest count first.
	pub ngrams: Vec<RankedNGram>,

	pub ngram_size: usize,

	/// Characters of raw extracted text.
	pub extracted_chars: usize,

	/// Pages that yielded text.
	pub pages: usize,

	/// Distinct words in the dictionary.
	pub dictionary_words: usize,

	/// Tokens left after filtering.
	pub filtered_words: usize,

	/// Distinct n-grams found.
	pub distinct_ngrams: usize,

	/// Windows counted (sum of all n-gram counts).
	pub windows: usize,

	/// Messages of the failures recovered under the lenient policy.
	pub failures: Vec<String>,
}

/// Runs extraction, normalization, filtering and n-gram ranking.
///
/// The extractor and the diagnostic sink are injected so the whole
/// pipeline can run against in-memory fakes.
pub struct Analyzer<'a> {
	config: AnalysisConfig,
	extractor: &'a dyn TextExtractor,
	sink: &'a dyn DiagnosticSink,
}

impl<'a> Analyzer<'a> {
	pub fn new(config: AnalysisConfig, extractor: &'a dyn TextExtractor, sink: &'a dyn DiagnosticSink) -> Self {
		Self { config, extractor, sink }
	}

	pub fn config(&self) -> &AnalysisConfig {
		&self.config
	}

	/// Analyzes the document at `pdf_path` against the word list at
	/// `dictionary_path`.
	///
	/// # Errors
	/// Only under [`FailurePolicy::Strict`]: the first extraction or
	/// dictionary failure is returned. Under the lenient policy the run
	/// always completes and failures are listed in [`Report::failures`].
	pub fn run<P, D>(&self, pdf_path: P, dictionary_path: D) -> Result<Report>
	where
		P: AsRef<Path>,
		D: AsRef<Path>,
	{
		self.sink.info(format_args!("Starting analysis"));
		let mut failures = Vec::new();

		let extracted = self.accept(self.extractor.extract(pdf_path.as_ref(), self.sink), &mut failures)?;
		let dictionary = self.accept(Dictionary::load(dictionary_path, self.sink), &mut failures)?;

		let mut report = self.analyze_text(&extracted.text, &dictionary);
		report.pages = extracted.pages;
		report.failures = failures.iter().map(ToString::to_string).collect();

		self.sink.info(format_args!("Analysis completed"));
		Ok(report)
	}

	/// Runs the in-memory part of the pipeline on already extracted text.
	pub fn analyze_text(&self, text: &str, dictionary: &Dictionary) -> Report {
		let extracted_chars = text.chars().count();

		self.sink.info(format_args!("Cleaning {extracted_chars} characters of text"));
		let cleaned = normalize(text);
		self.sink.info(format_args!("Text cleaned: {} characters", cleaned.len()));

		self.sink.info(format_args!(
			"Filtering words: dictionary words of at least {} characters",
			self.config.min_length
		));
		let tokens = filter_words(&cleaned, dictionary, self.config.min_length);
		self.sink.info(format_args!("Filtering completed: {} words kept", tokens.len()));

		self.sink.info(format_args!("Counting sliding {}-grams", self.config.ngram_size));
		let table = NGramTable::count(&tokens, self.config.ngram_size);
		self.sink.info(format_args!("Counting completed: {} distinct n-grams", table.len()));

		Report {
			ngrams: table.most_common(self.config.top),
			ngram_size: self.config.ngram_size,
			extracted_chars,
			pages: 0,
			dictionary_words: dictionary.len(),
			filtered_words: tokens.len(),
			distinct_ngrams: table.len(),
			windows: table.total(),
			failures: Vec::new(),
		}
	}

	/// Applies the failure policy to a stage outcome.
	fn accept<T>(&self, outcome: Outcome<T>, failures: &mut Vec<Error>) -> Result<T> {
		match self.config.policy {
			FailurePolicy::Strict => outcome.into_result(),
			FailurePolicy::Lenient => {
				let (value, recovered) = outcome.into_parts();
				failures.extend(recovered);
				Ok(value)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::{MemorySink, SilentSink};
	use crate::extract::ExtractedText;
	use log::Level;

	struct NoExtractor;

	impl TextExtractor for NoExtractor {
		fn extract(&self, _path: &Path, _sink: &dyn DiagnosticSink) -> Outcome<ExtractedText> {
			Outcome::complete(ExtractedText::default())
		}
	}

	#[test]
	fn from_signed_clamps_negatives() {
		let config = AnalysisConfig::from_signed(-2, -1, -5);
		assert_eq!(config.ngram_size, 0);
		assert_eq!(config.top, 0);
		assert_eq!(config.min_length, 0);

		assert_eq!(AnalysisConfig::from_signed(3, 1, 3), AnalysisConfig::default());
	}

	#[test]
	fn analyze_text_ranks_bigrams() {
		let config = AnalysisConfig { ngram_size: 2, top: 1, min_length: 0, ..Default::default() };
		let analyzer = Analyzer::new(config, &NoExtractor, &SilentSink);
		let dictionary = Dictionary::from_text("le chat noir");

		let report = analyzer.analyze_text("Le chat NOIR; le chat.", &dictionary);

		assert_eq!(report.filtered_words, 5);
		assert_eq!(report.distinct_ngrams, 3);
		assert_eq!(report.windows, 4);
		assert_eq!(report.ngrams.len(), 1);
		assert_eq!(report.ngrams[0].to_string(), "'le chat' appears 2 times.");
	}

	#[test]
	fn analyze_text_logs_each_stage() {
		let sink = MemorySink::new();
		let analyzer = Analyzer::new(AnalysisConfig::default(), &NoExtractor, &sink);

		analyzer.analyze_text("", &Dictionary::default());

		let info = sink.messages(Level::Info);
		assert!(info.iter().any(|m| m.starts_with("Cleaning")));
		assert!(info.iter().any(|m| m.starts_with("Filtering completed: 0 words")));
		assert!(info.iter().any(|m| m.starts_with("Counting completed: 0 distinct")));
	}

	#[test]
	fn zero_top_and_zero_window_are_empty() {
		let dictionary = Dictionary::from_text("chat noir");
		let text = "chat noir chat noir";

		let zero_top = AnalysisConfig { top: 0, ..Default::default() };
		assert!(Analyzer::new(zero_top, &NoExtractor, &SilentSink).analyze_text(text, &dictionary).ngrams.is_empty());

		let zero_n = AnalysisConfig { ngram_size: 0, ..Default::default() };
		let report = Analyzer::new(zero_n, &NoExtractor, &SilentSink).analyze_text(text, &dictionary);
		assert!(report.ngrams.is_empty());
		assert_eq!(report.windows, 0);
	}
}
