//! Frequent word-sequence analysis for PDF documents.
//!
//! This crate provides the whole analysis pipeline including:
//! - PDF text extraction (page by page, best effort)
//! - Text normalization to lowercase letters and single spaces
//! - Dictionary loading and dictionary-based word filtering
//! - Sliding n-gram counting with deterministic most-common ranking
//!
//! Stages report progress through an injected [`DiagnosticSink`] and hand
//! recovered failures back as an [`Outcome`] so the caller decides whether
//! a failed read is fatal.

/// Text-level stages: normalizer, dictionary, word filter and n-gram table.
pub mod analysis;

/// Diagnostic sinks handed to every stage instead of a global logger.
pub mod diagnostics;

/// Error type shared by all stages.
pub mod error;

/// PDF text extraction.
pub mod extract;

/// Stage result carrying recovered failures.
pub mod outcome;

/// End-to-end analysis over a PDF and a dictionary file.
pub mod pipeline;

/// I/O utilities (whole-file reads).
///
/// Not exposed
pub(crate) mod io;

pub use analysis::dictionary::Dictionary;
pub use analysis::filter::filter_words;
pub use analysis::ngram_table::{NGram, NGramTable, RankedNGram};
pub use analysis::normalizer::normalize;
pub use diagnostics::{DiagnosticSink, LogSink, MemorySink, SilentSink};
pub use error::{Error, Result};
pub use extract::{ExtractedText, PdfExtractor, TextExtractor};
pub use outcome::Outcome;
pub use pipeline::{AnalysisConfig, Analyzer, FailurePolicy, Report};
