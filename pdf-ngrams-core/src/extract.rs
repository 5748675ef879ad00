use std::path::Path;

use lopdf::Document;

use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::io::read_bytes;
use crate::outcome::Outcome;

/// Text pulled out of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
	/// Concatenated text of every page that extracted, in page order.
	pub text: String,

	/// Number of pages that contributed to `text`.
	pub pages: usize,
}

/// Source of document text.
///
/// Extraction is best effort: implementations never fail outright, they
/// return whatever text they could get together with the failures hit
/// on the way.
pub trait TextExtractor {
	fn extract(&self, path: &Path, sink: &dyn DiagnosticSink) -> Outcome<ExtractedText>;
}

/// Extracts text from PDF files with `lopdf`.
///
/// The file is read into memory (handle released before parsing) and its
/// pages are extracted one by one, so a broken page only costs that page.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
	/// Reads and parses the whole document.
	///
	/// # Errors
	/// [`Error::Extraction`] if the file cannot be read, is not a PDF, or is
	/// encrypted with a non-empty user password.
	fn load(path: &Path) -> Result<Document> {
		let failure = |message: String| Error::Extraction { path: path.to_owned(), message };

		let bytes = read_bytes(path).map_err(|e| failure(e.to_string()))?;
		let mut document = Document::load_mem(&bytes).map_err(|e| failure(e.to_string()))?;
		// permission-only encryption uses an empty user password
		if document.is_encrypted() {
			document
				.decrypt("")
				.map_err(|e| failure(format!("document is encrypted: {e}")))?;
		}
		Ok(document)
	}
}

impl TextExtractor for PdfExtractor {
	fn extract(&self, path: &Path, sink: &dyn DiagnosticSink) -> Outcome<ExtractedText> {
		sink.info(format_args!("Reading PDF file {}", path.display()));

		let document = match Self::load(path) {
			Ok(document) => document,
			Err(failure) => {
				sink.error(format_args!("{failure}"));
				return Outcome::degraded(ExtractedText::default(), failure);
			}
		};

		let mut extracted = ExtractedText::default();
		let mut failures = Vec::new();

		// get_pages() is keyed by page number, so this walks pages in order
		for page in document.get_pages().into_keys() {
			match document.extract_text(&[page]) {
				Ok(text) => {
					// keep the last word of a page apart from the first word of the next
					if !extracted.text.is_empty() && !extracted.text.ends_with(char::is_whitespace) {
						extracted.text.push('\n');
					}
					extracted.text.push_str(&text);
					extracted.pages += 1;
				}
				Err(e) => {
					let failure = Error::Page { page, message: e.to_string() };
					sink.error(format_args!("{failure}"));
					failures.push(failure);
				}
			}
		}

		sink.info(format_args!(
			"Text extraction completed: {} characters from {} pages",
			extracted.text.chars().count(),
			extracted.pages
		));
		Outcome::with_failures(extracted, failures)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostics::MemorySink;
	use log::Level;
	use std::fs;

	#[test]
	fn missing_file_yields_empty_text() {
		let dir = tempfile::tempdir().unwrap();
		let sink = MemorySink::new();

		let outcome = PdfExtractor.extract(&dir.path().join("absent.pdf"), &sink);

		assert_eq!(outcome.value(), &ExtractedText::default());
		assert!(matches!(outcome.failures(), [Error::Extraction { .. }]));
		assert_eq!(sink.messages(Level::Error).len(), 1);
	}

	#[test]
	fn corrupt_file_yields_empty_text() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("corrupt.pdf");
		fs::write(&path, b"this is not a pdf at all").unwrap();

		let outcome = PdfExtractor.extract(&path, &MemorySink::new());

		assert!(outcome.value().text.is_empty());
		assert!(outcome.is_degraded());
	}
}
