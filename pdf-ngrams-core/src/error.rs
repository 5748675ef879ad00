use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures a stage can run into.
///
/// Under the lenient policy none of these stop the analysis: the stage
/// returns an empty or partial value and the error travels alongside it
/// in an [`Outcome`](crate::Outcome).
#[derive(Error, Debug)]
pub enum Error {
	/// The PDF could not be read, parsed or decrypted.
	#[error("failed to read PDF {}: {message}", .path.display())]
	Extraction { path: PathBuf, message: String },

	/// A single page failed; the remaining pages are still extracted.
	#[error("failed to extract text from page {page}: {message}")]
	Page { page: u32, message: String },

	/// The dictionary file is missing, unreadable or not UTF-8.
	#[error("failed to load dictionary {}: {source}", .path.display())]
	DictionaryLoad {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
