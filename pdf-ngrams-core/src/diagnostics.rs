use std::cell::RefCell;
use std::fmt;

use log::Level;

/// Target used for every record forwarded to the `log` facade.
pub const LOG_TARGET: &str = "pdf_ngrams";

/// Receiver for the progress and failure messages of the pipeline stages.
///
/// Stages never configure or touch a global logger; they are handed a sink
/// instead. Tests pass a [`MemorySink`] to assert on diagnostics, or a
/// [`SilentSink`] to drop them.
pub trait DiagnosticSink {
	/// Records one message at the given level.
	fn emit(&self, level: Level, message: fmt::Arguments<'_>);

	fn info(&self, message: fmt::Arguments<'_>) {
		self.emit(Level::Info, message);
	}

	fn error(&self, message: fmt::Arguments<'_>) {
		self.emit(Level::Error, message);
	}
}

/// Forwards every message to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
	fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
		log::log!(target: LOG_TARGET, level, "{}", message);
	}
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
	fn emit(&self, _level: Level, _message: fmt::Arguments<'_>) {}
}

/// Keeps every message in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
	entries: RefCell<Vec<(Level, String)>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a copy of all recorded `(level, message)` pairs.
	pub fn entries(&self) -> Vec<(Level, String)> {
		self.entries.borrow().clone()
	}

	/// Returns the messages recorded at exactly `level`.
	pub fn messages(&self, level: Level) -> Vec<String> {
		self.entries
			.borrow()
			.iter()
			.filter(|(l, _)| *l == level)
			.map(|(_, message)| message.clone())
			.collect()
	}
}

impl DiagnosticSink for MemorySink {
	fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
		self.entries.borrow_mut().push((level, message.to_string()));
	}
}
