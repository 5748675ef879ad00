use crate::error::{Error, Result};

/// Value produced by a stage together with the failures recovered while
/// producing it.
///
/// A stage that hits a read error still hands back a usable value (an
/// empty dictionary, the pages that did extract). Keeping the failures
/// next to the value lets the caller tell "legitimately empty" apart from
/// "empty because loading failed".
///
/// # Invariants
/// - A complete outcome has no failures
#[derive(Debug)]
pub struct Outcome<T> {
	value: T,
	failures: Vec<Error>,
}

impl<T> Outcome<T> {
	/// A value produced without any failure.
	pub fn complete(value: T) -> Self {
		Self { value, failures: Vec::new() }
	}

	/// A fallback value produced after a single failure.
	pub fn degraded(value: T, failure: Error) -> Self {
		Self { value, failures: vec![failure] }
	}

	/// A value produced after any number of failures (possibly none).
	pub fn with_failures(value: T, failures: Vec<Error>) -> Self {
		Self { value, failures }
	}

	pub fn value(&self) -> &T {
		&self.value
	}

	pub fn failures(&self) -> &[Error] {
		&self.failures
	}

	/// Returns `true` if at least one failure was recovered.
	pub fn is_degraded(&self) -> bool {
		!self.failures.is_empty()
	}

	pub fn into_parts(self) -> (T, Vec<Error>) {
		(self.value, self.failures)
	}

	/// Strict view of the outcome.
	///
	/// # Errors
	/// Returns the first recovered failure, dropping the fallback value.
	pub fn into_result(self) -> Result<T> {
		match self.failures.into_iter().next() {
			Some(failure) => Err(failure),
			None => Ok(self.value),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page_error(page: u32) -> Error {
		Error::Page { page, message: "bad content stream".to_owned() }
	}

	#[test]
	fn complete_outcome_is_ok() {
		let outcome = Outcome::complete(42);
		assert!(!outcome.is_degraded());
		assert_eq!(outcome.into_result().unwrap(), 42);
	}

	#[test]
	fn degraded_outcome_keeps_fallback_value() {
		let outcome = Outcome::degraded(String::new(), page_error(2));
		assert!(outcome.is_degraded());
		assert_eq!(outcome.value(), "");
		assert_eq!(outcome.failures().len(), 1);
	}

	#[test]
	fn into_result_returns_first_failure() {
		let outcome = Outcome::with_failures("partial", vec![page_error(3), page_error(7)]);
		match outcome.into_result() {
			Err(Error::Page { page, .. }) => assert_eq!(page, 3),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn empty_failure_list_is_complete() {
		let (value, failures) = Outcome::with_failures(vec![1, 2], Vec::new()).into_parts();
		assert_eq!(value, vec![1, 2]);
		assert!(failures.is_empty());
	}
}
