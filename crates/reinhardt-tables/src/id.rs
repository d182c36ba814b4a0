//! Element ID generation for widgets
//!
//! Widgets either take an explicit id or draw one from an [`IdGenerator`]
//! owned by the caller. There is no process-wide counter.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `{prefix}{n}` identifiers
///
/// # Examples
///
/// ```
/// use reinhardt_tables::id::IdGenerator;
///
/// let ids = IdGenerator::new();
/// assert_eq!(ids.next_id(), "w0");
/// assert_eq!(ids.next_id(), "w1");
///
/// ids.reset();
/// assert_eq!(ids.next_id(), "w0");
/// ```
#[derive(Debug)]
pub struct IdGenerator {
	prefix: String,
	counter: AtomicUsize,
}

impl IdGenerator {
	/// Default prefix
	pub const DEFAULT_PREFIX: &'static str = "w";

	/// Creates a generator using the `w` prefix
	pub fn new() -> Self {
		Self::with_prefix(Self::DEFAULT_PREFIX)
	}

	/// Creates a generator using `prefix`
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			counter: AtomicUsize::new(0),
		}
	}

	/// Returns the next identifier
	pub fn next_id(&self) -> String {
		let n = self.counter.fetch_add(1, Ordering::Relaxed);
		format!("{}{}", self.prefix, n)
	}

	/// Restarts numbering at zero
	pub fn reset(&self) {
		self.counter.store(0, Ordering::Relaxed);
	}
}

impl Default for IdGenerator {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_custom_prefix() {
		let ids = IdGenerator::with_prefix("grid-");
		assert_eq!(ids.next_id(), "grid-0");
		assert_eq!(ids.next_id(), "grid-1");
	}

	#[rstest]
	fn test_generators_are_independent() {
		let a = IdGenerator::new();
		let b = IdGenerator::new();
		a.next_id();
		a.next_id();
		assert_eq!(b.next_id(), "w0");
		assert_eq!(a.next_id(), "w2");
	}
}
