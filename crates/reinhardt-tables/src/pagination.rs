//! Pagination state for tables
//!
//! [`PageState`] tracks the current page, the page size and the total item
//! count of a single request, and derives the query window (offset/limit)
//! and the number of pages from them.

use crate::error::{Result, TableError};
use crate::settings::PaginationSettings;
use std::collections::HashMap;

/// Pagination state for one request
///
/// Page numbers are 1-indexed. Setters reject out-of-range values instead
/// of clamping them; use [`PageState::from_query`] for untrusted input.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::pagination::PageState;
///
/// let mut state = PageState::new();
/// state.set_page_size(20).unwrap();
/// state.set_current_page(3).unwrap();
/// state.set_total_count(95);
///
/// assert_eq!(state.offset(), 40);
/// assert_eq!(state.limit(), 20);
/// assert_eq!(state.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
	current_page: usize,
	page_size: usize,
	total_count: usize,
	page_param: String,
	page_size_param: String,
}

impl Default for PageState {
	fn default() -> Self {
		Self {
			current_page: 1,
			page_size: 10,
			total_count: 0,
			page_param: "page".to_string(),
			page_size_param: "pagesize".to_string(),
		}
	}
}

impl PageState {
	/// Creates a state on page 1 with 10 items per page and no items
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a state using the parameter names and default page size
	/// from `settings`
	pub fn from_settings(settings: &PaginationSettings) -> Result<Self> {
		let mut state = Self::new().with_param_names(
			settings.page_param.clone(),
			settings.page_size_param.clone(),
		);
		state.set_page_size(settings.default_page_size)?;
		Ok(state)
	}

	/// Builds the state for a request from its query parameters
	///
	/// Values that do not parse or are below 1 are ignored and the defaults
	/// are kept. Page sizes above `settings.page_size_limit` are lowered to
	/// the limit.
	pub fn from_query(
		query: &HashMap<String, String>,
		settings: &PaginationSettings,
	) -> Result<Self> {
		let mut state = Self::from_settings(settings)?;

		if let Some(raw) = query.get(&settings.page_size_param) {
			match raw.trim().parse::<usize>() {
				Ok(size) if size >= 1 => {
					let size = settings
						.page_size_limit
						.map_or(size, |limit| size.min(limit.max(1)));
					state.set_page_size(size)?;
				}
				_ => tracing::debug!(
					param = %settings.page_size_param,
					value = %raw,
					"ignoring invalid page size"
				),
			}
		}

		if let Some(raw) = query.get(&settings.page_param) {
			match raw.trim().parse::<usize>() {
				Ok(page) if page >= 1 => state.set_current_page(page)?,
				_ => tracing::debug!(
					param = %settings.page_param,
					value = %raw,
					"ignoring invalid page number"
				),
			}
		}

		Ok(state)
	}

	/// Sets the query parameter names for the page and the page size
	pub fn with_param_names(
		mut self,
		page_param: impl Into<String>,
		page_size_param: impl Into<String>,
	) -> Self {
		self.page_param = page_param.into();
		self.page_size_param = page_size_param.into();
		self
	}

	/// Sets the current page; fails when `page < 1`
	pub fn set_current_page(&mut self, page: usize) -> Result<()> {
		if page < 1 {
			return Err(TableError::validation("current_page", "must be at least 1"));
		}
		self.current_page = page;
		Ok(())
	}

	/// Sets the number of items per page; fails when `size < 1`
	pub fn set_page_size(&mut self, size: usize) -> Result<()> {
		if size < 1 {
			return Err(TableError::validation("page_size", "must be at least 1"));
		}
		self.page_size = size;
		Ok(())
	}

	/// Sets the total number of items; negative counts are treated as 0
	pub fn set_total_count(&mut self, count: i64) {
		self.total_count = usize::try_from(count).unwrap_or(0);
	}

	/// Current page number (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Number of items per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Total number of items
	pub fn total_count(&self) -> usize {
		self.total_count
	}

	/// Query parameter carrying the current page
	pub fn page_param(&self) -> &str {
		&self.page_param
	}

	/// Query parameter carrying the page size
	pub fn page_size_param(&self) -> &str {
		&self.page_size_param
	}

	/// Index of the first item on the current page (0-indexed)
	pub fn offset(&self) -> usize {
		self.page_size.saturating_mul(self.current_page - 1)
	}

	/// Maximum number of items on the current page
	pub fn limit(&self) -> usize {
		self.page_size
	}

	/// Returns the total number of pages
	pub fn total_pages(&self) -> usize {
		if self.total_count == 0 {
			0
		} else {
			self.total_count.div_ceil(self.page_size)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_defaults() {
		let state = PageState::new();
		assert_eq!(state.current_page(), 1);
		assert_eq!(state.page_size(), 10);
		assert_eq!(state.total_count(), 0);
		assert_eq!(state.total_pages(), 0);
		assert_eq!(state.offset(), 0);
		assert_eq!(state.page_param(), "page");
		assert_eq!(state.page_size_param(), "pagesize");
	}

	#[rstest]
	fn test_zero_is_rejected() {
		let mut state = PageState::new();
		assert!(matches!(
			state.set_current_page(0),
			Err(TableError::Validation { field, .. }) if field == "current_page"
		));
		assert!(matches!(
			state.set_page_size(0),
			Err(TableError::Validation { field, .. }) if field == "page_size"
		));
		assert!(state.set_current_page(1).is_ok());
		assert!(state.set_page_size(1).is_ok());
	}

	#[rstest]
	fn test_rejected_value_leaves_state_untouched() {
		let mut state = PageState::new();
		state.set_current_page(4).unwrap();
		let _ = state.set_current_page(0);
		assert_eq!(state.current_page(), 4);
	}

	#[rstest]
	#[case(-5, 0)]
	#[case(0, 0)]
	#[case(31, 4)]
	fn test_negative_total_count(#[case] count: i64, #[case] pages: usize) {
		let mut state = PageState::new();
		state.set_total_count(count);
		assert_eq!(state.total_pages(), pages);
	}

	#[rstest]
	fn test_from_query_reads_params() {
		let settings = PaginationSettings::default();
		let query = query(&[("page", "3"), ("pagesize", "25")]);
		let state = PageState::from_query(&query, &settings).unwrap();
		assert_eq!(state.current_page(), 3);
		assert_eq!(state.page_size(), 25);
	}

	#[rstest]
	#[case("0")]
	#[case("-2")]
	#[case("abc")]
	#[case("")]
	fn test_from_query_ignores_bad_values(#[case] raw: &str) {
		let settings = PaginationSettings::default();
		let query = query(&[("page", raw), ("pagesize", raw)]);
		let state = PageState::from_query(&query, &settings).unwrap();
		assert_eq!(state.current_page(), 1);
		assert_eq!(state.page_size(), 10);
	}

	#[rstest]
	fn test_from_query_applies_page_size_limit() {
		let settings = PaginationSettings {
			page_size_limit: Some(50),
			..Default::default()
		};
		let state = PageState::from_query(&query(&[("pagesize", "500")]), &settings).unwrap();
		assert_eq!(state.page_size(), 50);
	}

	#[rstest]
	fn test_from_settings_rejects_zero_default() {
		let settings = PaginationSettings {
			default_page_size: 0,
			..Default::default()
		};
		assert!(PageState::from_settings(&settings).is_err());
	}

	#[rstest]
	fn test_custom_param_names() {
		let settings = PaginationSettings {
			page_param: "p".to_string(),
			page_size_param: "per".to_string(),
			..Default::default()
		};
		let state = PageState::from_query(&query(&[("p", "2"), ("page", "9")]), &settings).unwrap();
		assert_eq!(state.current_page(), 2);
		assert_eq!(state.page_param(), "p");
		assert_eq!(state.page_size_param(), "per");
	}
}
