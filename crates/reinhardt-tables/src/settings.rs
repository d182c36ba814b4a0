//! Settings for pagination and sorting
//!
//! Settings are plain serde structs so they can be embedded in a project's
//! configuration file. Every field has a default, so an empty document
//! yields the stock parameter names and limits.
//!
//! ```toml
//! [pagination]
//! page_param = "p"
//! default_page_size = 25
//! page_size_limit = 100
//!
//! [sorting]
//! multi_sort = true
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Top-level settings for data views
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Pagination settings
	pub pagination: PaginationSettings,
	/// Sorting settings
	pub sorting: SortSettings,
}

impl TableSettings {
	/// Parses settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::settings::TableSettings;
	///
	/// let settings = TableSettings::from_toml_str("[sorting]\nmulti_sort = true\n").unwrap();
	/// assert!(settings.sorting.multi_sort);
	/// assert_eq!(settings.pagination.page_param, "page");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}
}

/// Pagination settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Query parameter carrying the current page
	pub page_param: String,
	/// Query parameter carrying the page size
	pub page_size_param: String,
	/// Page size used when the request does not specify one
	pub default_page_size: usize,
	/// Upper bound applied to page sizes read from a request
	pub page_size_limit: Option<usize>,
	/// Maximum number of numbered page buttons
	pub max_button_count: usize,
	/// Hide the pager when there is at most one page
	pub hide_on_single_page: bool,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			page_param: "page".to_string(),
			page_size_param: "pagesize".to_string(),
			default_page_size: 10,
			page_size_limit: None,
			max_button_count: 10,
			hide_on_single_page: true,
		}
	}
}

/// Sorting settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSettings {
	/// Query parameter carrying the sort string
	pub sort_param: String,
	/// Separator between attributes in the sort string
	///
	/// Sortable attribute names must not contain it.
	pub separator: String,
	/// Allow more than one active ordering
	pub multi_sort: bool,
}

impl Default for SortSettings {
	fn default() -> Self {
		Self {
			sort_param: "sort".to_string(),
			separator: ",".to_string(),
			multi_sort: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TableError;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_yields_defaults() {
		let settings = TableSettings::from_toml_str("").unwrap();
		assert_eq!(settings, TableSettings::default());
		assert_eq!(settings.pagination.page_size_param, "pagesize");
		assert_eq!(settings.sorting.separator, ",");
	}

	#[rstest]
	fn test_partial_sections() {
		let source = r#"
[pagination]
page_param = "p"
page_size_limit = 50
hide_on_single_page = false
"#;
		let settings = TableSettings::from_toml_str(source).unwrap();
		assert_eq!(settings.pagination.page_param, "p");
		assert_eq!(settings.pagination.page_size_limit, Some(50));
		assert!(!settings.pagination.hide_on_single_page);
		assert_eq!(settings.pagination.default_page_size, 10);
		assert_eq!(settings.sorting, SortSettings::default());
	}

	#[rstest]
	fn test_invalid_document() {
		let result = TableSettings::from_toml_str("[pagination]\nmax_button_count = \"ten\"\n");
		assert!(matches!(result, Err(TableError::Settings(_))));
	}
}
