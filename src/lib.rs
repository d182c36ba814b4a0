//! # Reinhardt Data Views
//!
//! Paginated, sortable listing pages for Reinhardt applications.
//!
//! The request's query parameters become a [`PageState`](tables::PageState)
//! and a [`SortState`](tables::SortState); a
//! [`LinkPager`](tables::LinkPager) and a [`LinkSorter`](tables::LinkSorter)
//! turn them into navigation links through a named-route
//! [`UrlGenerator`](urls::UrlGenerator); grid and list views place rows,
//! pager and sorter into markup.
//!
//! ## Feature Flags
//!
//! - `minimal` - URL generation only
//! - `tables` - Pagination, sorting, columns and views
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_dataview::prelude::*;
//! use std::collections::HashMap;
//!
//! let mut reverser = UrlReverser::new();
//! reverser.register_path("users", "/users/");
//! let reverser = reverser.with_current_route("users");
//!
//! let query = HashMap::from([
//!     ("page".to_string(), "2".to_string()),
//!     ("sort".to_string(), "-age".to_string()),
//! ]);
//! let settings = TableSettings::default();
//!
//! let mut page = PageState::from_query(&query, &settings.pagination).unwrap();
//! page.set_total_count(42);
//!
//! let mut sort = SortState::from_settings(&settings.sorting);
//! sort.register_attributes([SortAttribute::new("age"), SortAttribute::new("name")]);
//! sort.apply_query(&query);
//!
//! let pager = LinkPager::from_settings(&settings.pagination);
//! let sorter = LinkSorter::new();
//! let urls = UrlContext::from_reverser(&reverser);
//!
//! let link = sorter.build_sort_link("age", &sort, Some(&page), &urls).unwrap();
//! assert_eq!(link.url, "/users/?page=2&pagesize=10&sort=age");
//!
//! let rel = pager.build_rel_links(&page, &urls).unwrap();
//! assert_eq!(rel[&Rel::Next], "/users/?page=3&pagesize=10");
//! ```

#[cfg(feature = "tables")]
pub mod tables;
pub mod urls;

// Re-export URL generation
pub use reinhardt_urls::{
	FixedRoute, ParamValue, RouteMatcher, UrlError, UrlGenerator, UrlParams, UrlReverser,
};

// Re-export data views
#[cfg(feature = "tables")]
pub use reinhardt_tables::{
	ActionColumn, CellRenderer, CheckboxColumn, Column, DataColumn, DetailView, GridView,
	IdGenerator, LinkPager, LinkSorter, ListView, OrderBy, PageState, RadioButtonColumn,
	RenderContext, SerialColumn, SortAttribute, SortDirection, SortState, TableError,
	TableSettings, UrlContext,
};

/// Prelude module for convenient imports
///
/// Import everything needed to build a listing page:
///
/// ```rust
/// use reinhardt_dataview::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{RouteMatcher, UrlGenerator, UrlParams, UrlReverser};

	#[cfg(feature = "tables")]
	pub use crate::{
		ActionColumn, CellRenderer, CheckboxColumn, Column, DataColumn, DetailView, GridView,
		IdGenerator, LinkPager, LinkSorter, ListView, OrderBy, PageState, RadioButtonColumn,
		RenderContext, SerialColumn, SortAttribute, SortDirection, SortState, TableError,
		TableSettings, UrlContext,
	};

	#[cfg(feature = "tables")]
	pub use reinhardt_tables::{AttributeMap, PaginationSettings, Rel, SortSettings};
}
