//! Paginated, sortable data views for Reinhardt
//!
//! This crate holds the request-scoped state behind listing pages and the
//! widgets that turn it into links and markup.
//!
//! # Features
//!
//! - **Pagination**: [`PageState`] computes offsets, limits and page counts;
//!   [`LinkPager`] builds the numbered page window, edge buttons and rel links
//! - **Sorting**: [`SortState`] tracks the active orderings parsed from
//!   `?sort=-age,name`; [`LinkSorter`] builds the toggle links
//! - **Views**: [`GridView`], [`ListView`] and [`DetailView`] render rows
//!   through [`Column`]s and [`CellRenderer`]s
//! - **Settings**: parameter names and defaults loaded from TOML
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     Q[Query parameters] --> P[PageState]
//!     Q --> S[SortState]
//!     P --> LP[LinkPager]
//!     S --> LS[LinkSorter]
//!     LP --> U[UrlGenerator]
//!     LS --> U
//!     LP --> G[GridView / ListView]
//!     LS --> G
//!     C[Columns] --> G
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use reinhardt_tables::{LinkPager, PageState, PaginationSettings, UrlContext};
//! use reinhardt_urls::UrlReverser;
//!
//! let mut reverser = UrlReverser::new();
//! reverser.register_path("users", "/users/");
//! let reverser = reverser.with_current_route("users");
//!
//! let query = HashMap::from([("page".to_string(), "2".to_string())]);
//! let mut state = PageState::from_query(&query, &PaginationSettings::default()).unwrap();
//! state.set_total_count(35);
//!
//! let pager = LinkPager::new();
//! let buttons = pager
//!     .build_page_buttons(&state, &UrlContext::from_reverser(&reverser))
//!     .unwrap();
//! assert_eq!(buttons.len(), 6);
//! assert_eq!(buttons[2].url, "/users/?page=2&pagesize=10");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod context;
pub mod detail;
pub mod error;
pub mod grid;
pub mod html;
pub mod id;
pub mod layout;
pub mod list;
pub mod pager;
pub mod pagination;
pub mod settings;
pub mod sorter;
pub mod sorting;

// Re-exports for convenience
pub use column::{
	ActionColumn, CellRenderer, CheckboxColumn, Column, DataColumn, RadioButtonColumn, SerialColumn,
};
pub use context::{RenderContext, UrlContext};
pub use detail::DetailView;
pub use error::{Result, TableError};
pub use grid::GridView;
pub use html::{AttrValue, AttributeMap, Tag};
pub use id::IdGenerator;
pub use list::ListView;
pub use pager::{ButtonKind, LinkPager, PageButton, Rel};
pub use pagination::PageState;
pub use settings::{PaginationSettings, SortSettings, TableSettings};
pub use sorter::{LinkSorter, SortLink};
pub use sorting::{OrderBy, SortAttribute, SortDirection, SortState};
