//! Data views module.
//!
//! This module provides pagination and sort state, the pager and sorter
//! widgets, and grid, list and detail views.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_dataview::tables::pager::page_range;
//!
//! assert_eq!(page_range(10, 20, 10), (6, 15));
//! ```

pub use reinhardt_tables::*;
