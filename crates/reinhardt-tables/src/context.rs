//! Request-scoped context shared by pagers, sorters and columns

use crate::error::Result;
use crate::pager::LinkPager;
use crate::pagination::PageState;
use crate::sorter::{LinkSorter, serialize_orderings};
use crate::sorting::SortState;
use reinhardt_urls::{RouteMatcher, UrlError, UrlGenerator, UrlParams, UrlReverser};

/// Everything needed to generate URLs for the current request
///
/// Pass-through parameters (active filters and the like) are merged under
/// the widget's own parameters, so page and sort values always win.
pub struct UrlContext<'a> {
	generator: &'a dyn UrlGenerator,
	route_matcher: Option<&'a dyn RouteMatcher>,
	passthrough: UrlParams,
}

impl<'a> UrlContext<'a> {
	/// Creates a context without a route matcher or pass-through parameters
	pub fn new(generator: &'a dyn UrlGenerator) -> Self {
		Self {
			generator,
			route_matcher: None,
			passthrough: UrlParams::new(),
		}
	}

	/// Uses `reverser` both to generate URLs and to find the current route
	pub fn from_reverser(reverser: &'a UrlReverser) -> Self {
		Self::new(reverser).with_route_matcher(reverser)
	}

	/// Sets the matcher consulted when a widget has no explicit route
	pub fn with_route_matcher(mut self, matcher: &'a dyn RouteMatcher) -> Self {
		self.route_matcher = Some(matcher);
		self
	}

	/// Sets the parameters preserved across generated links
	pub fn with_passthrough(mut self, params: UrlParams) -> Self {
		self.passthrough = params;
		self
	}

	/// Parameters preserved across generated links
	pub fn passthrough(&self) -> &UrlParams {
		&self.passthrough
	}

	/// Resolves `explicit`, falling back to the current route
	pub fn resolve_route<'r>(&'r self, explicit: Option<&'r str>) -> Result<&'r str> {
		if let Some(route) = explicit {
			return Ok(route);
		}
		self.route_matcher
			.and_then(|m| m.current_route())
			.ok_or_else(|| UrlError::NoCurrentRoute.into())
	}

	/// Generates a URL for `route` (or the current route) with `params`
	/// layered over the pass-through parameters
	pub fn url(&self, route: Option<&str>, params: &UrlParams) -> Result<String> {
		let route = self.resolve_route(route)?;
		let mut merged = self.passthrough.clone();
		merged.merge(params);
		Ok(self.generator.generate(route, &merged)?)
	}

	/// Copy of this context with `params` layered over the pass-through
	/// parameters
	pub fn extend_passthrough(&self, params: &UrlParams) -> UrlContext<'a> {
		let mut passthrough = self.passthrough.clone();
		passthrough.merge(params);
		UrlContext {
			generator: self.generator,
			route_matcher: self.route_matcher,
			passthrough,
		}
	}
}

/// Context handed to columns and views while rendering
pub struct RenderContext<'a> {
	/// URL generation
	pub urls: UrlContext<'a>,
	/// Pagination state and pager, when the view is paginated
	pub pagination: Option<(&'a PageState, &'a LinkPager)>,
	/// Sort state and sorter, when the view is sortable
	pub sort: Option<(&'a SortState, &'a LinkSorter)>,
}

impl<'a> RenderContext<'a> {
	/// Creates a context without pagination or sorting
	pub fn new(urls: UrlContext<'a>) -> Self {
		Self {
			urls,
			pagination: None,
			sort: None,
		}
	}

	/// Attaches pagination
	pub fn with_pagination(mut self, state: &'a PageState, pager: &'a LinkPager) -> Self {
		self.pagination = Some((state, pager));
		self
	}

	/// Attaches sorting
	pub fn with_sort(mut self, state: &'a SortState, sorter: &'a LinkSorter) -> Self {
		self.sort = Some((state, sorter));
		self
	}

	/// Page state, if paginated
	pub fn page_state(&self) -> Option<&'a PageState> {
		self.pagination.map(|(state, _)| state)
	}

	/// Sort state, if sortable
	pub fn sort_state(&self) -> Option<&'a SortState> {
		self.sort.map(|(state, _)| state)
	}

	/// URL context for page links
	///
	/// Carries the active orderings so paging keeps the sort. The pager's
	/// own parameters still win over it.
	pub fn pager_urls(&self) -> UrlContext<'a> {
		let mut params = UrlParams::new();
		if let Some(state) = self.sort_state()
			&& !state.active_orderings().is_empty()
		{
			let value = serialize_orderings(state.active_orderings(), state.separator());
			params.insert(state.sort_param(), value);
		}
		self.urls.extend_passthrough(&params)
	}
}
