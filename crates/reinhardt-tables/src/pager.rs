//! Page links for paginated views
//!
//! [`LinkPager`] computes the window of numbered page buttons around the
//! current page, the first/prev/next/last edge buttons, and the `self`,
//! `first`, `prev`, `next` and `last` rel links. Every URL carries the page
//! and page-size parameters layered over the request's pass-through
//! parameters.

use crate::context::UrlContext;
use crate::error::Result;
use crate::html::{AttributeMap, Tag};
use crate::pagination::PageState;
use crate::settings::PaginationSettings;
use indexmap::IndexMap;
use reinhardt_urls::UrlParams;

/// Computes the `(begin, end)` page window, both inclusive
///
/// The current page is centred in a window of `max_button_count` pages,
/// clamped to `[1, total_pages]`. With an even button count the extra slot
/// goes after the current page. When the window hits the last page it is
/// shifted back so its width is kept whenever enough pages exist. With no
/// pages at all the window is empty (`end < begin`).
///
/// # Examples
///
/// ```
/// use reinhardt_tables::pager::page_range;
///
/// assert_eq!(page_range(10, 20, 10), (6, 15));
/// assert_eq!(page_range(1, 5, 10), (1, 5));
/// assert_eq!(page_range(20, 20, 10), (11, 20));
/// ```
pub fn page_range(
	current_page: usize,
	total_pages: usize,
	max_button_count: usize,
) -> (usize, usize) {
	let max_button_count = max_button_count.max(1);
	let begin = current_page.saturating_sub((max_button_count - 1) / 2).max(1);
	let end = begin.saturating_add(max_button_count - 1).min(total_pages);
	(end.saturating_sub(max_button_count - 1).max(1), end)
}

/// What a page button points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
	/// Jump to the first page
	First,
	/// Previous page
	Prev,
	/// A numbered page inside the window
	Page(usize),
	/// Next page
	Next,
	/// Jump to the last page
	Last,
}

impl ButtonKind {
	fn css_class(&self) -> Option<&'static str> {
		match self {
			Self::First => Some("first"),
			Self::Prev => Some("prev"),
			Self::Page(_) => None,
			Self::Next => Some("next"),
			Self::Last => Some("last"),
		}
	}
}

/// One rendered page button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
	/// Button kind
	pub kind: ButtonKind,
	/// Page the button links to
	pub page: usize,
	/// Visible label
	pub label: String,
	/// Link target
	pub url: String,
	/// Whether the button is disabled
	pub disabled: bool,
	/// Whether the button is the current page
	pub active: bool,
}

/// Semantic navigation link names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rel {
	/// The current page
	SelfPage,
	/// The first page
	First,
	/// The previous page
	Prev,
	/// The next page
	Next,
	/// The last page
	Last,
}

impl Rel {
	/// Rel attribute value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::SelfPage => "self",
			Self::First => "first",
			Self::Prev => "prev",
			Self::Next => "next",
			Self::Last => "last",
		}
	}
}

/// Pager widget
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::context::UrlContext;
/// use reinhardt_tables::pager::LinkPager;
/// use reinhardt_tables::pagination::PageState;
/// use reinhardt_urls::UrlReverser;
///
/// let mut reverser = UrlReverser::new();
/// reverser.register_path("users", "/users/");
/// let reverser = reverser.with_current_route("users");
///
/// let mut state = PageState::new();
/// state.set_total_count(35);
/// state.set_current_page(2).unwrap();
///
/// let pager = LinkPager::new();
/// let urls = UrlContext::from_reverser(&reverser);
/// let buttons = pager.build_page_buttons(&state, &urls).unwrap();
///
/// // prev, 1..=4, next
/// assert_eq!(buttons.len(), 6);
/// assert_eq!(buttons[2].url, "/users/?page=2&pagesize=10");
/// assert!(buttons[2].active);
/// ```
#[derive(Debug, Clone)]
pub struct LinkPager {
	max_button_count: usize,
	hide_on_single_page: bool,
	disable_current_page_button: bool,
	first_page_label: Option<String>,
	prev_page_label: Option<String>,
	next_page_label: Option<String>,
	last_page_label: Option<String>,
	route: Option<String>,
	options: AttributeMap,
	link_container_class: String,
	link_class: String,
	active_class: String,
	disabled_class: String,
}

impl Default for LinkPager {
	fn default() -> Self {
		Self {
			max_button_count: 10,
			hide_on_single_page: true,
			disable_current_page_button: false,
			first_page_label: None,
			prev_page_label: Some("\u{ab}".to_string()),
			next_page_label: Some("\u{bb}".to_string()),
			last_page_label: None,
			route: None,
			options: AttributeMap::new().with("class", "pagination"),
			link_container_class: "page-item".to_string(),
			link_class: "page-link".to_string(),
			active_class: "active".to_string(),
			disabled_class: "disabled".to_string(),
		}
	}
}

impl LinkPager {
	/// Creates a pager with ten buttons, prev/next labels and no first/last
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a pager using the button count and visibility from `settings`
	pub fn from_settings(settings: &PaginationSettings) -> Self {
		Self::new()
			.max_button_count(settings.max_button_count)
			.hide_on_single_page(settings.hide_on_single_page)
	}

	/// Sets the maximum number of numbered buttons (at least 1)
	pub fn max_button_count(mut self, count: usize) -> Self {
		self.max_button_count = count.max(1);
		self
	}

	/// Hides the pager when there is at most one page
	pub fn hide_on_single_page(mut self, hide: bool) -> Self {
		self.hide_on_single_page = hide;
		self
	}

	/// Disables the button of the current page
	pub fn disable_current_page_button(mut self, disable: bool) -> Self {
		self.disable_current_page_button = disable;
		self
	}

	/// Label of the first-page button; `None` hides it
	pub fn first_page_label(mut self, label: Option<&str>) -> Self {
		self.first_page_label = label.map(str::to_string);
		self
	}

	/// Label of the previous-page button; `None` hides it
	pub fn prev_page_label(mut self, label: Option<&str>) -> Self {
		self.prev_page_label = label.map(str::to_string);
		self
	}

	/// Label of the next-page button; `None` hides it
	pub fn next_page_label(mut self, label: Option<&str>) -> Self {
		self.next_page_label = label.map(str::to_string);
		self
	}

	/// Label of the last-page button; `None` hides it
	pub fn last_page_label(mut self, label: Option<&str>) -> Self {
		self.last_page_label = label.map(str::to_string);
		self
	}

	/// Route used for page URLs instead of the current route
	pub fn route(mut self, route: impl Into<String>) -> Self {
		self.route = Some(route.into());
		self
	}

	/// Attributes merged into the `<ul>` element
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options.merge(&options);
		self
	}

	/// Class of each `<li>`
	pub fn link_container_class(mut self, class: impl Into<String>) -> Self {
		self.link_container_class = class.into();
		self
	}

	/// Class of each `<a>` or `<span>`
	pub fn link_class(mut self, class: impl Into<String>) -> Self {
		self.link_class = class.into();
		self
	}

	/// Configured maximum number of numbered buttons
	pub fn button_count(&self) -> usize {
		self.max_button_count
	}

	/// Window of numbered pages for `state`
	pub fn page_range(&self, state: &PageState) -> (usize, usize) {
		let range = page_range(state.current_page(), state.total_pages(), self.max_button_count);
		tracing::trace!(begin = range.0, end = range.1, "computed page window");
		range
	}

	/// URL of `page`, keeping the page size and the pass-through parameters
	pub fn create_url(
		&self,
		state: &PageState,
		page: usize,
		urls: &UrlContext<'_>,
	) -> Result<String> {
		let params = UrlParams::new()
			.with(state.page_param(), page)
			.with(state.page_size_param(), state.page_size());
		urls.url(self.route.as_deref(), &params)
	}

	/// Builds the edge and numbered buttons in display order
	///
	/// Returns an empty list when the pager is hidden for a single page.
	pub fn build_page_buttons(
		&self,
		state: &PageState,
		urls: &UrlContext<'_>,
	) -> Result<Vec<PageButton>> {
		let total_pages = state.total_pages();
		if total_pages < 2 && self.hide_on_single_page {
			return Ok(Vec::new());
		}

		let current = state.current_page();
		let at_start = current == 1;
		let at_end = current >= total_pages;
		let mut buttons = Vec::new();

		let mut push = |kind: ButtonKind, page, label: &str, disabled, active| -> Result<()> {
			buttons.push(PageButton {
				kind,
				page,
				label: label.to_string(),
				url: self.create_url(state, page, urls)?,
				disabled,
				active,
			});
			Ok(())
		};

		if let Some(label) = &self.first_page_label {
			push(ButtonKind::First, 1, label, at_start, false)?;
		}
		if let Some(label) = &self.prev_page_label {
			push(ButtonKind::Prev, current.saturating_sub(1).max(1), label, at_start, false)?;
		}

		let (begin, end) = self.page_range(state);
		for page in begin..=end {
			let active = page == current;
			push(
				ButtonKind::Page(page),
				page,
				&page.to_string(),
				self.disable_current_page_button && active,
				active,
			)?;
		}

		if let Some(label) = &self.next_page_label {
			let page = total_pages.min(current.saturating_add(1)).max(1);
			push(ButtonKind::Next, page, label, at_end, false)?;
		}
		if let Some(label) = &self.last_page_label {
			push(ButtonKind::Last, total_pages.max(1), label, at_end, false)?;
		}

		Ok(buttons)
	}

	/// Builds the rel links for `state`
	///
	/// `self` is always present; `first`/`prev` only after page 1 and
	/// `next`/`last` only before the last page.
	pub fn build_rel_links(
		&self,
		state: &PageState,
		urls: &UrlContext<'_>,
	) -> Result<IndexMap<Rel, String>> {
		let current = state.current_page();
		let total_pages = state.total_pages();
		let mut links = IndexMap::new();

		links.insert(Rel::SelfPage, self.create_url(state, current, urls)?);
		if current > 1 {
			links.insert(Rel::First, self.create_url(state, 1, urls)?);
			links.insert(Rel::Prev, self.create_url(state, current - 1, urls)?);
		}
		if current < total_pages {
			links.insert(Rel::Next, self.create_url(state, current + 1, urls)?);
			links.insert(Rel::Last, self.create_url(state, total_pages, urls)?);
		}

		Ok(links)
	}

	/// Renders the pager as `<nav><ul>`; empty when there is nothing to show
	pub fn render(&self, state: &PageState, urls: &UrlContext<'_>) -> Result<String> {
		let buttons = self.build_page_buttons(state, urls)?;
		if buttons.is_empty() {
			return Ok(String::new());
		}

		let items: String = buttons.iter().map(|b| self.render_button(b)).collect();
		let list = Tag::new("ul").attrs(&self.options).html(&items).render();
		Ok(Tag::new("nav").attr("aria-label", "Pagination").html(&list).render())
	}

	fn render_button(&self, button: &PageButton) -> String {
		let mut item = Tag::new("li").class(&self.link_container_class);
		if let Some(class) = button.kind.css_class() {
			item = item.class(class);
		}
		if button.active {
			item = item.class(&self.active_class).attr("aria-current", "page");
		}

		let inner = if button.disabled {
			item = item.class(&self.disabled_class);
			Tag::new("span")
				.class(&self.link_class)
				.text(&button.label)
				.render()
		} else {
			Tag::new("a")
				.class(&self.link_class)
				.attr("href", button.url.as_str())
				.attr("data-page", button.page.to_string())
				.text(&button.label)
				.render()
		};

		item.html(&inner).render()
	}
}
