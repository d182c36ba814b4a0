//! Sort links for sortable views
//!
//! Clicking a sort link toggles the clicked attribute's direction
//! (DESC -> ASC, ASC -> DESC, unset -> the attribute's default). With
//! multi-sort the clicked attribute moves to the front while the other
//! active orderings keep their relative order.

use crate::context::UrlContext;
use crate::error::{Result, TableError};
use crate::html::{AttributeMap, Tag};
use crate::pagination::PageState;
use crate::sorting::{OrderBy, SortDirection, SortState};
use reinhardt_urls::UrlParams;

/// Orderings that become active when `attribute`'s link is clicked
///
/// Fails with [`TableError::Configuration`] when `attribute` is not
/// registered in `state`.
///
/// # Examples
///
/// ```
/// use reinhardt_tables::sorter::next_orderings;
/// use reinhardt_tables::sorting::{OrderBy, SortAttribute, SortState};
///
/// let mut state = SortState::new().with_multi_sort(true);
/// state.register_attributes([SortAttribute::new("age"), SortAttribute::new("name")]);
/// state.set_active_orderings([OrderBy::desc("age"), OrderBy::asc("name")]);
///
/// let next = next_orderings(&state, "name").unwrap();
/// assert_eq!(next, vec![OrderBy::desc("name"), OrderBy::desc("age")]);
/// ```
pub fn next_orderings(state: &SortState, attribute: &str) -> Result<Vec<OrderBy>> {
	let definition = state.attribute(attribute).ok_or_else(|| {
		TableError::Configuration(format!("unknown sort attribute: {}", attribute))
	})?;

	let direction = match state.active_direction(attribute) {
		Some(current) => current.toggle(),
		None => definition.default_direction(),
	};

	let mut orderings = vec![OrderBy::new(attribute, direction)];
	if state.multi_sort() {
		orderings.extend(
			state
				.active_orderings()
				.iter()
				.filter(|o| o.attribute != attribute)
				.cloned(),
		);
	}
	Ok(orderings)
}

/// Joins orderings into a sort string, `-` marking descending attributes
///
/// # Examples
///
/// ```
/// use reinhardt_tables::sorter::serialize_orderings;
/// use reinhardt_tables::sorting::OrderBy;
///
/// let value = serialize_orderings(&[OrderBy::desc("age"), OrderBy::asc("name")], ",");
/// assert_eq!(value, "-age,name");
/// ```
pub fn serialize_orderings(orderings: &[OrderBy], separator: &str) -> String {
	orderings
		.iter()
		.map(OrderBy::token)
		.collect::<Vec<_>>()
		.join(separator)
}

/// A generated sort link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortLink {
	/// Link target
	pub url: String,
	/// Direction currently applied to the attribute, for styling
	pub active_direction: Option<SortDirection>,
	/// Link text
	pub label: String,
	/// Sort string the link applies
	pub sort_value: String,
}

/// Sort link widget
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::context::UrlContext;
/// use reinhardt_tables::sorter::LinkSorter;
/// use reinhardt_tables::sorting::{SortAttribute, SortState};
/// use reinhardt_urls::UrlReverser;
///
/// let mut reverser = UrlReverser::new();
/// reverser.register_path("users", "/users/");
/// let reverser = reverser.with_current_route("users");
///
/// let mut state = SortState::new();
/// state.register_attributes([SortAttribute::new("name")]);
/// state.set_active_orderings_from_param("name");
///
/// let link = LinkSorter::new()
///     .build_sort_link("name", &state, None, &UrlContext::from_reverser(&reverser))
///     .unwrap();
/// assert_eq!(link.url, "/users/?sort=-name");
/// assert_eq!(link.active_direction.map(|d| d.as_str()), Some("asc"));
/// ```
#[derive(Debug, Clone)]
pub struct LinkSorter {
	route: Option<String>,
	attributes: Option<Vec<String>>,
	options: AttributeMap,
	link_options: AttributeMap,
}

impl Default for LinkSorter {
	fn default() -> Self {
		Self {
			route: None,
			attributes: None,
			options: AttributeMap::new().with("class", "sorter"),
			link_options: AttributeMap::new(),
		}
	}
}

impl LinkSorter {
	/// Creates a sorter linking every registered attribute
	pub fn new() -> Self {
		Self::default()
	}

	/// Route used for sort URLs instead of the current route
	pub fn route(mut self, route: impl Into<String>) -> Self {
		self.route = Some(route.into());
		self
	}

	/// Restricts [`render`](Self::render) to these attributes, in this order
	pub fn attributes<I, S>(mut self, attributes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.attributes = Some(attributes.into_iter().map(Into::into).collect());
		self
	}

	/// Attributes merged into the `<ul>` element
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options.merge(&options);
		self
	}

	/// Attributes merged into every `<a>` element
	pub fn link_options(mut self, options: AttributeMap) -> Self {
		self.link_options.merge(&options);
		self
	}

	/// Sort string applied by clicking `attribute`
	pub fn sort_value(&self, attribute: &str, sort_state: &SortState) -> Result<String> {
		let orderings = next_orderings(sort_state, attribute)?;
		let value = serialize_orderings(&orderings, sort_state.separator());
		tracing::trace!(attribute, sort = %value, "computed next sort value");
		Ok(value)
	}

	/// URL applying the next ordering for `attribute`
	///
	/// The current page and page size are kept unchanged.
	pub fn create_url(
		&self,
		attribute: &str,
		sort_state: &SortState,
		page_state: Option<&PageState>,
		urls: &UrlContext<'_>,
	) -> Result<String> {
		let value = self.sort_value(attribute, sort_state)?;
		self.url_for_value(&value, sort_state, page_state, urls)
	}

	fn url_for_value(
		&self,
		value: &str,
		sort_state: &SortState,
		page_state: Option<&PageState>,
		urls: &UrlContext<'_>,
	) -> Result<String> {
		let mut params = UrlParams::new();
		if let Some(page) = page_state {
			params.insert(page.page_param(), page.current_page());
			params.insert(page.page_size_param(), page.page_size());
		}
		params.insert(sort_state.sort_param(), value);
		urls.url(self.route.as_deref(), &params)
	}

	/// Builds the link for `attribute`
	pub fn build_sort_link(
		&self,
		attribute: &str,
		sort_state: &SortState,
		page_state: Option<&PageState>,
		urls: &UrlContext<'_>,
	) -> Result<SortLink> {
		let sort_value = self.sort_value(attribute, sort_state)?;
		let url = self.url_for_value(&sort_value, sort_state, page_state, urls)?;
		let label = sort_state
			.attribute(attribute)
			.map(|a| a.display_label())
			.unwrap_or_default();

		Ok(SortLink {
			url,
			active_direction: sort_state.active_direction(attribute),
			label,
			sort_value,
		})
	}

	/// Renders the `<a>` for `attribute`, optionally overriding its label
	pub fn render_link(
		&self,
		attribute: &str,
		label: Option<&str>,
		sort_state: &SortState,
		page_state: Option<&PageState>,
		urls: &UrlContext<'_>,
	) -> Result<String> {
		let link = self.build_sort_link(attribute, sort_state, page_state, urls)?;
		let mut tag = Tag::new("a")
			.attr("href", link.url.as_str())
			.attrs(&self.link_options);
		if let Some(direction) = link.active_direction {
			tag = tag.class(direction.as_str());
		}
		Ok(tag
			.attr("data-sort", link.sort_value.as_str())
			.text(label.unwrap_or(&link.label))
			.render())
	}

	/// Renders a `<ul>` with one link per attribute
	pub fn render(
		&self,
		sort_state: &SortState,
		page_state: Option<&PageState>,
		urls: &UrlContext<'_>,
	) -> Result<String> {
		let attributes: Vec<String> = match &self.attributes {
			Some(list) => list.clone(),
			None => sort_state
				.attribute_names()
				.into_iter()
				.map(str::to_string)
				.collect(),
		};

		let mut items = String::new();
		for attribute in &attributes {
			let link = self.render_link(attribute, None, sort_state, page_state, urls)?;
			items.push_str(&Tag::new("li").html(&link).render());
		}

		Ok(Tag::new("ul").attrs(&self.options).html(&items).render())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sorting::SortAttribute;
	use rstest::{fixture, rstest};

	#[fixture]
	fn state() -> SortState {
		let mut state = SortState::new();
		state.register_attributes([
			SortAttribute::new("age"),
			SortAttribute::new("name"),
			SortAttribute::new("created").with_default_direction(SortDirection::Desc),
		]);
		state
	}

	#[rstest]
	#[case(None, SortDirection::Asc)]
	#[case(Some("age"), SortDirection::Desc)]
	#[case(Some("-age"), SortDirection::Asc)]
	fn test_toggle(
		mut state: SortState,
		#[case] active: Option<&str>,
		#[case] expected: SortDirection,
	) {
		if let Some(param) = active {
			state.set_active_orderings_from_param(param);
		}
		assert_eq!(next_orderings(&state, "age").unwrap(), vec![OrderBy::new("age", expected)]);
	}

	#[rstest]
	fn test_default_direction_used_when_unset(state: SortState) {
		assert_eq!(next_orderings(&state, "created").unwrap(), vec![OrderBy::desc("created")]);
	}

	#[rstest]
	fn test_single_sort_replaces_other_attribute(mut state: SortState) {
		state.set_active_orderings_from_param("-age");
		assert_eq!(next_orderings(&state, "name").unwrap(), vec![OrderBy::asc("name")]);
	}

	#[rstest]
	fn test_multi_sort_promotes_clicked(state: SortState) {
		let mut state = state.with_multi_sort(true);
		state.set_active_orderings_from_param("name,-age,created");
		assert_eq!(
			next_orderings(&state, "age").unwrap(),
			vec![OrderBy::asc("age"), OrderBy::asc("name"), OrderBy::asc("created")]
		);
	}

	#[rstest]
	fn test_unknown_attribute_is_configuration_error(state: SortState) {
		let err = next_orderings(&state, "bogus").unwrap_err();
		assert!(matches!(err, TableError::Configuration(msg) if msg.contains("bogus")));
	}

	#[rstest]
	#[case(vec![], "")]
	#[case(vec![OrderBy::asc("a")], "a")]
	#[case(vec![OrderBy::desc("a"), OrderBy::asc("b")], "-a,b")]
	fn test_serialize(#[case] orderings: Vec<OrderBy>, #[case] expected: &str) {
		assert_eq!(serialize_orderings(&orderings, ","), expected);
	}
}
