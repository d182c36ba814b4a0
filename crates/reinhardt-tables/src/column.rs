//! Grid columns
//!
//! A column renders one header cell, one body cell per row and an optional
//! footer cell. Cell content comes from a [`CellRenderer`], which is either a
//! closure or any type implementing the trait.

use crate::context::RenderContext;
use crate::error::Result;
use crate::html::{AttributeMap, Tag, escape};
use crate::sorting::humanize;
use indexmap::IndexMap;

/// Produces the content of a cell
///
/// Closures of the shape `Fn(&R, &str, usize) -> String` implement this
/// automatically; `key` is the row key and `index` its zero-based position
/// on the current page.
pub trait CellRenderer<R> {
	/// Renders the cell for `row`
	fn render(&self, row: &R, key: &str, index: usize) -> String;
}

impl<R, F> CellRenderer<R> for F
where
	F: Fn(&R, &str, usize) -> String,
{
	fn render(&self, row: &R, key: &str, index: usize) -> String {
		self(row, key, index)
	}
}

/// Trait for grid column definitions
pub trait Column<R> {
	/// Renders the header cell content
	///
	/// Fails only when a sort link cannot be generated.
	fn header(&self, ctx: &RenderContext<'_>) -> Result<String>;

	/// Renders the body cell content for `row`
	fn cell(&self, row: &R, key: &str, index: usize, ctx: &RenderContext<'_>) -> String;

	/// Renders the footer cell content
	fn footer(&self) -> Option<String> {
		None
	}

	/// Returns whether the column is rendered at all
	///
	/// Default: true
	fn visible(&self) -> bool {
		true
	}

	/// Attributes of every body `<td>`
	fn content_options(&self) -> Option<&AttributeMap> {
		None
	}
}

/// Column showing one attribute of the row
///
/// The header becomes a sort link when the attribute is registered in the
/// context's sort state.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::column::DataColumn;
///
/// struct User {
///     name: String,
/// }
///
/// let column = DataColumn::new("name", |user: &User| user.name.clone())
///     .label("Full name");
/// ```
pub struct DataColumn<R> {
	attribute: String,
	label: Option<String>,
	value: Box<dyn CellRenderer<R>>,
	raw_html: bool,
	sortable: bool,
	visible: bool,
	footer: Option<String>,
	content_options: AttributeMap,
}

impl<R: 'static> DataColumn<R> {
	/// Creates a column whose cell text is produced by `value`
	pub fn new<F>(attribute: impl Into<String>, value: F) -> Self
	where
		F: Fn(&R) -> String + 'static,
	{
		Self::with_renderer(attribute, move |row: &R, _: &str, _: usize| value(row))
	}

	/// Creates a column backed by a full [`CellRenderer`]
	pub fn with_renderer(
		attribute: impl Into<String>,
		renderer: impl CellRenderer<R> + 'static,
	) -> Self {
		Self {
			attribute: attribute.into(),
			label: None,
			value: Box::new(renderer),
			raw_html: false,
			sortable: true,
			visible: true,
			footer: None,
			content_options: AttributeMap::new(),
		}
	}
}

impl<R> DataColumn<R> {
	/// Overrides the header label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Treats rendered values as HTML instead of escaping them
	pub fn raw_html(mut self, raw: bool) -> Self {
		self.raw_html = raw;
		self
	}

	/// Enables or disables the sort link in the header
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Shows or hides the column
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Sets the footer text
	pub fn footer(mut self, footer: impl Into<String>) -> Self {
		self.footer = Some(footer.into());
		self
	}

	/// Attributes merged into every body cell
	pub fn content_options(mut self, options: AttributeMap) -> Self {
		self.content_options.merge(&options);
		self
	}

	/// Attribute this column shows
	pub fn attribute(&self) -> &str {
		&self.attribute
	}
}

impl<R> Column<R> for DataColumn<R> {
	fn header(&self, ctx: &RenderContext<'_>) -> Result<String> {
		if self.sortable
			&& let Some((state, sorter)) = ctx.sort
			&& state.has_attribute(&self.attribute)
		{
			return sorter.render_link(
				&self.attribute,
				self.label.as_deref(),
				state,
				ctx.page_state(),
				&ctx.urls,
			);
		}

		let label = match &self.label {
			Some(label) => label.clone(),
			None => ctx
				.sort_state()
				.and_then(|s| s.attribute(&self.attribute))
				.map(|a| a.display_label())
				.unwrap_or_else(|| humanize(&self.attribute)),
		};
		Ok(escape(&label).into_owned())
	}

	fn cell(&self, row: &R, key: &str, index: usize, _ctx: &RenderContext<'_>) -> String {
		let value = self.value.render(row, key, index);
		if self.raw_html {
			value
		} else {
			escape(&value).into_owned()
		}
	}

	fn footer(&self) -> Option<String> {
		self.footer.as_deref().map(|f| escape(f).into_owned())
	}

	fn visible(&self) -> bool {
		self.visible
	}

	fn content_options(&self) -> Option<&AttributeMap> {
		Some(&self.content_options)
	}
}

/// Column numbering rows across pages
#[derive(Debug, Clone)]
pub struct SerialColumn {
	header: String,
}

impl SerialColumn {
	/// Creates a serial column headed `#`
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the header text
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = header.into();
		self
	}
}

impl Default for SerialColumn {
	fn default() -> Self {
		Self {
			header: "#".to_string(),
		}
	}
}

impl<R> Column<R> for SerialColumn {
	fn header(&self, _ctx: &RenderContext<'_>) -> Result<String> {
		Ok(escape(&self.header).into_owned())
	}

	fn cell(&self, _row: &R, _key: &str, index: usize, ctx: &RenderContext<'_>) -> String {
		let offset = ctx.page_state().map_or(0, |s| s.offset());
		offset.saturating_add(index).saturating_add(1).to_string()
	}
}

type RowPredicate<R> = Box<dyn Fn(&R, &str, usize) -> bool>;

/// Column of selection checkboxes named `selection[]`
///
/// The header holds a select-all checkbox unless `multiple` is off.
pub struct CheckboxColumn<R> {
	name: String,
	multiple: bool,
	checked: Option<RowPredicate<R>>,
	options: AttributeMap,
}

impl<R> CheckboxColumn<R> {
	/// Default input name
	pub const DEFAULT_NAME: &'static str = "selection[]";

	/// Creates a checkbox column
	pub fn new() -> Self {
		Self {
			name: Self::DEFAULT_NAME.to_string(),
			multiple: true,
			checked: None,
			options: AttributeMap::new(),
		}
	}

	/// Sets the input name
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Shows or hides the select-all checkbox
	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	/// Pre-checks rows for which `predicate` holds
	pub fn checked(mut self, predicate: impl Fn(&R, &str, usize) -> bool + 'static) -> Self {
		self.checked = Some(Box::new(predicate));
		self
	}

	/// Attributes merged into every checkbox
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options.merge(&options);
		self
	}
}

impl<R> Default for CheckboxColumn<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Column<R> for CheckboxColumn<R> {
	fn header(&self, _ctx: &RenderContext<'_>) -> Result<String> {
		if !self.multiple {
			return Ok(String::new());
		}
		let all_name = format!("{}_all", self.name.trim_end_matches("[]"));
		Ok(Tag::new("input")
			.attr("type", "checkbox")
			.class("select-on-check-all")
			.attr("name", all_name)
			.attr("value", "1")
			.render())
	}

	fn cell(&self, row: &R, key: &str, index: usize, _ctx: &RenderContext<'_>) -> String {
		let checked = self.checked.as_ref().is_some_and(|p| p(row, key, index));
		Tag::new("input")
			.attr("type", "checkbox")
			.attr("name", self.name.as_str())
			.attr("value", key)
			.attr("checked", checked)
			.attrs(&self.options)
			.render()
	}
}

/// Column of radio buttons named `radioButtonSelection`
pub struct RadioButtonColumn<R> {
	name: String,
	checked: Option<RowPredicate<R>>,
	options: AttributeMap,
}

impl<R> RadioButtonColumn<R> {
	/// Default input name
	pub const DEFAULT_NAME: &'static str = "radioButtonSelection";

	/// Creates a radio button column
	pub fn new() -> Self {
		Self {
			name: Self::DEFAULT_NAME.to_string(),
			checked: None,
			options: AttributeMap::new(),
		}
	}

	/// Sets the input name
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Pre-selects the row for which `predicate` holds
	pub fn checked(mut self, predicate: impl Fn(&R, &str, usize) -> bool + 'static) -> Self {
		self.checked = Some(Box::new(predicate));
		self
	}

	/// Attributes merged into every radio button
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options.merge(&options);
		self
	}
}

impl<R> Default for RadioButtonColumn<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Column<R> for RadioButtonColumn<R> {
	fn header(&self, _ctx: &RenderContext<'_>) -> Result<String> {
		Ok(String::new())
	}

	fn cell(&self, row: &R, key: &str, index: usize, _ctx: &RenderContext<'_>) -> String {
		let checked = self.checked.as_ref().is_some_and(|p| p(row, key, index));
		Tag::new("input")
			.attr("type", "radio")
			.attr("name", self.name.as_str())
			.attr("value", key)
			.attr("checked", checked)
			.attrs(&self.options)
			.render()
	}
}

type UrlCreator<R> = Box<dyn Fn(&str, &R, &str, usize) -> String>;
type ButtonVisibility<R> = Box<dyn Fn(&str, &R, &str, usize) -> bool>;

/// Column of per-row action links
///
/// Buttons default to `view`, `update` and `delete`. The URL creator
/// receives `(action, row, key, index)`.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::column::ActionColumn;
///
/// struct User;
///
/// let actions = ActionColumn::new(|action: &str, _: &User, key: &str, _: usize| {
///     format!("/users/{}/{}/", key, action)
/// })
/// .visible_buttons(|action: &str, _: &User, _: &str, _: usize| action != "delete");
/// ```
pub struct ActionColumn<R> {
	header: String,
	buttons: IndexMap<String, String>,
	url_creator: UrlCreator<R>,
	visible_buttons: Option<ButtonVisibility<R>>,
	button_options: AttributeMap,
	separator: String,
}

impl<R> ActionColumn<R> {
	/// Creates an action column with the default buttons
	pub fn new(url_creator: impl Fn(&str, &R, &str, usize) -> String + 'static) -> Self {
		let buttons = [("view", "View"), ("update", "Update"), ("delete", "Delete")]
			.into_iter()
			.map(|(action, label)| (action.to_string(), label.to_string()))
			.collect();
		Self {
			header: String::new(),
			buttons,
			url_creator: Box::new(url_creator),
			visible_buttons: None,
			button_options: AttributeMap::new(),
			separator: " ".to_string(),
		}
	}

	/// Sets the header text
	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = header.into();
		self
	}

	/// Adds a button or relabels an existing one
	pub fn button(mut self, action: impl Into<String>, label: impl Into<String>) -> Self {
		self.buttons.insert(action.into(), label.into());
		self
	}

	/// Removes a button
	pub fn without_button(mut self, action: &str) -> Self {
		self.buttons.shift_remove(action);
		self
	}

	/// Only renders buttons for which `predicate` holds
	pub fn visible_buttons(
		mut self,
		predicate: impl Fn(&str, &R, &str, usize) -> bool + 'static,
	) -> Self {
		self.visible_buttons = Some(Box::new(predicate));
		self
	}

	/// Attributes merged into every button link
	pub fn button_options(mut self, options: AttributeMap) -> Self {
		self.button_options.merge(&options);
		self
	}

	/// Text placed between buttons
	pub fn separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}
}

impl<R> Column<R> for ActionColumn<R> {
	fn header(&self, _ctx: &RenderContext<'_>) -> Result<String> {
		Ok(escape(&self.header).into_owned())
	}

	fn cell(&self, row: &R, key: &str, index: usize, _ctx: &RenderContext<'_>) -> String {
		self.buttons
			.iter()
			.filter(|(action, _)| {
				self.visible_buttons
					.as_ref()
					.is_none_or(|visible| visible(action.as_str(), row, key, index))
			})
			.map(|(action, label)| {
				Tag::new("a")
					.attr("href", (self.url_creator)(action.as_str(), row, key, index))
					.attr("title", label.as_str())
					.attr("aria-label", label.as_str())
					.attr("data-action", action.as_str())
					.attrs(&self.button_options)
					.text(label)
					.render()
			})
			.collect::<Vec<_>>()
			.join(&self.separator)
	}
}
