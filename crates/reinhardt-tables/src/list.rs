//! List view: one rendered block per row

use crate::column::CellRenderer;
use crate::context::RenderContext;
use crate::error::Result;
use crate::grid::RowKey;
use crate::html::{AttributeMap, Tag};
use crate::id::IdGenerator;
use crate::layout::{DEFAULT_EMPTY_TEXT, DEFAULT_LAYOUT, common_section, render_layout};

/// Renders each row through an item renderer
///
/// Items are wrapped in `<div data-key="..">` and joined by the separator.
/// The item renderer returns HTML; escape row data inside it.
pub struct ListView<R> {
	id: Option<String>,
	item: Box<dyn CellRenderer<R>>,
	key: RowKey<R>,
	layout: String,
	separator: String,
	empty_text: String,
	options: AttributeMap,
	item_options: AttributeMap,
}

impl<R: 'static> ListView<R> {
	/// Creates a list view keyed by row index
	pub fn new(item: impl CellRenderer<R> + 'static) -> Self {
		Self {
			id: None,
			item: Box::new(item),
			key: Box::new(|_: &R, index: usize| index.to_string()),
			layout: DEFAULT_LAYOUT.to_string(),
			separator: "\n".to_string(),
			empty_text: DEFAULT_EMPTY_TEXT.to_string(),
			options: AttributeMap::new().with("class", "list-view"),
			item_options: AttributeMap::new(),
		}
	}

	/// Derives each row's key
	pub fn key(mut self, key: impl Fn(&R, usize) -> String + 'static) -> Self {
		self.key = Box::new(key);
		self
	}
}

impl<R> ListView<R> {
	/// Sets the element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Draws the element id from `ids`
	pub fn id_from(mut self, ids: &IdGenerator) -> Self {
		self.id = Some(ids.next_id());
		self
	}

	/// Sets the layout template
	pub fn layout(mut self, layout: impl Into<String>) -> Self {
		self.layout = layout.into();
		self
	}

	/// Sets the text placed between items
	pub fn separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	/// Text shown when there are no rows
	pub fn empty_text(mut self, text: impl Into<String>) -> Self {
		self.empty_text = text.into();
		self
	}

	/// Attributes merged into the container `<div>`
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options.merge(&options);
		self
	}

	/// Attributes merged into every item `<div>`
	pub fn item_options(mut self, options: AttributeMap) -> Self {
		self.item_options.merge(&options);
		self
	}

	/// Renders the whole widget
	pub fn render(&self, rows: &[R], ctx: &RenderContext<'_>) -> Result<String> {
		let content = render_layout(&self.layout, |token| match token {
			"items" => Ok(Some(self.render_items(rows))),
			_ => common_section(token, rows.len(), ctx),
		})?;

		let mut container = Tag::new("div");
		if let Some(id) = &self.id {
			container = container.attr("id", id.as_str());
		}
		Ok(container.attrs(&self.options).html(&content).render())
	}

	/// Renders the items, or the empty text when there are none
	pub fn render_items(&self, rows: &[R]) -> String {
		if rows.is_empty() {
			return Tag::new("div").class("empty").text(&self.empty_text).render();
		}

		rows.iter()
			.enumerate()
			.map(|(index, row)| {
				let key = (self.key)(row, index);
				Tag::new("div")
					.attr("data-key", key.as_str())
					.attrs(&self.item_options)
					.html(&self.item.render(row, &key, index))
					.render()
			})
			.collect::<Vec<_>>()
			.join(&self.separator)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::UrlContext;
	use crate::html::escape;
	use reinhardt_urls::UrlReverser;
	use rstest::rstest;

	fn reverser() -> UrlReverser {
		let mut reverser = UrlReverser::new();
		reverser.register_path("posts", "/posts/");
		reverser.with_current_route("posts")
	}

	fn titles() -> ListView<&'static str> {
		ListView::new(|title: &&'static str, _: &str, _: usize| {
			format!("<h2>{}</h2>", escape(title))
		})
	}

	#[rstest]
	fn test_items_joined_by_separator() {
		let view = titles().separator("<hr>");
		assert_eq!(
			view.render_items(&["a", "b"]),
			r#"<div data-key="0"><h2>a</h2></div><hr><div data-key="1"><h2>b</h2></div>"#
		);
	}

	#[rstest]
	fn test_empty_list() {
		let reverser = reverser();
		let ctx = RenderContext::new(UrlContext::from_reverser(&reverser));
		let html = titles().id("posts").render(&[], &ctx).unwrap();
		assert_eq!(
			html,
			concat!(
				"<div id=\"posts\" class=\"list-view\">\n",
				"<div class=\"empty\">No results found.</div>\n</div>",
			)
		);
	}
}
