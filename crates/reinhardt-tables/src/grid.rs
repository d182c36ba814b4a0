//! Grid view: rows rendered as an HTML table
//!
//! The layout decides where the summary, table, pager and sorter go. Each
//! column contributes a header cell, one body cell per row and, when
//! enabled, a footer cell.

use crate::column::Column;
use crate::context::RenderContext;
use crate::error::Result;
use crate::html::{AttributeMap, Tag};
use crate::id::IdGenerator;
use crate::layout::{DEFAULT_EMPTY_TEXT, DEFAULT_LAYOUT, common_section, render_layout};

pub(crate) type RowKey<R> = Box<dyn Fn(&R, usize) -> String>;

/// Table widget over the rows of the current page
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::column::{DataColumn, SerialColumn};
/// use reinhardt_tables::context::{RenderContext, UrlContext};
/// use reinhardt_tables::grid::GridView;
/// use reinhardt_urls::UrlReverser;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// let mut reverser = UrlReverser::new();
/// reverser.register_path("users", "/users/");
/// let reverser = reverser.with_current_route("users");
/// let ctx = RenderContext::new(UrlContext::from_reverser(&reverser));
///
/// let grid = GridView::new()
///     .id("users")
///     .key(|user: &User, _| user.id.to_string())
///     .column(SerialColumn::new())
///     .column(DataColumn::new("name", |user: &User| user.name.clone()))
///     .layout("{items}");
///
/// let rows = vec![User { id: 7, name: "Alice".to_string() }];
/// let html = grid.render(&rows, &ctx).unwrap();
/// assert!(html.starts_with(r#"<div id="users" class="grid-view"><table class="table">"#));
/// assert!(html.contains(r#"<tr data-key="7"><td>1</td><td>Alice</td></tr>"#));
/// ```
pub struct GridView<R> {
	id: Option<String>,
	columns: Vec<Box<dyn Column<R>>>,
	key: RowKey<R>,
	layout: String,
	empty_text: String,
	show_header: bool,
	show_footer: bool,
	options: AttributeMap,
	table_options: AttributeMap,
}

impl<R: 'static> GridView<R> {
	/// Creates an empty grid keyed by row index
	pub fn new() -> Self {
		Self {
			id: None,
			columns: Vec::new(),
			key: Box::new(|_: &R, index: usize| index.to_string()),
			layout: DEFAULT_LAYOUT.to_string(),
			empty_text: DEFAULT_EMPTY_TEXT.to_string(),
			show_header: true,
			show_footer: false,
			options: AttributeMap::new().with("class", "grid-view"),
			table_options: AttributeMap::new().with("class", "table"),
		}
	}

	/// Derives each row's key, used for `data-key` and selection columns
	pub fn key(mut self, key: impl Fn(&R, usize) -> String + 'static) -> Self {
		self.key = Box::new(key);
		self
	}

	/// Appends a column
	pub fn column(mut self, column: impl Column<R> + 'static) -> Self {
		self.columns.push(Box::new(column));
		self
	}
}

impl<R: 'static> Default for GridView<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> GridView<R> {
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

	/// Text shown in place of the rows when there are none
	pub fn empty_text(mut self, text: impl Into<String>) -> Self {
		self.empty_text = text.into();
		self
	}

	/// Renders the `<thead>`
	pub fn show_header(mut self, show: bool) -> Self {
		self.show_header = show;
		self
	}

	/// Renders the `<tfoot>`
	pub fn show_footer(mut self, show: bool) -> Self {
		self.show_footer = show;
		self
	}

	/// Attributes merged into the container `<div>`
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options.merge(&options);
		self
	}

	/// Attributes merged into the `<table>`
	pub fn table_options(mut self, options: AttributeMap) -> Self {
		self.table_options.merge(&options);
		self
	}

	/// Renders the whole widget
	pub fn render(&self, rows: &[R], ctx: &RenderContext<'_>) -> Result<String> {
		let content = render_layout(&self.layout, |token| match token {
			"items" => self.render_items(rows, ctx).map(Some),
			_ => common_section(token, rows.len(), ctx),
		})?;

		let mut container = Tag::new("div");
		if let Some(id) = &self.id {
			container = container.attr("id", id.as_str());
		}
		Ok(container.attrs(&self.options).html(&content).render())
	}

	/// Renders the `<table>`
	pub fn render_items(&self, rows: &[R], ctx: &RenderContext<'_>) -> Result<String> {
		let columns: Vec<&dyn Column<R>> = self
			.columns
			.iter()
			.filter(|c| c.visible())
			.map(|c| &**c)
			.collect();

		let mut table = String::new();
		if self.show_header {
			let mut cells = String::new();
			for column in &columns {
				cells.push_str(&Tag::new("th").html(&column.header(ctx)?).render());
			}
			table.push_str(&wrap_row("thead", &cells));
		}

		let mut body = String::new();
		if rows.is_empty() {
			let empty = Tag::new("div")
				.class("empty")
				.text(&self.empty_text)
				.render();
			let cell = Tag::new("td")
				.attr("colspan", columns.len().max(1).to_string())
				.html(&empty)
				.render();
			body.push_str(&Tag::new("tr").html(&cell).render());
		} else {
			for (index, row) in rows.iter().enumerate() {
				body.push_str(&self.render_row(&columns, row, index, ctx));
			}
		}
		table.push_str(&Tag::new("tbody").html(&body).render());

		if self.show_footer {
			let cells: String = columns
				.iter()
				.map(|c| {
					Tag::new("td")
						.html(&c.footer().unwrap_or_default())
						.render()
				})
				.collect();
			table.push_str(&wrap_row("tfoot", &cells));
		}

		Ok(Tag::new("table").attrs(&self.table_options).html(&table).render())
	}

	fn render_row(
		&self,
		columns: &[&dyn Column<R>],
		row: &R,
		index: usize,
		ctx: &RenderContext<'_>,
	) -> String {
		let key = (self.key)(row, index);
		let cells: String = columns
			.iter()
			.map(|column| {
				let mut cell = Tag::new("td");
				if let Some(options) = column.content_options() {
					cell = cell.attrs(options);
				}
				cell.html(&column.cell(row, &key, index, ctx)).render()
			})
			.collect();
		Tag::new("tr")
			.attr("data-key", key.as_str())
			.html(&cells)
			.render()
	}
}

fn wrap_row(section: &str, cells: &str) -> String {
	let row = Tag::new("tr").html(cells).render();
	Tag::new(section).html(&row).render()
}
