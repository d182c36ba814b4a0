//! Detail view: one record as a two-column table

use crate::html::{AttributeMap, Tag, escape};
use crate::id::IdGenerator;

/// Label/value rows of a single record
///
/// # Examples
///
/// ```
/// use reinhardt_tables::detail::DetailView;
///
/// let html = DetailView::new()
///     .attribute("Name", "Ada & co")
///     .raw("Site", r#"<a href="/ada">/ada</a>"#)
///     .render();
///
/// assert_eq!(
///     html,
///     concat!(
///         r#"<table class="detail-view">"#,
///         r#"<tr><th>Name</th><td>Ada &amp; co</td></tr>"#,
///         r#"<tr><th>Site</th><td><a href="/ada">/ada</a></td></tr>"#,
///         "</table>",
///     )
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DetailView {
	id: Option<String>,
	rows: Vec<(String, String)>,
	options: AttributeMap,
}

impl DetailView {
	/// Creates an empty view
	pub fn new() -> Self {
		Self::default()
	}

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

	/// Adds a row whose value is escaped
	pub fn attribute(mut self, label: impl Into<String>, value: &str) -> Self {
		self.rows.push((label.into(), escape(value).into_owned()));
		self
	}

	/// Adds a row whose value is trusted HTML
	pub fn raw(mut self, label: impl Into<String>, html: impl Into<String>) -> Self {
		self.rows.push((label.into(), html.into()));
		self
	}

	/// Attributes merged into the `<table>`
	pub fn options(mut self, options: AttributeMap) -> Self {
		self.options.merge(&options);
		self
	}

	/// Number of rows
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns true when no rows were added
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Renders the `<table>`
	pub fn render(&self) -> String {
		let rows: String = self
			.rows
			.iter()
			.map(|(label, value)| {
				let th = Tag::new("th").text(label).render();
				let td = Tag::new("td").html(value).render();
				Tag::new("tr").html(&th).html(&td).render()
			})
			.collect();

		let mut table = Tag::new("table");
		if let Some(id) = &self.id {
			table = table.attr("id", id.as_str());
		}
		table.attrs(&self.options).html(&rows).render()
	}
}

impl Default for DetailView {
	fn default() -> Self {
		Self {
			id: None,
			rows: Vec::new(),
			options: AttributeMap::new().with("class", "detail-view"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_id_and_options() {
		let ids = IdGenerator::new();
		let html = DetailView::new()
			.id_from(&ids)
			.options(AttributeMap::new().with("class", "table"))
			.render();
		assert_eq!(html, r#"<table id="w0" class="detail-view table"></table>"#);
	}

	#[rstest]
	fn test_labels_are_escaped() {
		let view = DetailView::new().attribute("<Label>", "v");
		assert_eq!(view.len(), 1);
		assert!(view.render().contains("<th>&lt;Label&gt;</th>"));
	}
}
