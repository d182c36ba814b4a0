//! Layout templates shared by the views
//!
//! A layout is plain text with `{token}` placeholders. Known tokens are
//! replaced by rendered sections; anything else is copied through
//! unchanged.

use crate::context::RenderContext;
use crate::error::Result;
use crate::pagination::PageState;

/// Default layout of grid and list views
pub const DEFAULT_LAYOUT: &str = "{summary}\n{items}\n{pager}";

/// Default text shown when there are no rows
pub const DEFAULT_EMPTY_TEXT: &str = "No results found.";

/// Substitutes every `{token}` for which `section` returns content
pub(crate) fn render_layout<F>(layout: &str, mut section: F) -> Result<String>
where
	F: FnMut(&str) -> Result<Option<String>>,
{
	let mut out = String::with_capacity(layout.len());
	let mut rest = layout;

	while let Some(start) = rest.find('{') {
		out.push_str(&rest[..start]);
		let after = &rest[start + 1..];
		let Some(end) = after.find('}') else {
			out.push_str(&rest[start..]);
			return Ok(out);
		};

		let name = &after[..end];
		let replaced = if is_token_name(name) { section(name)? } else { None };
		match replaced {
			Some(content) => out.push_str(&content),
			None => out.push_str(&rest[start..start + end + 2]),
		}
		rest = &after[end + 1..];
	}

	out.push_str(rest);
	Ok(out)
}

fn is_token_name(name: &str) -> bool {
	!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// "Showing b-e of t items." for the rows on the current page
///
/// Empty when there are no rows. Without pagination every row counts as
/// being on the page.
pub fn summary(row_count: usize, page_state: Option<&PageState>) -> String {
	if row_count == 0 {
		return String::new();
	}

	let (begin, end, total) = match page_state {
		Some(state) => (
			state.offset().saturating_add(1),
			state.offset().saturating_add(row_count),
			state.total_count(),
		),
		None => (1, row_count, row_count),
	};
	let noun = if total == 1 { "item" } else { "items" };
	format!("Showing {}-{} of {} {}.", begin, end, total, noun)
}

/// Sections every view understands: `{summary}`, `{pager}` and `{sorter}`
pub(crate) fn common_section(
	token: &str,
	row_count: usize,
	ctx: &RenderContext<'_>,
) -> Result<Option<String>> {
	let content = match token {
		"summary" => summary(row_count, ctx.page_state()),
		"pager" => match ctx.pagination {
			Some((state, pager)) => pager.render(state, &ctx.pager_urls())?,
			None => String::new(),
		},
		"sorter" => match ctx.sort {
			Some((state, sorter)) => sorter.render(state, ctx.page_state(), &ctx.urls)?,
			None => String::new(),
		},
		_ => return Ok(None),
	};
	Ok(Some(content))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sections(token: &str) -> Result<Option<String>> {
		Ok(match token {
			"a" => Some("A".to_string()),
			"items" => Some("<ul></ul>".to_string()),
			_ => None,
		})
	}

	#[rstest]
	#[case("{a}", "A")]
	#[case("x{a}y{items}z", "xAy<ul></ul>z")]
	#[case("{unknown} {a}", "{unknown} A")]
	#[case("{not a token}", "{not a token}")]
	#[case("open {a", "open {a")]
	#[case("{}", "{}")]
	#[case("{{a}", "{{a}")]
	fn test_render_layout(#[case] layout: &str, #[case] expected: &str) {
		assert_eq!(render_layout(layout, sections).unwrap(), expected);
	}

	#[rstest]
	fn test_summary_with_pagination() {
		let mut state = PageState::new();
		state.set_page_size(10).unwrap();
		state.set_current_page(3).unwrap();
		state.set_total_count(25);
		assert_eq!(summary(5, Some(&state)), "Showing 21-25 of 25 items.");
	}

	#[rstest]
	#[case(0, "")]
	#[case(1, "Showing 1-1 of 1 item.")]
	#[case(4, "Showing 1-4 of 4 items.")]
	fn test_summary_without_pagination(#[case] rows: usize, #[case] expected: &str) {
		assert_eq!(summary(rows, None), expected);
	}
}
