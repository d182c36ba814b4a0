//! Integration tests for grid and list views

mod common;

use common::{TestUser, page_state, reverser, sample_users, sort_state};
use reinhardt_tables::{
	ActionColumn, AttributeMap, CheckboxColumn, DataColumn, GridView, IdGenerator, LinkPager,
	LinkSorter, ListView, PageState, PaginationSettings, RenderContext, SerialColumn, SortState,
	UrlContext,
};
use std::collections::HashMap;
use reinhardt_urls::UrlReverser;
use rstest::*;

fn user_grid() -> GridView<TestUser> {
	GridView::new()
		.key(|user: &TestUser, _| user.id.to_string())
		.column(SerialColumn::new())
		.column(DataColumn::new("name", |user: &TestUser| user.name.clone()))
		.column(DataColumn::new("email", |user: &TestUser| user.email.clone()).sortable(false))
		.column(CheckboxColumn::new())
		.column(ActionColumn::new(|action: &str, _: &TestUser, key: &str, _: usize| {
			format!("/users/{}/{}/", key, action)
		}))
}

#[rstest]
fn test_grid_with_pagination_and_sorting(
	sample_users: Vec<TestUser>,
	reverser: UrlReverser,
	mut sort_state: SortState,
) {
	sort_state.set_active_orderings_from_param("name");
	let page = page_state(2, 2, 5);
	let pager = LinkPager::new();
	let sorter = LinkSorter::new();
	let ctx = RenderContext::new(UrlContext::from_reverser(&reverser))
		.with_pagination(&page, &pager)
		.with_sort(&sort_state, &sorter);

	let rows = &sample_users[1..3];
	let html = user_grid()
		.id("users")
		.layout("{summary}{items}{pager}")
		.render(rows, &ctx)
		.unwrap();

	assert!(html.starts_with(concat!(
		r#"<div id="users" class="grid-view">"#,
		r#"Showing 3-4 of 5 items.<table class="table">"#,
	)));
	assert!(html.contains(concat!(
		r#"<th><a href="/users/?page=2&amp;pagesize=2&amp;sort=-name" class="asc" "#,
		r#"data-sort="-name">Name</a></th>"#,
	)));
	assert!(html.contains("<th>Email</th>"));
	assert!(html.contains(r#"<tr data-key="2"><td>3</td><td>Bob</td><td>bob@example.com</td>"#));
	assert!(html.contains(r#"<input type="checkbox" name="selection[]" value="3">"#));
	assert!(html.contains(concat!(
		r#"<a href="/users/3/delete/" title="Delete" aria-label="Delete" "#,
		r#"data-action="delete">Delete</a>"#,
	)));
	assert!(html.contains(r#"<nav aria-label="Pagination">"#));
	assert!(html.ends_with("</nav></div>"));
}

#[rstest]
fn test_grid_empty_rows(reverser: UrlReverser) {
	let ctx = RenderContext::new(UrlContext::from_reverser(&reverser));
	let html = user_grid()
		.layout("{summary}{items}")
		.empty_text("Nobody here")
		.render(&[], &ctx)
		.unwrap();
	assert!(html.contains(
		r#"<tbody><tr><td colspan="5"><div class="empty">Nobody here</div></td></tr></tbody>"#
	));
	assert!(!html.contains("Showing"));
}

#[rstest]
fn test_grid_header_footer_and_hidden_columns(sample_users: Vec<TestUser>, reverser: UrlReverser) {
	let ctx = RenderContext::new(UrlContext::from_reverser(&reverser));
	let html = GridView::new()
		.column(DataColumn::new("name", |user: &TestUser| user.name.clone()).footer("Total"))
		.column(DataColumn::new("age", |user: &TestUser| user.age.to_string()).visible(false))
		.show_header(false)
		.show_footer(true)
		.layout("{items}")
		.render(&sample_users[..1], &ctx)
		.unwrap();
	assert_eq!(
		html,
		concat!(
			r#"<div class="grid-view"><table class="table">"#,
			r#"<tbody><tr data-key="0"><td>Alice</td></tr></tbody>"#,
			r#"<tfoot><tr><td>Total</td></tr></tfoot></table></div>"#,
		)
	);
}

#[rstest]
fn test_unknown_layout_tokens_and_sorter(reverser: UrlReverser, sort_state: SortState) {
	let sorter = LinkSorter::new().attributes(["age"]);
	let ctx =
		RenderContext::new(UrlContext::from_reverser(&reverser)).with_sort(&sort_state, &sorter);
	let html = GridView::<TestUser>::new()
		.layout("{toolbar}|{sorter}|{pager}")
		.options(AttributeMap::new().with("class", "compact"))
		.render(&[], &ctx)
		.unwrap();
	assert_eq!(
		html,
		concat!(
			r#"<div class="grid-view compact">{toolbar}|<ul class="sorter">"#,
			r#"<li><a href="/users/?sort=age" data-sort="age">Age</a></li></ul>|</div>"#,
		)
	);
}

#[rstest]
fn test_ids_from_injected_generator(reverser: UrlReverser) {
	let ids = IdGenerator::new();
	let ctx = RenderContext::new(UrlContext::from_reverser(&reverser));
	let first = GridView::<TestUser>::new().id_from(&ids).layout("").render(&[], &ctx).unwrap();
	let second = GridView::<TestUser>::new().id_from(&ids).layout("").render(&[], &ctx).unwrap();
	assert_eq!(first, r#"<div id="w0" class="grid-view"></div>"#);
	assert_eq!(second, r#"<div id="w1" class="grid-view"></div>"#);
}

#[rstest]
fn test_list_view(sample_users: Vec<TestUser>, reverser: UrlReverser) {
	let page = page_state(1, 3, 3);
	let pager = LinkPager::new();
	let ctx =
		RenderContext::new(UrlContext::from_reverser(&reverser)).with_pagination(&page, &pager);
	let html = ListView::new(|user: &TestUser, _: &str, index: usize| {
		format!("{}. {}", index + 1, user.name)
	})
	.key(|user: &TestUser, _| user.id.to_string())
	.separator("")
	.render(&sample_users, &ctx)
	.unwrap();
	assert_eq!(
		html,
		concat!(
			"<div class=\"list-view\">Showing 1-3 of 3 items.\n",
			"<div data-key=\"1\">1. Alice</div><div data-key=\"2\">2. Bob</div>",
			"<div data-key=\"3\">3. Charlie</div>\n</div>",
		)
	);
}

#[rstest]
fn test_pager_links_keep_active_sort(
	sample_users: Vec<TestUser>,
	reverser: UrlReverser,
	mut sort_state: SortState,
) {
	sort_state.set_active_orderings_from_param("-age");
	let page = page_state(1, 2, 5);
	let pager = LinkPager::new();
	let sorter = LinkSorter::new();
	let ctx = RenderContext::new(UrlContext::from_reverser(&reverser))
		.with_pagination(&page, &pager)
		.with_sort(&sort_state, &sorter);

	let html = user_grid()
		.layout("{pager}")
		.render(&sample_users[..2], &ctx)
		.unwrap();
	assert!(html.contains(r#"href="/users/?sort=-age&amp;page=2&amp;pagesize=2" data-page="2""#));
	assert!(!html.contains(r#"href="/users/?page="#));
}

#[rstest]
fn test_huge_page_size_from_query(sample_users: Vec<TestUser>, reverser: UrlReverser) {
	let query = HashMap::from([
		("page".to_string(), "2".to_string()),
		("pagesize".to_string(), usize::MAX.to_string()),
	]);
	let mut page = PageState::from_query(&query, &PaginationSettings::default()).unwrap();
	page.set_total_count(5);
	assert_eq!(page.offset(), usize::MAX);

	let pager = LinkPager::new();
	let ctx =
		RenderContext::new(UrlContext::from_reverser(&reverser)).with_pagination(&page, &pager);
	let html = user_grid()
		.layout("{summary}{items}{pager}")
		.render(&sample_users[..2], &ctx)
		.unwrap();
	let max = usize::MAX.to_string();
	assert!(html.contains(&format!("Showing {max}-{max} of 5 items.")));
	assert!(html.contains(&format!("<td>{max}</td>")));
}
