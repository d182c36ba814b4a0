//! Integration tests for sort state and sort links

mod common;

use common::{multi_sort_state, page_state, reverser, sort_state};
use reinhardt_tables::sorter::{next_orderings, serialize_orderings};
use reinhardt_tables::{
	LinkSorter, OrderBy, SortDirection, SortSettings, SortState, TableError, UrlContext,
};
use reinhardt_urls::{UrlParams, UrlReverser};
use rstest::*;
use std::collections::HashMap;

/// Applies the link generated for `attribute` as if it had been clicked
fn click(state: &mut SortState, attribute: &str) {
	let value = serialize_orderings(&next_orderings(state, attribute).unwrap(), state.separator());
	state.set_active_orderings_from_param(&value);
}

#[rstest]
fn test_toggle_cycle_from_default_asc(mut sort_state: SortState) {
	click(&mut sort_state, "age");
	assert_eq!(sort_state.active_direction("age"), Some(SortDirection::Asc));
	click(&mut sort_state, "age");
	assert_eq!(sort_state.active_direction("age"), Some(SortDirection::Desc));
	click(&mut sort_state, "age");
	assert_eq!(sort_state.active_direction("age"), Some(SortDirection::Asc));
}

#[rstest]
fn test_toggle_cycle_from_default_desc(mut sort_state: SortState) {
	click(&mut sort_state, "created_at");
	assert_eq!(sort_state.active_direction("created_at"), Some(SortDirection::Desc));
	click(&mut sort_state, "created_at");
	assert_eq!(sort_state.active_direction("created_at"), Some(SortDirection::Asc));
}

#[rstest]
fn test_multi_sort_keeps_and_demotes_previous(mut multi_sort_state: SortState) {
	multi_sort_state.set_active_orderings([OrderBy::desc("age"), OrderBy::asc("name")]);
	assert_eq!(
		next_orderings(&multi_sort_state, "name").unwrap(),
		vec![OrderBy::desc("name"), OrderBy::desc("age")]
	);
}

#[rstest]
fn test_multi_sort_click_on_inactive_attribute(mut multi_sort_state: SortState) {
	multi_sort_state.set_active_orderings_from_param("-age,name");
	assert_eq!(
		next_orderings(&multi_sort_state, "created_at").unwrap(),
		vec![OrderBy::desc("created_at"), OrderBy::desc("age"), OrderBy::asc("name")]
	);
}

#[rstest]
fn test_serialization() {
	let orderings = [OrderBy::desc("age"), OrderBy::asc("name")];
	assert_eq!(serialize_orderings(&orderings, ","), "-age,name");
	assert_eq!(serialize_orderings(&orderings, "."), "-age.name");
}

#[rstest]
fn test_unknown_attribute_is_dropped_but_link_fails(
	mut sort_state: SortState,
	reverser: UrlReverser,
) {
	sort_state.set_active_orderings([OrderBy::asc("email")]);
	assert!(sort_state.active_orderings().is_empty());

	let err = LinkSorter::new()
		.build_sort_link("email", &sort_state, None, &UrlContext::from_reverser(&reverser))
		.unwrap_err();
	assert!(matches!(err, TableError::Configuration(_)));
}

#[rstest]
fn test_strict_setter_rejects_unknown(mut sort_state: SortState) {
	let err = sort_state
		.try_set_active_orderings([OrderBy::asc("age"), OrderBy::asc("email")])
		.unwrap_err();
	assert!(matches!(err, TableError::Configuration(msg) if msg.contains("email")));
	assert!(sort_state.active_orderings().is_empty());
}

#[rstest]
fn test_single_sort_retains_first(mut sort_state: SortState) {
	sort_state.set_active_orderings([OrderBy::asc("age"), OrderBy::desc("name")]);
	assert_eq!(sort_state.active_orderings(), &[OrderBy::asc("age")]);
}

#[rstest]
fn test_single_sort_skips_leading_unknown(mut sort_state: SortState) {
	sort_state.set_active_orderings_from_param("bogus,-name");
	assert_eq!(sort_state.active_orderings(), &[OrderBy::desc("name")]);
}

#[rstest]
fn test_physical_orderings(mut multi_sort_state: SortState) {
	multi_sort_state.set_active_orderings_from_param("-name,age");
	assert_eq!(
		multi_sort_state.physical_orderings(),
		vec![
			("last_name".to_string(), SortDirection::Desc),
			("first_name".to_string(), SortDirection::Desc),
			("age".to_string(), SortDirection::Asc),
		]
	);
}

#[rstest]
fn test_apply_query_with_settings() {
	let settings = SortSettings {
		sort_param: "order".to_string(),
		separator: ";".to_string(),
		multi_sort: true,
	};
	let mut state = SortState::from_settings(&settings);
	state.register_attributes(common::sort_attributes());

	let query = HashMap::from([
		("order".to_string(), "-age;name".to_string()),
		("sort".to_string(), "created_at".to_string()),
	]);
	state.apply_query(&query);
	assert_eq!(state.active_orderings(), &[OrderBy::desc("age"), OrderBy::asc("name")]);
}

#[rstest]
fn test_sort_link_keeps_page_and_passthrough(mut sort_state: SortState, reverser: UrlReverser) {
	sort_state.set_active_orderings_from_param("-age");
	let page = page_state(3, 20, 200);
	let urls = UrlContext::from_reverser(&reverser)
		.with_passthrough(UrlParams::new().with("status", "active").with("sort", "stale"));

	let link = LinkSorter::new()
		.build_sort_link("age", &sort_state, Some(&page), &urls)
		.unwrap();

	assert_eq!(link.url, "/users/?status=active&sort=age&page=3&pagesize=20");
	assert_eq!(link.active_direction, Some(SortDirection::Desc));
	assert_eq!(link.sort_value, "age");
	assert_eq!(link.label, "Age");
}

#[rstest]
fn test_render_link_and_sorter(mut sort_state: SortState, reverser: UrlReverser) {
	sort_state.set_active_orderings_from_param("name");
	let urls = UrlContext::from_reverser(&reverser);
	let sorter = LinkSorter::new();

	assert_eq!(
		sorter.render_link("name", None, &sort_state, None, &urls).unwrap(),
		r#"<a href="/users/?sort=-name" class="asc" data-sort="-name">Name</a>"#
	);
	assert_eq!(
		sorter.render_link("created_at", None, &sort_state, None, &urls).unwrap(),
		r#"<a href="/users/?sort=-created_at" data-sort="-created_at">Joined</a>"#
	);

	let html = sorter.attributes(["name", "age"]).render(&sort_state, None, &urls).unwrap();
	assert!(html.starts_with(r#"<ul class="sorter"><li><a href="/users/?sort=-name""#));
	assert!(html.ends_with(r#"data-sort="age">Age</a></li></ul>"#));
}
