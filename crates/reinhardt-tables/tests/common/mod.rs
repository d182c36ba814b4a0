//! Common test fixtures for reinhardt-tables tests

#![allow(dead_code)]

use reinhardt_tables::{PageState, SortAttribute, SortDirection, SortState};
use reinhardt_urls::UrlReverser;
use rstest::*;

/// Test user data structure for view tests
#[derive(Debug, Clone, PartialEq)]
pub struct TestUser {
	pub id: i32,
	pub name: String,
	pub email: String,
	pub age: u32,
	pub created_at: String,
}

fn user(id: i32, name: &str, age: u32, created_at: &str) -> TestUser {
	TestUser {
		id,
		name: name.to_string(),
		email: format!("{}@example.com", name.to_lowercase()),
		age,
		created_at: created_at.to_string(),
	}
}

/// Fixture providing sample users for testing
#[fixture]
pub fn sample_users() -> Vec<TestUser> {
	vec![
		user(1, "Alice", 31, "2024-01-15"),
		user(2, "Bob", 27, "2024-02-20"),
		user(3, "Charlie", 45, "2024-03-10"),
	]
}

/// Fixture providing a reverser whose current route is `users`
#[fixture]
pub fn reverser() -> UrlReverser {
	let mut reverser = UrlReverser::new();
	reverser.register_path("users", "/users/");
	reverser.register_path("user-detail", "/users/{id}/");
	reverser.register_path("team-users", "/teams/{team}/users/");
	reverser.with_current_route("users")
}

/// Fixture providing a single-sort state over `age`, `name` and `created_at`
#[fixture]
pub fn sort_state() -> SortState {
	let mut state = SortState::new();
	state.register_attributes(sort_attributes());
	state
}

/// Same attributes as [`sort_state`] with multi-sort enabled
#[fixture]
pub fn multi_sort_state() -> SortState {
	let mut state = SortState::new().with_multi_sort(true);
	state.register_attributes(sort_attributes());
	state
}

pub fn sort_attributes() -> Vec<SortAttribute> {
	vec![
		SortAttribute::new("age"),
		SortAttribute::new("name")
			.ascending([("last_name", SortDirection::Asc), ("first_name", SortDirection::Asc)])
			.descending([("last_name", SortDirection::Desc), ("first_name", SortDirection::Desc)]),
		SortAttribute::new("created_at")
			.with_default_direction(SortDirection::Desc)
			.label("Joined"),
	]
}

/// Builds a page state with the given page, size and total
pub fn page_state(current_page: usize, page_size: usize, total_count: i64) -> PageState {
	let mut state = PageState::new();
	state.set_page_size(page_size).unwrap();
	state.set_current_page(current_page).unwrap();
	state.set_total_count(total_count);
	state
}
