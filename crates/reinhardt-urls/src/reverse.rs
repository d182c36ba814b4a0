//! URL reverse resolution
//!
//! Resolves a route name plus a parameter map back into a URL. Parameters
//! that fill a `{placeholder}` in the route pattern become path segments;
//! every other parameter is appended to the query string in the order it
//! was inserted.

use crate::error::{Result, UrlError};
use crate::generator::{RouteMatcher, UrlGenerator};
use crate::params::UrlParams;
use std::collections::HashMap;

/// Extract parameter names from a URL pattern
///
/// # Examples
///
/// ```
/// use reinhardt_urls::reverse::extract_param_names;
///
/// let names = extract_param_names("/users/{id}/posts/{post_id}/");
/// assert_eq!(names, vec!["id", "post_id"]);
/// ```
pub fn extract_param_names(pattern: &str) -> Vec<String> {
	let mut names = Vec::new();
	let mut chars = pattern.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			if !name.is_empty() {
				names.push(name);
			}
		}
	}

	names
}

/// Returns false for values that would change the shape of the path
///
/// Path separators, query and fragment delimiters, and percent escapes are
/// rejected so a parameter can never smuggle in extra segments.
pub fn validate_reverse_param(value: &str) -> bool {
	!value.is_empty() && !value.contains(['/', '\\', '?', '#', '%'])
}

/// Single-pass placeholder substitution
///
/// Placeholders without a value are preserved verbatim.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reinhardt_urls::reverse::reverse_single_pass;
///
/// let mut values = HashMap::new();
/// values.insert("id".to_string(), "123".to_string());
///
/// let url = reverse_single_pass("/users/{id}/", &values);
/// assert_eq!(url, "/users/123/");
/// ```
pub fn reverse_single_pass(pattern: &str, values: &HashMap<String, String>) -> String {
	let mut result = String::with_capacity(pattern.len());
	let mut chars = pattern.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let param_name: String = chars.by_ref().take_while(|&c| c != '}').collect();

			if let Some(value) = values.get(&param_name) {
				result.push_str(value);
			} else {
				result.push('{');
				result.push_str(&param_name);
				result.push('}');
			}
		} else {
			result.push(ch);
		}
	}

	result
}

/// URL reverser for resolving route names back to URLs
///
/// # Examples
///
/// ```
/// use reinhardt_urls::{UrlGenerator, UrlParams, UrlReverser};
///
/// let mut reverser = UrlReverser::new();
/// reverser.register_path("users:list", "/users/");
/// reverser.register_path("users:posts", "/users/{id}/posts/");
///
/// let params = UrlParams::new().with("page", 2_usize).with("sort", "-age");
/// let url = reverser.generate("users:list", &params).unwrap();
/// assert_eq!(url, "/users/?page=2&sort=-age");
///
/// let params = UrlParams::new().with("id", 7).with("page", 1_usize);
/// let url = reverser.generate("users:posts", &params).unwrap();
/// assert_eq!(url, "/users/7/posts/?page=1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlReverser {
	/// Map of route names (including namespace) to path patterns
	routes: HashMap<String, String>,
	current_route: Option<String>,
}

impl UrlReverser {
	/// Creates an empty reverser
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a route by name and path pattern
	///
	/// # Arguments
	///
	/// * `name` - The fully qualified route name (e.g., "v1:users:list")
	/// * `path` - The URL path pattern (e.g., "/users/{id}/")
	pub fn register_path(&mut self, name: &str, path: &str) {
		self.routes.insert(name.to_string(), path.to_string());
	}

	/// Marks `name` as the route that matched the current request
	pub fn set_current_route(&mut self, name: impl Into<String>) {
		self.current_route = Some(name.into());
	}

	/// Builder-style [`set_current_route`](Self::set_current_route)
	pub fn with_current_route(mut self, name: impl Into<String>) -> Self {
		self.set_current_route(name);
		self
	}

	/// Check if a route name is registered
	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}

	/// Get all registered route names, sorted
	pub fn route_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.routes.keys().cloned().collect();
		names.sort();
		names
	}

	/// Reverse a route name into a URL
	///
	/// Parameters consumed by path placeholders are removed from the query
	/// string; the rest are encoded in insertion order.
	pub fn reverse(&self, name: &str, params: &UrlParams) -> Result<String> {
		let pattern = self
			.routes
			.get(name)
			.ok_or_else(|| UrlError::RouteNotFound(name.to_string()))?;

		let mut path_values = HashMap::new();
		let mut query = params.clone();
		for param_name in extract_param_names(pattern) {
			let value = query
				.remove(&param_name)
				.ok_or_else(|| UrlError::MissingParam {
					route: name.to_string(),
					param: param_name.clone(),
				})?
				.to_string();
			if !validate_reverse_param(&value) {
				return Err(UrlError::InvalidParam { name: param_name });
			}
			path_values.insert(param_name, value);
		}

		let mut url = reverse_single_pass(pattern, &path_values);
		if !query.is_empty() {
			let pairs: Vec<(&str, String)> =
				query.iter().map(|(k, v)| (k, v.to_string())).collect();
			let encoded = serde_urlencoded::to_string(&pairs)?;
			url.push(if url.contains('?') { '&' } else { '?' });
			url.push_str(&encoded);
		}

		tracing::trace!(route = name, url = %url, "reversed url");
		Ok(url)
	}
}

impl UrlGenerator for UrlReverser {
	fn generate(&self, route: &str, params: &UrlParams) -> Result<String> {
		self.reverse(route, params)
	}
}

impl RouteMatcher for UrlReverser {
	fn current_route(&self) -> Option<&str> {
		self.current_route.as_deref()
	}
}
