//! URL generation capabilities consumed by the data-view widgets

use crate::error::Result;
use crate::params::UrlParams;

/// Turns a route name and a parameter map into a URL
///
/// Implementations must be deterministic and must not drop or reorder the
/// parameters they encode. Any `Fn(&str, &UrlParams) -> Result<String>`
/// closure is a generator, which keeps test doubles short.
///
/// # Examples
///
/// ```
/// use reinhardt_urls::{Result, UrlGenerator, UrlParams};
///
/// let generator = |route: &str, params: &UrlParams| -> Result<String> {
///     Ok(format!("{}#{}", route, params.len()))
/// };
/// let url = generator.generate("home", &UrlParams::new().with("page", 1)).unwrap();
/// assert_eq!(url, "home#1");
/// ```
pub trait UrlGenerator {
	/// Generates the URL for `route` with `params`
	fn generate(&self, route: &str, params: &UrlParams) -> Result<String>;
}

impl<F> UrlGenerator for F
where
	F: Fn(&str, &UrlParams) -> Result<String>,
{
	fn generate(&self, route: &str, params: &UrlParams) -> Result<String> {
		self(route, params)
	}
}

/// Reports which named route matched the current request
pub trait RouteMatcher {
	/// Name of the matched route, if any
	fn current_route(&self) -> Option<&str>;
}

/// Route matcher that always reports the same route, or none
#[derive(Debug, Clone, Default)]
pub struct FixedRoute(pub Option<String>);

impl FixedRoute {
	/// Matcher reporting `name` as the current route
	pub fn new(name: impl Into<String>) -> Self {
		Self(Some(name.into()))
	}

	/// Matcher that never knows the current route
	pub fn none() -> Self {
		Self(None)
	}
}

impl RouteMatcher for FixedRoute {
	fn current_route(&self) -> Option<&str> {
		self.0.as_deref()
	}
}
