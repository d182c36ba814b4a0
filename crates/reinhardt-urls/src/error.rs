//! Error types for URL generation

use thiserror::Error;

/// Errors raised while turning a route name and parameters into a URL
#[derive(Debug, Error)]
pub enum UrlError {
	/// No route is registered under the requested name
	#[error("Route not found: {0}")]
	RouteNotFound(String),

	/// No explicit route was given and no route matched the current request
	#[error("No route given and no current route is known")]
	NoCurrentRoute,

	/// A path placeholder had no value in the parameter map
	#[error("Missing parameter '{param}' for route '{route}'")]
	MissingParam {
		/// Route being reversed
		route: String,
		/// Placeholder without a value
		param: String,
	},

	/// A path parameter value contains characters that would alter the path
	#[error("Invalid parameter '{name}': contains dangerous characters")]
	InvalidParam {
		/// Offending parameter name
		name: String,
	},

	/// Query string encoding failed
	#[error("Query encoding error: {0}")]
	Encode(#[from] serde_urlencoded::ser::Error),
}

/// Result type for URL generation
pub type Result<T> = std::result::Result<T, UrlError>;
