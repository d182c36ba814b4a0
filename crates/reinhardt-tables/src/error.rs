//! Error types for reinhardt-tables

use reinhardt_urls::UrlError;
use thiserror::Error;

/// Errors raised by pagination, sorting and view rendering
#[derive(Debug, Error)]
pub enum TableError {
	/// A setter received a value outside its domain
	#[error("Validation error: {field}: {message}")]
	Validation {
		/// Field that failed validation
		field: String,
		/// Validation error message
		message: String,
	},

	/// The widget configuration refers to something that is not registered
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// URL generation failed
	#[error(transparent)]
	Url(#[from] UrlError),

	/// Settings document could not be parsed
	#[error("Settings error: {0}")]
	Settings(#[from] toml::de::Error),
}

impl TableError {
	pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
		Self::Validation {
			field: field.to_string(),
			message: message.into(),
		}
	}
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
