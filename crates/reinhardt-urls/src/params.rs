//! Ordered URL parameter maps

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// A single URL parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
	/// String value
	Str(String),
	/// Integer value
	Int(i64),
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(s) => f.write_str(s),
			Self::Int(i) => write!(f, "{}", i),
		}
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<&String> for ParamValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<usize> for ParamValue {
	fn from(value: usize) -> Self {
		match i64::try_from(value) {
			Ok(v) => Self::Int(v),
			Err(_) => Self::Str(value.to_string()),
		}
	}
}

/// Insertion-ordered parameter map passed to a [`UrlGenerator`](crate::UrlGenerator)
///
/// Re-inserting an existing key replaces its value but keeps its original
/// position, so the encoded query string is stable across merges.
///
/// # Examples
///
/// ```
/// use reinhardt_urls::UrlParams;
///
/// let mut params = UrlParams::new();
/// params.insert("status", "open");
/// params.insert("page", 2_usize);
/// params.insert("status", "closed");
///
/// let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec!["status", "page"]);
/// assert_eq!(params.get("status").unwrap().to_string(), "closed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
	inner: IndexMap<String, ParamValue>,
}

impl UrlParams {
	/// Creates an empty parameter map
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces a parameter
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
		self.inner.insert(key.into(), value.into());
	}

	/// Builder-style [`insert`](Self::insert)
	pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Merges `other` into this map; values from `other` win
	pub fn merge(&mut self, other: &UrlParams) {
		for (key, value) in &other.inner {
			self.inner.insert(key.clone(), value.clone());
		}
	}

	/// Returns the value for `key`
	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.inner.get(key)
	}

	/// Returns whether `key` is present
	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	/// Removes `key`, preserving the order of the remaining entries
	pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
		self.inner.shift_remove(key)
	}

	/// Iterates over the parameters in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.inner.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of parameters
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns true when there are no parameters
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for UrlParams
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (key, value) in iter {
			params.insert(key, value);
		}
		params
	}
}

impl From<HashMap<String, String>> for UrlParams {
	/// Keys are sorted so that the resulting order is deterministic.
	fn from(map: HashMap<String, String>) -> Self {
		let mut entries: Vec<_> = map.into_iter().collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));
		entries.into_iter().collect()
	}
}
