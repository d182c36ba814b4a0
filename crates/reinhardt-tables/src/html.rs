//! Minimal HTML assembly used by the widgets
//!
//! [`AttributeMap`] keeps attributes in insertion order and merges them by
//! key, except for `class`, whose tokens accumulate. [`Tag`] renders a
//! single element.

use indexmap::IndexMap;
use std::borrow::Cow;

/// Elements rendered without a closing tag
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Value of a single HTML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// Plain value, escaped on render
	Text(String),
	/// Boolean attribute: present when true, omitted when false
	Bool(bool),
	/// Space-separated token list
	List(Vec<String>),
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Vec<String>> for AttrValue {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

impl From<Vec<&str>> for AttrValue {
	fn from(value: Vec<&str>) -> Self {
		Self::List(value.into_iter().map(str::to_string).collect())
	}
}

/// Ordered HTML attribute map
///
/// Merge rule: a later value replaces an earlier one under the same key,
/// except for `class`, where the token lists are concatenated and repeated
/// tokens are dropped.
///
/// # Examples
///
/// ```
/// use reinhardt_tables::html::AttributeMap;
///
/// let mut attrs = AttributeMap::new().with("id", "grid").with("class", "table");
/// attrs.merge(&AttributeMap::new().with("id", "users").with("class", "table striped"));
///
/// assert_eq!(attrs.render(), r#" id="users" class="table striped""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
	inner: IndexMap<String, AttrValue>,
}

impl AttributeMap {
	/// Creates an empty map
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key`, replacing any previous value
	///
	/// `class` values are always stored as token lists.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
		let key = key.into();
		let value = value.into();
		if key == "class" {
			let tokens = class_tokens(&value);
			self.inner.insert(key, AttrValue::List(Vec::new()));
			self.add_classes(tokens);
		} else {
			self.inner.insert(key, value);
		}
	}

	/// Builder-style [`set`](Self::set)
	pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.set(key, value);
		self
	}

	/// Appends class tokens, skipping ones already present
	pub fn add_class(&mut self, class: &str) {
		self.add_classes(class.split_whitespace().map(str::to_string).collect());
	}

	fn add_classes(&mut self, tokens: Vec<String>) {
		let entry = self
			.inner
			.entry("class".to_string())
			.or_insert_with(|| AttrValue::List(Vec::new()));
		if let AttrValue::List(list) = entry {
			for token in tokens {
				if !list.contains(&token) {
					list.push(token);
				}
			}
		}
	}

	/// Merges `other` into this map following the class-concatenation rule
	pub fn merge(&mut self, other: &AttributeMap) {
		for (key, value) in &other.inner {
			if key == "class" {
				self.add_classes(class_tokens(value));
			} else {
				self.inner.insert(key.clone(), value.clone());
			}
		}
	}

	/// Returns the value under `key`
	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.inner.get(key)
	}

	/// Removes `key`
	pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
		self.inner.shift_remove(key)
	}

	/// Returns true when there are no attributes
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Renders the attributes, each preceded by a space
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (key, value) in &self.inner {
			match value {
				AttrValue::Text(text) => {
					out.push_str(&format!(" {}=\"{}\"", key, escape(text)));
				}
				AttrValue::Bool(true) => {
					out.push(' ');
					out.push_str(key);
				}
				AttrValue::Bool(false) => {}
				AttrValue::List(list) if list.is_empty() => {}
				AttrValue::List(list) => {
					out.push_str(&format!(" {}=\"{}\"", key, escape(&list.join(" "))));
				}
			}
		}
		out
	}
}

fn class_tokens(value: &AttrValue) -> Vec<String> {
	match value {
		AttrValue::Text(text) => text.split_whitespace().map(str::to_string).collect(),
		AttrValue::List(list) => list
			.iter()
			.flat_map(|c| c.split_whitespace())
			.map(str::to_string)
			.collect(),
		AttrValue::Bool(_) => Vec::new(),
	}
}

/// A single HTML element
///
/// # Examples
///
/// ```
/// use reinhardt_tables::html::Tag;
///
/// let html = Tag::new("a").attr("href", "/?page=2").text("2 & more").render();
/// assert_eq!(html, r#"<a href="/?page=2">2 &amp; more</a>"#);
///
/// assert_eq!(Tag::new("input").attr("type", "checkbox").render(), r#"<input type="checkbox">"#);
/// ```
#[derive(Debug, Clone)]
pub struct Tag {
	name: String,
	attrs: AttributeMap,
	content: String,
}

impl Tag {
	/// Creates an empty element
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attrs: AttributeMap::new(),
			content: String::new(),
		}
	}

	/// Sets an attribute
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attrs.set(key, value);
		self
	}

	/// Merges an attribute map
	pub fn attrs(mut self, attrs: &AttributeMap) -> Self {
		self.attrs.merge(attrs);
		self
	}

	/// Adds class tokens
	pub fn class(mut self, class: &str) -> Self {
		self.attrs.add_class(class);
		self
	}

	/// Appends escaped text content
	pub fn text(mut self, text: &str) -> Self {
		self.content.push_str(&escape(text));
		self
	}

	/// Appends raw HTML content
	pub fn html(mut self, html: &str) -> Self {
		self.content.push_str(html);
		self
	}

	/// Renders the element
	pub fn render(&self) -> String {
		let attrs = self.attrs.render();
		if VOID_ELEMENTS.contains(&self.name.as_str()) {
			format!("<{}{}>", self.name, attrs)
		} else {
			format!("<{}{}>{}</{}>", self.name, attrs, self.content, self.name)
		}
	}
}
