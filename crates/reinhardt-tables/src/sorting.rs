//! Sorting functionality for tables
//!
//! [`SortState`] holds the sortable attribute definitions of a view and the
//! orderings requested by the current request. Incoming sort strings such
//! as `-age,name` are parsed permissively: unknown attributes are dropped,
//! never reported, because they arrive from untrusted query strings.

use crate::error::{Result, TableError};
use crate::settings::SortSettings;
use std::collections::{HashMap, HashSet};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}

	/// Lowercase name, used as a CSS class
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}

	/// Parses a sort direction from a sort-string token
	///
	/// Returns `Asc` for plain tokens and `Desc` for tokens with a leading
	/// `-` (e.g., "name" -> Asc, "-name" -> Desc)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Desc, field)
		} else {
			(Self::Asc, s)
		}
	}
}

/// One active ordering: an attribute and its direction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderBy {
	/// Logical attribute name
	pub attribute: String,
	/// Direction
	pub direction: SortDirection,
}

impl OrderBy {
	/// Creates an ordering
	pub fn new(attribute: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			attribute: attribute.into(),
			direction,
		}
	}

	/// Ascending ordering on `attribute`
	pub fn asc(attribute: impl Into<String>) -> Self {
		Self::new(attribute, SortDirection::Asc)
	}

	/// Descending ordering on `attribute`
	pub fn desc(attribute: impl Into<String>) -> Self {
		Self::new(attribute, SortDirection::Desc)
	}

	/// Sort-string token: `-name` for descending, `name` otherwise
	pub fn token(&self) -> String {
		match self.direction {
			SortDirection::Desc => format!("-{}", self.attribute),
			SortDirection::Asc => self.attribute.clone(),
		}
	}
}

/// Definition of one sortable logical attribute
///
/// An attribute may expand to several physical fields; `ascending` and
/// `descending` list them for each direction.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::sorting::{SortAttribute, SortDirection};
///
/// let name = SortAttribute::new("name")
///     .ascending([("last_name", SortDirection::Asc), ("first_name", SortDirection::Asc)])
///     .descending([("last_name", SortDirection::Desc), ("first_name", SortDirection::Desc)])
///     .label("Full name");
///
/// assert_eq!(name.ascending_fields().len(), 2);
/// assert_eq!(name.default_direction(), SortDirection::Asc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortAttribute {
	name: String,
	ascending: Vec<(String, SortDirection)>,
	descending: Vec<(String, SortDirection)>,
	default_direction: SortDirection,
	label: Option<String>,
}

impl SortAttribute {
	/// Attribute sorting on the field of the same name
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			ascending: vec![(name.clone(), SortDirection::Asc)],
			descending: vec![(name.clone(), SortDirection::Desc)],
			name,
			default_direction: SortDirection::Asc,
			label: None,
		}
	}

	/// Physical fields applied when sorting ascending
	pub fn ascending<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = (S, SortDirection)>,
		S: Into<String>,
	{
		self.ascending = fields.into_iter().map(|(f, d)| (f.into(), d)).collect();
		self
	}

	/// Physical fields applied when sorting descending
	pub fn descending<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = (S, SortDirection)>,
		S: Into<String>,
	{
		self.descending = fields.into_iter().map(|(f, d)| (f.into(), d)).collect();
		self
	}

	/// Direction used the first time the attribute is clicked
	pub fn default_direction(&self) -> SortDirection {
		self.default_direction
	}

	/// Sets the direction used the first time the attribute is clicked
	pub fn with_default_direction(mut self, direction: SortDirection) -> Self {
		self.default_direction = direction;
		self
	}

	/// Sets the link label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Attribute name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Physical fields for ascending order
	pub fn ascending_fields(&self) -> &[(String, SortDirection)] {
		&self.ascending
	}

	/// Physical fields for descending order
	pub fn descending_fields(&self) -> &[(String, SortDirection)] {
		&self.descending
	}

	/// Configured label, if any
	pub fn configured_label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Configured label, or the humanised attribute name
	pub fn display_label(&self) -> String {
		self.label.clone().unwrap_or_else(|| humanize(&self.name))
	}
}

/// Turns `created_at` or `createdAt` into `Created At`
pub fn humanize(name: &str) -> String {
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut prev_lower = false;

	for ch in name.chars() {
		if matches!(ch, '_' | '-' | '.' | ' ') {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			prev_lower = false;
			continue;
		}
		if ch.is_uppercase() && prev_lower && !current.is_empty() {
			words.push(std::mem::take(&mut current));
		}
		prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
		current.push(ch);
	}
	if !current.is_empty() {
		words.push(current);
	}

	words
		.iter()
		.map(|w| {
			let mut chars = w.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

/// Splits a sort string into orderings
///
/// Tokens are trimmed and empty tokens are skipped. Attribute names are not
/// checked here; [`SortState::set_active_orderings`] does that.
///
/// # Examples
///
/// ```
/// use reinhardt_tables::sorting::{parse_sort_param, OrderBy};
///
/// let orderings = parse_sort_param("-age, name,,", ",");
/// assert_eq!(orderings, vec![OrderBy::desc("age"), OrderBy::asc("name")]);
/// ```
pub fn parse_sort_param(value: &str, separator: &str) -> Vec<OrderBy> {
	if separator.is_empty() {
		return parse_token(value).into_iter().collect();
	}
	value.split(separator).filter_map(parse_token).collect()
}

fn parse_token(token: &str) -> Option<OrderBy> {
	let token = token.trim();
	let (direction, attribute) = SortDirection::parse_from_query(token);
	if attribute.is_empty() {
		None
	} else {
		Some(OrderBy::new(attribute, direction))
	}
}

/// Sort state for one request
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::sorting::{OrderBy, SortAttribute, SortDirection, SortState};
///
/// let mut state = SortState::new().with_multi_sort(true);
/// state.register_attributes([SortAttribute::new("age"), SortAttribute::new("name")]);
/// state.set_active_orderings([
///     OrderBy::desc("age"),
///     OrderBy::asc("unknown"),
///     OrderBy::asc("name"),
/// ]);
///
/// assert_eq!(state.active_orderings(), &[OrderBy::desc("age"), OrderBy::asc("name")]);
/// assert_eq!(state.active_direction("age"), Some(SortDirection::Desc));
/// assert_eq!(state.active_direction("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
	attributes: HashMap<String, SortAttribute>,
	orderings: Vec<OrderBy>,
	multi_sort: bool,
	separator: String,
	sort_param: String,
}

impl Default for SortState {
	fn default() -> Self {
		Self {
			attributes: HashMap::new(),
			orderings: Vec::new(),
			multi_sort: false,
			separator: ",".to_string(),
			sort_param: "sort".to_string(),
		}
	}
}

impl SortState {
	/// Creates an empty single-sort state
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty state configured from `settings`
	pub fn from_settings(settings: &SortSettings) -> Self {
		Self::new()
			.with_multi_sort(settings.multi_sort)
			.with_separator(settings.separator.clone())
			.with_sort_param(settings.sort_param.clone())
	}

	/// Enables or disables multi-sort
	pub fn with_multi_sort(mut self, multi_sort: bool) -> Self {
		self.multi_sort = multi_sort;
		if !multi_sort {
			self.orderings.truncate(1);
		}
		self
	}

	/// Sets the separator between sort-string tokens
	///
	/// Attribute names must not contain it; see
	/// [`SortState::register_attributes`].
	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	/// Sets the query parameter carrying the sort string
	pub fn with_sort_param(mut self, sort_param: impl Into<String>) -> Self {
		self.sort_param = sort_param.into();
		self
	}

	/// Replaces the attribute definitions; active orderings are kept
	///
	/// Names containing the separator could never be read back from a sort
	/// string, so they are skipped with a warning. Set the separator first.
	pub fn register_attributes<I>(&mut self, definitions: I)
	where
		I: IntoIterator<Item = SortAttribute>,
	{
		let separator = self.separator.as_str();
		self.attributes = definitions
			.into_iter()
			.filter(|attr| {
				let clashes = !separator.is_empty() && attr.name.contains(separator);
				if clashes {
					tracing::warn!(
						attribute = %attr.name,
						separator,
						"skipping sort attribute containing the separator"
					);
				}
				!clashes
			})
			.map(|attr| (attr.name.clone(), attr))
			.collect();
	}

	/// Replaces the active orderings from untrusted input
	///
	/// Orderings on unregistered attributes and repeated attributes are
	/// dropped. Without multi-sort only the first remaining ordering is kept.
	pub fn set_active_orderings<I>(&mut self, orderings: I)
	where
		I: IntoIterator<Item = OrderBy>,
	{
		let mut seen = HashSet::new();
		let mut accepted = Vec::new();

		for ordering in orderings {
			if !self.attributes.contains_key(&ordering.attribute) {
				tracing::debug!(
					attribute = %ordering.attribute,
					"dropping ordering on unknown sort attribute"
				);
				continue;
			}
			if !seen.insert(ordering.attribute.clone()) {
				continue;
			}
			accepted.push(ordering);
			if !self.multi_sort {
				break;
			}
		}

		self.orderings = accepted;
	}

	/// Replaces the active orderings from trusted configuration
	///
	/// Unlike [`set_active_orderings`](Self::set_active_orderings), an
	/// unregistered attribute is a configuration error.
	pub fn try_set_active_orderings<I>(&mut self, orderings: I) -> Result<()>
	where
		I: IntoIterator<Item = OrderBy>,
	{
		let orderings: Vec<OrderBy> = orderings.into_iter().collect();
		if let Some(unknown) = orderings
			.iter()
			.find(|o| !self.attributes.contains_key(&o.attribute))
		{
			return Err(TableError::Configuration(format!(
				"unknown sort attribute: {}",
				unknown.attribute
			)));
		}
		self.set_active_orderings(orderings);
		Ok(())
	}

	/// Parses `value` as a sort string and applies it permissively
	pub fn set_active_orderings_from_param(&mut self, value: &str) {
		let orderings = parse_sort_param(value, &self.separator);
		self.set_active_orderings(orderings);
	}

	/// Applies the sort parameter from a request's query parameters
	pub fn apply_query(&mut self, query: &HashMap<String, String>) {
		if let Some(value) = query.get(&self.sort_param) {
			self.set_active_orderings_from_param(value);
		}
	}

	/// Direction of `attribute` if it is actively sorted
	pub fn active_direction(&self, attribute: &str) -> Option<SortDirection> {
		self.orderings
			.iter()
			.find(|o| o.attribute == attribute)
			.map(|o| o.direction)
	}

	/// Active orderings in precedence order
	pub fn active_orderings(&self) -> &[OrderBy] {
		&self.orderings
	}

	/// Expands the active orderings into physical `(field, direction)` pairs
	///
	/// A field already contributed by a higher-precedence ordering is not
	/// repeated.
	pub fn physical_orderings(&self) -> Vec<(String, SortDirection)> {
		let mut seen = HashSet::new();
		let mut fields = Vec::new();

		for ordering in &self.orderings {
			let Some(attr) = self.attributes.get(&ordering.attribute) else {
				continue;
			};
			let expanded = match ordering.direction {
				SortDirection::Asc => &attr.ascending,
				SortDirection::Desc => &attr.descending,
			};
			for (field, direction) in expanded {
				if seen.insert(field.clone()) {
					fields.push((field.clone(), *direction));
				}
			}
		}

		fields
	}

	/// Definition registered under `name`
	pub fn attribute(&self, name: &str) -> Option<&SortAttribute> {
		self.attributes.get(name)
	}

	/// Whether `name` is a registered attribute
	pub fn has_attribute(&self, name: &str) -> bool {
		self.attributes.contains_key(name)
	}

	/// Registered attribute names, sorted
	pub fn attribute_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Whether more than one ordering may be active
	pub fn multi_sort(&self) -> bool {
		self.multi_sort
	}

	/// Separator between sort-string tokens
	pub fn separator(&self) -> &str {
		&self.separator
	}

	/// Query parameter carrying the sort string
	pub fn sort_param(&self) -> &str {
		&self.sort_param
	}
}
