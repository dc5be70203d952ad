//! Filter criteria value objects and boundary normalisation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Ordering applied to the filtered list.
///
/// Payloads carry `"asc"` or `"desc"`; `null`, `""` or an absent member mean
/// [`SortOrder::Unordered`], which serialises as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Keep the input order.
    #[default]
    Unordered,
    /// A before Z, ignoring case.
    Ascending,
    /// Z before A, ignoring case.
    Descending,
}

impl SortOrder {
    /// Return whether this order keeps the input order.
    #[must_use]
    pub const fn is_unordered(&self) -> bool {
        matches!(self, Self::Unordered)
    }

    /// Directive name as accepted in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unordered => "none",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unordered => serializer.serialize_none(),
            order => serializer.serialize_str(order.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(de::Error::custom)
    }
}

/// Raised when a sort directive is not one of `asc`, `desc` or `none`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported sort order \"{value}\"; expected asc, desc or none")]
pub struct InvalidSortOrder {
    /// The rejected directive.
    pub value: String,
}

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    /// Parse a directive; blank input means [`SortOrder::Unordered`].
    ///
    /// # Examples
    /// ```
    /// use pokedex::domain::SortOrder;
    ///
    /// assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Ascending));
    /// assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::Unordered));
    /// assert!("sideways".parse::<SortOrder>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::Unordered),
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(InvalidSortOrder {
                value: s.to_owned(),
            }),
        }
    }
}

/// Parameters for one filtering pass.
///
/// Unknown type tags are accepted and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Type tags to keep; empty keeps every entry.
    #[serde(default)]
    pub selected_types: Vec<String>,
    /// Case-insensitive name substring; blank keeps every entry.
    #[serde(default)]
    pub search_term: String,
    /// Ordering applied after both filters.
    #[serde(default, skip_serializing_if = "SortOrder::is_unordered")]
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// Criteria that keep the list exactly as supplied.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Replace the selected type tags.
    #[must_use]
    pub fn with_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.selected_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the search term.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Replace the sort order.
    #[must_use]
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }
}

/// Type selection as accepted at the interface edge: one tag, a comma
/// separated list, or an array of tags.
///
/// # Examples
/// ```
/// use pokedex::domain::TypeSelection;
///
/// let single: TypeSelection = serde_json::from_str(r#""fire, water""#).unwrap();
/// assert_eq!(single.into_types(), vec!["fire", "water"]);
///
/// let many: TypeSelection = serde_json::from_str(r#"["grass", " "]"#).unwrap();
/// assert_eq!(many.into_types(), vec!["grass"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSelection {
    /// A single tag or comma separated tags.
    One(String),
    /// Several tags, each of which may itself be comma separated.
    Many(Vec<String>),
}

impl TypeSelection {
    /// Normalise into the canonical list of trimmed, non-blank tags.
    #[must_use]
    pub fn into_types(self) -> Vec<String> {
        match self {
            Self::One(raw) => split_tags(&raw),
            Self::Many(values) => values.iter().flat_map(|raw| split_tags(raw)).collect(),
        }
    }
}

impl Default for TypeSelection {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
