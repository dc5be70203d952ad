//! Pokémon records exchanged with the upstream data service.
//!
//! Both records are immutable snapshots rebuilt on every upstream response.
//! Only the members the catalogue engine reads are typed; everything else the
//! upstream sends is kept as raw JSON so proxied bodies round-trip unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalogue entry as listed by `GET /api/pokemons`.
///
/// ## Invariants
/// - `name` is non-empty and unique within one upstream listing. Comparisons
///   use the lower-cased form; the original casing is kept for display.
/// - `types` holds one or two type tags in practice and compares
///   case-insensitively.
///
/// # Examples
/// ```
/// use pokedex::domain::PokemonSummary;
///
/// let entry = PokemonSummary::new("Charmander", ["fire"], "");
/// assert!(entry.has_type("FIRE"));
/// assert_eq!(entry.name_key(), "charmander");
/// assert_eq!(entry.image(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    /// Display name, also the lookup key for the detail endpoint.
    pub name: String,
    /// Ordered type tags, e.g. `["grass", "poison"]`.
    pub types: Vec<String>,
    /// Every other upstream member, `image` included, exactly as sent.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PokemonSummary {
    /// Build a summary; a blank `image` leaves the member out.
    pub fn new<I, T>(name: impl Into<String>, types: I, image: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let image = image.into();
        let mut extra = BTreeMap::new();
        if !image.is_empty() {
            extra.insert("image".to_owned(), Value::String(image));
        }
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            extra,
        }
    }

    /// Artwork URI; empty when the upstream sent none.
    #[must_use]
    pub fn image(&self) -> &str {
        self.extra
            .get("image")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Lower-cased name used for searching and ordering.
    #[must_use]
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Return whether any of this entry's tags equals `tag`, ignoring case.
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.types.iter().any(|own| own.to_lowercase() == wanted)
    }
}

impl AsRef<Self> for PokemonSummary {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Typed view of the `stats` member of a [`PokemonDetail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PokemonStats {
    /// Hit points.
    pub hp: u32,
    /// Physical attack.
    pub attack: u32,
    /// Physical defence.
    pub defense: u32,
    /// Special attack.
    pub special_attack: u32,
    /// Special defence.
    pub special_defense: u32,
    /// Speed.
    pub speed: u32,
}

/// Extended record returned by `GET /api/pokemons/{name}`.
///
/// The proxy never reshapes a detail body, so the record holds the upstream
/// JSON object as received and exposes read-only accessors over it.
///
/// # Examples
/// ```
/// use pokedex::domain::PokemonDetail;
/// use serde_json::json;
///
/// let detail = PokemonDetail::new("eevee")
///     .with("id", 133)
///     .with("types", json!(["normal"]))
///     .with("base_experience", json!(null));
/// assert_eq!(detail.id(), Some(133));
/// assert_eq!(detail.types(), ["normal"]);
/// assert_eq!(detail.get("base_experience"), Some(&json!(null)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonDetail(Map<String, Value>);

impl PokemonDetail {
    /// Start a record holding only `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self::default().with("name", name)
    }

    /// Set `key`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw member lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Name the record was requested by, when the upstream sent a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// National dex number, when the upstream sent a non-negative integer.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.get("id").and_then(Value::as_u64)
    }

    /// String type tags, skipping anything else.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        self.string_list("types")
    }

    /// String artwork URIs, most prominent first.
    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        self.string_list("images")
    }

    /// Base stats, when the `stats` member has the documented shape.
    #[must_use]
    pub fn stats(&self) -> Option<PokemonStats> {
        self.get("stats")
            .and_then(|stats| PokemonStats::deserialize(stats).ok())
    }

    /// Consume the record, yielding the upstream members.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    fn string_list(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for PokemonDetail {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
