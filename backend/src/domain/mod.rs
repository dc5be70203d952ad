//! Domain primitives, services and ports.
//!
//! Purpose: hold the Pokémon records, the pure catalogue filter engine, and
//! the proxy use-cases behind the HTTP surface. Nothing here knows about
//! actix or reqwest; adapters live in `inbound` and `outbound`.
//!
//! Public surface:
//! - PokemonSummary / PokemonDetail / PokemonStats: upstream records.
//! - PokemonType: known type tags and their display colours.
//! - FilterCriteria, SortOrder, TypeSelection, FilterState and the engine
//!   functions (`apply_filters_and_sort` and its stages).
//! - ProxyError / ProxyErrorKind: structured proxy failures.
//! - PokemonProxyService / CatalogueService: driving port implementations.

pub mod catalogue;
pub mod catalogue_service;
pub mod error;
pub mod pokemon;
pub mod pokemon_proxy;
pub mod pokemon_type;
pub mod ports;
pub mod trace_id;

pub use self::catalogue::{
    FilterCriteria, FilterState, InvalidSortOrder, SortOrder, TypeSelection,
    apply_filters_and_sort, filter_by_search_term, filter_by_types, sort_by_name,
};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{ProxyError, ProxyErrorKind};
pub use self::pokemon::{PokemonDetail, PokemonStats, PokemonSummary};
pub use self::pokemon_proxy::PokemonProxyService;
pub use self::pokemon_type::{
    DEFAULT_TYPE_COLOR, PokemonType, UnknownPokemonType, color_for_tag,
};
pub use self::trace_id::TraceId;
