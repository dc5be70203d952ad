//! Upstream Pokémon data service adapter.

mod http_source;

pub use http_source::{HttpPokemonSource, UpstreamSetupError};
