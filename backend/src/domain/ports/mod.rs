//! Domain ports and supporting types for the hexagonal boundary.
//!
//! `PokemonSource` is driven by the domain and implemented by the upstream
//! HTTP adapter and its cache decorator. `PokemonQuery` and `CatalogueQuery`
//! drive the domain from the HTTP handlers.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod pokemon_query;
mod pokemon_source;

#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::{CatalogueListing, CatalogueQuery};
#[cfg(test)]
pub use pokemon_query::MockPokemonQuery;
pub use pokemon_query::PokemonQuery;
#[cfg(test)]
pub use pokemon_source::MockPokemonSource;
pub use pokemon_source::{FixturePokemonSource, PokemonSource, PokemonSourceError};
