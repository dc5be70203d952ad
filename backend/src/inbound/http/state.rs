//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CatalogueQuery, PokemonQuery, PokemonSource};
use crate::domain::{CatalogueService, PokemonProxyService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub pokemon: Arc<dyn PokemonQuery>,
    pub catalogue: Arc<dyn CatalogueQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(pokemon: Arc<dyn PokemonQuery>, catalogue: Arc<dyn CatalogueQuery>) -> Self {
        Self { pokemon, catalogue }
    }

    /// Wire the proxy and catalogue services over one upstream source.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use pokedex::domain::ports::FixturePokemonSource;
    /// use pokedex::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::from_source(Arc::new(FixturePokemonSource));
    /// let _pokemon = state.pokemon.clone();
    /// ```
    pub fn from_source(source: Arc<dyn PokemonSource>) -> Self {
        let proxy = Arc::new(PokemonProxyService::new(source));
        let catalogue = Arc::new(CatalogueService::new(Arc::clone(&proxy)));
        Self::new(proxy, catalogue)
    }
}
