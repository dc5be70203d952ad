//! Driving port for filtered catalogue reads.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{FilterCriteria, PokemonSummary, ProxyError};

/// One filtered view over the upstream listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogueListing {
    /// Entries surviving the criteria, in result order.
    pub pokemon: Vec<PokemonSummary>,
    /// Number of entries in `pokemon`.
    pub matched: usize,
    /// Size of the unfiltered listing.
    pub total: usize,
}

impl CatalogueListing {
    /// Build a listing, deriving `matched` from the filtered entries.
    #[must_use]
    pub fn new(pokemon: Vec<PokemonSummary>, total: usize) -> Self {
        Self {
            matched: pokemon.len(),
            pokemon,
            total,
        }
    }
}

/// Domain use-case port for searching the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Fetch the listing and apply `criteria` to it.
    async fn search(&self, criteria: &FilterCriteria) -> Result<CatalogueListing, ProxyError>;
}
