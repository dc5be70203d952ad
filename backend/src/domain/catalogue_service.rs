//! Catalogue search use-case.
//!
//! Fetches the full listing through [`PokemonQuery`] and runs the pure filter
//! engine over it. Upstream failures pass through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{CatalogueListing, CatalogueQuery, PokemonQuery};
use crate::domain::{FilterCriteria, ProxyError, apply_filters_and_sort};

/// Service implementing [`CatalogueQuery`].
pub struct CatalogueService<Q: ?Sized> {
    pokemon: Arc<Q>,
}

impl<Q: ?Sized> CatalogueService<Q> {
    /// Create a service listing through `pokemon`.
    pub fn new(pokemon: Arc<Q>) -> Self {
        Self { pokemon }
    }
}

impl<Q: ?Sized> Clone for CatalogueService<Q> {
    fn clone(&self) -> Self {
        Self {
            pokemon: Arc::clone(&self.pokemon),
        }
    }
}

#[async_trait]
impl<Q> CatalogueQuery for CatalogueService<Q>
where
    Q: PokemonQuery + ?Sized,
{
    async fn search(&self, criteria: &FilterCriteria) -> Result<CatalogueListing, ProxyError> {
        let listing = self.pokemon.list_all().await?;
        let total = listing.len();
        let matched = apply_filters_and_sort(&listing, criteria);
        debug!(
            total,
            matched = matched.len(),
            search = criteria.search_term.as_str(),
            types = ?criteria.selected_types,
            sort = %criteria.sort_order,
            "filtered catalogue"
        );
        Ok(CatalogueListing::new(matched, total))
    }
}
