//! In-process response cache for the upstream source.
//!
//! [`CachedPokemonSource`] decorates any [`PokemonSource`] with moka caches
//! keyed by resource identity: the listing under `"all"` and each record under
//! its requested name. Concurrent misses for one key share a single upstream
//! call. Failures are returned to every waiter and never stored.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::domain::ports::{PokemonSource, PokemonSourceError};
use crate::domain::{PokemonDetail, PokemonSummary};

const LISTING_KEY: &str = "all";

/// Caching decorator for a [`PokemonSource`].
pub struct CachedPokemonSource<S: ?Sized> {
    inner: Arc<S>,
    listing: Cache<&'static str, Vec<PokemonSummary>>,
    details: Cache<String, PokemonDetail>,
}

impl<S: ?Sized> CachedPokemonSource<S> {
    /// Wrap `inner`, keeping at most `max_capacity` records for `ttl`.
    #[must_use]
    pub fn with_ttl(inner: Arc<S>, max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner,
            listing: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            details: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Drop the cached listing.
    pub async fn invalidate_listing(&self) {
        self.listing.invalidate(LISTING_KEY).await;
    }

    /// Drop the cached record for `name`.
    pub async fn invalidate(&self, name: &str) {
        self.details.invalidate(name).await;
    }

    /// Drop every cached response.
    pub fn invalidate_all(&self) {
        self.listing.invalidate_all();
        self.details.invalidate_all();
    }
}

fn unshare(error: Arc<PokemonSourceError>) -> PokemonSourceError {
    Arc::unwrap_or_clone(error)
}

#[async_trait]
impl<S> PokemonSource for CachedPokemonSource<S>
where
    S: PokemonSource + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<PokemonSummary>, PokemonSourceError> {
        self.listing
            .try_get_with(LISTING_KEY, async {
                debug!(key = LISTING_KEY, "cache miss");
                self.inner.fetch_all().await
            })
            .await
            .map_err(unshare)
    }

    async fn fetch_by_name(&self, name: &str) -> Result<PokemonDetail, PokemonSourceError> {
        self.details
            .try_get_with(name.to_owned(), async {
                debug!(key = name, "cache miss");
                self.inner.fetch_by_name(name).await
            })
            .await
            .map_err(unshare)
    }
}
