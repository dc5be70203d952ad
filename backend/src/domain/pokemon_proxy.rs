//! Pokémon proxy service.
//!
//! Implements the [`PokemonQuery`] driving port on top of a [`PokemonSource`].
//! Each call makes at most one upstream request and never retries. Every
//! upstream outcome is normalised into a [`ProxyError`] carrying the status
//! the HTTP adapter should answer with.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{PokemonQuery, PokemonSource, PokemonSourceError};
use crate::domain::{PokemonDetail, PokemonSummary, ProxyError};

const LIST_FAILED: &str = "Failed to fetch from backend";
const DETAIL_FAILED: &str = "Failed to fetch pokemon from backend";
const INVALID_NAME: &str = "Invalid Pokemon name";
const NAME_REQUIRED: &str = "Pokemon name is required";
const NOT_FOUND: &str = "Pokemon not found";

/// Proxy service implementing [`PokemonQuery`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use pokedex::domain::PokemonProxyService;
/// use pokedex::domain::ports::{FixturePokemonSource, PokemonQuery};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let proxy = PokemonProxyService::new(Arc::new(FixturePokemonSource));
/// let err = proxy.get_by_name("  ").await.expect_err("blank names are rejected");
/// assert_eq!(err.status(), 400);
/// # });
/// ```
pub struct PokemonProxyService<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> PokemonProxyService<S> {
    /// Create a service reading from `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S: ?Sized> Clone for PokemonProxyService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

fn map_source_error(label: &str, error: PokemonSourceError) -> ProxyError {
    match error {
        PokemonSourceError::Status { status } => ProxyError::upstream_failure(label, status),
        PokemonSourceError::Transport { message } | PokemonSourceError::Decode { message } => {
            ProxyError::network_failure(label, message)
        }
    }
}

fn log_failure(operation: &str, source: &PokemonSourceError, mapped: &ProxyError) {
    error!(
        operation,
        cause = source.variant_name(),
        kind = %mapped.kind(),
        status = mapped.status(),
        details = mapped.details(),
        "upstream request failed"
    );
}

#[async_trait]
impl<S> PokemonQuery for PokemonProxyService<S>
where
    S: PokemonSource + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<PokemonSummary>, ProxyError> {
        match self.source.fetch_all().await {
            Ok(listing) => {
                info!(count = listing.len(), "fetched pokemon listing");
                Ok(listing)
            }
            Err(source) => {
                let mapped = map_source_error(LIST_FAILED, source.clone());
                log_failure("list_all", &source, &mapped);
                Err(mapped)
            }
        }
    }

    async fn get_by_name(&self, name: &str) -> Result<PokemonDetail, ProxyError> {
        if name.trim().is_empty() {
            warn!("rejected pokemon lookup without a name");
            return Err(ProxyError::bad_request(INVALID_NAME, NAME_REQUIRED));
        }

        match self.source.fetch_by_name(name).await {
            Ok(detail) => {
                info!(pokemon = name, "fetched pokemon detail");
                Ok(detail)
            }
            Err(PokemonSourceError::Status { status: 404 }) => {
                info!(pokemon = name, "pokemon not found upstream");
                Err(ProxyError::not_found(
                    NOT_FOUND,
                    format!("Pokemon with name \"{name}\" not found"),
                ))
            }
            Err(source) => {
                let mapped = map_source_error(DETAIL_FAILED, source.clone());
                log_failure("get_by_name", &source, &mapped);
                Err(mapped)
            }
        }
    }
}

#[cfg(test)]
#[path = "pokemon_proxy_tests.rs"]
mod tests;
