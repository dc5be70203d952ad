//! Driving port for the proxied Pokémon endpoints.
//!
//! HTTP handlers depend on this trait rather than the upstream adapter, so
//! every failure they see is already a [`ProxyError`].

use async_trait::async_trait;

use crate::domain::{PokemonDetail, PokemonSummary, ProxyError};

/// Domain use-case port for listing and looking up Pokémon.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonQuery: Send + Sync {
    /// Return the upstream listing as supplied.
    async fn list_all(&self) -> Result<Vec<PokemonSummary>, ProxyError>;

    /// Return one record; `name` is validated before any upstream call.
    async fn get_by_name(&self, name: &str) -> Result<PokemonDetail, ProxyError>;
}
