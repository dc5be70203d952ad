//! Reqwest-backed Pokémon source adapter.
//!
//! This adapter owns transport details only: endpoint construction, the
//! optional client timeout, status mapping, and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::domain::ports::{PokemonSource, PokemonSourceError};
use crate::domain::{PokemonDetail, PokemonSummary};

const COLLECTION_PATH: [&str; 2] = ["api", "pokemons"];

/// Raised when the adapter cannot be built from its settings.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamSetupError {
    /// The base URL has no hierarchical path to extend.
    #[error("backend URL `{url}` cannot carry a path")]
    NotABase {
        /// Rejected URL.
        url: String,
    },
    /// The reqwest client failed to build.
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Pokémon source performing HTTP GET requests against the upstream API.
#[derive(Debug, Clone)]
pub struct HttpPokemonSource {
    client: Client,
    collection: Url,
}

impl HttpPokemonSource {
    /// Build an adapter for `base_url`.
    ///
    /// The listing lives at `<base>/api/pokemons` and each record at
    /// `<base>/api/pokemons/<name>`. `timeout` of `None` leaves the client
    /// without a request deadline.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` cannot carry a path or the reqwest
    /// client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self, UpstreamSetupError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            collection: collection_url(base_url)?,
        })
    }

    /// Endpoint serving the full listing.
    #[must_use]
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// Endpoint serving `name`, percent-encoded as one path segment.
    #[must_use]
    pub fn item_url(&self, name: &str) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(name);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, PokemonSourceError> {
        debug!(%url, "requesting upstream");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "upstream responded");
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|error| PokemonSourceError::decode(error.to_string()))
    }
}

#[async_trait]
impl PokemonSource for HttpPokemonSource {
    async fn fetch_all(&self) -> Result<Vec<PokemonSummary>, PokemonSourceError> {
        self.get_json(self.collection.clone()).await
    }

    async fn fetch_by_name(&self, name: &str) -> Result<PokemonDetail, PokemonSourceError> {
        self.get_json(self.item_url(name)).await
    }
}

fn collection_url(base: &Url) -> Result<Url, UpstreamSetupError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| UpstreamSetupError::NotABase {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(COLLECTION_PATH);
    Ok(url)
}

fn map_transport_error(error: reqwest::Error) -> PokemonSourceError {
    PokemonSourceError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PokemonSourceError {
    let preview = body_preview(body);
    warn!(status = status.as_u16(), body = %preview, "upstream returned an error status");
    PokemonSourceError::status(status.as_u16())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
