//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use pokedex::config::{AppSettings, ConfigError};
use url::Url;

/// Upstream cache parameters; present only when caching is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub(crate) ttl: Duration,
    pub(crate) capacity: u64,
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) backend_url: Url,
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) cache: Option<CacheSettings>,
}

impl ServerConfig {
    /// Construct a configuration with no timeout and no caching.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, backend_url: Url) -> Self {
        Self {
            bind_addr,
            backend_url,
            request_timeout: None,
            cache: None,
        }
    }

    /// Resolve a configuration from loaded settings.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] for a malformed backend URL or bind address.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, ConfigError> {
        let config = Self::new(settings.bind_addr()?, settings.backend_url()?)
            .with_request_timeout(settings.request_timeout());
        Ok(match settings.cache_ttl() {
            Some(ttl) => config.with_cache(ttl, settings.cache_capacity()),
            None => config,
        })
    }

    /// Bound every upstream request by `timeout`.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Cache upstream responses for `ttl`, holding at most `capacity` records.
    #[must_use]
    pub fn with_cache(mut self, ttl: Duration, capacity: u64) -> Self {
        self.cache = Some(CacheSettings { ttl, capacity });
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
