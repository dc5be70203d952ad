//! Service configuration loaded via OrthoConfig.
//!
//! Values layer defaults, an optional config file, `POKEDEX_*` environment
//! variables and command-line flags, in increasing precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CACHE_CAPACITY: u64 = 1024;

/// Raised when a configured value cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `backend_url` is not an absolute URL.
    #[error("invalid backend URL `{value}`: {source}")]
    BackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings for the proxy service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POKEDEX")]
pub struct AppSettings {
    /// Base URL of the upstream Pokémon data service.
    #[ortho_config(default = DEFAULT_BACKEND_URL.to_owned())]
    pub backend_url: String,
    /// Socket address the HTTP server listens on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Client-level upstream request timeout in milliseconds.
    pub request_timeout_ms: Option<u64>,
    /// Upstream response cache lifetime in seconds; unset disables caching.
    pub cache_ttl_secs: Option<u64>,
    /// Maximum number of cached upstream records.
    #[ortho_config(default = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: u64,
}

impl AppSettings {
    /// Upstream base URL, defaulting to the local development backend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BackendUrl`] when the value does not parse.
    pub fn backend_url(&self) -> Result<Url, ConfigError> {
        let value = self.backend_url.as_str();
        Url::parse(value).map_err(|source| ConfigError::BackendUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Listen address, defaulting to all interfaces on port 8080.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = self.bind_addr.as_str();
        value.parse().map_err(|source| ConfigError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Upstream request timeout; `None` when unset or zero.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Cache lifetime; `None` when unset or zero.
    #[must_use]
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Cache capacity in records.
    #[must_use]
    pub const fn cache_capacity(&self) -> u64 {
        self.cache_capacity
    }
}
