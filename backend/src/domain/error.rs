//! Domain-level proxy error type.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to a status
//! line, the fixed CORS header set, and a `{ "error", "details" }` body.

use std::fmt;

/// Failure category reported by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyErrorKind {
    /// The caller supplied invalid input; never forwarded upstream.
    BadRequest,
    /// The upstream reported that the requested item does not exist.
    NotFound,
    /// The upstream answered with an error status.
    UpstreamFailure,
    /// The upstream could not be reached or its reply could not be read.
    NetworkFailure,
}

impl ProxyErrorKind {
    /// Stable identifier used in structured log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::UpstreamFailure => "upstream_failure",
            Self::NetworkFailure => "network_failure",
        }
    }
}

impl fmt::Display for ProxyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail text used when a transport failure carries no message.
pub const UNKNOWN_ERROR_DETAILS: &str = "Unknown error";

/// Structured failure returned by every proxy operation.
///
/// `message` is the short label shown as `error`; `details` is the human
/// readable explanation.
///
/// # Examples
/// ```
/// use pokedex::domain::{ProxyError, ProxyErrorKind};
///
/// let err = ProxyError::upstream_failure("Failed to fetch from backend", 503);
/// assert_eq!(err.kind(), ProxyErrorKind::UpstreamFailure);
/// assert_eq!(err.status(), 503);
/// assert_eq!(err.details(), "Backend responded with status: 503");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}: {details}")]
pub struct ProxyError {
    kind: ProxyErrorKind,
    status: u16,
    message: String,
    details: String,
}

impl ProxyError {
    /// Invalid caller input, reported as 400.
    pub fn bad_request(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: ProxyErrorKind::BadRequest,
            status: 400,
            message: message.into(),
            details: details.into(),
        }
    }

    /// Missing upstream item, reported as 404.
    pub fn not_found(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: ProxyErrorKind::NotFound,
            status: 404,
            message: message.into(),
            details: details.into(),
        }
    }

    /// Upstream error status, mirrored as-is.
    pub fn upstream_failure(message: impl Into<String>, status: u16) -> Self {
        Self {
            kind: ProxyErrorKind::UpstreamFailure,
            status,
            message: message.into(),
            details: format!("Backend responded with status: {status}"),
        }
    }

    /// Transport failure, reported as 500.
    ///
    /// A blank `cause` is replaced with [`UNKNOWN_ERROR_DETAILS`].
    ///
    /// # Examples
    /// ```
    /// use pokedex::domain::ProxyError;
    ///
    /// let err = ProxyError::network_failure("Failed to fetch from backend", "  ");
    /// assert_eq!(err.status(), 500);
    /// assert_eq!(err.details(), "Unknown error");
    /// ```
    pub fn network_failure(message: impl Into<String>, cause: impl Into<String>) -> Self {
        let cause = cause.into();
        let details = if cause.trim().is_empty() {
            UNKNOWN_ERROR_DETAILS.to_owned()
        } else {
            cause
        };
        Self {
            kind: ProxyErrorKind::NetworkFailure,
            status: 500,
            message: message.into(),
            details,
        }
    }

    /// Failure category.
    #[must_use]
    pub const fn kind(&self) -> ProxyErrorKind {
        self.kind
    }

    /// HTTP status the adapter should answer with.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Short label for the `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Human readable explanation for the `details` field.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}
