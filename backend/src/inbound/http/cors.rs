//! Permissive CORS header set shared by every proxied endpoint.
//!
//! The same three headers go on successes, errors and preflight replies.

use actix_web::http::header::{self, HeaderName};
use actix_web::{HttpResponse, HttpResponseBuilder};

/// Any origin may read proxied responses.
pub const ALLOW_ORIGIN: &str = "*";

/// Methods advertised to browsers.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Request headers advertised to browsers.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Header tuples making up the CORS set.
pub const fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
        (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
    ]
}

/// Insert the CORS set into `builder`.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use pokedex::inbound::http::cors::with_cors;
///
/// let response = with_cors(&mut HttpResponse::Ok()).finish();
/// assert_eq!(
///     response.headers().get("access-control-allow-origin").map(|v| v.as_bytes()),
///     Some(&b"*"[..])
/// );
/// ```
pub fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    for pair in cors_headers() {
        builder.insert_header(pair);
    }
    builder
}

/// Empty 200 reply to a CORS preflight.
#[must_use]
pub fn preflight_response() -> HttpResponse {
    with_cors(&mut HttpResponse::Ok()).finish()
}
