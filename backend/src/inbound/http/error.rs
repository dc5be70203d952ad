//! HTTP adapter mapping for proxy errors.
//!
//! Keeps [`ProxyError`] transport agnostic while letting actix handlers turn
//! it into a status line, the CORS header set and a `{ error, details }` body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ProxyError;
use crate::inbound::http::cors::with_cors;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ProxyError>;

/// JSON body sent with every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Short label naming the failed operation.
    #[schema(example = "Failed to fetch from backend")]
    pub error: String,
    /// Human readable explanation.
    #[schema(example = "Backend responded with status: 500")]
    pub details: String,
}

impl From<&ProxyError> for ErrorBody {
    fn from(error: &ProxyError) -> Self {
        Self {
            error: error.message().to_owned(),
            details: error.details().to_owned(),
        }
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        with_cors(&mut HttpResponse::build(self.status_code())).json(ErrorBody::from(self))
    }
}
