//! Type-tag catalogue endpoint.
//!
//! ```text
//! GET /api/types
//! ```

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PokemonType;
use crate::inbound::http::cors::with_cors;

/// One known type tag and its display colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TypeTagResponse {
    /// Lower-case tag.
    #[schema(example = "fire")]
    pub name: String,
    /// Hex colour used when rendering the tag.
    #[schema(example = "#FF6B6B")]
    pub color: String,
}

impl From<PokemonType> for TypeTagResponse {
    fn from(kind: PokemonType) -> Self {
        Self {
            name: kind.as_str().to_owned(),
            color: kind.color().to_owned(),
        }
    }
}

/// List the known type tags in catalogue order.
#[utoipa::path(
    get,
    path = "/api/types",
    responses((status = 200, description = "Known type tags", body = [TypeTagResponse])),
    tags = ["catalogue"],
    operation_id = "listTypes"
)]
#[get("/types")]
pub async fn list_types() -> HttpResponse {
    let tags: Vec<TypeTagResponse> = PokemonType::ALL.into_iter().map(Into::into).collect();
    with_cors(&mut HttpResponse::Ok()).json(tags)
}
