//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: the proxy, catalogue, type tag and health endpoints
//! - **Schemas**: wrappers ([`PokemonSummarySchema`], [`PokemonDetailSchema`],
//!   [`CatalogueResponseSchema`]) that describe domain records without
//!   coupling them to utoipa, plus the error body and type tag shapes
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{
    CatalogueResponseSchema, PokemonDetailSchema, PokemonStatsSchema, PokemonSummarySchema,
};
use crate::inbound::http::types::TypeTagResponse;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokédex proxy API",
        description = "Browser-facing proxy over the upstream Pokémon data service, with catalogue search and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pokemons::list_pokemons,
        crate::inbound::http::pokemons::get_pokemon,
        crate::inbound::http::pokemons::pokemons_preflight,
        crate::inbound::http::pokemons::pokemon_preflight,
        crate::inbound::http::catalogue::search_catalogue,
        crate::inbound::http::catalogue::catalogue_preflight,
        crate::inbound::http::types::list_types,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PokemonSummarySchema,
        PokemonStatsSchema,
        PokemonDetailSchema,
        CatalogueResponseSchema,
        ErrorBody,
        TypeTagResponse
    )),
    tags(
        (name = "pokemon", description = "Pass-through access to upstream Pokémon records"),
        (name = "catalogue", description = "Filtering, sorting and type tags"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
