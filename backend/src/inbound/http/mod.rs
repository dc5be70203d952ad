//! HTTP inbound adapter exposing the proxy endpoints.

use actix_web::web;

pub mod catalogue;
pub mod cors;
pub mod error;
pub mod health;
pub mod pokemons;
pub mod schemas;
pub mod state;
pub mod types;

pub use error::ApiResult;

/// Register the `/api` scope and the health probes.
///
/// Expects `web::Data<HttpState>` and `web::Data<HealthState>` to be
/// registered on the application.
///
/// [`HttpState`]: state::HttpState
/// [`HealthState`]: health::HealthState
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(pokemons::list_pokemons)
            .service(pokemons::get_pokemon_without_name)
            .service(pokemons::get_pokemon)
            .service(pokemons::pokemons_preflight)
            .service(pokemons::pokemon_preflight)
            .service(catalogue::search_catalogue)
            .service(catalogue::catalogue_preflight)
            .service(types::list_types),
    )
    .service(health::ready)
    .service(health::live);
}
