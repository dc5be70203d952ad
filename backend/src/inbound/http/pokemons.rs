//! Proxied Pokémon endpoints.
//!
//! ```text
//! GET     /api/pokemons
//! GET     /api/pokemons/{name}
//! OPTIONS /api/pokemons
//! OPTIONS /api/pokemons/{name}
//! ```
//!
//! Successful bodies are forwarded as the upstream sent them.

use actix_web::{HttpResponse, get, options, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::cors::{preflight_response, with_cors};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{PokemonDetailSchema, PokemonSummarySchema};
use crate::inbound::http::state::HttpState;

/// List every Pokémon known upstream.
#[utoipa::path(
    get,
    path = "/api/pokemons",
    responses(
        (status = 200, description = "Upstream listing", body = [PokemonSummarySchema]),
        (status = 500, description = "Upstream unreachable or failing", body = ErrorBody),
        (status = 503, description = "Upstream status mirrored", body = ErrorBody)
    ),
    tags = ["pokemon"],
    operation_id = "listPokemons"
)]
#[get("/pokemons")]
pub async fn list_pokemons(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let listing = state.pokemon.list_all().await?;
    Ok(with_cors(&mut HttpResponse::Ok()).json(listing))
}

/// Fetch one Pokémon by name.
#[utoipa::path(
    get,
    path = "/api/pokemons/{name}",
    params(("name" = String, Path, description = "Pokémon name as listed upstream")),
    responses(
        (status = 200, description = "Upstream record", body = PokemonDetailSchema),
        (status = 400, description = "Missing name", body = ErrorBody),
        (status = 404, description = "Unknown name", body = ErrorBody),
        (status = 500, description = "Upstream unreachable or failing", body = ErrorBody)
    ),
    tags = ["pokemon"],
    operation_id = "getPokemon"
)]
#[get("/pokemons/{name}")]
pub async fn get_pokemon(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let detail = state.pokemon.get_by_name(name.as_str()).await?;
    Ok(with_cors(&mut HttpResponse::Ok()).json(detail))
}

/// `GET /api/pokemons/` carries an empty name, which the proxy rejects.
#[get("/pokemons/")]
pub async fn get_pokemon_without_name(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let detail = state.pokemon.get_by_name("").await?;
    Ok(with_cors(&mut HttpResponse::Ok()).json(detail))
}

/// CORS preflight for the listing.
#[utoipa::path(
    options,
    path = "/api/pokemons",
    responses((status = 200, description = "Empty preflight reply with CORS headers")),
    tags = ["pokemon"],
    operation_id = "preflightPokemons"
)]
#[options("/pokemons")]
pub async fn pokemons_preflight() -> HttpResponse {
    preflight_response()
}

/// CORS preflight for a single record.
#[utoipa::path(
    options,
    path = "/api/pokemons/{name}",
    params(("name" = String, Path, description = "Pokémon name")),
    responses((status = 200, description = "Empty preflight reply with CORS headers")),
    tags = ["pokemon"],
    operation_id = "preflightPokemon"
)]
#[options("/pokemons/{name}")]
pub async fn pokemon_preflight() -> HttpResponse {
    preflight_response()
}

#[cfg(test)]
mod tests {
    //! Handler coverage over mocked query ports.
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockCatalogueQuery, MockPokemonQuery};
    use crate::domain::{PokemonDetail, PokemonSummary, ProxyError};

    fn state_with(pokemon: MockPokemonQuery) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(pokemon),
            Arc::new(MockCatalogueQuery::new()),
        ))
    }

    fn app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).service(
            web::scope("/api")
                .service(list_pokemons)
                .service(get_pokemon_without_name)
                .service(get_pokemon)
                .service(pokemons_preflight)
                .service(pokemon_preflight),
        )
    }

    #[actix_web::test]
    async fn list_forwards_the_listing() {
        let mut pokemon = MockPokemonQuery::new();
        pokemon
            .expect_list_all()
            .times(1)
            .return_once(|| Ok(vec![PokemonSummary::new("eevee", ["normal"], "e.png")]));
        let app = test::init_service(app(state_with(pokemon))).await;

        let request = test::TestRequest::get().uri("/api/pokemons").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("access-control-allow-origin"));
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!([{ "name": "eevee", "types": ["normal"], "image": "e.png" }])
        );
    }

    #[actix_web::test]
    async fn detail_decodes_the_path_segment() {
        let mut pokemon = MockPokemonQuery::new();
        pokemon
            .expect_get_by_name()
            .withf(|name: &str| name == "mr mime")
            .times(1)
            .return_once(|name| {
                Err(ProxyError::not_found(
                    "Pokemon not found",
                    format!("Pokemon with name \"{name}\" not found"),
                ))
            });
        let app = test::init_service(app(state_with(pokemon))).await;

        let request = test::TestRequest::get()
            .uri("/api/pokemons/mr%20mime")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(response).await;
        assert_eq!(body.error, "Pokemon not found");
        assert!(body.details.contains("mr mime"));
    }

    #[actix_web::test]
    async fn detail_success_returns_the_record() {
        let mut pokemon = MockPokemonQuery::new();
        pokemon.expect_get_by_name().times(1).return_once(|name| {
            Ok(PokemonDetail::new(name)
                .with("id", 133)
                .with("types", serde_json::json!(["normal"]))
                .with("base_experience", serde_json::Value::Null))
        });
        let app = test::init_service(app(state_with(pokemon))).await;

        let request = test::TestRequest::get()
            .uri("/api/pokemons/eevee")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "name": "eevee",
                "id": 133,
                "types": ["normal"],
                "base_experience": null
            })
        );
    }

    #[actix_web::test]
    async fn trailing_slash_asks_the_proxy_for_an_empty_name() {
        let mut pokemon = MockPokemonQuery::new();
        pokemon
            .expect_get_by_name()
            .withf(|name: &str| name.is_empty())
            .times(1)
            .return_once(|_| {
                Err(ProxyError::bad_request(
                    "Invalid Pokemon name",
                    "Pokemon name is required",
                ))
            });
        let app = test::init_service(app(state_with(pokemon))).await;

        let request = test::TestRequest::get().uri("/api/pokemons/").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[case("/api/pokemons")]
    #[case("/api/pokemons/pikachu")]
    #[actix_web::test]
    async fn preflight_is_empty_with_cors(#[case] uri: &str) {
        let app = test::init_service(app(state_with(MockPokemonQuery::new()))).await;

        let request = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri(uri)
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-methods")
                .and_then(|v| v.to_str().ok()),
            Some("GET, POST, PUT, DELETE, OPTIONS")
        );
        let body = test::read_body(response).await;
        assert!(body.is_empty());
    }
}
