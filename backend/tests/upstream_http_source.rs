//! Integration tests for the reqwest-backed upstream source.
//!
//! A throwaway Actix server on a loopback port stands in for the upstream
//! data service so status mapping and decoding run over real sockets.

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, get, web};
use pokedex::domain::ports::{PokemonQuery, PokemonSource, PokemonSourceError};
use pokedex::domain::{PokemonProxyService, PokemonSummary, ProxyErrorKind};
use pokedex::outbound::upstream::HttpPokemonSource;
use rstest::rstest;
use serde_json::json;
use url::Url;

#[get("/api/pokemons")]
async fn listing() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {"name": "bulbasaur", "types": ["grass", "poison"], "image": "b.png", "generation": 1},
        {"name": "charmander", "types": ["fire"], "image": "c.png"},
        {"name": "mew", "types": ["psychic"]}
    ]))
}

#[get("/api/pokemons/{name}")]
async fn detail(name: web::Path<String>) -> HttpResponse {
    match name.as_str() {
        "charizard" => HttpResponse::Ok().json(json!({
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "base_experience": 240,
            "types": ["fire", "flying"],
            "abilities": ["blaze", "solar-power"],
            "images": ["front.png", "back.png"],
            "stats": {
                "hp": 78,
                "attack": 84,
                "defense": 78,
                "special_attack": 109,
                "special_defense": 85,
                "speed": 100
            },
            "habitat": "mountain"
        })),
        "mr mime" => HttpResponse::Ok().json(json!({
            "id": 122,
            "name": "mr mime",
            "height": 13,
            "weight": 545,
            "base_experience": 161,
            "types": ["psychic", "fairy"],
            "abilities": ["soundproof"],
            "images": [],
            "stats": {
                "hp": 40,
                "attack": 45,
                "defense": 65,
                "special_attack": 100,
                "special_defense": 120,
                "speed": 90
            }
        })),
        "ditto" => HttpResponse::Ok().json(json!({
            "id": 132,
            "name": "ditto",
            "height": 0.3,
            "weight": -1,
            "base_experience": null,
            "types": ["normal"]
        })),
        "garbled" => HttpResponse::Ok()
            .content_type("application/json")
            .body("{\"id\": "),
        "unavailable" => HttpResponse::ServiceUnavailable().body("maintenance"),
        "slow" => {
            actix_web::rt::time::sleep(Duration::from_millis(500)).await;
            HttpResponse::Ok().finish()
        }
        _ => HttpResponse::NotFound().json(json!({"message": "no such pokemon"})),
    }
}

async fn spawn_upstream() -> (Url, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let server = HttpServer::new(|| App::new().service(listing).service(detail))
        .disable_signals()
        .workers(1)
        .listen(listener)
        .expect("bind test server")
        .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    let base = Url::parse(&format!("http://{addr}")).expect("loopback URL");
    (base, handle)
}

fn source(base: &Url, timeout: Option<Duration>) -> HttpPokemonSource {
    HttpPokemonSource::new(base, timeout).expect("adapter should build")
}

#[actix_rt::test]
async fn listing_decodes_and_keeps_extra_members() {
    let (base, handle) = spawn_upstream().await;

    let summaries = source(&base, None).fetch_all().await.expect("listing");

    let names: Vec<_> = summaries.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["bulbasaur", "charmander", "mew"]);
    assert_eq!(summaries[0].extra.get("generation"), Some(&json!(1)));
    handle.stop(true).await;
}

#[actix_rt::test]
async fn proxied_listing_matches_the_upstream_body() {
    let (base, handle) = spawn_upstream().await;
    let proxy = PokemonProxyService::new(Arc::new(source(&base, None)));

    let summaries: Vec<PokemonSummary> = proxy.list_all().await.expect("listing");

    assert_eq!(summaries[2].image(), "");
    assert_eq!(
        serde_json::to_value(&summaries).expect("encode"),
        json!([
            {"name": "bulbasaur", "types": ["grass", "poison"], "image": "b.png", "generation": 1},
            {"name": "charmander", "types": ["fire"], "image": "c.png"},
            {"name": "mew", "types": ["psychic"]}
        ])
    );
    handle.stop(true).await;
}

#[actix_rt::test]
async fn proxied_detail_keeps_nulls_and_non_integer_numbers() {
    let (base, handle) = spawn_upstream().await;
    let proxy = PokemonProxyService::new(Arc::new(source(&base, None)));

    let record = proxy.get_by_name("ditto").await.expect("detail");

    assert_eq!(
        serde_json::to_value(&record).expect("encode"),
        json!({
            "id": 132,
            "name": "ditto",
            "height": 0.3,
            "weight": -1,
            "base_experience": null,
            "types": ["normal"]
        })
    );
    handle.stop(true).await;
}

#[rstest]
#[case::plain("charizard", 6)]
#[case::encoded("mr mime", 122)]
#[actix_rt::test]
async fn detail_is_fetched_by_name(#[case] name: &str, #[case] id: u64) {
    let (base, handle) = spawn_upstream().await;

    let record = source(&base, None)
        .fetch_by_name(name)
        .await
        .expect("detail");

    assert_eq!(record.id(), Some(id));
    assert_eq!(record.name(), Some(name));
    handle.stop(true).await;
}

#[rstest]
#[case::missing("missingno", 404)]
#[case::unavailable("unavailable", 503)]
#[actix_rt::test]
async fn error_statuses_are_reported(#[case] name: &str, #[case] status: u16) {
    let (base, handle) = spawn_upstream().await;

    let err = source(&base, None)
        .fetch_by_name(name)
        .await
        .expect_err("upstream error");

    assert_eq!(err, PokemonSourceError::status(status));
    handle.stop(true).await;
}

#[actix_rt::test]
async fn malformed_body_is_a_decode_failure() {
    let (base, handle) = spawn_upstream().await;

    let err = source(&base, None)
        .fetch_by_name("garbled")
        .await
        .expect_err("decode error");

    assert!(matches!(err, PokemonSourceError::Decode { .. }));
    handle.stop(true).await;
}

#[actix_rt::test]
async fn timeout_surfaces_as_transport_failure() {
    let (base, handle) = spawn_upstream().await;

    let err = source(&base, Some(Duration::from_millis(50)))
        .fetch_by_name("slow")
        .await
        .expect_err("timeout");

    assert!(matches!(err, PokemonSourceError::Transport { .. }));
    handle.stop(false).await;
}

#[actix_rt::test]
async fn refused_connection_surfaces_as_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    let base = Url::parse(&format!("http://{addr}")).expect("loopback URL");

    let err = source(&base, None).fetch_all().await.expect_err("refused");

    assert!(matches!(err, PokemonSourceError::Transport { .. }));
}

#[actix_rt::test]
async fn proxy_mirrors_upstream_status_over_the_wire() {
    let (base, handle) = spawn_upstream().await;
    let proxy = PokemonProxyService::new(Arc::new(source(&base, None)));

    let err = proxy
        .get_by_name("unavailable")
        .await
        .expect_err("mirrored failure");

    assert_eq!(err.kind(), ProxyErrorKind::UpstreamFailure);
    assert_eq!(err.status(), 503);
    assert_eq!(err.message(), "Failed to fetch pokemon from backend");
    assert_eq!(err.details(), "Backend responded with status: 503");
    handle.stop(true).await;
}
