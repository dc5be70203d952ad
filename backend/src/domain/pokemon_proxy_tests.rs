//! Tests for the Pokémon proxy service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ProxyErrorKind;
use crate::domain::ports::MockPokemonSource;

fn make_service(source: MockPokemonSource) -> PokemonProxyService<MockPokemonSource> {
    PokemonProxyService::new(Arc::new(source))
}

fn starters() -> Vec<PokemonSummary> {
    vec![
        PokemonSummary::new("bulbasaur", ["grass", "poison"], "b.png"),
        PokemonSummary::new("charmander", ["fire"], "c.png"),
    ]
}

#[tokio::test]
async fn list_all_returns_upstream_body_verbatim() {
    let mut source = MockPokemonSource::new();
    let mut listing = starters();
    listing[0]
        .extra
        .insert("generation".to_owned(), serde_json::json!(1));
    let expected = listing.clone();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(move || Ok(listing));

    let result = make_service(source).list_all().await.expect("listing");

    assert_eq!(result, expected);
}

#[rstest]
#[case(500)]
#[case(502)]
#[case(503)]
#[tokio::test]
async fn list_all_mirrors_upstream_status(#[case] status: u16) {
    let mut source = MockPokemonSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(move || Err(PokemonSourceError::status(status)));

    let err = make_service(source).list_all().await.expect_err("failure");

    assert_eq!(err.kind(), ProxyErrorKind::UpstreamFailure);
    assert_eq!(err.status(), status);
    assert_eq!(err.message(), LIST_FAILED);
    assert!(err.details().contains(&status.to_string()));
}

#[rstest]
#[case::with_message("Network error", "Network error")]
#[case::without_message("", "Unknown error")]
#[tokio::test]
async fn list_all_reports_transport_failures_as_500(#[case] cause: &str, #[case] details: &str) {
    let mut source = MockPokemonSource::new();
    let cause = cause.to_owned();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(move || Err(PokemonSourceError::transport(cause)));

    let err = make_service(source).list_all().await.expect_err("failure");

    assert_eq!(err.kind(), ProxyErrorKind::NetworkFailure);
    assert_eq!(err.status(), 500);
    assert_eq!(err.message(), LIST_FAILED);
    assert_eq!(err.details(), details);
}

#[tokio::test]
async fn list_all_reports_undecodable_bodies_as_500() {
    let mut source = MockPokemonSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(|| Err(PokemonSourceError::decode("expected a sequence")));

    let err = make_service(source).list_all().await.expect_err("failure");

    assert_eq!(err.status(), 500);
    assert_eq!(err.details(), "expected a sequence");
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
#[tokio::test]
async fn get_by_name_rejects_blank_names_without_calling_upstream(#[case] name: &str) {
    let mut source = MockPokemonSource::new();
    source.expect_fetch_by_name().never();

    let err = make_service(source)
        .get_by_name(name)
        .await
        .expect_err("blank name");

    assert_eq!(err.kind(), ProxyErrorKind::BadRequest);
    assert_eq!(err.status(), 400);
    assert_eq!(err.message(), INVALID_NAME);
    assert_eq!(err.details(), NAME_REQUIRED);
}

#[tokio::test]
async fn get_by_name_forwards_the_name_once() {
    let mut source = MockPokemonSource::new();
    source
        .expect_fetch_by_name()
        .withf(|name: &str| name == "charizard")
        .times(1)
        .returning(|name| {
            Ok(PokemonDetail::new(name)
                .with("id", 6)
                .with("types", serde_json::json!(["fire", "flying"])))
        });

    let detail = make_service(source)
        .get_by_name("charizard")
        .await
        .expect("detail");

    assert_eq!(detail.id(), Some(6));
    assert_eq!(detail.name(), Some("charizard"));
}

#[tokio::test]
async fn get_by_name_translates_upstream_404() {
    let mut source = MockPokemonSource::new();
    source
        .expect_fetch_by_name()
        .times(1)
        .return_once(|_| Err(PokemonSourceError::status(404_u16)));

    let err = make_service(source)
        .get_by_name("invalid")
        .await
        .expect_err("missing");

    assert_eq!(err.kind(), ProxyErrorKind::NotFound);
    assert_eq!(err.status(), 404);
    assert_eq!(err.message(), NOT_FOUND);
    assert_eq!(err.details(), "Pokemon with name \"invalid\" not found");
}

#[rstest]
#[case(401)]
#[case(500)]
#[case(503)]
#[tokio::test]
async fn get_by_name_mirrors_other_statuses(#[case] status: u16) {
    let mut source = MockPokemonSource::new();
    source
        .expect_fetch_by_name()
        .times(1)
        .return_once(move |_| Err(PokemonSourceError::status(status)));

    let err = make_service(source)
        .get_by_name("pikachu")
        .await
        .expect_err("failure");

    assert_eq!(err.kind(), ProxyErrorKind::UpstreamFailure);
    assert_eq!(err.status(), status);
    assert_eq!(err.message(), DETAIL_FAILED);
    assert_eq!(
        err.details(),
        format!("Backend responded with status: {status}")
    );
}

#[tokio::test]
async fn get_by_name_reports_transport_failures_as_500() {
    let mut source = MockPokemonSource::new();
    source
        .expect_fetch_by_name()
        .times(1)
        .return_once(|_| Err(PokemonSourceError::transport("connection refused")));

    let err = make_service(source)
        .get_by_name("pikachu")
        .await
        .expect_err("failure");

    assert_eq!(err.kind(), ProxyErrorKind::NetworkFailure);
    assert_eq!(err.status(), 500);
    assert_eq!(err.message(), DETAIL_FAILED);
    assert_eq!(err.details(), "connection refused");
}

#[tokio::test]
async fn failures_do_not_affect_later_requests() {
    let mut source = MockPokemonSource::new();
    let mut calls = 0;
    source.expect_fetch_all().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Err(PokemonSourceError::transport("reset"))
        } else {
            Ok(starters())
        }
    });
    let service = make_service(source);

    assert!(service.list_all().await.is_err());
    assert_eq!(service.list_all().await.expect("second call").len(), 2);
}
