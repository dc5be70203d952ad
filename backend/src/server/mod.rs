//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use pokedex::Trace;
#[cfg(debug_assertions)]
use pokedex::doc::ApiDoc;
use pokedex::domain::ports::PokemonSource;
use pokedex::inbound::http::configure;
use pokedex::inbound::http::health::HealthState;
use pokedex::inbound::http::state::HttpState;
use pokedex::outbound::cache::CachedPokemonSource;
use pokedex::outbound::upstream::HttpPokemonSource;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the upstream source, wrapping it in a cache when one is configured.
///
/// # Errors
/// Returns [`std::io::Error`] when the backend URL cannot serve as a base or
/// the HTTP client fails to initialise.
fn build_source(config: &ServerConfig) -> std::io::Result<Arc<dyn PokemonSource>> {
    let upstream = HttpPokemonSource::new(&config.backend_url, config.request_timeout)
        .map_err(|e| std::io::Error::other(format!("upstream client setup failed: {e}")))?;
    info!(upstream = %upstream.collection_url(), "upstream source configured");

    Ok(match config.cache {
        Some(cache) => {
            info!(
                ttl_secs = cache.ttl.as_secs(),
                capacity = cache.capacity,
                "upstream caching enabled"
            );
            Arc::new(CachedPokemonSource::with_ttl(
                Arc::new(upstream),
                cache.capacity,
                cache.ttl,
            ))
        }
        None => Arc::new(upstream),
    })
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is bound.
/// - `config`: pre-built [`ServerConfig`] with the bind address and upstream settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when building the upstream client, binding
/// the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let source = build_source(&config)?;
    let http_state = web::Data::new(HttpState::from_source(source));

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr)?
        .run();

    info!(addr = %config.bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}
