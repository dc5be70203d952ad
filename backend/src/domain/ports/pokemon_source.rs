//! Driven port for the upstream Pokémon data service.
//!
//! Adapters report raw upstream outcomes; turning them into client-facing
//! failures is the proxy service's job.

use async_trait::async_trait;

use super::define_port_error;
use serde_json::json;

use crate::domain::{PokemonDetail, PokemonSummary};

define_port_error! {
    /// Errors surfaced while calling the upstream service.
    pub enum PokemonSourceError {
        /// The request never produced a response.
        Transport { message: String } =>
            "upstream transport failed: {message}",
        /// The upstream answered with a non-success status.
        Status { status: u16 } =>
            "upstream responded with status {status}",
        /// The response body did not match the expected shape.
        Decode { message: String } =>
            "upstream response decode failed: {message}",
    }
}

/// Port for reading Pokémon records from the upstream service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetch the full listing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pokedex::domain::ports::{FixturePokemonSource, PokemonSource};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let listing = FixturePokemonSource.fetch_all().await?;
    /// assert_eq!(listing.len(), 3);
    /// # Ok::<(), pokedex::domain::ports::PokemonSourceError>(())
    /// # }).unwrap();
    /// ```
    async fn fetch_all(&self) -> Result<Vec<PokemonSummary>, PokemonSourceError>;

    /// Fetch one record by its name.
    async fn fetch_by_name(&self, name: &str) -> Result<PokemonDetail, PokemonSourceError>;
}

/// Fixture source serving the three starters used throughout the tests.
///
/// Unknown names answer with a 404 status, matching the upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixturePokemonSource;

impl FixturePokemonSource {
    fn details() -> [PokemonDetail; 3] {
        [
            fixture_detail(1, "bulbasaur", &["grass", "poison"], &["overgrow"], [45, 49, 49, 65, 65, 45]),
            fixture_detail(4, "charmander", &["fire"], &["blaze"], [39, 52, 43, 60, 50, 65]),
            fixture_detail(6, "charizard", &["fire", "flying"], &["blaze"], [78, 84, 78, 109, 85, 100]),
        ]
    }
}

fn fixture_detail(
    id: u32,
    name: &str,
    types: &[&str],
    abilities: &[&str],
    [hp, attack, defense, special_attack, special_defense, speed]: [u32; 6],
) -> PokemonDetail {
    PokemonDetail::new(name)
        .with("id", id)
        .with("height", 0)
        .with("weight", 0)
        .with("base_experience", 0)
        .with("types", json!(types))
        .with("abilities", json!(abilities))
        .with(
            "images",
            json!([format!("https://img.pokemondb.net/artwork/{name}.jpg")]),
        )
        .with(
            "stats",
            json!({
                "hp": hp,
                "attack": attack,
                "defense": defense,
                "special_attack": special_attack,
                "special_defense": special_defense,
                "speed": speed,
            }),
        )
}

#[async_trait]
impl PokemonSource for FixturePokemonSource {
    async fn fetch_all(&self) -> Result<Vec<PokemonSummary>, PokemonSourceError> {
        Ok(Self::details()
            .into_iter()
            .map(|detail| {
                let image = detail.images().first().copied().unwrap_or_default();
                PokemonSummary::new(detail.name().unwrap_or_default(), detail.types(), image)
            })
            .collect())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<PokemonDetail, PokemonSourceError> {
        Self::details()
            .into_iter()
            .find(|detail| {
                detail
                    .name()
                    .is_some_and(|own| own.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| PokemonSourceError::status(404_u16))
    }
}
