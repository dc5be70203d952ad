//! OpenAPI schema definitions for domain types.
//!
//! Domain records stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape so the document can describe
//! them.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::PokemonSummary`].
#[derive(ToSchema)]
#[schema(as = PokemonSummary)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PokemonSummarySchema {
    /// Display name and lookup key.
    #[schema(example = "charmander")]
    name: String,
    /// Type tags.
    #[schema(example = json!(["fire"]))]
    types: Vec<String>,
    /// Artwork URI; absent when the upstream has none.
    image: Option<String>,
}

/// OpenAPI schema for [`crate::domain::PokemonStats`].
#[derive(ToSchema)]
#[schema(as = PokemonStats)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PokemonStatsSchema {
    hp: u32,
    attack: u32,
    defense: u32,
    special_attack: u32,
    special_defense: u32,
    speed: u32,
}

/// OpenAPI schema for [`crate::domain::PokemonDetail`].
#[derive(ToSchema)]
#[schema(as = PokemonDetail)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PokemonDetailSchema {
    /// National dex number.
    #[schema(example = 4)]
    id: u32,
    #[schema(example = "charmander")]
    name: String,
    /// Decimetres.
    height: u32,
    /// Hectograms.
    weight: u32,
    base_experience: u32,
    types: Vec<String>,
    abilities: Vec<String>,
    images: Vec<String>,
    stats: PokemonStatsSchema,
}

/// OpenAPI schema for [`crate::domain::ports::CatalogueListing`].
#[derive(ToSchema)]
#[schema(as = CatalogueListing)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CatalogueResponseSchema {
    /// Entries surviving the filter, in result order.
    pokemon: Vec<PokemonSummarySchema>,
    /// Length of `pokemon`.
    matched: usize,
    /// Size of the unfiltered listing.
    total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn schemas_use_domain_names() {
        assert_eq!(PokemonSummarySchema::name(), "PokemonSummary");
        assert_eq!(PokemonDetailSchema::name(), "PokemonDetail");
        assert_eq!(PokemonStatsSchema::name(), "PokemonStats");
        assert_eq!(CatalogueResponseSchema::name(), "CatalogueListing");
    }

    #[test]
    fn detail_schema_uses_snake_case_stat_names() {
        let json = schema_to_json::<PokemonStatsSchema>();
        for field in ["hp", "special_attack", "special_defense", "speed"] {
            assert!(json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn catalogue_schema_lists_counts() {
        let json = schema_to_json::<CatalogueResponseSchema>();
        assert!(json.contains("matched"));
        assert!(json.contains("total"));
    }
}
