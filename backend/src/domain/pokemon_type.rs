//! Catalogue of known Pokémon type tags and their display colours.
//!
//! The filter engine never validates tags against this list; it exists so
//! clients can render the type picker and tag chips consistently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour used for tags outside the catalogue.
pub const DEFAULT_TYPE_COLOR: &str = "#78716C";

/// A known Pokémon type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    /// Fire.
    Fire,
    /// Water.
    Water,
    /// Grass.
    Grass,
    /// Electric.
    Electric,
    /// Psychic.
    Psychic,
    /// Ice.
    Ice,
    /// Dragon.
    Dragon,
    /// Dark.
    Dark,
    /// Fairy.
    Fairy,
    /// Normal.
    Normal,
    /// Fighting.
    Fighting,
    /// Poison.
    Poison,
    /// Ground.
    Ground,
    /// Flying.
    Flying,
    /// Bug.
    Bug,
    /// Rock.
    Rock,
    /// Ghost.
    Ghost,
    /// Steel.
    Steel,
}

impl PokemonType {
    /// Every known tag in picker order.
    pub const ALL: [Self; 18] = [
        Self::Fire,
        Self::Water,
        Self::Grass,
        Self::Electric,
        Self::Psychic,
        Self::Ice,
        Self::Dragon,
        Self::Dark,
        Self::Fairy,
        Self::Normal,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Steel,
    ];

    /// Canonical lower-case tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Electric => "electric",
            Self::Psychic => "psychic",
            Self::Ice => "ice",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Fairy => "fairy",
            Self::Normal => "normal",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Steel => "steel",
        }
    }

    /// Hex display colour for the tag.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Fire => "#FF6B6B",
            Self::Water => "#4ECDC4",
            Self::Grass => "#45B7D1",
            Self::Electric => "#FFA07A",
            Self::Psychic => "#DA70D6",
            Self::Ice => "#87CEEB",
            Self::Dragon => "#6A5ACD",
            Self::Dark => "#2F4F4F",
            Self::Fairy => "#FFB6C1",
            Self::Normal => "#D3D3D3",
            Self::Fighting => "#CD853F",
            Self::Poison => "#9370DB",
            Self::Ground => "#F4A460",
            Self::Flying => "#87CEFA",
            Self::Bug => "#9ACD32",
            Self::Rock => "#A0522D",
            Self::Ghost => "#6B46C1",
            Self::Steel => "#708090",
        }
    }
}

/// Resolve the display colour for an arbitrary tag.
///
/// # Examples
/// ```
/// use pokedex::domain::pokemon_type::{DEFAULT_TYPE_COLOR, color_for_tag};
///
/// assert_eq!(color_for_tag("Fire"), "#FF6B6B");
/// assert_eq!(color_for_tag("shadow"), DEFAULT_TYPE_COLOR);
/// ```
#[must_use]
pub fn color_for_tag(tag: &str) -> &'static str {
    tag.parse::<PokemonType>()
        .map_or(DEFAULT_TYPE_COLOR, PokemonType::color)
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag is not part of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pokemon type: {tag}")]
pub struct UnknownPokemonType {
    /// The rejected tag as supplied.
    pub tag: String,
}

impl FromStr for PokemonType {
    type Err = UnknownPokemonType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == wanted)
            .ok_or_else(|| UnknownPokemonType { tag: s.to_owned() })
    }
}
