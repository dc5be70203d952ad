//! Pure filter and sort stages over a Pokémon listing.
//!
//! Every stage borrows its input and returns a fresh list, so callers can pass
//! owned summaries or references (`&PokemonSummary`) interchangeably. No stage
//! fails: any list and any criteria produce a defined result.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use super::criteria::{FilterCriteria, SortOrder};
use crate::domain::PokemonSummary;

fn summary<T: AsRef<PokemonSummary>>(entry: &T) -> &PokemonSummary {
    entry.as_ref()
}

/// Keep entries whose lower-cased name contains the trimmed, lower-cased term.
///
/// A blank term keeps the list as supplied. Input order is preserved.
///
/// # Examples
/// ```
/// use pokedex::domain::{PokemonSummary, filter_by_search_term};
///
/// let list = vec![
///     PokemonSummary::new("Pikachu", ["electric"], ""),
///     PokemonSummary::new("Raichu", ["electric"], ""),
///     PokemonSummary::new("Eevee", ["normal"], ""),
/// ];
/// let names: Vec<_> = filter_by_search_term(&list, " CHU ")
///     .into_iter()
///     .map(|p| p.name)
///     .collect();
/// assert_eq!(names, ["Pikachu", "Raichu"]);
/// ```
pub fn filter_by_search_term<T>(pokemon: &[T], term: &str) -> Vec<T>
where
    T: AsRef<PokemonSummary> + Clone,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return pokemon.to_vec();
    }

    pokemon
        .iter()
        .filter(|entry| summary(*entry).name_key().contains(&needle))
        .cloned()
        .collect()
}

/// Keep entries sharing at least one tag with `selected_types`, ignoring case.
///
/// An empty selection keeps the list as supplied; tags that no entry carries
/// simply match nothing. Input order is preserved.
pub fn filter_by_types<T, S>(pokemon: &[T], selected_types: &[S]) -> Vec<T>
where
    T: AsRef<PokemonSummary> + Clone,
    S: AsRef<str>,
{
    if selected_types.is_empty() {
        return pokemon.to_vec();
    }

    let wanted: Vec<String> = selected_types
        .iter()
        .map(|tag| tag.as_ref().to_lowercase())
        .collect();

    pokemon
        .iter()
        .filter(|entry| {
            summary(*entry)
                .types
                .iter()
                .any(|own| wanted.contains(&own.to_lowercase()))
        })
        .cloned()
        .collect()
}

/// Root-locale collator backed by the compiled Unicode collation data.
fn name_collator() -> Option<CollatorBorrowed<'static>> {
    Collator::try_new(Default::default(), CollatorOptions::default()).ok()
}

/// Order entries by lower-cased name using Unicode collation.
///
/// Accented letters sort next to their base letter, so `Éevee` precedes
/// `Zubat`. The sort is stable, so entries whose names compare equal keep
/// their input order in both directions. [`SortOrder::Unordered`] returns the
/// input order.
pub fn sort_by_name<T>(pokemon: &[T], order: SortOrder) -> Vec<T>
where
    T: AsRef<PokemonSummary> + Clone,
{
    if order == SortOrder::Unordered {
        return pokemon.to_vec();
    }

    let collator = name_collator();
    let compare = |a: &str, b: &str| -> Ordering {
        match &collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    };

    let mut keyed: Vec<(String, T)> = pokemon
        .iter()
        .map(|entry| (summary(entry).name_key(), entry.clone()))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Descending => compare(b, a),
        _ => compare(a, b),
    });
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// Apply the search filter, then the type filter, then the sort.
///
/// # Examples
/// ```
/// use pokedex::domain::{FilterCriteria, PokemonSummary, SortOrder, apply_filters_and_sort};
///
/// let list = vec![
///     PokemonSummary::new("bulbasaur", ["grass", "poison"], ""),
///     PokemonSummary::new("charmander", ["fire"], ""),
///     PokemonSummary::new("charizard", ["fire", "flying"], ""),
/// ];
/// let criteria = FilterCriteria::default()
///     .with_types(["fire"])
///     .with_search_term("char")
///     .with_sort_order(SortOrder::Ascending);
///
/// let names: Vec<_> = apply_filters_and_sort(&list, &criteria)
///     .into_iter()
///     .map(|p| p.name)
///     .collect();
/// assert_eq!(names, ["charizard", "charmander"]);
/// ```
pub fn apply_filters_and_sort<T>(pokemon: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: AsRef<PokemonSummary> + Clone,
{
    let searched = filter_by_search_term(pokemon, &criteria.search_term);
    let typed = filter_by_types(&searched, &criteria.selected_types);
    sort_by_name(&typed, criteria.sort_order)
}
