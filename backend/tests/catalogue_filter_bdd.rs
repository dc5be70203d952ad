//! Behaviour tests for catalogue filtering and sorting.
//!
//! Scenarios drive [`FilterState`] the way a browsing client would and check
//! the names the engine returns.

use pokedex::domain::{FilterState, PokemonSummary, SortOrder, apply_filters_and_sort};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct CatalogueWorld {
    listing: RefCell<Vec<PokemonSummary>>,
    state: RefCell<FilterState>,
    result: RefCell<Option<Vec<PokemonSummary>>>,
}

impl CatalogueWorld {
    fn new() -> Self {
        Self {
            listing: RefCell::new(Vec::new()),
            state: RefCell::new(FilterState::default()),
            result: RefCell::new(None),
        }
    }

    fn result_names(&self) -> Vec<String> {
        self.result
            .borrow()
            .as_ref()
            .expect("filters should have been applied")
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }
}

fn starter_listing() -> Vec<PokemonSummary> {
    vec![
        PokemonSummary::new("bulbasaur", ["grass", "poison"], ""),
        PokemonSummary::new("charmander", ["fire"], ""),
        PokemonSummary::new("charizard", ["fire", "flying"], ""),
        PokemonSummary::new("squirtle", ["water"], ""),
        PokemonSummary::new("pikachu", ["electric"], ""),
        PokemonSummary::new("Pidgey", ["normal", "flying"], ""),
    ]
}

#[fixture]
fn world() -> CatalogueWorld {
    CatalogueWorld::new()
}

#[given("the starter listing")]
fn the_starter_listing(world: &CatalogueWorld) {
    *world.listing.borrow_mut() = starter_listing();
}

#[given("the {tag} type is toggled")]
fn the_type_is_toggled(world: &CatalogueWorld, tag: String) {
    world.state.borrow_mut().toggle_type(&tag);
}

#[given("the search term is {term}")]
fn the_search_term_is(world: &CatalogueWorld, term: String) {
    world.state.borrow_mut().set_search_term(term);
}

#[given("the sort order is {order}")]
fn the_sort_order_is(world: &CatalogueWorld, order: String) {
    let order: SortOrder = order.parse().expect("known sort directive");
    world.state.borrow_mut().set_sort_order(order);
}

#[given("the filters are reset")]
fn the_filters_are_reset(world: &CatalogueWorld) {
    world.state.borrow_mut().reset();
}

#[when("the catalogue filters are applied")]
fn the_catalogue_filters_are_applied(world: &CatalogueWorld) {
    let criteria = world.state.borrow().criteria();
    let listing = world.listing.borrow();
    let result = apply_filters_and_sort(listing.as_slice(), &criteria);
    *world.result.borrow_mut() = Some(result);
}

#[then("the result names are {names}")]
fn the_result_names_are(world: &CatalogueWorld, names: String) {
    let expected: Vec<&str> = names.split(',').collect();
    assert_eq!(world.result_names(), expected);
}

#[then("no entries remain")]
fn no_entries_remain(world: &CatalogueWorld) {
    assert!(world.result_names().is_empty());
}

#[then("the listing is unchanged")]
fn the_listing_is_unchanged(world: &CatalogueWorld) {
    let result = world.result.borrow();
    assert_eq!(result.as_deref(), Some(world.listing.borrow().as_slice()));
}

#[scenario(path = "tests/features/catalogue_filter.feature")]
fn catalogue_filter_scenarios(world: CatalogueWorld) {
    drop(world);
}
