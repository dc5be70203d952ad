//! Owned filter state shared by whatever drives the catalogue view.
//!
//! The engine stays pure; this container only records the current selection
//! and hands out [`FilterCriteria`] snapshots.

use super::criteria::{FilterCriteria, SortOrder, TypeSelection};

/// Mutable holder for the active search term, type selection and ordering.
///
/// # Examples
/// ```
/// use pokedex::domain::{FilterState, SortOrder};
///
/// let mut state = FilterState::default();
/// state.toggle_type("fire");
/// state.set_search_term("char");
/// state.set_sort_order(SortOrder::Ascending);
///
/// let criteria = state.criteria();
/// assert_eq!(criteria.selected_types, vec!["fire"]);
/// assert_eq!(criteria.search_term, "char");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_types: Vec<String>,
    search_term: String,
    sort_order: SortOrder,
}

impl FilterState {
    /// Currently selected tags in selection order.
    #[must_use]
    pub fn selected_types(&self) -> &[String] {
        &self.selected_types
    }

    /// Current search term, untrimmed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current ordering.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Replace the selection, accepting any boundary shape.
    pub fn set_selected_types(&mut self, selection: TypeSelection) {
        let mut types: Vec<String> = Vec::new();
        for tag in selection.into_types() {
            if !contains_ignoring_case(&types, &tag) {
                types.push(tag);
            }
        }
        self.selected_types = types;
    }

    /// Add `tag` if absent, otherwise remove it. Comparison ignores case.
    pub fn toggle_type(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if contains_ignoring_case(&self.selected_types, tag) {
            let wanted = tag.to_lowercase();
            self.selected_types
                .retain(|selected| selected.to_lowercase() != wanted);
        } else {
            self.selected_types.push(tag.to_owned());
        }
    }

    /// Drop every selected tag.
    pub fn clear_types(&mut self) {
        self.selected_types.clear();
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replace the ordering.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Return to the unfiltered state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the state for one engine pass.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            selected_types: self.selected_types.clone(),
            search_term: self.search_term.clone(),
            sort_order: self.sort_order,
        }
    }
}

fn contains_ignoring_case(tags: &[String], tag: &str) -> bool {
    let wanted = tag.to_lowercase();
    tags.iter().any(|existing| existing.to_lowercase() == wanted)
}
