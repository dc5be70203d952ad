//! Catalogue filtering: criteria, the pure filter/sort engine, and the owned
//! filter state container.
//!
//! The engine applies three independent stages in a fixed order: name search,
//! then type selection, then ordering by name. Each stage is total and keeps
//! its input untouched.

mod criteria;
mod engine;
mod state;

pub use criteria::{FilterCriteria, InvalidSortOrder, SortOrder, TypeSelection};
pub use engine::{apply_filters_and_sort, filter_by_search_term, filter_by_types, sort_by_name};
pub use state::FilterState;
