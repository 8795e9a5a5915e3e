//! FILENAME: table-engine/src/state.rs
//! Per-table interactive view state.
//!
//! One `ViewState` exists per live table instance. It is ephemeral: it is
//! owned by the instance, mutated only through that instance's own event
//! handlers, and dropped with it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use model::Field;

/// Page sizes the pagination control offers.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

// ============================================================================
// SORTING
// ============================================================================

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The active sort: which column, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: Field,
    pub order: SortOrder,
}

// ============================================================================
// VIEW STATE
// ============================================================================

/// A text filter pinned to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub field: Field,
    pub term: String,
}

/// Sort, search, column visibility, and pagination for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub sort: Option<SortKey>,
    pub search: String,
    column_filters: Vec<ColumnFilter>,
    hidden: FxHashSet<Field>,
    pub page_index: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            sort: None,
            search: String::new(),
            column_filters: Vec::new(),
            hidden: FxHashSet::default(),
            page_index: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }

    /// Cycles a column through ascending -> descending -> unsorted.
    /// Clicking a different column starts over at ascending.
    pub fn toggle_sort(&mut self, field: Field) {
        self.sort = match self.sort {
            Some(SortKey { field: f, order }) if f == field => match order {
                SortOrder::Ascending => Some(SortKey {
                    field,
                    order: SortOrder::Descending,
                }),
                SortOrder::Descending => None,
            },
            _ => Some(SortKey {
                field,
                order: SortOrder::Ascending,
            }),
        };
    }

    /// Replaces the global search term and returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page_index = 0;
    }

    /// Sets or replaces the text filter on one column; an empty term
    /// removes it. Returns to the first page like the global search.
    pub fn set_column_filter(&mut self, field: Field, term: impl Into<String>) {
        let term = term.into();
        self.column_filters.retain(|f| f.field != field);
        if !term.is_empty() {
            self.column_filters.push(ColumnFilter { field, term });
        }
        self.page_index = 0;
    }

    pub fn column_filters(&self) -> &[ColumnFilter] {
        &self.column_filters
    }

    /// Shows or hides a column. Does not touch sort, search, or paging.
    /// Returns whether the column is visible afterwards.
    pub fn toggle_column(&mut self, field: Field) -> bool {
        if self.hidden.remove(&field) {
            true
        } else {
            self.hidden.insert(field);
            false
        }
    }

    pub fn is_visible(&self, field: Field) -> bool {
        !self.hidden.contains(&field)
    }

    /// Switches to a page size from the fixed option set and resets to the
    /// first page. Sizes outside the option set are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&size) && size != self.page_size {
            self.page_size = size;
            self.page_index = 0;
        }
    }

    /// Requests a page. Out-of-bounds indices are clamped at projection
    /// time against the current filtered row count.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
