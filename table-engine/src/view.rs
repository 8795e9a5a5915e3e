//! FILENAME: table-engine/src/view.rs
//! Table view - renderable output for the frontend.
//!
//! A `TableView` is a snapshot: one page of arranged rows plus the header
//! metadata needed to draw group bands, sort indicators, and alignment.
//! It holds no references back into the record set.

use serde::{Deserialize, Serialize};

use model::Field;

use crate::state::SortOrder;

// ============================================================================
// HEADER
// ============================================================================

/// A run of adjacent visible columns sharing (or lacking) a group label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBand {
    /// None for ungrouped runs.
    pub label: Option<String>,
    /// Number of visible leaf columns covered.
    pub span: usize,
}

/// Header cell for one visible leaf column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub field: Field,
    pub title: String,
    /// Group label shown as tooltip context, if the column sits under one.
    pub group: Option<String>,
    /// Present when this column is the active sort.
    pub sort: Option<SortOrder>,
    pub align: CellAlign,
}

// ============================================================================
// BODY
// ============================================================================

/// Horizontal alignment hint for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellAlign {
    Left,
    Right,
}

/// A single body cell: pre-formatted value plus the render-time percentage
/// where the column defines one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewCell {
    pub formatted: String,
    pub percent: Option<f64>,
    pub align: CellAlign,
}

impl ViewCell {
    /// The "(45.3%)" sub-line, formatted to one decimal like the summary
    /// cells, or None for cells without a percentage basis.
    pub fn percent_label(&self) -> Option<String> {
        self.percent.map(|p| format!("({:.1}%)", p))
    }
}

/// One rendered row of the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRow {
    pub cells: Vec<ViewCell>,
}

// ============================================================================
// TABLE VIEW
// ============================================================================

/// The complete rendered view of one table page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub bands: Vec<GroupBand>,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<ViewRow>,
    /// Rows matching the current search, across all pages.
    pub total_rows: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl TableView {
    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label_formatting() {
        let cell = ViewCell {
            formatted: "450".to_string(),
            percent: Some(45.25),
            align: CellAlign::Right,
        };
        assert_eq!(cell.percent_label().unwrap(), "(45.2%)");

        let text = ViewCell {
            formatted: "Pune".to_string(),
            percent: None,
            align: CellAlign::Left,
        };
        assert!(text.percent_label().is_none());
    }
}
