//! FILENAME: table-engine/src/engine.rs
//! The projection engine - arranges records into a renderable view.
//!
//! Pipeline per projection: visible columns -> global search -> stable
//! sort -> page clamp -> cell formatting. Records are never mutated; the
//! engine works on borrowed slices and emits an owned `TableView`.

use std::cmp::Ordering;

use model::{Field, FieldKind, FieldValue, SurveyRecord};

use crate::definition::{ColumnSpec, TableDefinition};
use crate::state::{SortKey, SortOrder, ViewState};
use crate::view::{CellAlign, GroupBand, HeaderCell, TableView, ViewCell, ViewRow};

// ============================================================================
// COLUMN VISIBILITY
// ============================================================================

/// Leaf fields that are currently visible, in declared order.
pub fn visible_fields(definition: &TableDefinition, state: &ViewState) -> Vec<Field> {
    definition
        .leaf_fields()
        .into_iter()
        .filter(|field| state.is_visible(*field))
        .collect()
}

// ============================================================================
// SEARCH AND SORT
// ============================================================================

/// Case-insensitive substring match of `term` against any of the record's
/// visible column values.
fn matches_search(record: &SurveyRecord, fields: &[Field], term: &str) -> bool {
    fields
        .iter()
        .any(|field| record.value(*field).display().to_lowercase().contains(term))
}

/// Compares two records by a column's native type: counts numerically,
/// text lexically.
fn compare_by_field(a: &SurveyRecord, b: &SurveyRecord, field: Field) -> Ordering {
    match (a.value(field), b.value(field)) {
        (FieldValue::Count(na), FieldValue::Count(nb)) => na.cmp(&nb),
        (FieldValue::Text(ta), FieldValue::Text(tb)) => ta.cmp(&tb),
        (FieldValue::Count(_), FieldValue::Text(_)) => Ordering::Less,
        (FieldValue::Text(_), FieldValue::Count(_)) => Ordering::Greater,
    }
}

/// True if the record satisfies every per-column filter whose column is
/// still visible.
fn matches_column_filters(record: &SurveyRecord, fields: &[Field], state: &ViewState) -> bool {
    state.column_filters().iter().all(|filter| {
        !fields.contains(&filter.field)
            || record
                .value(filter.field)
                .display()
                .to_lowercase()
                .contains(&filter.term.to_lowercase())
    })
}

/// Applies search and sort, returning the full arranged row set (all
/// pages). This is the projection both the grid page slice and export
/// consume, so what is exported always matches what is on screen.
pub fn arrange_records<'a>(
    records: &[&'a SurveyRecord],
    definition: &TableDefinition,
    state: &ViewState,
) -> Vec<&'a SurveyRecord> {
    let fields = visible_fields(definition, state);
    let term = state.search.to_lowercase();

    let mut arranged: Vec<&SurveyRecord> = records
        .iter()
        .copied()
        .filter(|record| term.is_empty() || matches_search(record, &fields, &term))
        .filter(|record| matches_column_filters(record, &fields, state))
        .collect();

    if let Some(SortKey { field, order }) = state.sort {
        // Vec::sort_by is stable: equal keys keep their current order.
        match order {
            SortOrder::Ascending => arranged.sort_by(|a, b| compare_by_field(a, b, field)),
            SortOrder::Descending => arranged.sort_by(|a, b| compare_by_field(b, a, field)),
        }
    }

    arranged
}

// ============================================================================
// PROJECTION
// ============================================================================

fn align_of(field: Field) -> CellAlign {
    match field.kind() {
        FieldKind::Text => CellAlign::Left,
        FieldKind::Count => CellAlign::Right,
    }
}

/// Header bands: consecutive visible leaves merged per group label, with
/// ungrouped runs carrying no label. Groups whose leaves are all hidden
/// disappear entirely.
fn build_bands(definition: &TableDefinition, state: &ViewState) -> Vec<GroupBand> {
    let mut bands = Vec::new();
    let mut ungrouped = 0usize;
    let mut i = 0;

    let columns = &definition.columns;
    while i < columns.len() {
        match &columns[i] {
            ColumnSpec::Leaf { field } => {
                if state.is_visible(*field) {
                    ungrouped += 1;
                }
                i += 1;
            }
            ColumnSpec::Group { label, span } => {
                if ungrouped > 0 {
                    bands.push(GroupBand {
                        label: None,
                        span: ungrouped,
                    });
                    ungrouped = 0;
                }
                let mut visible = 0usize;
                for column in columns[i + 1..].iter().take(*span) {
                    if let ColumnSpec::Leaf { field } = column {
                        if state.is_visible(*field) {
                            visible += 1;
                        }
                    }
                }
                if visible > 0 {
                    bands.push(GroupBand {
                        label: Some(label.clone()),
                        span: visible,
                    });
                }
                i += 1 + span;
            }
        }
    }

    if ungrouped > 0 {
        bands.push(GroupBand {
            label: None,
            span: ungrouped,
        });
    }

    bands
}

fn build_cell(record: &SurveyRecord, field: Field) -> ViewCell {
    ViewCell {
        formatted: record.value(field).display(),
        percent: record.percent_of(field),
        align: align_of(field),
    }
}

/// Projects `records` (already filtered by dimension selection) into a
/// renderable page under the given definition and view state.
pub fn project(
    records: &[&SurveyRecord],
    definition: &TableDefinition,
    state: &ViewState,
) -> TableView {
    let fields = visible_fields(definition, state);
    let arranged = arrange_records(records, definition, state);

    let total_rows = arranged.len();
    let page_size = state.page_size;
    let page_count = if total_rows == 0 {
        1
    } else {
        total_rows.div_ceil(page_size)
    };
    // Requests beyond the last page clamp rather than error
    let page_index = state.page_index.min(page_count - 1);

    let start = page_index * page_size;
    let end = (start + page_size).min(total_rows);

    let headers = fields
        .iter()
        .map(|field| HeaderCell {
            field: *field,
            title: field.title().to_string(),
            group: definition.group_of(*field).map(|label| label.to_string()),
            sort: state.sort.filter(|key| key.field == *field).map(|key| key.order),
            align: align_of(*field),
        })
        .collect();

    let rows = arranged[start..end]
        .iter()
        .map(|record| ViewRow {
            cells: fields.iter().map(|field| build_cell(record, *field)).collect(),
        })
        .collect();

    TableView {
        bands: build_bands(definition, state),
        headers,
        rows,
        total_rows,
        page_index,
        page_count,
        page_size,
    }
}
