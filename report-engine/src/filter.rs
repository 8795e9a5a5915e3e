//! FILENAME: report-engine/src/filter.rs
//! The filter operation.

use model::SurveyRecord;

use crate::selection::FilterSelection;

/// Admits the records matching every active dimension of `selection`.
///
/// Pure: input records are untouched and the output preserves their
/// relative order. O(records x dimensions); the record counts in scope
/// never warrant an index.
pub fn filter_records<'a>(
    records: &'a [SurveyRecord],
    selection: &FilterSelection,
) -> Vec<&'a SurveyRecord> {
    records
        .iter()
        .filter(|record| selection.admits(record))
        .collect()
}
