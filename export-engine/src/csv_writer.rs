//! FILENAME: export-engine/src/csv_writer.rs

use csv::Writer;

use crate::{ExportError, ExportTable};

/// Serializes the table to CSV: header row of field names, then one row
/// per record in declared column order. Values containing the delimiter
/// are quoted by the writer.
pub(crate) fn write_csv(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(table.columns.iter().map(|column| column.name))?;

    for row in &table.rows {
        writer.write_record(row.iter().map(|value| value.display()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}
