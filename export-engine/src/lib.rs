//! FILENAME: export-engine/src/lib.rs
//! Export module for survey reports.
//!
//! Serializes the currently filtered, visible-column projection of a
//! report to CSV, XLSX, or PDF. The caller snapshots the projection into
//! an `ExportTable` at the moment of invocation, so the artifact always
//! matches what the user sees. Once the returned `ExportArtifact` is
//! handed to the platform's save mechanism the engine holds no further
//! reference to it.

mod csv_writer;
mod error;
mod pdf_writer;
mod xlsx_writer;

pub use error::ExportError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use model::{Field, FieldKind, FieldValue, SurveyRecord};

// ============================================================================
// FORMATS AND ARTIFACTS
// ============================================================================

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Spreadsheet,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// A generated in-memory file ready for the platform download boundary.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub filename: String,
}

// ============================================================================
// EXPORT TABLE
// ============================================================================

/// One column of the export projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportColumn {
    pub field: Field,
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Snapshot of the filtered rows x visible columns at export time.
/// Group headers are display-only and never reach this structure.
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub title: String,
    pub date: NaiveDate,
    pub columns: Vec<ExportColumn>,
    pub rows: Vec<Vec<FieldValue>>,
}

impl ExportTable {
    /// Builds the snapshot from arranged records and visible fields, both
    /// in the order the grid currently shows them.
    pub fn from_projection(
        title: &str,
        date: NaiveDate,
        records: &[&SurveyRecord],
        fields: &[Field],
    ) -> Self {
        let columns = fields
            .iter()
            .map(|field| ExportColumn {
                field: *field,
                name: field.name(),
                kind: field.kind(),
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| fields.iter().map(|field| record.value(*field)).collect())
            .collect();

        ExportTable {
            title: title.to_string(),
            date,
            columns,
            rows,
        }
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Serializes `table` to the requested format.
///
/// An empty row set still produces a valid artifact (header-only CSV/XLSX,
/// a titled PDF with just the header row).
pub fn export(table: &ExportTable, format: ExportFormat) -> Result<ExportArtifact, ExportError> {
    let bytes = match format {
        ExportFormat::Csv => csv_writer::write_csv(table)?,
        ExportFormat::Spreadsheet => xlsx_writer::write_xlsx(table)?,
        ExportFormat::Pdf => pdf_writer::write_pdf(table)?,
    };

    Ok(ExportArtifact {
        bytes,
        mime_type: format.mime_type(),
        filename: export_filename(&table.title, table.date, format),
    })
}

/// Deterministic artifact name: `{title}_{date}.{ext}` with the title
/// reduced to filesystem-safe characters.
pub fn export_filename(title: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        sanitize_title(title),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

fn sanitize_title(title: &str) -> String {
    let sanitized: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        "report".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    #[test]
    fn test_filename_policy() {
        assert_eq!(
            export_filename("District Wise Feedback Collection", date(), ExportFormat::Csv),
            "District_Wise_Feedback_Collection_2026-08-04.csv"
        );
        assert_eq!(
            export_filename("Report 2", date(), ExportFormat::Pdf),
            "Report_2_2026-08-04.pdf"
        );
        assert_eq!(
            export_filename("///", date(), ExportFormat::Spreadsheet),
            "____2026-08-04.xlsx"
        );
    }

    #[test]
    fn test_projection_snapshot_excludes_nothing_given() {
        let record = SurveyRecord {
            sno: 1,
            state: "A".to_string(),
            no_of_consumers: 10,
            ..SurveyRecord::default()
        };
        let fields = [Field::Sno, Field::State, Field::NoOfConsumers];
        let table = ExportTable::from_projection("t", date(), &[&record], &fields);

        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.columns[1].name, "state");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][2], FieldValue::Count(10));
    }
}
