//! FILENAME: export-engine/src/xlsx_writer.rs

use rust_xlsxwriter::{Format, Workbook};

use model::{FieldKind, FieldValue};

use crate::{ExportColumn, ExportError, ExportTable};

/// Worksheet names are capped at 31 characters by the format.
const SHEET_NAME_MAX: usize = 31;

/// Fixed display widths per column kind (Excel character units).
fn column_width(column: &ExportColumn) -> f64 {
    if column.name == "sno" {
        return 8.0;
    }
    match column.kind {
        FieldKind::Text => 18.0,
        FieldKind::Count => 14.0,
    }
}

fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(SHEET_NAME_MAX)
        .collect();
    if cleaned.trim().is_empty() {
        "Report".to_string()
    } else {
        cleaned
    }
}

/// Serializes the table to a single-sheet XLSX workbook: bold header row,
/// fixed column widths, counts written as numbers.
pub(crate) fn write_xlsx(table: &ExportTable) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(&table.title))?;

    let header_format = Format::new().set_bold();

    for (col, column) in table.columns.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, column_width(column))?;
        worksheet.write_string_with_format(0, col, column.name, &header_format)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let excel_row = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                FieldValue::Count(n) => {
                    worksheet.write_number(excel_row, col, *n as f64)?;
                }
                FieldValue::Text(s) => {
                    worksheet.write_string(excel_row, col, s)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use chrono::NaiveDate;
    use model::{Field, SurveyRecord};
    use std::io::Write;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    #[test]
    fn test_sheet_name_is_cleaned_and_capped() {
        assert_eq!(sheet_name("Report 2"), "Report 2");
        assert_eq!(sheet_name("a/b[c]"), "abc");
        assert_eq!(
            sheet_name("District Wise Feedback Collection").len(),
            SHEET_NAME_MAX
        );
        assert_eq!(sheet_name("///"), "Report");
    }

    #[test]
    fn test_written_workbook_reads_back() {
        let record = SurveyRecord {
            sno: 7,
            state: "Kerala".to_string(),
            district: "Kochi".to_string(),
            no_of_consumers: 4321,
            ..SurveyRecord::default()
        };
        let fields = [
            Field::Sno,
            Field::State,
            Field::District,
            Field::NoOfConsumers,
        ];
        let table = ExportTable::from_projection("Report 2", date(), &[&record], &fields);
        let bytes = write_xlsx(&table).unwrap();

        let mut file = tempfile::NamedTempFile::with_suffix(".xlsx").unwrap();
        file.write_all(&bytes).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(file.path()).unwrap();
        let range = workbook.worksheet_range("Report 2").unwrap();
        assert_eq!(range.get_value((0, 1)), Some(&Data::String("state".to_string())));
        assert_eq!(range.get_value((1, 1)), Some(&Data::String("Kerala".to_string())));
        assert_eq!(range.get_value((1, 3)), Some(&Data::Float(4321.0)));
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let table =
            ExportTable::from_projection("Empty", date(), &[], &[Field::Sno, Field::State]);
        let bytes = write_xlsx(&table).unwrap();

        let mut file = tempfile::NamedTempFile::with_suffix(".xlsx").unwrap();
        file.write_all(&bytes).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(file.path()).unwrap();
        let range = workbook.worksheet_range("Empty").unwrap();
        assert_eq!(range.height(), 1);
        assert_eq!(range.get_value((0, 0)), Some(&Data::String("sno".to_string())));
    }
}
