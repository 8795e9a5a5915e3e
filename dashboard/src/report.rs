//! FILENAME: dashboard/src/report.rs
//! A named, ordered collection of survey records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use model::{transform_district_feedback, ModelError, SurveyRecord, SynthesisRatios};

/// Identifies a report within the dashboard.
pub type ReportId = u32;

/// Tab titles of the four concurrently-live reports.
pub const REPORT_TITLES: [&str; 4] = [
    "District Wise Feedback Collection",
    "Report 2",
    "Report 3",
    "Report 4",
];

/// One report tab's data. Records are immutable for the report's lifetime;
/// there is no row-level create/update/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub records: Vec<SurveyRecord>,
}

impl Report {
    pub fn new(id: ReportId, title: impl Into<String>, records: Vec<SurveyRecord>) -> Self {
        Report {
            id,
            title: title.into(),
            records,
        }
    }

    /// Builds a report from raw district-feedback rows, completing the
    /// missing funnel fields with the given synthesis ratios. Fails fast
    /// on the first malformed row.
    pub fn from_district_feedback(
        id: ReportId,
        title: impl Into<String>,
        rows: &[Value],
        ratios: &SynthesisRatios,
    ) -> Result<Self, ModelError> {
        let records = transform_district_feedback(rows, ratios)?;
        Ok(Report::new(id, title, records))
    }
}
