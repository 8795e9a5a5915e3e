//! FILENAME: model/src/fixture.rs
//! District-feedback fixture transform.
//!
//! The district feedback source carries far fewer fields than the canonical
//! record: per-district totals, one installation count, one feature count,
//! and the experience split. The missing funnel and breakdown fields are
//! completed with fixed ratios applied to the fields that do exist.
//!
//! The ratios are a data-completion policy, not validated business rules:
//! they are configuration constants with documented defaults, overridable
//! by the caller, and applied deterministically so the same input always
//! yields the same derived output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;
use crate::record::SurveyRecord;

// ============================================================================
// SYNTHESIS RATIOS
// ============================================================================

/// The fixed fractions used to synthesize missing funnel/breakdown fields.
///
/// Each product is floored to an integer. Defaults mirror the established
/// completion policy for district feedback data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRatios {
    /// Fraction of consumers assumed to have submitted a response.
    pub response_rate: f64,
    /// Fraction of consumers with a message attempt.
    pub attempted_rate: f64,
    /// Fraction of consumers with a delivered message.
    pub delivered_rate: f64,
    /// Fraction of consumers who read a message.
    pub read_rate: f64,
    /// Fraction of consumers who clicked the form.
    pub clicked_rate: f64,

    /// Fraction of issues attributed to installation charges.
    pub amount_charged_share: f64,
    /// Fraction of issues attributed to improper installation.
    pub installation_share: f64,
    /// Fraction of issues attributed to the mobile app.
    pub app_not_working_share: f64,

    /// Fraction of non-installers who are not interested.
    pub not_interested_share: f64,
    /// Fraction of non-installers who are not aware.
    pub not_aware_share: f64,

    /// Fraction of available features that are recharge/bill.
    pub recharge_share: f64,
    /// Fraction of available features that are real-time consumption.
    pub real_time_share: f64,
    /// Fraction of available features that are consumption analysis.
    pub analysis_share: f64,

    /// Fraction of non-understanding respondents finding the bill too complex.
    pub too_complex_share: f64,
    /// Fraction citing language.
    pub local_language_share: f64,
    /// Fraction citing insufficient information.
    pub insufficient_info_share: f64,
    /// Fraction citing other issues.
    pub other_issues_share: f64,
}

impl Default for SynthesisRatios {
    fn default() -> Self {
        SynthesisRatios {
            response_rate: 0.80,
            attempted_rate: 0.90,
            delivered_rate: 0.85,
            read_rate: 0.75,
            clicked_rate: 0.60,
            amount_charged_share: 0.30,
            installation_share: 0.20,
            app_not_working_share: 0.10,
            not_interested_share: 0.40,
            not_aware_share: 0.30,
            recharge_share: 0.40,
            real_time_share: 0.35,
            analysis_share: 0.25,
            too_complex_share: 0.30,
            local_language_share: 0.25,
            insufficient_info_share: 0.25,
            other_issues_share: 0.20,
        }
    }
}

/// Floors `base * ratio` to a count.
fn scaled(base: u32, ratio: f64) -> u32 {
    (base as f64 * ratio).floor() as u32
}

// ============================================================================
// TRANSFORM
// ============================================================================

/// Transforms raw district-feedback rows into canonical records.
///
/// Fails fast on the first malformed row: a missing or non-numeric field
/// produces a `ModelError` naming the field and source index rather than
/// letting a bad value propagate into aggregates.
pub fn transform_district_feedback(
    rows: &[Value],
    ratios: &SynthesisRatios,
) -> Result<Vec<SurveyRecord>, ModelError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| transform_row(row, index, ratios))
        .collect()
}

fn transform_row(
    row: &Value,
    index: usize,
    ratios: &SynthesisRatios,
) -> Result<SurveyRecord, ModelError> {
    let obj = row
        .as_object()
        .ok_or(ModelError::NotAnObject { index })?;

    let state = get_text(obj, "State", index)?;
    let district = get_text(obj, "District", index)?;
    let no_of_consumers = get_count(obj, "no_of_consumers", index)?;
    let issue_faced = get_count(obj, "issue_faced", index)?;
    let higher_meter_reading = get_count(obj, "higher_meter_reading", index)?;
    let app_installed = get_count(obj, "app_installed", index)?;
    let feature_available = get_count(obj, "feature_available", index)?;
    let easy_to_understand = get_count(obj, "Bill_is_easy_to_understand", index)?;
    let mobile_app_easy_to_use = get_count(obj, "Mobile_app_easy_to_use", index)?;
    let excellent = get_count(obj, "Overall_Experience_Excellent", index)?;
    let good = get_count(obj, "Overall_Experience_Good", index)?;
    let average = get_count(obj, "Overall_Experience_Average", index)?;
    let bad = get_count(obj, "Overall_Experience_Bad", index)?;

    let consumers_submitted_response = scaled(no_of_consumers, ratios.response_rate);
    let not_installed = consumers_submitted_response.saturating_sub(app_installed);
    let not_understanding = consumers_submitted_response.saturating_sub(easy_to_understand);

    Ok(SurveyRecord {
        sno: (index + 1) as u32,
        state,
        district,
        // Not carried by district feedback data
        amisp: "N/A".to_string(),
        no_of_consumers,
        messages_attempted: scaled(no_of_consumers, ratios.attempted_rate),
        messages_delivered: scaled(no_of_consumers, ratios.delivered_rate),
        messages_read: scaled(no_of_consumers, ratios.read_rate),
        consumers_clicked_form: scaled(no_of_consumers, ratios.clicked_rate),
        consumers_submitted_response,
        issue_faced,
        higher_meter_reading,
        amount_charged: scaled(issue_faced, ratios.amount_charged_share),
        installation_not_proper: scaled(issue_faced, ratios.installation_share),
        mobile_app_not_working: scaled(issue_faced, ratios.app_not_working_share),
        not_installed,
        not_interested: scaled(not_installed, ratios.not_interested_share),
        not_aware: scaled(not_installed, ratios.not_aware_share),
        recharge_bill_option: scaled(feature_available, ratios.recharge_share),
        real_time_consumption: scaled(feature_available, ratios.real_time_share),
        consumption_analysis: scaled(feature_available, ratios.analysis_share),
        easy_to_understand,
        too_complex: scaled(not_understanding, ratios.too_complex_share),
        not_in_local_language: scaled(not_understanding, ratios.local_language_share),
        insufficient_information: scaled(not_understanding, ratios.insufficient_info_share),
        other_issues: scaled(not_understanding, ratios.other_issues_share),
        // The source has a single bill-comprehension count
        bill_payment_easy: easy_to_understand,
        mobile_app_easy_to_use,
        excellent,
        good,
        average,
        bad,
    })
}

fn get_text(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<String, ModelError> {
    let value = obj
        .get(field)
        .ok_or(ModelError::MissingField { field, index })?;
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or(ModelError::WrongType {
            field,
            index,
            expected: "string",
        })
}

fn get_count(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<u32, ModelError> {
    let value = obj
        .get(field)
        .ok_or(ModelError::MissingField { field, index })?;
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(ModelError::WrongType {
            field,
            index,
            expected: "count",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> Value {
        json!({
            "State": "Maharashtra",
            "District": "Pune",
            "no_of_consumers": 1000,
            "issue_faced": 120,
            "higher_meter_reading": 40,
            "app_installed": 500,
            "feature_available": 300,
            "Bill_is_easy_to_understand": 400,
            "Mobile_app_easy_to_use": 450,
            "Overall_Experience_Excellent": 200,
            "Overall_Experience_Good": 300,
            "Overall_Experience_Average": 150,
            "Overall_Experience_Bad": 50
        })
    }

    #[test]
    fn test_transform_synthesizes_funnel() {
        let records =
            transform_district_feedback(&[sample_row()], &SynthesisRatios::default()).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];

        assert_eq!(r.sno, 1);
        assert_eq!(r.state, "Maharashtra");
        assert_eq!(r.amisp, "N/A");
        assert_eq!(r.consumers_submitted_response, 800); // 1000 * 0.8
        assert_eq!(r.messages_attempted, 900);
        assert_eq!(r.messages_delivered, 850);
        assert_eq!(r.messages_read, 750);
        assert_eq!(r.consumers_clicked_form, 600);
        assert_eq!(r.not_installed, 300); // 800 - 500
        assert_eq!(r.not_interested, 120); // 300 * 0.4
        assert_eq!(r.amount_charged, 36); // 120 * 0.3
        assert_eq!(r.too_complex, 120); // (800 - 400) * 0.3
        assert_eq!(r.bill_payment_easy, 400);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let rows = [sample_row(), sample_row()];
        let ratios = SynthesisRatios::default();
        let first = transform_district_feedback(&rows, &ratios).unwrap();
        let second = transform_district_feedback(&rows, &ratios).unwrap();
        assert_eq!(first[0], second[0]);
        // Only the serial number distinguishes identical source rows
        assert_eq!(first[1].sno, 2);
    }

    #[test]
    fn test_missing_field_fails_fast() {
        let mut row = sample_row();
        row.as_object_mut().unwrap().remove("issue_faced");

        let err = transform_district_feedback(&[sample_row(), row], &SynthesisRatios::default())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("issue_faced"));
        assert!(message.contains("row 1"));
    }

    #[test]
    fn test_wrong_type_fails_fast() {
        let mut row = sample_row();
        row["no_of_consumers"] = json!("many");

        let err =
            transform_district_feedback(&[row], &SynthesisRatios::default()).unwrap_err();
        assert!(err.to_string().contains("no_of_consumers"));
    }

    #[test]
    fn test_override_ratios() {
        let ratios = SynthesisRatios {
            response_rate: 0.5,
            ..SynthesisRatios::default()
        };
        let records = transform_district_feedback(&[sample_row()], &ratios).unwrap();
        assert_eq!(records[0].consumers_submitted_response, 500);
    }
}
