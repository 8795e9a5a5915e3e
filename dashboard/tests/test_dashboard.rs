//! FILENAME: tests/test_dashboard.rs
//! Integration tests for the dashboard container: shared filtering,
//! view/export consistency, and fixture loading.

use chrono::NaiveDate;
use serde_json::{json, Value};

use dashboard::{Dashboard, NotificationLevel, Report, REPORT_TITLES};
use export_engine::ExportFormat;
use model::{Field, SurveyRecord, SynthesisRatios};
use report_engine::Dimension;

fn record(sno: u32, state: &str, district: &str, consumers: u32) -> SurveyRecord {
    SurveyRecord {
        sno,
        state: state.to_string(),
        district: district.to_string(),
        amisp: format!("AMISP{:03}", sno),
        no_of_consumers: consumers,
        messages_attempted: consumers / 2,
        consumers_submitted_response: consumers / 4,
        ..SurveyRecord::default()
    }
}

fn fixture_row(state: &str, district: &str, consumers: u32) -> Value {
    json!({
        "State": state,
        "District": district,
        "no_of_consumers": consumers,
        "issue_faced": consumers / 10,
        "higher_meter_reading": consumers / 20,
        "app_installed": consumers / 2,
        "feature_available": consumers / 3,
        "Bill_is_easy_to_understand": consumers / 2,
        "Mobile_app_easy_to_use": consumers / 2,
        "Overall_Experience_Excellent": consumers / 5,
        "Overall_Experience_Good": consumers / 4,
        "Overall_Experience_Average": consumers / 6,
        "Overall_Experience_Bad": consumers / 20
    })
}

fn sample_dashboard() -> Dashboard {
    let _ = env_logger::builder().is_test(true).try_init();
    Dashboard::new(vec![
        Report::new(
            1,
            REPORT_TITLES[0],
            vec![
                record(1, "Maharashtra", "Pune", 1000),
                record(2, "Delhi", "Delhi", 2000),
                record(3, "Maharashtra", "Nagpur", 500),
            ],
        ),
        Report::new(2, REPORT_TITLES[1], vec![record(1, "Kerala", "Kochi", 800)]),
    ])
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
}

// ============================================================================
// FILTER AND VIEW WIRING
// ============================================================================

#[test]
fn test_filter_change_updates_views_and_stats_together() {
    let mut dash = sample_dashboard();
    dash.toggle_filter(Dimension::State, "Maharashtra");

    let view = dash.view(1).unwrap();
    assert_eq!(view.total_rows, 2);
    assert_eq!(dash.stats(1).unwrap().total_consumers, 1500);

    // The other tab sees the same selection
    assert_eq!(dash.view(2).unwrap().total_rows, 0);
}

#[test]
fn test_view_state_untouched_by_export() {
    let mut dash = sample_dashboard();
    dash.view_state_mut(1).unwrap().set_search("maha");
    dash.export_report(1, ExportFormat::Csv, date()).unwrap();

    assert_eq!(dash.view_state_mut(1).unwrap().search, "maha");
    assert_eq!(dash.view(1).unwrap().total_rows, 2);
}

// ============================================================================
// EXPORT CONSISTENCY
// ============================================================================

#[test]
fn test_export_matches_current_projection() {
    let mut dash = sample_dashboard();
    dash.toggle_filter(Dimension::State, "Maharashtra");
    {
        let state = dash.view_state_mut(1).unwrap();
        state.toggle_column(Field::Amisp);
        state.toggle_sort(Field::NoOfConsumers);
    }

    let artifact = dash.export_report(1, ExportFormat::Csv, date()).unwrap();
    assert_eq!(artifact.mime_type, "text/csv");
    assert_eq!(
        artifact.filename,
        "District_Wise_Feedback_Collection_2026-08-04.csv"
    );

    let text = String::from_utf8(artifact.bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // Header drops the hidden column, no group labels anywhere
    assert!(lines[0].starts_with("sno,state,district,no_of_consumers"));
    assert!(!lines[0].contains("amisp"));
    assert!(!text.contains("Facing Meter Issue"));
    // Two filtered rows, ascending by consumers: Nagpur 500 then Pune 1000
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Nagpur"));
    assert!(lines[2].contains("Pune"));
}

#[test]
fn test_export_empty_filter_result_is_header_only() {
    let mut dash = sample_dashboard();
    dash.toggle_filter(Dimension::State, "Nowhere");

    let artifact = dash.export_report(1, ExportFormat::Csv, date()).unwrap();
    let text = String::from_utf8(artifact.bytes).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_export_all_formats_produce_artifacts() {
    let mut dash = sample_dashboard();
    for (format, ext) in [
        (ExportFormat::Csv, "csv"),
        (ExportFormat::Spreadsheet, "xlsx"),
        (ExportFormat::Pdf, "pdf"),
    ] {
        let artifact = dash.export_report(2, format, date()).unwrap();
        assert!(!artifact.bytes.is_empty());
        assert!(artifact.filename.ends_with(ext));
    }
    assert!(dash.notifications().is_empty());
}

// ============================================================================
// FIXTURE LOADING
// ============================================================================

#[test]
fn test_load_district_feedback_end_to_end() {
    let mut dash = sample_dashboard();
    let rows = vec![
        fixture_row("Gujarat", "Surat", 1000),
        fixture_row("Gujarat", "Rajkot", 600),
    ];
    assert!(dash.load_district_feedback(3, "Report 3", &rows, &SynthesisRatios::default()));

    assert_eq!(dash.reports().len(), 3);
    let notifications = dash.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Info);
    assert!(notifications[0].message.contains("2 record(s)"));
    assert!(dash
        .filter_options()
        .states
        .contains(&"Gujarat".to_string()));
    // Synthesized amisp participates in filtering
    dash.toggle_filter(Dimension::Amisp, "N/A");
    assert_eq!(dash.view(3).unwrap().total_rows, 2);
    assert_eq!(dash.view(1).unwrap().total_rows, 0);
}

#[test]
fn test_malformed_fixture_is_reported_not_fatal() {
    let mut dash = sample_dashboard();
    let mut bad = fixture_row("Gujarat", "Surat", 1000);
    bad.as_object_mut().unwrap().remove("issue_faced");

    assert!(!dash.load_district_feedback(3, "Report 3", &[bad], &SynthesisRatios::default()));
    assert_eq!(dash.reports().len(), 2);

    let notifications = dash.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Warning);
    assert!(notifications[0].message.contains("issue_faced"));

    // Still interactive afterwards
    assert!(dash.view(1).is_some());
    assert!(dash.notifications().is_empty());
}
