//! FILENAME: dashboard/src/lib.rs
//! Dashboard container for the survey analytics reports.
//!
//! The dashboard owns the pieces the engines only borrow: the report
//! collections, the single `FilterSelection` shared by every report tab,
//! one `ViewState` per table instance, and the notification queue. All
//! mutation goes through its methods, serialized by the single-threaded
//! event model; the engines themselves stay pure.

pub mod notify;
pub mod report;

pub use notify::{Notification, NotificationLevel};
pub use report::{Report, ReportId, REPORT_TITLES};

use chrono::NaiveDate;
use log::{info, warn};
use serde_json::Value;

use export_engine::{export, ExportArtifact, ExportFormat, ExportTable};
use model::{SurveyRecord, SynthesisRatios};
use report_engine::{
    filter_records, summarize, Dimension, FilterOptions, FilterSelection, ReportStats,
};
use table_engine::{
    arrange_records, project, visible_fields, TableDefinition, TableView, ViewState,
};

// ============================================================================
// DASHBOARD
// ============================================================================

/// The root container: reports plus all shared and per-table state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    reports: Vec<Report>,
    view_states: Vec<ViewState>,
    selection: FilterSelection,
    definition: TableDefinition,
    options: FilterOptions,
    notifications: Vec<Notification>,
}

impl Dashboard {
    /// Creates a dashboard over `reports`, deriving the filter option
    /// lists from every report's records.
    pub fn new(reports: Vec<Report>) -> Self {
        let options =
            FilterOptions::from_records(reports.iter().flat_map(|r| r.records.iter()));
        let view_states = reports.iter().map(|_| ViewState::new()).collect();
        info!(
            "dashboard ready: {} report(s), {} state option(s)",
            reports.len(),
            options.states.len()
        );

        Dashboard {
            reports,
            view_states,
            selection: FilterSelection::new(),
            definition: TableDefinition::survey(),
            options,
            notifications: Vec::new(),
        }
    }

    /// Adds a report built from district-feedback rows, queueing an
    /// info notification with the loaded row count. A malformed fixture
    /// excludes the whole report instead: the error is logged and queued
    /// as a warning, and the dashboard stays interactive.
    pub fn load_district_feedback(
        &mut self,
        id: ReportId,
        title: &str,
        rows: &[Value],
        ratios: &SynthesisRatios,
    ) -> bool {
        match Report::from_district_feedback(id, title, rows, ratios) {
            Ok(report) => {
                let count = report.records.len();
                info!("loaded report '{title}' with {count} record(s)");
                self.reports.push(report);
                self.view_states.push(ViewState::new());
                self.options = FilterOptions::from_records(
                    self.reports.iter().flat_map(|r| r.records.iter()),
                );
                self.notifications.push(Notification::info(format!(
                    "Report '{title}' loaded with {count} record(s)"
                )));
                true
            }
            Err(e) => {
                warn!("report '{title}' rejected: {e}");
                self.notifications
                    .push(Notification::warning(format!("Report '{title}' rejected: {e}")));
                false
            }
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Shared filter state
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Replaces the whole selection, as emitted by the filter UI. The new
    /// selection applies to every report at once.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        info!("selection replaced; {} active value(s)", selection.active_count());
        self.selection = selection;
    }

    /// Checks or unchecks one dimension value. The new selection applies
    /// to every report at once.
    pub fn toggle_filter(&mut self, dimension: Dimension, value: &str) -> bool {
        let checked = self.selection.toggle(dimension, value);
        info!(
            "filter {dimension:?}={value} {}; {} active value(s)",
            if checked { "checked" } else { "unchecked" },
            self.selection.active_count()
        );
        checked
    }

    /// Resets every dimension to wildcard.
    pub fn clear_filters(&mut self) {
        self.selection.clear();
        info!("filters cleared");
    }

    // ------------------------------------------------------------------
    // Per-report pipeline
    // ------------------------------------------------------------------

    fn index_of(&self, id: ReportId) -> Option<usize> {
        self.reports.iter().position(|r| r.id == id)
    }

    /// Records of one report admitted by the shared selection.
    pub fn filtered(&self, id: ReportId) -> Option<Vec<&SurveyRecord>> {
        let index = self.index_of(id)?;
        Some(filter_records(&self.reports[index].records, &self.selection))
    }

    /// Summary statistics over the filtered record set.
    pub fn stats(&self, id: ReportId) -> Option<ReportStats> {
        Some(summarize(&self.filtered(id)?))
    }

    /// Renders one report's current table page.
    pub fn view(&self, id: ReportId) -> Option<TableView> {
        let index = self.index_of(id)?;
        let filtered = filter_records(&self.reports[index].records, &self.selection);
        Some(project(&filtered, &self.definition, &self.view_states[index]))
    }

    /// The table instance state backing one report, for sort/search/
    /// visibility/page mutations.
    pub fn view_state_mut(&mut self, id: ReportId) -> Option<&mut ViewState> {
        let index = self.index_of(id)?;
        Some(&mut self.view_states[index])
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Exports the filtered, visible-column projection of one report as it
    /// stands right now. A failed export queues a warning and returns
    /// None; selection and view states are never touched.
    pub fn export_report(
        &mut self,
        id: ReportId,
        format: ExportFormat,
        date: NaiveDate,
    ) -> Option<ExportArtifact> {
        let index = self.index_of(id)?;
        let report = &self.reports[index];
        let state = &self.view_states[index];

        let filtered = filter_records(&report.records, &self.selection);
        let arranged = arrange_records(&filtered, &self.definition, state);
        let fields = visible_fields(&self.definition, state);
        let table = ExportTable::from_projection(&report.title, date, &arranged, &fields);

        match export(&table, format) {
            Ok(artifact) => {
                info!(
                    "exported '{}' as {} ({} rows, {} bytes)",
                    artifact.filename,
                    artifact.mime_type,
                    table.rows.len(),
                    artifact.bytes.len()
                );
                Some(artifact)
            }
            Err(e) => {
                warn!("export of '{}' failed: {e}", report.title);
                self.notifications.push(Notification::warning(format!(
                    "Export of '{}' failed: {e}",
                    report.title
                )));
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drains the queue for display.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sno: u32, state: &str) -> SurveyRecord {
        SurveyRecord {
            sno,
            state: state.to_string(),
            district: "D".to_string(),
            amisp: "P".to_string(),
            no_of_consumers: 100,
            consumers_submitted_response: 80,
            ..SurveyRecord::default()
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(vec![
            Report::new(1, REPORT_TITLES[0], vec![record(1, "A"), record(2, "B")]),
            Report::new(2, REPORT_TITLES[1], vec![record(1, "A"), record(2, "A")]),
        ])
    }

    #[test]
    fn test_shared_filter_applies_to_every_report() {
        let mut dash = dashboard();
        dash.toggle_filter(Dimension::State, "A");

        assert_eq!(dash.filtered(1).unwrap().len(), 1);
        assert_eq!(dash.filtered(2).unwrap().len(), 2);
    }

    #[test]
    fn test_set_selection_replaces_wholesale() {
        let mut dash = dashboard();
        dash.toggle_filter(Dimension::State, "B");

        let mut replacement = FilterSelection::new();
        replacement.toggle(Dimension::State, "A");
        dash.set_selection(replacement);

        assert_eq!(dash.filtered(1).unwrap().len(), 1);
        assert_eq!(dash.filtered(1).unwrap()[0].state, "A");
    }

    #[test]
    fn test_clear_filters_restores_all_rows() {
        let mut dash = dashboard();
        dash.toggle_filter(Dimension::State, "A");
        dash.clear_filters();
        assert_eq!(dash.filtered(1).unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_report_is_none_not_panic() {
        let dash = dashboard();
        assert!(dash.filtered(99).is_none());
        assert!(dash.stats(99).is_none());
        assert!(dash.view(99).is_none());
    }

    #[test]
    fn test_stats_follow_filter() {
        let mut dash = dashboard();
        assert_eq!(dash.stats(1).unwrap().total_consumers, 200);
        dash.toggle_filter(Dimension::State, "A");
        assert_eq!(dash.stats(1).unwrap().total_consumers, 100);
    }

    #[test]
    fn test_options_span_all_reports() {
        let dash = dashboard();
        assert_eq!(dash.filter_options().states, vec!["A", "B"]);
    }
}
