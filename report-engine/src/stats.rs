//! FILENAME: report-engine/src/stats.rs
//! Summary statistics over a filtered record set.
//!
//! Aggregates always run over an already-filtered slice, never the full
//! report, and are recomputed in full on every filter change. At the
//! record counts in scope there is nothing to gain from incremental
//! updates.

use serde::{Deserialize, Serialize};

use model::SurveyRecord;

/// The fixed set of named summaries shown on the report cards.
///
/// Ratios over an empty set are 0.0, never NaN or an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_consumers: u64,
    pub total_messages_attempted: u64,
    pub total_messages_delivered: u64,
    pub total_messages_read: u64,
    pub total_responses: u64,
    pub total_meter_issues: u64,
    /// Sum of (submitted - not_installed) per record.
    pub total_app_installed: u64,
    /// total_responses / total_consumers.
    pub response_rate: f64,
    /// total_meter_issues / total_responses.
    pub issue_rate: f64,
    /// Mean consumers per record.
    pub avg_consumers_per_row: f64,
}

/// Ratio with the zero-denominator policy applied.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

/// Reduces `records` to the report summary. Pure: identical input slices
/// always produce identical stats.
pub fn summarize(records: &[&SurveyRecord]) -> ReportStats {
    let mut stats = ReportStats::default();

    for record in records {
        stats.total_consumers += record.no_of_consumers as u64;
        stats.total_messages_attempted += record.messages_attempted as u64;
        stats.total_messages_delivered += record.messages_delivered as u64;
        stats.total_messages_read += record.messages_read as u64;
        stats.total_responses += record.consumers_submitted_response as u64;
        stats.total_meter_issues += record.issue_faced as u64;
        stats.total_app_installed += record.app_installed() as u64;
    }

    stats.response_rate = ratio(stats.total_responses, stats.total_consumers);
    stats.issue_rate = ratio(stats.total_meter_issues, stats.total_responses);
    stats.avg_consumers_per_row = ratio(stats.total_consumers, records.len() as u64);

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(consumers: u32, submitted: u32, issues: u32, not_installed: u32) -> SurveyRecord {
        SurveyRecord {
            no_of_consumers: consumers,
            consumers_submitted_response: submitted,
            issue_faced: issues,
            not_installed,
            ..SurveyRecord::default()
        }
    }

    #[test]
    fn test_summarize_empty_is_all_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats, ReportStats::default());
        assert_eq!(stats.response_rate, 0.0);
        assert!(!stats.issue_rate.is_nan());
    }

    #[test]
    fn test_summarize_sums_and_ratios() {
        let a = record(1000, 800, 100, 300);
        let b = record(500, 200, 50, 100);
        let stats = summarize(&[&a, &b]);

        assert_eq!(stats.total_consumers, 1500);
        assert_eq!(stats.total_responses, 1000);
        assert_eq!(stats.total_meter_issues, 150);
        assert_eq!(stats.total_app_installed, 600); // (800-300) + (200-100)
        assert!((stats.response_rate - 1000.0 / 1500.0).abs() < 1e-12);
        assert!((stats.issue_rate - 0.15).abs() < 1e-12);
        assert!((stats.avg_consumers_per_row - 750.0).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_is_pure() {
        let a = record(100, 80, 10, 20);
        let records = vec![&a];
        assert_eq!(summarize(&records), summarize(&records));
    }
}
