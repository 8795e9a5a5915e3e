//! FILENAME: model/src/record.rs
//! PURPOSE: Defines the canonical survey record.
//! CONTEXT: One `SurveyRecord` is one row of feedback data for a
//! state/district/AMISP combination. Records are immutable once built and
//! live exactly as long as the in-memory report that owns them.

use serde::{Deserialize, Serialize};

/// One row of survey feedback data.
///
/// Breakdown fields are semantically subsets of their parent funnel stage
/// (e.g. issue sub-reasons of `issue_faced`), but the model does not
/// enforce that: generated or synthesized data may carry inconsistent
/// sub-totals, and the read path must tolerate them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    // Identity
    pub sno: u32,
    pub state: String,
    pub district: String,
    pub amisp: String,

    // Consumer & message funnel
    pub no_of_consumers: u32,
    pub messages_attempted: u32,
    pub messages_delivered: u32,
    pub messages_read: u32,
    pub consumers_clicked_form: u32,
    pub consumers_submitted_response: u32,

    // Meter issue breakdown
    pub issue_faced: u32,
    pub higher_meter_reading: u32,
    pub amount_charged: u32,
    pub installation_not_proper: u32,
    pub mobile_app_not_working: u32,

    // App installation breakdown
    pub not_installed: u32,
    pub not_interested: u32,
    pub not_aware: u32,

    // Feature adoption
    pub recharge_bill_option: u32,
    pub real_time_consumption: u32,
    pub consumption_analysis: u32,

    // Bill comprehension
    pub easy_to_understand: u32,
    pub too_complex: u32,
    pub not_in_local_language: u32,
    pub insufficient_information: u32,
    pub other_issues: u32,

    // Payment & app usability
    pub bill_payment_easy: u32,
    pub mobile_app_easy_to_use: u32,

    // Overall experience
    pub excellent: u32,
    pub good: u32,
    pub average: u32,
    pub bad: u32,
}

impl SurveyRecord {
    /// Respondents who installed the app: submitted minus not-installed.
    /// Saturates at zero for inconsistent sub-totals.
    pub fn app_installed(&self) -> u32 {
        self.consumers_submitted_response
            .saturating_sub(self.not_installed)
    }

    /// Respondents who did not find the bill easy to understand.
    /// Saturates at zero for inconsistent sub-totals.
    pub fn not_understanding(&self) -> u32 {
        self.consumers_submitted_response
            .saturating_sub(self.easy_to_understand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_installed() {
        let record = SurveyRecord {
            consumers_submitted_response: 100,
            not_installed: 30,
            ..SurveyRecord::default()
        };
        assert_eq!(record.app_installed(), 70);
    }

    #[test]
    fn test_derived_helpers_saturate() {
        let record = SurveyRecord {
            consumers_submitted_response: 10,
            not_installed: 25,
            easy_to_understand: 40,
            ..SurveyRecord::default()
        };
        assert_eq!(record.app_installed(), 0);
        assert_eq!(record.not_understanding(), 0);
    }
}
