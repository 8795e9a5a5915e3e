//! FILENAME: model/src/field.rs
//! Field catalog for survey records.
//!
//! Every column the table, stats, and export layers can touch is listed
//! here once, in the declared order that headers and CSV rows follow.
//! Each count field also knows its percentage basis: the denominator used
//! when a cell is rendered as "value (xx.x%)".

use serde::{Deserialize, Serialize};

use crate::record::SurveyRecord;

// ============================================================================
// FIELD ENUM
// ============================================================================

/// One column of the survey record schema, in stable declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    // Identity
    Sno,
    State,
    District,
    Amisp,
    // Consumer & message funnel
    NoOfConsumers,
    MessagesAttempted,
    MessagesDelivered,
    MessagesRead,
    ConsumersClickedForm,
    ConsumersSubmittedResponse,
    // Meter issue breakdown
    IssueFaced,
    HigherMeterReading,
    AmountCharged,
    InstallationNotProper,
    MobileAppNotWorking,
    // App installation breakdown
    NotInstalled,
    NotInterested,
    NotAware,
    // Feature adoption
    RechargeBillOption,
    RealTimeConsumption,
    ConsumptionAnalysis,
    // Bill comprehension
    EasyToUnderstand,
    TooComplex,
    NotInLocalLanguage,
    InsufficientInformation,
    OtherIssues,
    // Payment & app usability
    BillPaymentEasy,
    MobileAppEasyToUse,
    // Overall experience
    Excellent,
    Good,
    Average,
    Bad,
}

/// The native type of a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Count,
}

/// The denominator used for a field's render-time percentage.
///
/// Two bases are derived quantities rather than stored fields, so they get
/// their own variants instead of pointing at a `Field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentBasis {
    /// Divide by another stored field's value.
    Field(Field),
    /// Divide by `consumers_submitted_response - not_installed`.
    AppInstalled,
    /// Divide by `consumers_submitted_response - easy_to_understand`.
    NotUnderstanding,
}

impl Field {
    /// Every field, in declared (header/export) order.
    pub const ALL: [Field; 32] = [
        Field::Sno,
        Field::State,
        Field::District,
        Field::Amisp,
        Field::NoOfConsumers,
        Field::MessagesAttempted,
        Field::MessagesDelivered,
        Field::MessagesRead,
        Field::ConsumersClickedForm,
        Field::ConsumersSubmittedResponse,
        Field::IssueFaced,
        Field::HigherMeterReading,
        Field::AmountCharged,
        Field::InstallationNotProper,
        Field::MobileAppNotWorking,
        Field::NotInstalled,
        Field::NotInterested,
        Field::NotAware,
        Field::RechargeBillOption,
        Field::RealTimeConsumption,
        Field::ConsumptionAnalysis,
        Field::EasyToUnderstand,
        Field::TooComplex,
        Field::NotInLocalLanguage,
        Field::InsufficientInformation,
        Field::OtherIssues,
        Field::BillPaymentEasy,
        Field::MobileAppEasyToUse,
        Field::Excellent,
        Field::Good,
        Field::Average,
        Field::Bad,
    ];

    /// Machine name, used as CSV/XLSX header and search key.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Sno => "sno",
            Field::State => "state",
            Field::District => "district",
            Field::Amisp => "amisp",
            Field::NoOfConsumers => "no_of_consumers",
            Field::MessagesAttempted => "messages_attempted",
            Field::MessagesDelivered => "messages_delivered",
            Field::MessagesRead => "messages_read",
            Field::ConsumersClickedForm => "consumers_clicked_form",
            Field::ConsumersSubmittedResponse => "consumers_submitted_response",
            Field::IssueFaced => "issue_faced",
            Field::HigherMeterReading => "higher_meter_reading",
            Field::AmountCharged => "amount_charged",
            Field::InstallationNotProper => "installation_not_proper",
            Field::MobileAppNotWorking => "mobile_app_not_working",
            Field::NotInstalled => "not_installed",
            Field::NotInterested => "not_interested",
            Field::NotAware => "not_aware",
            Field::RechargeBillOption => "recharge_bill_option",
            Field::RealTimeConsumption => "real_time_consumption",
            Field::ConsumptionAnalysis => "consumption_analysis",
            Field::EasyToUnderstand => "easy_to_understand",
            Field::TooComplex => "too_complex",
            Field::NotInLocalLanguage => "not_in_local_language",
            Field::InsufficientInformation => "insufficient_information",
            Field::OtherIssues => "other_issues",
            Field::BillPaymentEasy => "bill_payment_easy",
            Field::MobileAppEasyToUse => "mobile_app_easy_to_use",
            Field::Excellent => "excellent",
            Field::Good => "good",
            Field::Average => "average",
            Field::Bad => "bad",
        }
    }

    /// Human-facing column label.
    pub fn title(&self) -> &'static str {
        match self {
            Field::Sno => "S.No",
            Field::State => "State",
            Field::District => "District",
            Field::Amisp => "AMISP",
            Field::NoOfConsumers => "No. of consumers",
            Field::MessagesAttempted => "No. of messages attempted",
            Field::MessagesDelivered => "No. of messages delivered",
            Field::MessagesRead => "No. of messages read",
            Field::ConsumersClickedForm => "No. of consumers clicked form",
            Field::ConsumersSubmittedResponse => "No. of consumers submitted response",
            Field::IssueFaced => "Yes, issue faced",
            Field::HigherMeterReading => "Higher meter reading",
            Field::AmountCharged => "Amount charged during installation",
            Field::InstallationNotProper => "Installation not proper",
            Field::MobileAppNotWorking => "Mobile app not working properly",
            Field::NotInstalled => "Not Installed",
            Field::NotInterested => "I am not interested",
            Field::NotAware => "I am not aware",
            Field::RechargeBillOption => "Recharge/Bill option available",
            Field::RealTimeConsumption => "Real time consumption",
            Field::ConsumptionAnalysis => "Consumption analysis",
            Field::EasyToUnderstand => "Yes, easy to understand",
            Field::TooComplex => "No, Too complex",
            Field::NotInLocalLanguage => "No, Not in local language",
            Field::InsufficientInformation => "No, sufficient information not provided",
            Field::OtherIssues => "Other issues",
            Field::BillPaymentEasy => "Bill payment is easier",
            Field::MobileAppEasyToUse => "Mobile app easy to use",
            Field::Excellent => "Excellent",
            Field::Good => "Good",
            Field::Average => "Average",
            Field::Bad => "Bad",
        }
    }

    /// Native type of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::State | Field::District | Field::Amisp => FieldKind::Text,
            _ => FieldKind::Count,
        }
    }

    /// The denominator for this field's render-time percentage, if it has
    /// one. Identity fields, the funnel root, and `sno` have none.
    pub fn percent_basis(&self) -> Option<PercentBasis> {
        use Field::*;
        let basis = match self {
            MessagesAttempted => PercentBasis::Field(NoOfConsumers),
            MessagesDelivered => PercentBasis::Field(MessagesAttempted),
            MessagesRead => PercentBasis::Field(MessagesDelivered),
            ConsumersClickedForm => PercentBasis::Field(MessagesRead),
            ConsumersSubmittedResponse => PercentBasis::Field(MessagesDelivered),
            IssueFaced | NotInstalled | EasyToUnderstand | BillPaymentEasy
            | MobileAppEasyToUse | Excellent | Good | Average | Bad => {
                PercentBasis::Field(ConsumersSubmittedResponse)
            }
            HigherMeterReading | AmountCharged | InstallationNotProper
            | MobileAppNotWorking => PercentBasis::Field(IssueFaced),
            NotInterested | NotAware => PercentBasis::Field(NotInstalled),
            RechargeBillOption | RealTimeConsumption | ConsumptionAnalysis => {
                PercentBasis::AppInstalled
            }
            TooComplex | NotInLocalLanguage | InsufficientInformation
            | OtherIssues => PercentBasis::NotUnderstanding,
            _ => return None,
        };
        Some(basis)
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A single cell value pulled out of a record by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Count(u32),
}

impl FieldValue {
    /// Returns the string representation used by global search and CSV.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Count(n) => n.to_string(),
        }
    }

    /// Returns the numeric value, or None for text.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            FieldValue::Count(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

// ============================================================================
// RECORD ACCESS BY FIELD
// ============================================================================

impl SurveyRecord {
    /// Reads the value of `field` out of this record.
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Sno => FieldValue::Count(self.sno),
            Field::State => FieldValue::Text(self.state.clone()),
            Field::District => FieldValue::Text(self.district.clone()),
            Field::Amisp => FieldValue::Text(self.amisp.clone()),
            Field::NoOfConsumers => FieldValue::Count(self.no_of_consumers),
            Field::MessagesAttempted => FieldValue::Count(self.messages_attempted),
            Field::MessagesDelivered => FieldValue::Count(self.messages_delivered),
            Field::MessagesRead => FieldValue::Count(self.messages_read),
            Field::ConsumersClickedForm => FieldValue::Count(self.consumers_clicked_form),
            Field::ConsumersSubmittedResponse => {
                FieldValue::Count(self.consumers_submitted_response)
            }
            Field::IssueFaced => FieldValue::Count(self.issue_faced),
            Field::HigherMeterReading => FieldValue::Count(self.higher_meter_reading),
            Field::AmountCharged => FieldValue::Count(self.amount_charged),
            Field::InstallationNotProper => FieldValue::Count(self.installation_not_proper),
            Field::MobileAppNotWorking => FieldValue::Count(self.mobile_app_not_working),
            Field::NotInstalled => FieldValue::Count(self.not_installed),
            Field::NotInterested => FieldValue::Count(self.not_interested),
            Field::NotAware => FieldValue::Count(self.not_aware),
            Field::RechargeBillOption => FieldValue::Count(self.recharge_bill_option),
            Field::RealTimeConsumption => FieldValue::Count(self.real_time_consumption),
            Field::ConsumptionAnalysis => FieldValue::Count(self.consumption_analysis),
            Field::EasyToUnderstand => FieldValue::Count(self.easy_to_understand),
            Field::TooComplex => FieldValue::Count(self.too_complex),
            Field::NotInLocalLanguage => FieldValue::Count(self.not_in_local_language),
            Field::InsufficientInformation => {
                FieldValue::Count(self.insufficient_information)
            }
            Field::OtherIssues => FieldValue::Count(self.other_issues),
            Field::BillPaymentEasy => FieldValue::Count(self.bill_payment_easy),
            Field::MobileAppEasyToUse => FieldValue::Count(self.mobile_app_easy_to_use),
            Field::Excellent => FieldValue::Count(self.excellent),
            Field::Good => FieldValue::Count(self.good),
            Field::Average => FieldValue::Count(self.average),
            Field::Bad => FieldValue::Count(self.bad),
        }
    }

    /// Resolves a percentage basis to its denominator value.
    pub fn basis_value(&self, basis: PercentBasis) -> u32 {
        match basis {
            PercentBasis::Field(f) => self.value(f).as_count().unwrap_or(0),
            PercentBasis::AppInstalled => self.app_installed(),
            PercentBasis::NotUnderstanding => self.not_understanding(),
        }
    }

    /// Render-time percentage for `field`, or None if the field has no
    /// percentage basis. A zero denominator yields 0.0, never NaN.
    pub fn percent_of(&self, field: Field) -> Option<f64> {
        let basis = field.percent_basis()?;
        let numerator = self.value(field).as_count()? as f64;
        let denominator = self.basis_value(basis) as f64;
        if denominator > 0.0 {
            Some(numerator / denominator * 100.0)
        } else {
            Some(0.0)
        }
    }
}
