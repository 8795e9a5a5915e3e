//! FILENAME: table-engine/src/definition.rs
//! Table definition - the column catalog.
//!
//! Columns are a flat list of tagged descriptors: either a leaf bound to a
//! record field, or a group header spanning the leaves that follow it.
//! Grouping is purely presentational; group entries never carry data and
//! never appear in exported records.

use serde::{Deserialize, Serialize};

use model::Field;

// ============================================================================
// COLUMN DESCRIPTORS
// ============================================================================

/// One entry of the column catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSpec {
    /// A data column bound to a record field.
    Leaf { field: Field },
    /// A display-only parent label covering the next `span` leaves.
    Group { label: String, span: usize },
}

impl ColumnSpec {
    pub fn leaf(field: Field) -> Self {
        ColumnSpec::Leaf { field }
    }

    pub fn group(label: &str, span: usize) -> Self {
        ColumnSpec::Group {
            label: label.to_string(),
            span,
        }
    }
}

// ============================================================================
// TABLE DEFINITION
// ============================================================================

/// The complete column catalog for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub columns: Vec<ColumnSpec>,
}

impl TableDefinition {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        TableDefinition { columns }
    }

    /// The canonical survey report catalog: identity and funnel columns
    /// ungrouped, breakdown sections under their group headers.
    pub fn survey() -> Self {
        use Field::*;
        TableDefinition::new(vec![
            ColumnSpec::leaf(Sno),
            ColumnSpec::leaf(State),
            ColumnSpec::leaf(District),
            ColumnSpec::leaf(Amisp),
            ColumnSpec::leaf(NoOfConsumers),
            ColumnSpec::leaf(MessagesAttempted),
            ColumnSpec::leaf(MessagesDelivered),
            ColumnSpec::leaf(MessagesRead),
            ColumnSpec::leaf(ConsumersClickedForm),
            ColumnSpec::leaf(ConsumersSubmittedResponse),
            ColumnSpec::group("Facing Meter Issue", 5),
            ColumnSpec::leaf(IssueFaced),
            ColumnSpec::leaf(HigherMeterReading),
            ColumnSpec::leaf(AmountCharged),
            ColumnSpec::leaf(InstallationNotProper),
            ColumnSpec::leaf(MobileAppNotWorking),
            ColumnSpec::group("App Installation", 3),
            ColumnSpec::leaf(NotInstalled),
            ColumnSpec::leaf(NotInterested),
            ColumnSpec::leaf(NotAware),
            ColumnSpec::group("Features Available", 3),
            ColumnSpec::leaf(RechargeBillOption),
            ColumnSpec::leaf(RealTimeConsumption),
            ColumnSpec::leaf(ConsumptionAnalysis),
            ColumnSpec::group("Ease of Understanding Bill", 5),
            ColumnSpec::leaf(EasyToUnderstand),
            ColumnSpec::leaf(TooComplex),
            ColumnSpec::leaf(NotInLocalLanguage),
            ColumnSpec::leaf(InsufficientInformation),
            ColumnSpec::leaf(OtherIssues),
            ColumnSpec::group("Bill Payment & App Usability", 2),
            ColumnSpec::leaf(BillPaymentEasy),
            ColumnSpec::leaf(MobileAppEasyToUse),
            ColumnSpec::group("Overall Experience", 4),
            ColumnSpec::leaf(Excellent),
            ColumnSpec::leaf(Good),
            ColumnSpec::leaf(Average),
            ColumnSpec::leaf(Bad),
        ])
    }

    /// All leaf fields in declared order, ignoring visibility.
    pub fn leaf_fields(&self) -> Vec<Field> {
        self.columns
            .iter()
            .filter_map(|column| match column {
                ColumnSpec::Leaf { field } => Some(*field),
                ColumnSpec::Group { .. } => None,
            })
            .collect()
    }

    /// The group label covering `field`, if it sits under one.
    pub fn group_of(&self, field: Field) -> Option<&str> {
        let mut current: Option<(&str, usize)> = None;
        for column in &self.columns {
            match column {
                ColumnSpec::Group { label, span } => {
                    current = Some((label.as_str(), *span));
                }
                ColumnSpec::Leaf { field: f } => {
                    if let Some((label, remaining)) = current {
                        if remaining == 0 {
                            current = None;
                        } else {
                            if *f == field {
                                return Some(label);
                            }
                            current = Some((label, remaining - 1));
                            continue;
                        }
                    }
                    if *f == field {
                        return None;
                    }
                }
            }
        }
        None
    }

    /// True when every group's declared span matches the number of leaves
    /// that actually follow it before the next group.
    pub fn spans_consistent(&self) -> bool {
        let mut i = 0;
        while i < self.columns.len() {
            if let ColumnSpec::Group { span, .. } = &self.columns[i] {
                let leaves_after = self.columns[i + 1..]
                    .iter()
                    .take_while(|c| matches!(c, ColumnSpec::Leaf { .. }))
                    .count();
                if leaves_after != *span {
                    return false;
                }
            }
            i += 1;
        }
        true
    }
}
