//! FILENAME: report-engine/src/selection.rs
//! Filter selection state shared across all reports.
//!
//! A `FilterSelection` maps each filterable dimension to the set of
//! admitted values. An empty set is a wildcard: that dimension imposes no
//! constraint. The dashboard owns a single selection instance and applies
//! it to every report simultaneously; the engines only ever read it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use model::SurveyRecord;

// ============================================================================
// DIMENSIONS
// ============================================================================

/// A filterable attribute of a survey record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    State,
    District,
    Amisp,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::State, Dimension::District, Dimension::Amisp];

    /// Reads the record value this dimension filters on.
    pub fn value_of<'a>(&self, record: &'a SurveyRecord) -> &'a str {
        match self {
            Dimension::State => &record.state,
            Dimension::District => &record.district,
            Dimension::Amisp => &record.amisp,
        }
    }
}

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// The currently-checked values per dimension. Empty set = no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    states: FxHashSet<String>,
    districts: FxHashSet<String>,
    amisps: FxHashSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The admitted value set for one dimension.
    pub fn values(&self, dimension: Dimension) -> &FxHashSet<String> {
        match dimension {
            Dimension::State => &self.states,
            Dimension::District => &self.districts,
            Dimension::Amisp => &self.amisps,
        }
    }

    fn values_mut(&mut self, dimension: Dimension) -> &mut FxHashSet<String> {
        match dimension {
            Dimension::State => &mut self.states,
            Dimension::District => &mut self.districts,
            Dimension::Amisp => &mut self.amisps,
        }
    }

    /// Adds `value` to the dimension's set if absent, removes it if present.
    /// Returns true if the value is checked after the toggle.
    pub fn toggle(&mut self, dimension: Dimension, value: &str) -> bool {
        let set = self.values_mut(dimension);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    /// Clears every dimension back to wildcard.
    pub fn clear(&mut self) {
        self.states.clear();
        self.districts.clear();
        self.amisps.clear();
    }

    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.districts.is_empty() && self.amisps.is_empty()
    }

    /// Total number of checked values across all dimensions.
    pub fn active_count(&self) -> usize {
        self.states.len() + self.districts.len() + self.amisps.len()
    }

    /// True if `record` passes every dimension (logical AND). Dimensions
    /// with an empty value set pass everything.
    pub fn admits(&self, record: &SurveyRecord) -> bool {
        Dimension::ALL.iter().all(|dimension| {
            let set = self.values(*dimension);
            set.is_empty() || set.contains(dimension.value_of(record))
        })
    }
}

// ============================================================================
// FILTER OPTIONS
// ============================================================================

/// The distinct values a user can check, derived from the records
/// themselves. Sorted for stable presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub districts: Vec<String>,
    pub amisps: Vec<String>,
}

impl FilterOptions {
    /// Collects the distinct sorted values of each dimension.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SurveyRecord>,
    {
        let mut states = FxHashSet::default();
        let mut districts = FxHashSet::default();
        let mut amisps = FxHashSet::default();

        for record in records {
            states.insert(record.state.clone());
            districts.insert(record.district.clone());
            amisps.insert(record.amisp.clone());
        }

        let mut options = FilterOptions {
            states: states.into_iter().collect(),
            districts: districts.into_iter().collect(),
            amisps: amisps.into_iter().collect(),
        };
        options.states.sort();
        options.districts.sort();
        options.amisps.sort();
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, district: &str, amisp: &str) -> SurveyRecord {
        SurveyRecord {
            state: state.to_string(),
            district: district.to_string(),
            amisp: amisp.to_string(),
            ..SurveyRecord::default()
        }
    }

    #[test]
    fn test_empty_selection_admits_everything() {
        let selection = FilterSelection::new();
        assert!(selection.is_empty());
        assert!(selection.admits(&record("A", "X", "P1")));
    }

    #[test]
    fn test_toggle_checks_and_unchecks() {
        let mut selection = FilterSelection::new();
        assert!(selection.toggle(Dimension::State, "A"));
        assert_eq!(selection.active_count(), 1);
        assert!(!selection.toggle(Dimension::State, "A"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_admits_is_and_across_dimensions() {
        let mut selection = FilterSelection::new();
        selection.toggle(Dimension::State, "A");
        selection.toggle(Dimension::District, "X");

        assert!(selection.admits(&record("A", "X", "P1")));
        assert!(!selection.admits(&record("A", "Y", "P1")));
        assert!(!selection.admits(&record("B", "X", "P1")));
    }

    #[test]
    fn test_clear_restores_wildcard() {
        let mut selection = FilterSelection::new();
        selection.toggle(Dimension::State, "A");
        selection.toggle(Dimension::Amisp, "P1");
        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.admits(&record("B", "Y", "P2")));
    }

    #[test]
    fn test_options_are_distinct_and_sorted() {
        let records = vec![
            record("B", "Y", "P2"),
            record("A", "X", "P1"),
            record("B", "X", "P1"),
        ];
        let options = FilterOptions::from_records(&records);
        assert_eq!(options.states, vec!["A", "B"]);
        assert_eq!(options.districts, vec!["X", "Y"]);
        assert_eq!(options.amisps, vec!["P1", "P2"]);
    }
}
