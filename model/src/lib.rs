//! FILENAME: model/src/lib.rs
//! Record model for the survey analytics core.
//!
//! This crate defines the canonical survey record, the field catalog that
//! the table and export layers are driven by, and the fixture transform
//! that completes partial district-feedback rows into full records.
//!
//! Layers:
//! - `record`: The flat `SurveyRecord` schema and derived helpers
//! - `field`: The field catalog (names, kinds, percentage bases)
//! - `fixture`: District-feedback synthesis with documented ratios
//! - `error`: Failure taxonomy for record construction

pub mod error;
pub mod field;
pub mod fixture;
pub mod record;

pub use error::ModelError;
pub use field::{Field, FieldKind, FieldValue, PercentBasis};
pub use fixture::{transform_district_feedback, SynthesisRatios};
pub use record::SurveyRecord;
