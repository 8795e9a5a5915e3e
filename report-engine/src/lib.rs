//! FILENAME: report-engine/src/lib.rs
//! Filtering and summary statistics for survey reports.
//!
//! This crate owns the two pure operations at the front of the report
//! pipeline: admitting records against a multi-dimension selection, and
//! reducing an already-filtered record set to summary statistics.
//!
//! Layers:
//! - `selection`: The shared `FilterSelection` and dimension value sets
//! - `filter`: The filter operation (pure, order-preserving)
//! - `stats`: Summary reductions over a filtered record set

pub mod filter;
pub mod selection;
pub mod stats;

pub use filter::filter_records;
pub use selection::{Dimension, FilterOptions, FilterSelection};
pub use stats::{summarize, ReportStats};
