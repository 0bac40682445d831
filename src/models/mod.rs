//! Data models for compilation database merging.
//!
//! - [`CommandEntry`] - One opaque compilation record
//! - [`FileOutcome`] - Result of processing one discovered file
//! - [`MergeReport`] - Summary of a whole run

pub mod entry;
pub mod report;

pub use entry::{CommandEntry, FileOutcome};
pub use report::MergeReport;
