//! Presentation-free logic for the iotab input-output analysis workbench.
//!
//! This crate holds everything the terminal frontend consumes that is not
//! rendering:
//! - The sample datasets shown across the guided analysis flow
//! - The column sort controller used by the analysis tables
//! - The simulated upload task (single-shot deadline, cancellable)
//! - Report aggregation and JSON export
//!
//! No input-output economics is computed here. The workbench displays
//! curated sample figures; there is no coefficient-matrix inversion and no
//! shock propagation.

pub mod dataset;
pub mod error;
pub mod report;
pub mod sort;
pub mod upload;

#[cfg(test)]
mod tests;

pub use dataset::{
    CumulativeImpact, LinkageRecord, MultiplierDetail, MultiplierRecord, PerformanceRecord,
    RadarRecord, SectorOutput, SectoralImpact, ShockPath, SummaryStat,
};
pub use error::{ReportError, UploadError};
pub use report::Report;
pub use sort::{SortConfig, SortDirection, SortKey};
pub use upload::{FileSelection, UploadState, UploadTask, MAX_FILE_BYTES, SUPPORTED_EXTENSIONS};
