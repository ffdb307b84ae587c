//! Integration tests for the iotab core crate.
//!
//! Tests are organized by topic:
//! - `sorting` - Column sort controller behavior over the sample tables
//! - `upload` - Simulated upload task, selection, and cancellation
//! - `report` - Report aggregation and JSON export

mod report;
mod sorting;
mod upload;
