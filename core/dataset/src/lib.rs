//! FILENAME: core/dataset/src/lib.rs
//! PURPOSE: Shared data model for the dashboard workspace.
//! CONTEXT: Re-exports the record/measure types and the immutable table
//! consumed by the view engine and produced by ingestion.

pub mod record;
pub mod table;

// Re-export commonly used types at the crate root
pub use record::{Measure, Record, ALL_MEASURES};
pub use table::Dataset;
