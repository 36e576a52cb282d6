//! FILENAME: core/view-engine/src/error.rs

use thiserror::Error;

/// Failure conditions surfaced to the presentation adapter.
///
/// Aggregations are pure functions over typed inputs; the only failure the
/// engine can produce is a bad identifier at the parsing boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("unknown measure: {0}")]
    InvalidMeasure(String),
}
