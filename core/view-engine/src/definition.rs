//! FILENAME: core/view-engine/src/definition.rs
//! Filter state - the serializable snapshot of user intent.
//!
//! This module contains the types that DESCRIBE what the user has selected.
//! These structures are designed to be:
//! - Serializable (sent to the frontend as part of the dashboard snapshot)
//! - Mutated only through `FilterState::apply` (see `graph`), which reports
//!   which view outputs each change invalidates

use serde::{Deserialize, Serialize};

use dataset::Measure;

use crate::error::ViewError;

/// Countries selected when a session starts.
pub const DEFAULT_COUNTRIES: [&str; 3] = ["Russia", "Germany", "France"];

// ============================================================================
// YEAR RANGE
// ============================================================================

/// Inclusive year filter applied to snapshot-based views.
///
/// The bounds arrive verbatim from a zoom gesture and carry no ordering
/// requirement: `from > to` is representable and makes every range-filtered
/// query empty. The bounds are never reordered or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    pub from: f64,
    pub to: f64,
}

impl YearRange {
    pub fn new(from: f64, to: f64) -> Self {
        YearRange { from, to }
    }

    /// Whether a record year falls inside the range, both ends inclusive.
    /// Inverted ranges contain nothing.
    pub fn contains(&self, year: i32) -> bool {
        let year = year as f64;
        self.from <= year && year <= self.to
    }
}

// ============================================================================
// MEASURE CHANNELS
// ============================================================================

/// The four places a measure selection can land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasureChannel {
    /// Y axis of the time-series view.
    TimeSeries,
    /// X axis of the bubble view.
    BubbleX,
    /// Y axis of the bubble view.
    BubbleY,
    /// Marker size of the bubble view.
    BubbleSize,
}

/// Resolves a wire identifier to a typed measure.
///
/// This is the only place an unknown measure can enter the system; the
/// aggregations themselves take the typed value and cannot fail.
pub fn parse_measure(ident: &str) -> Result<Measure, ViewError> {
    Measure::from_wire(ident).ok_or_else(|| ViewError::InvalidMeasure(ident.to_string()))
}

// ============================================================================
// FILTER STATE
// ============================================================================

/// Current user selections for one dashboard session.
///
/// `active_countries` has set semantics: membership checks only, duplicates
/// change nothing. `year_range` is only ever written by a zoom event passing
/// through the range extractor, never directly by a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub active_countries: Vec<String>,
    pub time_series_measure: Measure,
    pub bubble_x: Measure,
    pub bubble_y: Measure,
    pub bubble_size: Measure,
    pub year_range: Option<YearRange>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            active_countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            time_series_measure: Measure::Pop,
            bubble_x: Measure::GdpPerCap,
            bubble_y: Measure::LifeExp,
            bubble_size: Measure::Pop,
            year_range: None,
        }
    }
}

impl FilterState {
    /// Membership test against the active country set.
    pub fn is_active(&self, country: &str) -> bool {
        self.active_countries.iter().any(|c| c == country)
    }
}
