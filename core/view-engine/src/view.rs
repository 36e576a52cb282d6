//! FILENAME: core/view-engine/src/view.rs
//! Renderable view payloads - what the presentation adapter receives.
//!
//! One struct per dashboard view, each the complete data for a single
//! render: rows plus the measure labels the adapter needs for axis and
//! legend annotation. All types serialize camelCase for the frontend.

use serde::{Deserialize, Serialize};

use dataset::Measure;

// ============================================================================
// TIME SERIES
// ============================================================================

/// One (country, year) sample of the selected measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub country: String,
    pub year: i32,
    pub value: f64,
}

/// The indicators-by-year line view: every record of every active country,
/// in dataset order, never year-filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesView {
    pub measure: Measure,
    pub measure_label: String,
    pub points: Vec<TimeSeriesPoint>,
}

// ============================================================================
// BUBBLE CHART
// ============================================================================

/// One country marker in the bubble view.
///
/// `size` is the raw size-measure value except under the life-expectancy
/// transform, where it is the normalized sixth power in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubblePoint {
    pub country: String,
    pub continent: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub year: i32,
}

/// The per-country snapshot scatter view.
///
/// Labels always name the selected measures, including the size label when
/// the size values themselves have been transformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleView {
    pub x: Measure,
    pub y: Measure,
    pub size: Measure,
    pub x_label: String,
    pub y_label: String,
    pub size_label: String,
    pub points: Vec<BubblePoint>,
}

// ============================================================================
// TOP POPULATION RANKING
// ============================================================================

/// One bar of the population ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCountry {
    pub country: String,
    pub pop: f64,
    pub year: i32,
}

/// The top-N-by-population view, ascending by population so a horizontal
/// bar chart drawing categories bottom-to-top puts the largest on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPopulationView {
    pub rows: Vec<RankedCountry>,
}

// ============================================================================
// POPULATION BY CONTINENT
// ============================================================================

/// One continent's share of the snapshot population. Raw sums only;
/// percentage display is a rendering concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentSlice {
    pub continent: String,
    pub total_pop: f64,
}

/// The population-by-continent grouped-sum view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentPopulationView {
    pub slices: Vec<ContinentSlice>,
}
