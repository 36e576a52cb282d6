//! FILENAME: core/view-engine/src/lib.rs
//! Cross-filter view engine for the country-indicator dashboard.
//!
//! This crate is the calculation core, separate from the data model and
//! from serving. It turns the immutable dataset plus the current filter
//! state into the four renderable views, keeping them consistent under the
//! shared year filter propagated from the time-series zoom.
//!
//! Layers:
//! - `definition`: Serializable filter state (what the user has SELECTED)
//! - `zoom`: Range extraction from raw relayout payloads
//! - `engine`: The pure aggregations (HOW we calculate)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `graph`: The input→output dependency table and the session type

pub mod definition;
pub mod engine;
pub mod error;
pub mod graph;
pub mod view;
pub mod zoom;

pub use definition::{parse_measure, FilterState, MeasureChannel, YearRange, DEFAULT_COUNTRIES};
pub use engine::{
    build_bubble, build_population_by_continent, build_time_series, build_top_population,
    latest_snapshot, SnapshotOrder, TOP_POPULATION_LIMIT,
};
pub use error::ViewError;
pub use graph::{
    invalidated_by, recompute, render, Dashboard, FilterEvent, FilterInput, ViewOutput,
    ViewUpdate, ALL_OUTPUTS, DEPENDENCIES,
};
pub use view::{
    BubblePoint, BubbleView, ContinentPopulationView, ContinentSlice, RankedCountry,
    TimeSeriesPoint, TimeSeriesView, TopPopulationView,
};
pub use zoom::{extract_year_range, ZoomPayload, X_RANGE_FROM, X_RANGE_TO};
