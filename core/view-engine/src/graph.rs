//! FILENAME: core/view-engine/src/graph.rs
//! View dependency graph - which filter changes invalidate which views.
//!
//! The wiring between inputs and outputs is a single declarative table
//! rather than callback registrations scattered across the UI layer: every
//! (output, triggering inputs) pair is auditable in one place and testable
//! without a frontend. Applying a `FilterEvent` mutates exactly one filter
//! field and returns the outputs that field feeds; recomputation rebuilds
//! each of them in full from the immutable dataset.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use dataset::{Dataset, Measure};

use crate::definition::{FilterState, MeasureChannel};
use crate::engine::{
    build_bubble, build_population_by_continent, build_time_series, build_top_population,
    TOP_POPULATION_LIMIT,
};
use crate::view::{BubbleView, ContinentPopulationView, TimeSeriesView, TopPopulationView};
use crate::zoom::{extract_year_range, ZoomPayload};

// ============================================================================
// INPUTS AND OUTPUTS
// ============================================================================

/// One mutable field of the filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterInput {
    ActiveCountries,
    TimeSeriesMeasure,
    BubbleX,
    BubbleY,
    BubbleSize,
    YearRange,
}

/// One derived dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewOutput {
    TimeSeries,
    Bubble,
    TopPopulation,
    PopulationByContinent,
}

/// Every output, in render order.
pub const ALL_OUTPUTS: [ViewOutput; 4] = [
    ViewOutput::TimeSeries,
    ViewOutput::Bubble,
    ViewOutput::TopPopulation,
    ViewOutput::PopulationByContinent,
];

/// The declarative dependency table: each output with the filter inputs
/// that feed it. The time-series view never lists `YearRange` - it is the
/// source of the year filter, not a consumer.
pub const DEPENDENCIES: &[(ViewOutput, &[FilterInput])] = &[
    (
        ViewOutput::TimeSeries,
        &[FilterInput::ActiveCountries, FilterInput::TimeSeriesMeasure],
    ),
    (
        ViewOutput::Bubble,
        &[
            FilterInput::BubbleX,
            FilterInput::BubbleY,
            FilterInput::BubbleSize,
            FilterInput::YearRange,
        ],
    ),
    (ViewOutput::TopPopulation, &[FilterInput::YearRange]),
    (ViewOutput::PopulationByContinent, &[FilterInput::YearRange]),
];

/// The set of outputs a change to `input` invalidates, in table order.
pub fn invalidated_by(input: FilterInput) -> SmallVec<[ViewOutput; 4]> {
    DEPENDENCIES
        .iter()
        .filter(|(_, inputs)| inputs.contains(&input))
        .map(|(output, _)| *output)
        .collect()
}

// ============================================================================
// FILTER EVENTS
// ============================================================================

/// A discrete interaction arriving from the presentation adapter.
///
/// `TimeSeriesZoom` carries the raw relayout payload (or nothing, when the
/// gesture reset the axes); the year range is derived through the range
/// extractor as part of applying the event.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SetActiveCountries(Vec<String>),
    SetMeasure(MeasureChannel, Measure),
    TimeSeriesZoom(Option<ZoomPayload>),
}

impl FilterState {
    /// Applies one event, mutating exactly one field, and returns the
    /// outputs whose declared inputs include that field.
    pub fn apply(&mut self, event: FilterEvent) -> SmallVec<[ViewOutput; 4]> {
        let input = match event {
            FilterEvent::SetActiveCountries(countries) => {
                self.active_countries = countries;
                FilterInput::ActiveCountries
            }
            FilterEvent::SetMeasure(channel, measure) => match channel {
                MeasureChannel::TimeSeries => {
                    self.time_series_measure = measure;
                    FilterInput::TimeSeriesMeasure
                }
                MeasureChannel::BubbleX => {
                    self.bubble_x = measure;
                    FilterInput::BubbleX
                }
                MeasureChannel::BubbleY => {
                    self.bubble_y = measure;
                    FilterInput::BubbleY
                }
                MeasureChannel::BubbleSize => {
                    self.bubble_size = measure;
                    FilterInput::BubbleSize
                }
            },
            FilterEvent::TimeSeriesZoom(payload) => {
                self.year_range = extract_year_range(payload.as_ref());
                FilterInput::YearRange
            }
        };
        invalidated_by(input)
    }
}

// ============================================================================
// RECOMPUTATION
// ============================================================================

/// A freshly recomputed view payload, tagged with its output slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "data", rename_all = "camelCase")]
pub enum ViewUpdate {
    TimeSeries(TimeSeriesView),
    Bubble(BubbleView),
    TopPopulation(TopPopulationView),
    PopulationByContinent(ContinentPopulationView),
}

/// Computes one output in full from the dataset and current filter state.
pub fn render(dataset: &Dataset, filter: &FilterState, output: ViewOutput) -> ViewUpdate {
    match output {
        ViewOutput::TimeSeries => ViewUpdate::TimeSeries(build_time_series(
            dataset,
            &filter.active_countries,
            filter.time_series_measure,
        )),
        ViewOutput::Bubble => ViewUpdate::Bubble(build_bubble(
            dataset,
            filter.bubble_x,
            filter.bubble_y,
            filter.bubble_size,
            filter.year_range.as_ref(),
        )),
        ViewOutput::TopPopulation => ViewUpdate::TopPopulation(build_top_population(
            dataset,
            filter.year_range.as_ref(),
            TOP_POPULATION_LIMIT,
        )),
        ViewOutput::PopulationByContinent => ViewUpdate::PopulationByContinent(
            build_population_by_continent(dataset, filter.year_range.as_ref()),
        ),
    }
}

/// Recomputes every listed output. Full rebuilds, no deltas; the order of
/// `outputs` only affects the order of the returned payloads.
pub fn recompute(
    dataset: &Dataset,
    filter: &FilterState,
    outputs: &[ViewOutput],
) -> Vec<ViewUpdate> {
    outputs
        .iter()
        .map(|output| render(dataset, filter, *output))
        .collect()
}

// ============================================================================
// DASHBOARD SESSION
// ============================================================================

/// One dashboard session: a shared immutable dataset plus its own filter
/// state. The serving layer holds one of these per session (currently one
/// per process) behind a mutex; every interaction goes through `apply`.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    filter: FilterState,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Dashboard {
            dataset,
            filter: FilterState::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Applies one interaction and returns the refreshed payloads of
    /// exactly the invalidated views.
    pub fn apply(&mut self, event: FilterEvent) -> (SmallVec<[ViewOutput; 4]>, Vec<ViewUpdate>) {
        let outputs = self.filter.apply(event);
        let updates = recompute(&self.dataset, &self.filter, &outputs);
        (outputs, updates)
    }

    /// Renders all four views, for the initial page load.
    pub fn render_all(&self) -> Vec<ViewUpdate> {
        recompute(&self.dataset, &self.filter, &ALL_OUTPUTS)
    }
}
