//! FILENAME: core/view-engine/src/engine.rs
//! Aggregation engine - turns the dataset plus filter selections into
//! renderable view payloads.
//!
//! Algorithm per view:
//! 1. Time series: filter records to the active countries, project the
//!    selected measure. Never year-filtered - this view is the source of
//!    the year filter, not a consumer of it.
//! 2. Snapshot views (bubble, top population, continents): apply the year
//!    range, stable-sort, keep the first record per country, then project.
//!
//! Every function here is pure: identical inputs produce identical output,
//! including row ordering.

use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};

use dataset::{Dataset, Measure, Record};

use crate::definition::YearRange;
use crate::view::{
    BubblePoint, BubbleView, ContinentPopulationView, ContinentSlice, RankedCountry,
    TimeSeriesPoint, TimeSeriesView, TopPopulationView,
};

/// How many countries the population ranking shows.
pub const TOP_POPULATION_LIMIT: usize = 15;

// ============================================================================
// SNAPSHOT SELECTION
// ============================================================================

/// Ordering applied before the first-per-country cut.
///
/// Both variants select the highest year per country on well-formed data.
/// They are kept separate because under malformed input (duplicate
/// (country, year) rows) the winning record differs between them, and each
/// consumer must keep reproducing its own historical choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOrder {
    /// Stable sort by (continent descending, year descending).
    /// Used by the bubble and continent-population views.
    ContinentYear,
    /// Stable sort by year descending only.
    /// Used by the top-population ranking.
    YearOnly,
}

/// Selects the "most recent within range" record of every country.
///
/// Records outside `year_range` are dropped first (inclusive bounds; an
/// inverted range drops everything). The survivors are stable-sorted per
/// `order` and the first record per country is kept, so the returned order
/// is the sort order - deterministic across calls. Countries with no
/// records in range are simply absent.
pub fn latest_snapshot<'a>(
    dataset: &'a Dataset,
    year_range: Option<&YearRange>,
    order: SnapshotOrder,
) -> Vec<&'a Record> {
    let mut filtered: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|r| year_range.map_or(true, |range| range.contains(r.year)))
        .collect();

    match order {
        SnapshotOrder::ContinentYear => filtered.sort_by(|a, b| {
            b.continent
                .cmp(&a.continent)
                .then_with(|| b.year.cmp(&a.year))
        }),
        SnapshotOrder::YearOnly => filtered.sort_by(|a, b| b.year.cmp(&a.year)),
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    filtered.retain(|r| seen.insert(r.country.as_str()));
    filtered
}

// ============================================================================
// TIME SERIES
// ============================================================================

/// Builds the indicators-by-year view: one point per record of every
/// country in `countries`, in dataset order. An empty country set yields an
/// empty series, not an error.
pub fn build_time_series(
    dataset: &Dataset,
    countries: &[String],
    measure: Measure,
) -> TimeSeriesView {
    let points = dataset
        .records()
        .iter()
        .filter(|r| countries.iter().any(|c| c == &r.country))
        .map(|r| TimeSeriesPoint {
            country: r.country.clone(),
            year: r.year,
            value: measure.value_of(r),
        })
        .collect();

    TimeSeriesView {
        measure,
        measure_label: measure.label().to_string(),
        points,
    }
}

// ============================================================================
// BUBBLE CHART
// ============================================================================

/// Builds the per-country snapshot scatter view.
///
/// Channel labels resolve from the selected measures before the size
/// transform substitutes derived scalars, so the size label names the
/// original measure even when the values are transformed.
pub fn build_bubble(
    dataset: &Dataset,
    x: Measure,
    y: Measure,
    size: Measure,
    year_range: Option<&YearRange>,
) -> BubbleView {
    let snapshot = latest_snapshot(dataset, year_range, SnapshotOrder::ContinentYear);

    let mut points: Vec<BubblePoint> = snapshot
        .iter()
        .map(|r| BubblePoint {
            country: r.country.clone(),
            continent: r.continent.clone(),
            x: x.value_of(r),
            y: y.value_of(r),
            size: size.value_of(r),
            year: r.year,
        })
        .collect();

    if size == Measure::LifeExp {
        apply_life_exp_size_transform(&mut points);
    }

    BubbleView {
        x,
        y,
        size,
        x_label: x.label().to_string(),
        y_label: y.label().to_string(),
        size_label: size.label().to_string(),
        points,
    }
}

/// Life expectancy clusters in a narrow band, so raw values make the
/// markers visually indistinguishable. Normalize to the snapshot maximum
/// and raise to the 6th power: the maximum maps to 1, everything else
/// spreads down toward 0. Applies to the size channel only - x and y keep
/// raw values even when they are also life expectancy.
fn apply_life_exp_size_transform(points: &mut [BubblePoint]) {
    let max = points.iter().map(|p| p.size).fold(f64::NEG_INFINITY, f64::max);
    for point in points.iter_mut() {
        point.size = (point.size / max).powi(6);
    }
}

// ============================================================================
// TOP POPULATION RANKING
// ============================================================================

/// Builds the top-`limit` countries by population.
///
/// Ranking is computed descending and then reversed, so the output sequence
/// is ascending by population with the ranking's head last.
pub fn build_top_population(
    dataset: &Dataset,
    year_range: Option<&YearRange>,
    limit: usize,
) -> TopPopulationView {
    let mut snapshot = latest_snapshot(dataset, year_range, SnapshotOrder::YearOnly);

    snapshot.sort_by(|a, b| b.pop.partial_cmp(&a.pop).unwrap_or(Ordering::Equal));
    snapshot.truncate(limit);
    snapshot.reverse();

    TopPopulationView {
        rows: snapshot
            .into_iter()
            .map(|r| RankedCountry {
                country: r.country.clone(),
                pop: r.pop,
                year: r.year,
            })
            .collect(),
    }
}

// ============================================================================
// POPULATION BY CONTINENT
// ============================================================================

/// Sums snapshot population per continent, one slice per continent in
/// first-encounter order over the snapshot.
pub fn build_population_by_continent(
    dataset: &Dataset,
    year_range: Option<&YearRange>,
) -> ContinentPopulationView {
    let snapshot = latest_snapshot(dataset, year_range, SnapshotOrder::ContinentYear);

    let mut slice_index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut slices: Vec<ContinentSlice> = Vec::new();

    for record in &snapshot {
        match slice_index.get(record.continent.as_str()) {
            Some(&i) => slices[i].total_pop += record.pop,
            None => {
                slice_index.insert(record.continent.as_str(), slices.len());
                slices.push(ContinentSlice {
                    continent: record.continent.clone(),
                    total_pop: record.pop,
                });
            }
        }
    }

    ContinentPopulationView { slices }
}
