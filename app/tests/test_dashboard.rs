//! FILENAME: tests/test_dashboard.rs
//! Integration tests for the interaction → invalidation → recompute flow.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;

use app_lib::commands::{measure_options, zoom_payload_from_json};
use app_lib::ApiError;
use dataset::Measure;
use view_engine::{
    parse_measure, FilterEvent, MeasureChannel, ViewError, ViewOutput, ViewUpdate,
    X_RANGE_FROM, X_RANGE_TO,
};

// ============================================================================
// INITIAL RENDER
// ============================================================================

#[test]
fn initial_render_covers_all_views_with_defaults() {
    let harness = TestHarness::new();
    let dashboard = harness.state.dashboard.lock().unwrap();

    let views = dashboard.render_all();
    assert_eq!(views.len(), 4);

    let filter = dashboard.filter();
    assert_eq!(filter.active_countries, vec!["Russia", "Germany", "France"]);
    assert!(filter.year_range.is_none());

    match &views[0] {
        ViewUpdate::TimeSeries(ts) => {
            assert_eq!(ts.measure, Measure::Pop);
            // Three default countries, three fixture years each.
            assert_eq!(ts.points.len(), 9);
            assert!(ts
                .points
                .iter()
                .all(|p| ["Russia", "Germany", "France"].contains(&p.country.as_str())));
        }
        other => panic!("expected time series first, got {other:?}"),
    }
}

#[test]
fn country_options_come_from_the_dataset() {
    let harness = TestHarness::new();
    let dashboard = harness.state.dashboard.lock().unwrap();
    let countries = dashboard.dataset().countries();
    assert_eq!(countries[0], "Russia");
    assert_eq!(countries.len(), 9);
}

#[test]
fn measure_options_list_the_three_measures() {
    let options = measure_options();
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["pop", "lifeExp", "gdpPercap"]);
    assert_eq!(options[0].label, "Population size");
    assert_eq!(options[1].label, "Life expectancy");
    assert_eq!(options[2].label, "GDP per capita");
}

// ============================================================================
// COUNTRY SELECTION
// ============================================================================

#[test]
fn country_change_refreshes_only_the_time_series() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    let (invalidated, views) = dashboard.apply(FilterEvent::SetActiveCountries(vec![
        "Japan".to_string(),
        "China".to_string(),
    ]));

    assert_eq!(invalidated.as_slice(), &[ViewOutput::TimeSeries]);
    assert_eq!(views.len(), 1);
    match &views[0] {
        ViewUpdate::TimeSeries(ts) => {
            assert_eq!(ts.points.len(), 6);
            assert!(ts
                .points
                .iter()
                .all(|p| p.country == "Japan" || p.country == "China"));
        }
        other => panic!("expected a time series update, got {other:?}"),
    }
}

#[test]
fn clearing_all_countries_yields_an_empty_series() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    let (_, views) = dashboard.apply(FilterEvent::SetActiveCountries(Vec::new()));
    match &views[0] {
        ViewUpdate::TimeSeries(ts) => assert!(ts.points.is_empty()),
        other => panic!("expected a time series update, got {other:?}"),
    }
}

// ============================================================================
// MEASURE SELECTION
// ============================================================================

#[test]
fn bubble_size_life_exp_produces_normalized_sizes() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    let (invalidated, views) = dashboard.apply(FilterEvent::SetMeasure(
        MeasureChannel::BubbleSize,
        Measure::LifeExp,
    ));

    assert_eq!(invalidated.as_slice(), &[ViewOutput::Bubble]);
    match &views[0] {
        ViewUpdate::Bubble(bubble) => {
            assert!(bubble.points.iter().all(|p| (0.0..=1.0).contains(&p.size)));
            // Japan holds the 2007 maximum (82.6).
            let japan = bubble.points.iter().find(|p| p.country == "Japan").unwrap();
            assert_eq!(japan.size, 1.0);
            assert_eq!(bubble.size_label, "Life expectancy");
        }
        other => panic!("expected a bubble update, got {other:?}"),
    }
}

#[test]
fn time_series_measure_change_projects_the_new_field() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    let (invalidated, views) = dashboard.apply(FilterEvent::SetMeasure(
        MeasureChannel::TimeSeries,
        Measure::GdpPerCap,
    ));

    assert_eq!(invalidated.as_slice(), &[ViewOutput::TimeSeries]);
    match &views[0] {
        ViewUpdate::TimeSeries(ts) => {
            assert_eq!(ts.measure_label, "GDP per capita");
            let germany_2007 = ts
                .points
                .iter()
                .find(|p| p.country == "Germany" && p.year == 2007)
                .unwrap();
            assert_eq!(germany_2007.value, 32_170.0);
        }
        other => panic!("expected a time series update, got {other:?}"),
    }
}

#[test]
fn unknown_measure_maps_to_a_bad_request() {
    let err = parse_measure("income").unwrap_err();
    assert_eq!(err, ViewError::InvalidMeasure("income".to_string()));

    let api_err = ApiError::from(err);
    assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
    assert!(api_err.message.contains("income"));
}

// ============================================================================
// ZOOM PROPAGATION
// ============================================================================

#[test]
fn zoom_payload_keeps_only_numeric_entries() {
    let payload = zoom_payload_from_json(json!({
        "xaxis.autorange": true,
        "yaxis.range[0]": "not-a-number",
        X_RANGE_FROM: 1960.2,
        X_RANGE_TO: 1989.9,
    }))
    .unwrap();

    assert_eq!(payload.get(X_RANGE_FROM), Some(1960.2));
    assert_eq!(payload.get(X_RANGE_TO), Some(1989.9));
    assert_eq!(payload.get("xaxis.autorange"), None);
    assert_eq!(payload.get("yaxis.range[0]"), None);
}

#[test]
fn non_object_zoom_bodies_count_as_no_payload() {
    assert_eq!(zoom_payload_from_json(json!(null)), None);
    assert_eq!(zoom_payload_from_json(json!([1952.0, 2007.0])), None);
    assert_eq!(zoom_payload_from_json(json!("1952-2007")), None);
}

#[test]
fn zoom_filters_the_three_snapshot_views() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    let payload = zoom_payload_from_json(json!({
        X_RANGE_FROM: 1952.0,
        X_RANGE_TO: 1960.0,
    }));
    let (invalidated, views) = dashboard.apply(FilterEvent::TimeSeriesZoom(payload));

    assert_eq!(
        invalidated.as_slice(),
        &[
            ViewOutput::Bubble,
            ViewOutput::TopPopulation,
            ViewOutput::PopulationByContinent,
        ]
    );
    assert_eq!(views.len(), 3);

    // Brazil has no 1952 record, so the zoomed ranking loses it.
    match &views[1] {
        ViewUpdate::TopPopulation(top) => {
            assert!(!top.rows.iter().any(|r| r.country == "Brazil"));
            assert!(top.rows.iter().all(|r| r.year == 1952));
            assert!(top.rows.windows(2).all(|w| w[0].pop <= w[1].pop));
            assert_eq!(top.rows.last().unwrap().country, "China");
        }
        other => panic!("expected a top population update, got {other:?}"),
    }

    // Totals over the zoomed snapshot stay conserved per continent.
    match &views[2] {
        ViewUpdate::PopulationByContinent(pie) => {
            let total: f64 = pie.slices.iter().map(|s| s.total_pop).sum();
            let expected: f64 = [
                102_800_000.0, // Russia
                69_145_952.0,  // Germany
                42_459_667.0,  // France
                556_263_527.0, // China
                86_459_025.0,  // Japan
                157_553_000.0, // United States
                33_119_096.0,  // Nigeria
                8_691_212.0,   // Australia
            ]
            .iter()
            .sum();
            assert_eq!(total, expected);
        }
        other => panic!("expected a continent update, got {other:?}"),
    }
}

#[test]
fn partial_zoom_resets_the_range() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    dashboard.apply(FilterEvent::TimeSeriesZoom(zoom_payload_from_json(json!({
        X_RANGE_FROM: 1960.0,
        X_RANGE_TO: 1990.0,
    }))));
    assert!(dashboard.filter().year_range.is_some());

    // An autoscale gesture reports only unrelated keys: range clears.
    dashboard.apply(FilterEvent::TimeSeriesZoom(zoom_payload_from_json(json!({
        "xaxis.autorange": true,
    }))));
    assert!(dashboard.filter().year_range.is_none());
}

#[test]
fn inverted_zoom_range_empties_the_snapshot_views() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    let (_, views) = dashboard.apply(FilterEvent::TimeSeriesZoom(zoom_payload_from_json(json!({
        X_RANGE_FROM: 2007.0,
        X_RANGE_TO: 1952.0,
    }))));

    for view in &views {
        match view {
            ViewUpdate::Bubble(v) => assert!(v.points.is_empty()),
            ViewUpdate::TopPopulation(v) => assert!(v.rows.is_empty()),
            ViewUpdate::PopulationByContinent(v) => assert!(v.slices.is_empty()),
            ViewUpdate::TimeSeries(_) => panic!("time series must not react to zoom"),
        }
    }
}

#[test]
fn zoom_does_not_touch_the_time_series() {
    let harness = TestHarness::new();
    let mut dashboard = harness.state.dashboard.lock().unwrap();

    let before = dashboard.render_all();
    dashboard.apply(FilterEvent::TimeSeriesZoom(zoom_payload_from_json(json!({
        X_RANGE_FROM: 1960.0,
        X_RANGE_TO: 1990.0,
    }))));
    let after = dashboard.render_all();

    // The first slot is the time series; it is identical before and after.
    assert_eq!(before[0], after[0]);
}
