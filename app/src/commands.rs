//! FILENAME: app/src/commands.rs
// PURPOSE: Request handlers for the interaction boundary.
// CONTEXT: Each handler locks the dashboard, applies one filter event, and
// responds with the refreshed payloads of exactly the invalidated views.
// Recomputation is synchronous and cheap; no lock is held across an await.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use dataset::ALL_MEASURES;
use view_engine::{parse_measure, FilterEvent, ZoomPayload};

use crate::api_types::{
    ApiError, DashboardSnapshot, MeasureOption, SetCountriesParams, SetMeasureParams,
    UpdateResponse,
};
use crate::AppState;

/// The measure dropdown entries, identical for every channel.
pub fn measure_options() -> Vec<MeasureOption> {
    ALL_MEASURES
        .iter()
        .map(|m| MeasureOption {
            value: m.as_str().to_string(),
            label: m.label().to_string(),
        })
        .collect()
}

/// `GET /api/dashboard` - everything the frontend needs for first render.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    let dashboard = state.dashboard.lock().unwrap();
    Json(DashboardSnapshot {
        countries: dashboard
            .dataset()
            .countries()
            .iter()
            .map(|c| c.to_string())
            .collect(),
        measures: measure_options(),
        filter: dashboard.filter().clone(),
        views: dashboard.render_all(),
    })
}

/// `POST /api/countries` - replaces the active country set.
pub async fn set_countries(
    State(state): State<Arc<AppState>>,
    Json(params): Json<SetCountriesParams>,
) -> Json<UpdateResponse> {
    tracing::debug!(count = params.countries.len(), "set active countries");
    let mut dashboard = state.dashboard.lock().unwrap();
    let (invalidated, views) = dashboard.apply(FilterEvent::SetActiveCountries(params.countries));
    Json(UpdateResponse {
        invalidated: invalidated.to_vec(),
        views,
    })
}

/// `POST /api/measure` - selects a measure for one channel.
pub async fn set_measure(
    State(state): State<Arc<AppState>>,
    Json(params): Json<SetMeasureParams>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let measure = parse_measure(&params.measure)?;
    tracing::debug!(channel = ?params.channel, measure = measure.as_str(), "set measure");
    let mut dashboard = state.dashboard.lock().unwrap();
    let (invalidated, views) = dashboard.apply(FilterEvent::SetMeasure(params.channel, measure));
    Ok(Json(UpdateResponse {
        invalidated: invalidated.to_vec(),
        views,
    }))
}

/// `POST /api/zoom` - a raw relayout payload from the time-series view.
pub async fn zoom(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Json<UpdateResponse> {
    let payload = zoom_payload_from_json(payload);
    let mut dashboard = state.dashboard.lock().unwrap();
    let (invalidated, views) = dashboard.apply(FilterEvent::TimeSeriesZoom(payload));
    Json(UpdateResponse {
        invalidated: invalidated.to_vec(),
        views,
    })
}

/// Keeps only the numeric entries of a raw relayout object; `null` or a
/// non-object body counts as no payload at all. Relayout objects routinely
/// carry non-numeric entries (`xaxis.autorange: true`) which must not reach
/// the range extractor.
pub fn zoom_payload_from_json(value: serde_json::Value) -> Option<ZoomPayload> {
    match value {
        serde_json::Value::Object(map) => Some(
            map.into_iter()
                .filter_map(|(key, value)| value.as_f64().map(|n| (key, n)))
                .collect(),
        ),
        _ => None,
    }
}
