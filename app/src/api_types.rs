//! FILENAME: app/src/api_types.rs
// PURPOSE: Shared type definitions for the HTTP API.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use view_engine::{FilterState, MeasureChannel, ViewError, ViewOutput, ViewUpdate};

/// One entry of the measure dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureOption {
    pub value: String,
    pub label: String,
}

/// Full dashboard payload for the initial page load: the widget options,
/// the current filter state, and all four views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Country dropdown options, in dataset first-appearance order.
    pub countries: Vec<String>,
    /// Measure dropdown options.
    pub measures: Vec<MeasureOption>,
    pub filter: FilterState,
    pub views: Vec<ViewUpdate>,
}

/// Body for `POST /api/countries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCountriesParams {
    pub countries: Vec<String>,
}

/// Body for `POST /api/measure`.
///
/// The measure arrives as its raw wire identifier so an unknown value is
/// reported as an invalid-measure error rather than a generic decode
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMeasureParams {
    pub channel: MeasureChannel,
    pub measure: String,
}

/// Response of every mutating endpoint: which views the interaction
/// invalidated, and their refreshed payloads in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub invalidated: Vec<ViewOutput>,
    pub views: Vec<ViewUpdate>,
}

// ============================================================================
// ERROR MAPPING
// ============================================================================

/// An error response: HTTP status plus a JSON error message.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}
