//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (HTTP bridge).
// CONTEXT: Owns the process-wide application state; the actual dashboard
// logic lives in the core crates, this layer only wires it to HTTP.

use std::sync::{Arc, Mutex};

use dataset::Dataset;
use view_engine::Dashboard;

pub mod api_types;
pub mod cli;
pub mod commands;
pub mod server;

pub use api_types::{
    ApiError, DashboardSnapshot, MeasureOption, SetCountriesParams, SetMeasureParams,
    UpdateResponse,
};
pub use server::Server;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Process-wide state shared by every request handler.
///
/// One dashboard session per process for now; multi-user support means one
/// `Dashboard` per session behind its own lock, all sharing the dataset.
pub struct AppState {
    pub dashboard: Mutex<Dashboard>,
}

/// Creates the application state from a loaded dataset.
pub fn create_app_state(dataset: Dataset) -> AppState {
    AppState {
        dashboard: Mutex::new(Dashboard::new(Arc::new(dataset))),
    }
}
