//! FILENAME: core/view-engine/src/zoom.rs
//! PURPOSE: Range extraction from time-series zoom gestures.
//! CONTEXT: The relayout payload is a loosely-keyed string-to-number map
//! produced by the charting frontend. The key-presence logic lives here and
//! nowhere else; the rest of the engine only ever sees `Option<YearRange>`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::definition::YearRange;

/// Key carrying the lower x-axis bound of a zoom gesture.
pub const X_RANGE_FROM: &str = "xaxis.range[0]";

/// Key carrying the upper x-axis bound of a zoom gesture.
pub const X_RANGE_TO: &str = "xaxis.range[1]";

/// The transient payload of a zoom/relayout gesture on the time-series view.
///
/// Opaque mapping from string keys to numbers. Only the two x-range keys are
/// meaningful here; anything else is carried but ignored. Non-numeric
/// entries (e.g. `xaxis.autorange: true`) must be dropped by the serving
/// boundary before the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoomPayload {
    entries: HashMap<String, f64>,
}

impl ZoomPayload {
    pub fn new() -> Self {
        ZoomPayload::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }
}

impl FromIterator<(String, f64)> for ZoomPayload {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        ZoomPayload {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Derives the shared year filter from a zoom payload.
///
/// Both bound keys must be present together: a payload carrying only one is
/// treated identically to no payload at all. This all-or-nothing rule is
/// deliberate and must stay reproducible. Present bounds pass through
/// verbatim - no rounding, no clamping to dataset bounds.
pub fn extract_year_range(payload: Option<&ZoomPayload>) -> Option<YearRange> {
    let payload = payload?;
    let from = payload.get(X_RANGE_FROM)?;
    let to = payload.get(X_RANGE_TO)?;
    Some(YearRange::new(from, to))
}
