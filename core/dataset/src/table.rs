//! FILENAME: core/dataset/src/table.rs
//! PURPOSE: The immutable indicator table.
//! CONTEXT: Loaded once at process start; every aggregation reads this
//! sequence. Nothing may add, remove, or edit records after construction.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The full indicator table: an ordered sequence of records.
///
/// Order is load order (the order of rows in the source CSV) and is part of
/// the observable behavior: the time-series view and the snapshot stable
/// sorts both depend on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names in first-appearance order.
    ///
    /// This is what the country picker lists; first-appearance order keeps
    /// the listing stable across calls.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.country.as_str()) {
                seen.push(record.country.as_str());
            }
        }
        seen
    }
}
