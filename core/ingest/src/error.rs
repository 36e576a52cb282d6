//! FILENAME: core/ingest/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate record for {country} in {year}")]
    DuplicateRecord { country: String, year: i32 },
}
