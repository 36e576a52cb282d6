// FILENAME: core/ingest/src/csv_reader.rs

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dataset::{Dataset, Record};

use crate::IngestError;

/// One row as it appears in the gapminder CSV export. Column names are the
/// source's own; extra columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    country: String,
    continent: String,
    year: i32,
    #[serde(rename = "lifeExp")]
    life_exp: f64,
    pop: f64,
    #[serde(rename = "gdpPercap")]
    gdp_per_cap: f64,
}

impl From<CsvRow> for Record {
    fn from(row: CsvRow) -> Self {
        Record {
            country: row.country,
            continent: row.continent,
            year: row.year,
            pop: row.pop,
            life_exp: row.life_exp,
            gdp_per_cap: row.gdp_per_cap,
        }
    }
}

/// Reads a headered gapminder CSV into a dataset, preserving row order.
///
/// Rejects duplicate (country, year) pairs: the whole engine assumes at
/// most one record per pair, and enforcing it here keeps the aggregations
/// free of that concern.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records: Vec<Record> = Vec::new();
    let mut seen: HashSet<(String, i32)> = HashSet::new();

    for row in csv_reader.deserialize() {
        let row: CsvRow = row?;
        if !seen.insert((row.country.clone(), row.year)) {
            return Err(IngestError::DuplicateRecord {
                country: row.country,
                year: row.year,
            });
        }
        records.push(row.into());
    }

    Ok(Dataset::new(records))
}

/// Reads a gapminder CSV from disk.
pub fn read_dataset_from_path(path: &Path) -> Result<Dataset, IngestError> {
    let file = File::open(path)?;
    read_dataset(file)
}
