//! FILENAME: core/dataset/src/record.rs
//! PURPOSE: The per-(country, year) observation and the selectable measures.
//! CONTEXT: Records are produced once by ingestion and never mutated.
//! Measures carry the wire identifiers and display labels used by the
//! presentation layer; computation always goes through `value_of`.

use serde::{Deserialize, Serialize};

/// One (country, year) observation from the indicator table.
///
/// The dataset holds at most one record per (country, year) pair; ingestion
/// enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub year: i32,
    pub pop: f64,
    pub life_exp: f64,
    #[serde(rename = "gdpPercap")]
    pub gdp_per_cap: f64,
}

// ============================================================================
// MEASURES
// ============================================================================

/// The numeric indicator fields selectable for display.
///
/// Wire identifiers are the source column names (`pop`, `lifeExp`,
/// `gdpPercap`). Resolving any other identifier fails; there is no silent
/// fallback to a default measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    #[serde(rename = "pop")]
    Pop,
    #[serde(rename = "lifeExp")]
    LifeExp,
    #[serde(rename = "gdpPercap")]
    GdpPerCap,
}

/// All measures, in the order the frontend lists them.
pub const ALL_MEASURES: [Measure; 3] = [Measure::Pop, Measure::LifeExp, Measure::GdpPerCap];

impl Measure {
    /// The wire identifier (the source column name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Pop => "pop",
            Measure::LifeExp => "lifeExp",
            Measure::GdpPerCap => "gdpPercap",
        }
    }

    /// Human-readable label, used only for output annotation.
    pub fn label(&self) -> &'static str {
        match self {
            Measure::Pop => "Population size",
            Measure::LifeExp => "Life expectancy",
            Measure::GdpPerCap => "GDP per capita",
        }
    }

    /// Resolves a wire identifier. Returns `None` for anything that is not
    /// one of the three column names (case-sensitive).
    pub fn from_wire(ident: &str) -> Option<Measure> {
        match ident {
            "pop" => Some(Measure::Pop),
            "lifeExp" => Some(Measure::LifeExp),
            "gdpPercap" => Some(Measure::GdpPerCap),
            _ => None,
        }
    }

    /// Reads this measure's field from a record.
    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            Measure::Pop => record.pop,
            Measure::LifeExp => record.life_exp,
            Measure::GdpPerCap => record.gdp_per_cap,
        }
    }
}
