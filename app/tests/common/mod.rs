//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard backend integration tests.

use app_lib::{create_app_state, AppState};
use dataset::{Dataset, Record};

/// Test harness wrapping the application state.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a harness over the canned gapminder-shaped fixture.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(gapminder_fixture()),
        }
    }
}

pub fn rec(
    country: &str,
    continent: &str,
    year: i32,
    pop: f64,
    life_exp: f64,
    gdp_per_cap: f64,
) -> Record {
    Record {
        country: country.to_string(),
        continent: continent.to_string(),
        year,
        pop,
        life_exp,
        gdp_per_cap,
    }
}

/// A small slice of the gapminder table: the three default countries plus
/// enough others to exercise every continent and uneven year coverage
/// (Brazil has 2007 only).
pub fn gapminder_fixture() -> Dataset {
    Dataset::new(vec![
        rec("Russia", "Europe", 1952, 102_800_000.0, 58.0, 5_696.0),
        rec("Russia", "Europe", 1977, 136_300_000.0, 67.6, 11_888.0),
        rec("Russia", "Europe", 2007, 141_900_000.0, 67.2, 14_869.0),
        rec("Germany", "Europe", 1952, 69_145_952.0, 67.5, 7_144.0),
        rec("Germany", "Europe", 1977, 78_160_773.0, 72.5, 20_512.0),
        rec("Germany", "Europe", 2007, 82_400_996.0, 79.4, 32_170.0),
        rec("France", "Europe", 1952, 42_459_667.0, 67.4, 7_029.0),
        rec("France", "Europe", 1977, 53_165_019.0, 73.8, 18_292.0),
        rec("France", "Europe", 2007, 61_083_916.0, 80.6, 30_470.0),
        rec("China", "Asia", 1952, 556_263_527.0, 44.0, 400.0),
        rec("China", "Asia", 1977, 943_455_000.0, 63.9, 741.0),
        rec("China", "Asia", 2007, 1_318_683_096.0, 73.0, 4_959.0),
        rec("Japan", "Asia", 1952, 86_459_025.0, 63.0, 3_217.0),
        rec("Japan", "Asia", 1977, 113_872_473.0, 75.4, 14_778.0),
        rec("Japan", "Asia", 2007, 127_467_972.0, 82.6, 31_656.0),
        rec("United States", "Americas", 1952, 157_553_000.0, 68.4, 13_990.0),
        rec("United States", "Americas", 1977, 220_239_000.0, 73.4, 24_073.0),
        rec("United States", "Americas", 2007, 301_139_947.0, 78.2, 42_952.0),
        rec("Brazil", "Americas", 2007, 190_010_647.0, 72.4, 9_066.0),
        rec("Nigeria", "Africa", 1952, 33_119_096.0, 36.3, 1_077.0),
        rec("Nigeria", "Africa", 2007, 135_031_164.0, 46.9, 2_014.0),
        rec("Australia", "Oceania", 1952, 8_691_212.0, 69.1, 10_040.0),
        rec("Australia", "Oceania", 2007, 20_434_176.0, 81.2, 34_435.0),
    ])
}
