//! Built-in expectation table for the pipeline outputs.

use super::ExpectedFile;

/// Output files checked when no manifest override is supplied, in check order.
pub const DEFAULT_EXPECTED_FILES: &[(&str, &[&str])] = &[
    (
        "data_clean/demographics.csv",
        &["Districts & Neighbourhoods", "Year"],
    ),
    (
        "data_clean/students.csv",
        &["education_type", "year", "students"],
    ),
    (
        "data_clean/subsidies.csv",
        &["subsidy_year", "Education", "Care"],
    ),
    (
        "TRANSFORMATION/forecast_demographic.csv",
        &["Neighbourhood", "Indicator", "Year", "Forecast"],
    ),
    (
        "TRANSFORMATION/forecast_subsidy_final.csv",
        &["subsidy_year", "Education", "Care"],
    ),
];

pub fn default_expected_files() -> Vec<ExpectedFile> {
    DEFAULT_EXPECTED_FILES
        .iter()
        .map(|(path, columns)| ExpectedFile {
            path: path.to_string(),
            required_columns: Some(columns.iter().map(|c| c.to_string()).collect()),
        })
        .collect()
}
