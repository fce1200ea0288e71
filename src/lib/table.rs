//! CSV loading into a header/row-count summary.

use std::{fs::File, io::BufReader, path::Path};

use csv::ReaderBuilder;

use crate::lib::errors::ValidationError;

const UTF8_BOM: char = '\u{feff}';

/// Shape of a loaded table: its header columns in file order and the number of data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub columns: Vec<String>,
    pub row_count: usize,
}

impl TableSummary {
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Columns from `required` that are absent, in the order they were requested.
    pub fn missing_columns(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|column| !self.has_column(column))
            .cloned()
            .collect()
    }
}

/// Load `path` as comma-separated data with a header row.
///
/// `label` is the declared path used in error messages. Data rows may be
/// shorter than the header but not longer.
pub fn load_table(path: &Path, label: &str) -> Result<TableSummary, ValidationError> {
    let read_error = |source: csv::Error| ValidationError::TableRead {
        path: label.to_string(),
        source,
    };

    let file = File::open(path).map_err(|err| read_error(csv::Error::from(err)))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let columns: Vec<String> = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .enumerate()
        .map(|(index, name)| match index {
            0 => name.trim_start_matches(UTF8_BOM).to_string(),
            _ => name.to_string(),
        })
        .collect();

    if columns.is_empty() {
        return Ok(TableSummary {
            columns: Vec::new(),
            row_count: 0,
        });
    }

    let mut row_count = 0;
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        if record.len() > columns.len() {
            return Err(ValidationError::MalformedRow {
                path: label.to_string(),
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }
        row_count += 1;
    }

    Ok(TableSummary { columns, row_count })
}
