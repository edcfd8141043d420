use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use contacts_model::SourceTable;

use crate::error::{IngestError, Result};
use crate::table::build_table;

/// Reads a UTF-8 CSV file whose first row is the header.
pub fn read_csv_source(path: &Path) -> Result<SourceTable> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(|cell| Some(cell.to_string())).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "read csv source");
    Ok(build_table(&headers, rows))
}
