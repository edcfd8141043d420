use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use contacts_model::SourceTable;

use crate::error::{IngestError, Result};
use crate::table::build_table;

/// Reads the first worksheet of a spreadsheet file.
///
/// Every cell is turned into text. Numeric cells are rendered in plain
/// decimal form, so a phone number stored as a float comes out as
/// `50425618727` rather than in exponent notation.
pub fn read_workbook_source(path: &Path) -> Result<SourceTable> {
    let workbook_error = |error: calamine::Error| IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(workbook_error)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(|cell| cell_text(cell).unwrap_or_default()).collect(),
        None => {
            return Err(IngestError::MissingHeader {
                path: path.to_path_buf(),
            });
        }
    };
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let data: Vec<Vec<Option<String>>> = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    debug!(path = %path.display(), rows = data.len(), "read workbook source");
    Ok(build_table(&headers, data))
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(value) => Some(value.clone()),
        Data::Float(value) => Some(format_float(*value)),
        Data::Int(value) => Some(value.to_string()),
        Data::Bool(value) => Some(value.to_string()),
        other => Some(other.to_string()),
    }
}

/// Formats a float without exponent; integral values lose the `.0`.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
