//! Source sheet readers.
//!
//! Both CSV and spreadsheet inputs end up as a [`SourceTable`]: the header
//! row plus one [`contacts_model::RawRecord`] per non-blank data row, with
//! every cell kept as text.

use std::path::Path;

use contacts_model::SourceTable;

pub mod csv_source;
pub mod error;
pub mod table;
pub mod workbook;

pub use csv_source::read_csv_source;
pub use error::{IngestError, Result};
pub use table::{build_table, normalize_header};
pub use workbook::read_workbook_source;

/// Input formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// Reads the first sheet of `path`, choosing the reader by extension.
pub fn read_source(path: &Path) -> Result<SourceTable> {
    match SourceFormat::from_path(path) {
        Some(SourceFormat::Csv) => read_csv_source(path),
        Some(SourceFormat::Workbook) => read_workbook_source(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
