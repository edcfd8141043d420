use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("workbook {path} has no worksheet")]
    NoWorksheet { path: PathBuf },

    #[error("{path} has no header row")]
    MissingHeader { path: PathBuf },

    #[error("unsupported input format for {path} (expected .csv, .xlsx, .xlsm, .xls or .ods)")]
    UnsupportedFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
