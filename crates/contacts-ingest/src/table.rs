//! Shared helpers for turning a grid of cells into a [`SourceTable`].

use contacts_model::{RawRecord, SourceTable};
use unicode_normalization::UnicodeNormalization;

/// Normalizes a header cell: BOM stripped, whitespace collapsed, NFC form.
///
/// Spreadsheets exported on macOS often carry decomposed accents, which would
/// otherwise make `País` and `País` different column names.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.nfc().collect()
}

fn normalize_cell(raw: &str) -> Option<String> {
    let value = raw.trim_matches('\u{feff}');
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Builds a table from a header row and data rows of optional cells.
///
/// Rows whose cells are all blank are skipped. When a header name repeats,
/// the first column with that name wins.
pub fn build_table<I>(raw_headers: &[String], rows: I) -> SourceTable
where
    I: IntoIterator<Item = Vec<Option<String>>>,
{
    let headers: Vec<String> = raw_headers
        .iter()
        .map(String::as_str)
        .map(normalize_header)
        .collect();
    let mut keep = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let first = !header.is_empty() && !headers[..idx].contains(header);
        keep.push(first);
    }

    let mut records = Vec::new();
    for row in rows {
        let mut record = RawRecord::new();
        for (idx, cell) in row.into_iter().enumerate() {
            if !keep.get(idx).copied().unwrap_or(false) {
                continue;
            }
            let value = cell.as_deref().and_then(normalize_cell);
            record.insert(headers[idx].clone(), value);
        }
        if record.is_empty() {
            continue;
        }
        records.push(record);
    }

    let headers = headers
        .into_iter()
        .zip(keep)
        .filter_map(|(header, keep)| keep.then_some(header))
        .collect();
    SourceTable::new(headers, records)
}
