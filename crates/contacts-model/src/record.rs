use std::collections::BTreeMap;

/// One source row keyed by column name.
///
/// Absent columns and empty cells are indistinguishable to consumers:
/// [`RawRecord::get`] returns `None` for both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    values: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell value. `None` leaves the column absent.
    pub fn insert(&mut self, column: impl Into<String>, value: Option<String>) {
        let column = column.into();
        match value {
            Some(value) => {
                self.values.insert(column, value);
            }
            None => {
                self.values.remove(&column);
            }
        }
    }

    /// Returns the raw cell value, or `None` when the column is absent or the
    /// cell is empty.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns the raw cell value with absence mapped to `""`.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (column, value) in iter {
            record.insert(column, value.map(Into::into));
        }
        record
    }
}

/// A single sheet: the header row plus its records in source order.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>, records: Vec<RawRecord>) -> Self {
        Self { headers, records }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
