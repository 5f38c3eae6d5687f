//! A loaded table as header names plus rows of text cells.

use crate::error::TableError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column named `name`, ignoring case, surrounding
    /// whitespace and a leading byte-order mark.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
    }

    /// Like [`RawTable::column`], failing when the column is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingColumn`] naming `path` and the column.
    pub fn require_column(&self, name: &'static str, path: &str) -> Result<usize, TableError> {
        self.column(name).ok_or_else(|| TableError::MissingColumn {
            path: path.to_string(),
            column: name,
        })
    }
}

/// Cell text at `idx`, or `None` when the column is absent, the row is short,
/// or the cell is blank.
#[must_use]
pub fn cell(row: &[String], idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i))
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
}
