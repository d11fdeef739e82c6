//! In-memory table and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TabloadError};

/// Metadata about the file a table was loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Encoding the file was decoded with.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        size_bytes: u64,
        format: String,
        encoding: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            size_bytes,
            format,
            encoding,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// An in-memory table: ordered headers plus row-major string cells.
///
/// Every row holds exactly `headers.len()` fields; the parser pads short rows
/// with empty strings and truncates long ones, so an absent value is an empty
/// string rather than an error. Cells are not mutated after load; re-importing
/// replaces the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column headers, in file order.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter the table was parsed with.
    pub delimiter: u8,
}

impl Table {
    /// Create a new table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// View one row as an ordered mapping from header name to cell value.
    pub fn row(&self, index: usize) -> Option<IndexMap<&str, &str>> {
        self.rows.get(index).map(|row| self.row_to_map(row))
    }

    /// Iterate over all rows as ordered header-to-value mappings.
    pub fn rows_as_maps(&self) -> impl Iterator<Item = IndexMap<&str, &str>> {
        self.rows.iter().map(|row| self.row_to_map(row))
    }

    /// Rows where `column` equals `value`, in original order.
    ///
    /// Comparison is exact; see [`Table::filter_rows_with`] for the
    /// case-insensitive variant.
    pub fn filter_rows(&self, column: &str, value: &str) -> Result<Vec<IndexMap<&str, &str>>> {
        self.filter_rows_with(column, value, false)
    }

    /// Rows where `column` matches `value`, optionally ignoring ASCII case.
    pub fn filter_rows_with(
        &self,
        column: &str,
        value: &str,
        ignore_case: bool,
    ) -> Result<Vec<IndexMap<&str, &str>>> {
        let index = self
            .column_index(column)
            .ok_or_else(|| TabloadError::ColumnNotFound {
                name: column.to_string(),
            })?;

        let matches = |cell: &str| {
            if ignore_case {
                cell.eq_ignore_ascii_case(value)
            } else {
                cell == value
            }
        };

        Ok(self
            .rows
            .iter()
            .filter(|row| matches(row.get(index).map(|s| s.as_str()).unwrap_or("")))
            .map(|row| self.row_to_map(row))
            .collect())
    }

    /// Check if a value is blank (empty or whitespace only).
    pub fn is_empty_value(value: &str) -> bool {
        value.trim().is_empty()
    }

    fn row_to_map<'a>(&'a self, row: &'a [String]) -> IndexMap<&'a str, &'a str> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                (
                    header.as_str(),
                    row.get(i).map(|s| s.as_str()).unwrap_or(""),
                )
            })
            .collect()
    }
}
