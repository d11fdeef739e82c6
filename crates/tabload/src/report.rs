//! Import summary: per-column profiles plus source totals.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabloadError};
use crate::input::{SourceMetadata, Table};
use crate::stats::{column_profile, ColumnProfile};

/// Summary of one import: source file, totals, and per-column profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Source file name.
    pub file: String,
    /// Detected format.
    pub format: String,
    /// Number of data rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Profiles in header order.
    pub columns: Vec<ColumnProfile>,
}

impl ImportSummary {
    /// Build a summary for a loaded table.
    pub fn build(table: &Table, source: &SourceMetadata) -> Self {
        let columns = table
            .headers
            .iter()
            // column_profile only fails on unknown names, which header names are not
            .filter_map(|name| column_profile(table, name).ok())
            .collect();

        Self {
            file: source.file.clone(),
            format: source.format.clone(),
            row_count: source.row_count,
            column_count: source.column_count,
            columns,
        }
    }

    /// Render the summary as a human-readable text block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Import summary");
        let _ = writeln!(out, "==============");
        let _ = writeln!(out, "Source file: {}", self.file);
        let _ = writeln!(out, "Format: {}", self.format);
        let _ = writeln!(out, "Total rows: {}", self.row_count);
        let _ = writeln!(out, "Total columns: {}", self.column_count);
        let _ = writeln!(
            out,
            "Columns: {}",
            self.columns
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        for column in &self.columns {
            let _ = writeln!(out);
            let _ = writeln!(out, "Column '{}':", column.name);
            let _ = writeln!(out, "  - Non-empty values: {}", column.non_empty);
            let _ = writeln!(out, "  - Unique values: {}", column.unique);
        }

        out
    }

    /// Write the text rendering to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render_text()).map_err(|e| TabloadError::from_io(path, e))
    }
}
