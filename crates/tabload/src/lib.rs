//! Tabload: load delimited text files, sniff their delimiter, filter rows,
//! and report column statistics.
//!
//! The loader reads a CSV-like file (UTF-8 with a lossy fallback), infers the
//! field delimiter among comma, semicolon, tab, and pipe, and produces an
//! in-memory [`Table`] of header names and string rows. Filtering and
//! statistics operate on that table; nothing is persisted and no cell is
//! mutated after load.
//!
//! # Example
//!
//! ```no_run
//! let (table, source) = tabload::load("students.csv").unwrap();
//!
//! println!("{} rows, {} columns", source.row_count, source.column_count);
//!
//! let matches = table.filter_rows("major", "Computer Science").unwrap();
//! let gpa = tabload::column_stats(&table, "gpa").unwrap();
//! println!("{} matches, mean GPA {:?}", matches.len(), gpa.mean);
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod stats;

pub use error::{Result, TabloadError};
pub use input::{detect_delimiter, Parser, ParserConfig, SourceMetadata, Table};
pub use output::ExportFormat;
pub use report::ImportSummary;
pub use stats::{column_profile, column_stats, ColumnProfile, ColumnStats};

use std::path::Path;

/// Load a delimited file with default parser settings.
///
/// Convenience wrapper around [`Parser::parse_file`].
pub fn load(path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
    Parser::new().parse_file(path)
}
