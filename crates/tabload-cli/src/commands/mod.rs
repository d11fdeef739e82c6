//! Command implementations.

pub mod convert;
pub mod filter;
pub mod info;
pub mod stats;

use std::error::Error;
use std::path::Path;

use tabload::{Parser, ParserConfig, SourceMetadata, Table};

/// Convert an optional delimiter override to the byte the parser expects.
pub(crate) fn delimiter_byte(delimiter: Option<char>) -> Result<Option<u8>, Box<dyn Error>> {
    match delimiter {
        Some(c) if c.is_ascii() => Ok(Some(c as u8)),
        Some(c) => Err(format!("Delimiter must be an ASCII character, got '{}'", c).into()),
        None => Ok(None),
    }
}

/// Load a table, honoring an optional delimiter override.
pub(crate) fn load_table(
    file: &Path,
    delimiter: Option<char>,
) -> Result<(Table, SourceMetadata), Box<dyn Error>> {
    let config = ParserConfig {
        delimiter: delimiter_byte(delimiter)?,
        ..Default::default()
    };
    Ok(Parser::with_config(config).parse_file(file)?)
}
