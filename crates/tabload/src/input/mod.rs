//! Input handling: delimiter detection and tolerant row parsing.

pub mod parser;
pub mod table;

pub use parser::{detect_delimiter, Parser, ParserConfig};
pub use table::{SourceMetadata, Table};
