//! Delimited text parser with delimiter detection and encoding fallback.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TabloadError};
use super::table::{SourceMetadata, Table};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|'];

/// How many non-empty lines to sample during delimiter detection.
const SAMPLE_LINES: usize = 10;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Fail on invalid UTF-8 instead of decoding lossily.
    pub strict_utf8: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            max_rows: None,
            strict_utf8: false,
        }
    }
}

/// Parses delimited text files into [`Table`]s.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the table and its source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| TabloadError::from_io(path, e))?;
        let size_bytes = file
            .metadata()
            .map_err(|e| TabloadError::from_io(path, e))?
            .len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| TabloadError::from_io(path, e))?;

        let (text, encoding) = self.decode(path, contents)?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&text),
        };

        let table = self.parse_str(&text, delimiter)?;

        let source = SourceMetadata::new(
            path.to_path_buf(),
            size_bytes,
            format_label(delimiter).to_string(),
            encoding.to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, source))
    }

    /// Parse already-decoded text with a known delimiter.
    ///
    /// The first line is the header row. Rows shorter than the header are
    /// padded with empty strings; longer rows are truncated.
    pub fn parse_str(&self, text: &str, delimiter: u8) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(TabloadError::EmptyHeader(
                "no column names in header row".to_string(),
            ));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            while row.len() < expected_cols {
                row.push(String::new());
            }
            row.truncate(expected_cols);

            rows.push(row);
        }

        // A header-only file is a valid, empty table.
        Ok(Table::new(headers, rows, delimiter))
    }

    /// Decode raw bytes: strict UTF-8 first, lossy fallback unless disabled.
    fn decode(&self, path: &Path, bytes: Vec<u8>) -> Result<(String, &'static str)> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok((text, "utf-8")),
            Err(_) if self.config.strict_utf8 => Err(TabloadError::Decode {
                path: path.to_path_buf(),
            }),
            Err(err) => {
                let text = String::from_utf8_lossy(err.as_bytes()).into_owned();
                Ok((text, "utf-8-lossy"))
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the field delimiter by sampling the first few non-empty lines.
///
/// Counts quote-aware occurrences of each candidate per line and prefers the
/// candidate with the highest count that is consistent across lines. Falls
/// back to comma when no candidate appears at all.
pub fn detect_delimiter(text: &str) -> u8 {
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let Some(&first_count) = counts.first() else {
            continue;
        };
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let variance = counts
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / counts.len() as f64;

        // A delimiter that splits every sampled line into the same number of
        // fields wins over one that merely appears often.
        let score = if consistent {
            first_count * 1000
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Count delimiter occurrences in a line, ignoring quoted sections.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

/// Human-readable format label for a delimiter.
fn format_label(delimiter: u8) -> &'static str {
    match delimiter {
        b',' => "csv",
        b'\t' => "tsv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3\n4,5,6"), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), b'\t');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), b';');
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), b'|');
    }

    #[test]
    fn test_detect_delimiter_fallback() {
        // No candidate present at all.
        assert_eq!(detect_delimiter("justoneword\nanother"), b',');
        assert_eq!(detect_delimiter(""), b',');
    }

    #[test]
    fn test_detect_ignores_quoted_delimiters() {
        // The semicolons only appear inside quotes.
        let text = "a,b\n\"x;y;z\",2\n\"p;q;r\",4";
        assert_eq!(detect_delimiter(text), b',');
    }

    #[test]
    fn test_parse_simple() {
        let parser = Parser::new();
        let table = parser
            .parse_str("name,age,city\nAlice,30,NYC\nBob,25,LA", b',')
            .unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), Some("25"));
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let parser = Parser::new();
        let table = parser.parse_str("a,b,c\n1,2\n", b',').unwrap();

        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_parse_truncates_long_rows() {
        let parser = Parser::new();
        let table = parser.parse_str("a,b\n1,2,3,4\n", b',').unwrap();

        assert_eq!(table.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_parse_empty_header() {
        let parser = Parser::new();
        let err = parser.parse_str("", b',').unwrap_err();
        assert!(matches!(err, TabloadError::EmptyHeader(_)));
    }

    #[test]
    fn test_parse_header_only() {
        let parser = Parser::new();
        let table = parser.parse_str("a,b,c\n", b',').unwrap();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_max_rows() {
        let config = ParserConfig {
            max_rows: Some(2),
            ..Default::default()
        };
        let parser = Parser::with_config(config);
        let table = parser.parse_str("a\n1\n2\n3\n4\n", b',').unwrap();

        assert_eq!(table.row_count(), 2);
    }
}
