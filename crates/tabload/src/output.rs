//! Table export: delimited text and JSON.

use std::io::Write;

use indexmap::IndexMap;

use crate::error::Result;
use crate::input::Table;

/// Export format for tables and filtered rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Delimiter for the delimited formats, None for JSON.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Re-serialize a table as delimited text: header row first, then data rows.
///
/// Loading a file and writing it back with the same delimiter round-trips
/// every cell value.
pub fn write_delimited<W: Write>(table: &Table, writer: W, delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Serialize a table as a JSON array of header-to-value objects.
pub fn write_json<W: Write>(table: &Table, writer: W) -> Result<()> {
    let rows: Vec<IndexMap<&str, &str>> = table.rows_as_maps().collect();
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

/// Write filtered rows as delimited text, in the given header order.
pub fn write_rows_delimited<W: Write>(
    headers: &[String],
    rows: &[IndexMap<&str, &str>],
    writer: W,
    delimiter: u8,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(headers)?;
    for row in rows {
        let record: Vec<&str> = headers
            .iter()
            .map(|h| row.get(h.as_str()).copied().unwrap_or(""))
            .collect();
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Write filtered rows as a JSON array of objects.
pub fn write_rows_json<W: Write>(rows: &[IndexMap<&str, &str>], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, rows)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Parser;

    #[test]
    fn test_round_trip_csv() {
        let parser = Parser::new();
        let original = parser
            .parse_str("id,name\n1,Ann\n2,\"Bo, Jr\"\n", b',')
            .unwrap();

        let mut buf = Vec::new();
        write_delimited(&original, &mut buf, b',').unwrap();

        let reparsed = parser
            .parse_str(std::str::from_utf8(&buf).unwrap(), b',')
            .unwrap();
        assert_eq!(reparsed.headers, original.headers);
        assert_eq!(reparsed.rows, original.rows);
    }

    #[test]
    fn test_write_json_objects() {
        let parser = Parser::new();
        let table = parser.parse_str("id,name\n1,Ann\n", b',').unwrap();

        let mut buf = Vec::new();
        write_json(&table, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["id"], "1");
        assert_eq!(value[0]["name"], "Ann");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("TSV".parse::<ExportFormat>().unwrap(), ExportFormat::Tsv);
        assert!("parquet".parse::<ExportFormat>().is_err());
    }
}
