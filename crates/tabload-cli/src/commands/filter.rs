//! Filter command - select rows by column value and export them.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use indexmap::IndexMap;
use tabload::{output, ExportFormat};

use super::load_table;

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    column: String,
    value: String,
    ignore_case: bool,
    format: ExportFormat,
    delimiter: Option<char>,
    output_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (table, _source) = load_table(&file, delimiter)?;

    let rows = table.filter_rows_with(&column, &value, ignore_case)?;

    if verbose {
        eprintln!(
            "{} {} rows where {} = '{}'",
            "Matched".cyan().bold(),
            rows.len(),
            column,
            value
        );
    }

    match output_path {
        Some(path) => {
            let writer = File::create(&path)?;
            write_rows(format, &table.headers, &rows, writer)?;
            println!(
                "{} {} matching rows to {}",
                "Exported".green().bold(),
                rows.len().to_string().white().bold(),
                path.display().to_string().white()
            );
        }
        None => {
            let stdout = std::io::stdout();
            write_rows(format, &table.headers, &rows, stdout.lock())?;
        }
    }

    Ok(())
}

fn write_rows<W: Write>(
    format: ExportFormat,
    headers: &[String],
    rows: &[IndexMap<&str, &str>],
    writer: W,
) -> tabload::Result<()> {
    match format.delimiter() {
        Some(delim) => output::write_rows_delimited(headers, rows, writer, delim),
        None => output::write_rows_json(rows, writer),
    }
}
