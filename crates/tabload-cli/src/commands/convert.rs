//! Convert command - re-serialize the whole table in another format.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use tabload::{output, ExportFormat, Table};

use super::load_table;

pub fn run(
    file: PathBuf,
    format: ExportFormat,
    delimiter: Option<char>,
    output_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (table, source) = load_table(&file, delimiter)?;

    if verbose {
        eprintln!(
            "{} {} ({} rows, {} columns)",
            "Loaded".cyan().bold(),
            source.file,
            source.row_count,
            source.column_count
        );
    }

    match output_path {
        Some(path) => {
            let writer = File::create(&path)?;
            write_table(format, &table, writer)?;
            println!(
                "{} {} rows to {}",
                "Wrote".green().bold(),
                table.row_count().to_string().white().bold(),
                path.display().to_string().white()
            );
        }
        None => {
            let stdout = std::io::stdout();
            write_table(format, &table, stdout.lock())?;
        }
    }

    Ok(())
}

fn write_table<W: Write>(format: ExportFormat, table: &Table, writer: W) -> tabload::Result<()> {
    match format.delimiter() {
        Some(delim) => output::write_delimited(table, writer, delim),
        None => output::write_json(table, writer),
    }
}
