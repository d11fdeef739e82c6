//! Info command - load a file and print the import summary.

use std::path::PathBuf;

use colored::Colorize;
use tabload::ImportSummary;

use super::load_table;

pub fn run(
    file: PathBuf,
    delimiter: Option<char>,
    json_output: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (table, source) = load_table(&file, delimiter)?;

    if verbose {
        println!(
            "{} {} ({}, {}, {} bytes)",
            "Loaded".cyan().bold(),
            source.file.white(),
            source.format,
            source.encoding,
            source.size_bytes
        );
        println!();
    }

    let summary = ImportSummary::build(&table, &source);

    match output {
        Some(path) => {
            if json_output {
                std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
            } else {
                summary.save(&path)?;
            }
            println!(
                "{} {}",
                "Saved summary to".green().bold(),
                path.display().to_string().white()
            );
        }
        None => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", summary.render_text());
            }
        }
    }

    Ok(())
}
