//! Stats command - numeric statistics for one column.

use std::path::PathBuf;

use colored::Colorize;
use tabload::column_stats;

use super::load_table;

pub fn run(
    file: PathBuf,
    column: String,
    delimiter: Option<char>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (table, source) = load_table(&file, delimiter)?;

    if verbose {
        eprintln!(
            "{} {} ({} rows)",
            "Loaded".cyan().bold(),
            source.file,
            source.row_count
        );
    }

    let stats = column_stats(&table, &column)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{} '{}' in {}",
        "Column".cyan().bold(),
        column.white().bold(),
        source.file
    );
    println!("  Numeric values: {}", stats.count.to_string().white());

    match (stats.min, stats.max, stats.mean) {
        (Some(min), Some(max), Some(mean)) => {
            println!("  Min:  {}", min);
            println!("  Max:  {}", max);
            println!("  Mean: {:.4}", mean);
            println!("  Sum:  {}", stats.sum);
        }
        _ => {
            println!("  {}", "(no numeric values in this column)".yellow());
        }
    }

    Ok(())
}
