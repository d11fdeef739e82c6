//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tabload::ExportFormat;

/// Tabload: inspect, filter, and convert delimited text files
#[derive(Parser)]
#[command(name = "tabload")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a file and print an import summary
    Info {
        /// Path to the delimited file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Delimiter character (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the summary to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Filter rows by column value and export the matches
    Filter {
        /// Path to the delimited file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to filter by
        #[arg(short, long)]
        column: String,

        /// Value to match
        #[arg(long)]
        value: String,

        /// Match ignoring ASCII case
        #[arg(short, long)]
        ignore_case: bool,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Delimiter character (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Write matches to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show numeric statistics for one column
    Stats {
        /// Path to the delimited file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to analyze
        #[arg(short, long)]
        column: String,

        /// Delimiter character (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-serialize the whole table in another format
    Convert {
        /// Path to the delimited file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Delimiter character (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
