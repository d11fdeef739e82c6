//! Tabload CLI - delimited file inspection and filtering.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info {
            file,
            delimiter,
            json,
            output,
        } => commands::info::run(file, delimiter, json, output, cli.verbose),

        Commands::Filter {
            file,
            column,
            value,
            ignore_case,
            format,
            delimiter,
            output,
        } => commands::filter::run(
            file,
            column,
            value,
            ignore_case,
            format,
            delimiter,
            output,
            cli.verbose,
        ),

        Commands::Stats {
            file,
            column,
            delimiter,
            json,
        } => commands::stats::run(file, column, delimiter, json, cli.verbose),

        Commands::Convert {
            file,
            format,
            delimiter,
            output,
        } => commands::convert::run(file, format, delimiter, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
