//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`FormatArg`] - Output format options
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use last_race_exporter::cli::Args;
//!
//! let args = Args::parse_from(["last-race-exporter", "results.json", "-o", "race.xlsx"]);
//! assert_eq!(args.output, "race.xlsx");
//! ```

use clap::{Parser, ValueEnum};

use crate::config::ExportConfig;
use crate::format::ExportFormat;

/// Export the last race of a race-timing results snapshot to CSV or XLSX.
#[derive(Parser, Debug, Clone)]
#[command(name = "last-race-exporter")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    last-race-exporter results.json
    last-race-exporter results.json -o last_race.xlsx
    last-race-exporter results.json -f xlsx --event-name \"Club Night\"
    last-race-exporter results.json --primary-leaderboard by_fastest_lap
    last-race-exporter results.json --translations de.json --delimiter ';'")]
pub struct Args {
    /// Path to the results JSON file
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "last_race.csv")]
    pub output: String,

    /// Output format (inferred from the output extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Event name written in the first row
    #[arg(long, value_name = "NAME")]
    pub event_name: Option<String>,

    /// Ranking view to use instead of the leaderboard's primary view
    #[arg(long, value_name = "VIEW")]
    pub primary_leaderboard: Option<String>,

    /// JSON file mapping display labels to translations
    #[arg(long, value_name = "FILE")]
    pub translations: Option<String>,

    /// CSV field delimiter (a single ASCII character)
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

/// Accepts exactly one ASCII character as the CSV delimiter.
fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            value
        )),
    }
}

impl Args {
    /// Builds the export configuration from the parsed flags.
    pub fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::new();
        if let Some(view) = &self.primary_leaderboard {
            config = config.with_primary_leaderboard(view.clone());
        }
        config.with_delimiter(self.delimiter)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FormatArg {
    /// Comma-separated values
    Csv,

    /// Excel workbook
    Xlsx,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> ExportFormat {
        match format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}
