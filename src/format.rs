//! Export format selection.
//!
//! [`ExportFormat`] names the two payload formats and dispatches a table to
//! the matching writer.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn example() -> last_race_exporter::Result<()> {
//! use last_race_exporter::config::ExportConfig;
//! use last_race_exporter::format::ExportFormat;
//! use last_race_exporter::table::{Cell, Table};
//!
//! let table = Table::from_rows(vec![vec![Cell::text("Club Night")]]);
//!
//! let format = ExportFormat::from_path("last_race.csv")?;
//! let payload = format.write(&table, &ExportConfig::new())?;
//! assert_eq!(payload.mime_type, "text/csv");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::output::ExportPayload;
use crate::table::Table;

/// Output format for a race export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited text with non-numeric fields quoted
    #[default]
    Csv,

    /// Excel workbook with enlarged title rows
    Xlsx,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use last_race_exporter::format::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::Csv.extension(), "csv");
    /// assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "xlsx"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Csv, ExportFormat::Xlsx]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Human-readable exporter label shown by the host.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "Export Last Race(CSV)",
            ExportFormat::Xlsx => "Export Last Race(XLSX)",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use last_race_exporter::format::ExportFormat;
    ///
    /// let format = ExportFormat::from_path("results/last_race.XLSX").unwrap();
    /// assert_eq!(format, ExportFormat::Xlsx);
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(ExportError::invalid_format(format!(
                "Unknown file extension: '.{}'. Expected one of: {}",
                ext,
                ExportFormat::all_names().join(", ")
            ))),
        }
    }

    /// Serializes a table with the writer for this format.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The required feature for the format is not enabled
    /// - The writer fails
    #[allow(unused_variables)]
    pub fn write(&self, table: &Table, config: &ExportConfig) -> Result<ExportPayload> {
        match self {
            #[cfg(feature = "csv-output")]
            ExportFormat::Csv => crate::output::write_csv(table, config),
            #[cfg(feature = "xlsx-output")]
            ExportFormat::Xlsx => crate::output::write_xlsx(table, config),
            #[allow(unreachable_patterns)]
            _ => Err(ExportError::invalid_format(format!(
                "Output format {} requires the '{}' feature to be enabled",
                self,
                match self {
                    ExportFormat::Csv => "csv-output",
                    ExportFormat::Xlsx => "xlsx-output",
                }
            ))),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Xlsx => write!(f, "XLSX"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}
