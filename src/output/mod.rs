//! Output format writers.
//!
//! This module provides writers for the two export formats:
//! - [`write_csv`] / [`to_csv`] - delimited text, non-numeric cells quoted - requires `csv-output` feature
//! - [`write_xlsx`] - spreadsheet with enlarged title rows - requires `xlsx-output` feature
//!
//! Both return an [`ExportPayload`]: the raw data plus the MIME type and file
//! extension a host needs to offer it as a download.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "xlsx-output"))]
//! # fn main() -> last_race_exporter::Result<()> {
//! use last_race_exporter::config::ExportConfig;
//! use last_race_exporter::output::{write_csv, write_xlsx};
//! use last_race_exporter::table::{Cell, Table};
//!
//! let table = Table::from_rows(vec![
//!     vec![Cell::text("Club Night")],
//!     vec![Cell::text("Open Heat 1 Round 1")],
//!     vec![Cell::text("Rank"), Cell::text("Pilot")],
//!     vec![Cell::Integer(1), Cell::text("Ace")],
//! ]);
//! let config = ExportConfig::new();
//!
//! write_csv(&table, &config)?.save("last_race.csv")?;
//! write_xlsx(&table, &config)?.save("last_race.xlsx")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "xlsx-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "xlsx-output")]
mod xlsx_writer;

use std::fs;
use std::path::Path;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "xlsx-output")]
pub use xlsx_writer::write_xlsx;

use crate::error::Result;

/// Raw payload bytes, textual or binary depending on the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadData {
    Text(String),
    Binary(Vec<u8>),
}

/// A serialized export, ready to hand back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub data: PayloadData,
    /// MIME type, e.g. `text/csv`.
    pub mime_type: &'static str,
    /// File extension without the dot.
    pub extension: &'static str,
}

impl ExportPayload {
    pub fn text(data: String, mime_type: &'static str, extension: &'static str) -> Self {
        Self {
            data: PayloadData::Text(data),
            mime_type,
            extension,
        }
    }

    pub fn binary(data: Vec<u8>, mime_type: &'static str, extension: &'static str) -> Self {
        Self {
            data: PayloadData::Binary(data),
            mime_type,
            extension,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            PayloadData::Text(s) => s.as_bytes(),
            PayloadData::Binary(b) => b,
        }
    }

    /// Returns the payload as text, if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            PayloadData::Text(s) => Some(s),
            PayloadData::Binary(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Writes the payload to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.as_bytes())?;
        Ok(())
    }
}
