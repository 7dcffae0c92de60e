//! Unified error types for last-race-exporter.
//!
//! This module provides a single [`ExportError`] enum that covers every failure
//! the library can report, from reading host results to writing payloads.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Host integrations** get `None` from the assembler plus a logged error
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for export operations.
///
/// # Example
///
/// ```rust
/// use last_race_exporter::error::Result;
/// use last_race_exporter::table::Table;
///
/// fn my_function() -> Result<Table> {
///     Ok(Table::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

/// The error type for all export operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// An I/O error occurred.
    ///
    /// This typically happens when reading a results file or saving a payload.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet writing error.
    #[cfg(feature = "xlsx-output")]
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Results or translation JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The host did not provide any results.
    #[error("Unable to read results")]
    MissingResults,

    /// The results contain no race classes.
    #[error("Results contain no race classes")]
    NoClasses,

    /// The results contain no heats.
    #[error("Results contain no heats")]
    NoHeats,

    /// The selected heat has not been raced yet.
    #[error("Heat {heat_id} has no rounds")]
    NoRounds {
        /// Id of the heat that was selected
        heat_id: u64,
    },

    /// The selected round has no (or an empty) leaderboard.
    #[error("Round {round_id} has no leaderboard")]
    MissingLeaderboard {
        /// Id of the round that was selected
        round_id: u64,
    },

    /// The leaderboard does not contain the requested ranking view.
    #[error("Leaderboard has no ranking view named '{name}'")]
    MissingRankingView {
        /// Name of the view that was looked up
        name: String,
    },

    /// Unknown or unsupported output format.
    #[error("Invalid output format: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ExportError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ExportError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ExportError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates a missing ranking view error.
    pub fn missing_view(name: impl Into<String>) -> Self {
        ExportError::MissingRankingView { name: name.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ExportError::Io(_))
    }

    /// Returns `true` if the host had no results to export.
    pub fn is_missing_results(&self) -> bool {
        matches!(self, ExportError::MissingResults)
    }

    /// Returns `true` if the results exist but have nothing to select as the last race.
    pub fn is_incomplete_results(&self) -> bool {
        matches!(
            self,
            ExportError::NoClasses
                | ExportError::NoHeats
                | ExportError::NoRounds { .. }
                | ExportError::MissingLeaderboard { .. }
                | ExportError::MissingRankingView { .. }
        )
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ExportError::InvalidFormat { .. })
    }
}
