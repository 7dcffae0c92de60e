//! Export configuration.
//!
//! [`ExportConfig`] carries the knobs shared by the assembler and the format
//! writers. The defaults reproduce the stock export: the leaderboard's own
//! primary view, comma-delimited CSV, and 16pt/14pt title rows in XLSX.
//!
//! # Example
//!
//! ```rust
//! use last_race_exporter::config::ExportConfig;
//!
//! let config = ExportConfig::new()
//!     .with_primary_leaderboard("by_fastest_lap")
//!     .with_delimiter(b';');
//!
//! assert_eq!(config.primary_leaderboard.as_deref(), Some("by_fastest_lap"));
//! ```

use serde::{Deserialize, Serialize};

/// Marker written for laps a pilot did not complete.
pub const DNF: &str = "DNF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Ranking view to use instead of the leaderboard's declared primary view.
    /// Ignored when the leaderboard has no view with this name.
    pub primary_leaderboard: Option<String>,

    /// Field delimiter for CSV output (default: `,`)
    pub delimiter: u8,

    /// Font size for the event name row in XLSX output (default: 16)
    pub title_font_size: f64,

    /// Font size for the round label row in XLSX output (default: 14)
    pub subtitle_font_size: f64,

    /// Worksheet name in XLSX output (default: the writer's own default)
    pub worksheet_name: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            primary_leaderboard: None,
            delimiter: b',',
            title_font_size: 16.0,
            subtitle_font_size: 14.0,
            worksheet_name: None,
        }
    }
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides which ranking view fills the leaderboard columns.
    #[must_use]
    pub fn with_primary_leaderboard(mut self, view: impl Into<String>) -> Self {
        self.primary_leaderboard = Some(view.into());
        self
    }

    /// Sets the CSV field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the XLSX font sizes for the title and subtitle rows.
    #[must_use]
    pub fn with_font_sizes(mut self, title: f64, subtitle: f64) -> Self {
        self.title_font_size = title;
        self.subtitle_font_size = subtitle;
        self
    }

    #[must_use]
    pub fn with_worksheet_name(mut self, name: impl Into<String>) -> Self {
        self.worksheet_name = Some(name.into());
        self
    }
}
