//! # last-race-exporter
//!
//! Exports the most recently completed race round of a race-timing host as a
//! CSV or XLSX summary: event name, round label, every pilot's lap times and
//! the leaderboard standings.
//!
//! ## Overview
//!
//! The host computes timing and scoring. This crate:
//! 1. reads the already-computed results through [`RaceHost`](host::RaceHost),
//! 2. reshapes the last round into a flat [`Table`](table::Table),
//! 3. serializes the table to an [`ExportPayload`](output::ExportPayload).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use last_race_exporter::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let host = StaticHost::from_results_file("results.json")?
//!         .with_event_name("Club Night");
//!     let config = ExportConfig::new();
//!
//!     if let Some(table) = assemble_last_race(&host, &config) {
//!         ExportFormat::Csv.write(&table, &config)?.save("last_race.csv")?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Host Integration
//!
//! Hosts that collect exporters through an event bus subscribe this crate with
//! [`exporter::initialize`]. When the host triggers
//! [`Evt::DataExportInitialize`](exporter::Evt::DataExportInitialize), two
//! exporters are registered: "Export Last Race(CSV)" and "Export Last Race(XLSX)".
//!
//! ## Module Structure
//!
//! - [`results`] - Host results model ([`Results`](results::Results), [`Leaderboard`](results::Leaderboard), ...)
//! - [`table`] - [`Table`](table::Table) and [`Cell`](table::Cell)
//! - [`leaderboard`] - [`build_leaderboard`](leaderboard::build_leaderboard)
//! - [`assembler`] - [`assemble_last_race`](assembler::assemble_last_race)
//! - [`output`] - [`write_csv`](output::write_csv), [`write_xlsx`](output::write_xlsx)
//! - [`format`] - [`ExportFormat`](format::ExportFormat)
//! - [`host`] - [`RaceHost`](host::RaceHost), [`Translate`](host::Translate), [`StaticHost`](host::StaticHost)
//! - [`exporter`] - [`DataExporter`](exporter::DataExporter), [`EventManager`](exporter::EventManager)
//! - [`config`] - [`ExportConfig`](config::ExportConfig)
//! - [`error`] - [`ExportError`], [`Result`]
//! - [`cli`] - CLI arguments (requires `cli` feature)

pub mod assembler;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod format;
pub mod host;
pub mod leaderboard;
pub mod output;
pub mod results;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use error::{ExportError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use last_race_exporter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ExportError, Result};

    pub use crate::assembler::{assemble_last_race, try_assemble_last_race};
    pub use crate::config::{DNF, ExportConfig};
    pub use crate::exporter::{DataExporter, EventManager, Evt, ExporterRegistry, initialize};
    pub use crate::format::ExportFormat;
    pub use crate::host::{RaceHost, StaticHost, Translate, Translations};
    pub use crate::leaderboard::build_leaderboard;
    pub use crate::output::{ExportPayload, PayloadData};
    pub use crate::results::{Leaderboard, Results};
    pub use crate::table::{Cell, Row, Table};
}
