//! Exporter registration with the host.
//!
//! The host announces that it is collecting exporters by triggering
//! [`Evt::DataExportInitialize`]. Our handler answers with two
//! [`DataExporter`] descriptors, one per format, both backed by
//! [`assemble_last_race`](crate::assembler::assemble_last_race).
//!
//! # Example
//!
//! ```rust
//! use last_race_exporter::exporter::{EventManager, ExporterRegistry, initialize};
//!
//! let mut events = EventManager::new();
//! initialize(&mut events);
//!
//! let registry = ExporterRegistry::initialize(&events);
//! assert!(registry.get("Export Last Race(CSV)").is_some());
//! ```

use std::fmt;

use log::debug;

use crate::assembler::assemble_last_race;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::format::ExportFormat;
use crate::host::RaceHost;
use crate::output::ExportPayload;
use crate::table::Table;

/// Serializes an assembled table.
pub type Formatter = fn(&Table, &ExportConfig) -> Result<ExportPayload>;

/// Produces the table to export, or `None` if nothing can be exported.
pub type Assembler = fn(&dyn RaceHost, &ExportConfig) -> Option<Table>;

/// A named (formatter, assembler) pair the host offers as an export action.
#[derive(Clone)]
pub struct DataExporter {
    pub name: String,
    pub formatter: Formatter,
    pub assembler: Assembler,
}

impl DataExporter {
    pub fn new(name: impl Into<String>, formatter: Formatter, assembler: Assembler) -> Self {
        Self {
            name: name.into(),
            formatter,
            assembler,
        }
    }

    /// Runs the assembler, then the formatter.
    ///
    /// Returns `Ok(None)` when the assembler had nothing to export.
    pub fn export(&self, host: &dyn RaceHost, config: &ExportConfig) -> Result<Option<ExportPayload>> {
        match (self.assembler)(host, config) {
            Some(table) => (self.formatter)(&table, config).map(Some),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for DataExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataExporter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn write_csv(table: &Table, config: &ExportConfig) -> Result<ExportPayload> {
    ExportFormat::Csv.write(table, config)
}

fn write_xlsx(table: &Table, config: &ExportConfig) -> Result<ExportPayload> {
    ExportFormat::Xlsx.write(table, config)
}

/// The exporters this crate contributes, one per format.
pub fn last_race_exporters() -> Vec<DataExporter> {
    vec![
        DataExporter::new(ExportFormat::Csv.label(), write_csv, assemble_last_race),
        DataExporter::new(ExportFormat::Xlsx.label(), write_xlsx, assemble_last_race),
    ]
}

/// Host lifecycle events this crate listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evt {
    DataExportInitialize,
}

/// Arguments passed to event handlers.
pub struct EventArgs<'a> {
    register_fn: &'a mut dyn FnMut(DataExporter),
}

impl<'a> EventArgs<'a> {
    pub fn new(register_fn: &'a mut dyn FnMut(DataExporter)) -> Self {
        Self { register_fn }
    }

    /// Hands an exporter to the host.
    pub fn register(&mut self, exporter: DataExporter) {
        (self.register_fn)(exporter);
    }
}

pub type EventHandler = fn(&mut EventArgs<'_>);

/// Minimal event bus: handlers subscribed per event, run in subscription order.
#[derive(Debug, Default)]
pub struct EventManager {
    handlers: Vec<(Evt, EventHandler)>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, evt: Evt, handler: EventHandler) {
        self.handlers.push((evt, handler));
    }

    pub fn trigger(&self, evt: Evt, args: &mut EventArgs<'_>) {
        for (_, handler) in self.handlers.iter().filter(|(e, _)| *e == evt) {
            handler(args);
        }
    }

    pub fn handler_count(&self, evt: Evt) -> usize {
        self.handlers.iter().filter(|(e, _)| *e == evt).count()
    }
}

/// Registers both last-race exporters with the host.
pub fn register_handlers(args: &mut EventArgs<'_>) {
    for exporter in last_race_exporters() {
        debug!("Registering exporter '{}'", exporter.name);
        args.register(exporter);
    }
}

/// Subscribes this crate to the host's export initialization.
pub fn initialize(events: &mut EventManager) {
    events.on(Evt::DataExportInitialize, register_handlers);
}

/// Exporters collected from a [`Evt::DataExportInitialize`] round.
#[derive(Debug, Default)]
pub struct ExporterRegistry {
    exporters: Vec<DataExporter>,
}

impl ExporterRegistry {
    /// Triggers export initialization and keeps whatever gets registered.
    pub fn initialize(events: &EventManager) -> Self {
        let mut exporters = Vec::new();
        let mut register = |exporter: DataExporter| exporters.push(exporter);
        events.trigger(Evt::DataExportInitialize, &mut EventArgs::new(&mut register));
        Self { exporters }
    }

    pub fn exporters(&self) -> &[DataExporter] {
        &self.exporters
    }

    pub fn get(&self, name: &str) -> Option<&DataExporter> {
        self.exporters.iter().find(|e| e.name == name)
    }

    /// Looks up the exporter registered for a format.
    pub fn find(&self, format: ExportFormat) -> Option<&DataExporter> {
        self.get(format.label())
    }
}
