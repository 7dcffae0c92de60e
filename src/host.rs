//! Seams to the race-timing host.
//!
//! The host owns results, configuration and localization. This crate only
//! consumes them through [`RaceHost`] and [`Translate`], so it can run inside
//! a host integration or standalone from a results file via [`StaticHost`].
//!
//! # Example
//!
//! ```rust
//! use last_race_exporter::host::{RaceHost, StaticHost};
//! use last_race_exporter::results::Results;
//!
//! let host = StaticHost::new(Results::default()).with_event_name("Club Night");
//!
//! assert_eq!(host.option("eventName").as_deref(), Some("Club Night"));
//! assert_eq!(host.translate("Pilot"), "Pilot");
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::results::Results;

/// Option key holding the event name.
pub const EVENT_NAME_OPTION: &str = "eventName";

/// Maps a display key to a localized string.
pub trait Translate {
    fn translate(&self, text: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}

/// Everything the exporter needs from the host.
pub trait RaceHost {
    /// A fresh snapshot of the computed results, or `None` if unavailable.
    fn results(&self) -> Option<Results>;

    /// Reads a host configuration option.
    fn option(&self, key: &str) -> Option<String>;

    /// Localizes a display key.
    fn translate(&self, text: &str) -> String;

    /// The configured event name, empty if unset.
    fn event_name(&self) -> String {
        self.option(EVENT_NAME_OPTION).unwrap_or_default()
    }
}

/// Lets a `&dyn RaceHost` be passed where a translator is expected.
pub struct HostTranslator<'a>(pub &'a dyn RaceHost);

impl Translate for HostTranslator<'_> {
    fn translate(&self, text: &str) -> String {
        self.0.translate(text)
    }
}

/// Translation catalog loaded from a flat JSON object.
///
/// Keys without an entry translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to add one entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Translations {
    fn translate(&self, text: &str) -> String {
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

/// A host backed by values held in memory.
///
/// Used by the CLI (results loaded from a JSON file) and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    results: Option<Results>,
    options: HashMap<String, String>,
    translations: Translations,
}

impl StaticHost {
    pub fn new(results: Results) -> Self {
        Self {
            results: Some(results),
            ..Self::default()
        }
    }

    /// A host that has not produced any results yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_results_json(json: &str) -> Result<Self> {
        Ok(Self::new(Results::from_json(json)?))
    }

    pub fn from_results_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_results_json(&fs::read_to_string(path)?)
    }

    /// Sets a configuration option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_event_name(self, name: impl Into<String>) -> Self {
        self.with_option(EVENT_NAME_OPTION, name)
    }

    #[must_use]
    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }
}

impl RaceHost for StaticHost {
    fn results(&self) -> Option<Results> {
        self.results.clone()
    }

    fn option(&self, key: &str) -> Option<String> {
        self.options.get(key).cloned()
    }

    fn translate(&self, text: &str) -> String {
        self.translations.translate(text)
    }
}
