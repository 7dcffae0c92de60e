//! Data models for the host's computed race results.
//!
//! These structures mirror the JSON the timing host produces after scoring a
//! race. They are read-only snapshots: nothing in this crate mutates them.
//!
//! ```rust
//! use last_race_exporter::results::Results;
//!
//! let results: Results = serde_json::from_str(r#"{
//!     "classes": {"1": {"name": "Open"}},
//!     "heats": {"1": {"displayname": "Heat 1", "rounds": []}}
//! }"#).unwrap();
//!
//! assert_eq!(results.classes[&1].name, "Open");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::table::Cell;

/// `meta.start_behavior` value for staggered starts, where the total column
/// reports the time spent on laps instead of the total race time.
pub const STAGGERED_START: i64 = 2;

/// Top-level results snapshot.
///
/// Keys are numeric ids. JSON object keys arrive as strings and are parsed as
/// integers, so "most recent" is decided by numeric order, not string order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Results {
    #[serde(default)]
    pub classes: BTreeMap<u64, RaceClass>,
    #[serde(default)]
    pub heats: BTreeMap<u64, Heat>,
}

impl Results {
    /// Parses a results snapshot from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The class with the greatest id.
    pub fn last_class(&self) -> Option<(u64, &RaceClass)> {
        self.classes.iter().next_back().map(|(id, class)| (*id, class))
    }

    /// The heat with the greatest id.
    pub fn last_heat(&self) -> Option<(u64, &Heat)> {
        self.heats.iter().next_back().map(|(id, heat)| (*id, heat))
    }
}

/// Reads an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named grouping of heats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceClass {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A named grouping of rounds for a set of pilots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Heat {
    #[serde(default, deserialize_with = "null_as_default")]
    pub displayname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rounds: Vec<Round>,
}

impl Heat {
    /// The most recently appended round.
    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }
}

/// One completed race attempt within a heat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub leaderboard: Option<Leaderboard>,
}

/// Per-receiver lap data for one pilot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// `None` when no pilot was assigned to this receiver.
    #[serde(default)]
    pub callsign: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub laps: Vec<Lap>,
}

impl Node {
    /// Laps that were not deleted by the race director, in arrival order.
    pub fn valid_laps(&self) -> impl Iterator<Item = &Lap> {
        self.laps.iter().filter(|lap| !lap.deleted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lap_time_formatted: String,
    #[serde(default)]
    pub deleted: bool,
}

impl Lap {
    pub fn new(lap_time_formatted: impl Into<String>) -> Self {
        Self {
            lap_time_formatted: lap_time_formatted.into(),
            deleted: false,
        }
    }

    /// Builder-style method to mark the lap as deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }
}

/// Ranked views of the pilots in a round.
///
/// Besides `meta`, every key of the JSON object is a named ranking view
/// (`by_race_time`, `by_fastest_lap`, `by_consecutives`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub meta: LeaderboardMeta,
    #[serde(flatten)]
    pub views: BTreeMap<String, Vec<LeaderboardEntry>>,
}

impl Leaderboard {
    pub fn view(&self, name: &str) -> Option<&[LeaderboardEntry]> {
        self.views.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardMeta {
    /// Name of the view the race format ranks by.
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_leaderboard: String,
    #[serde(default)]
    pub start_behavior: i64,
}

impl LeaderboardMeta {
    pub fn is_staggered_start(&self) -> bool {
        self.start_behavior == STAGGERED_START
    }
}

/// One pilot's standing in a ranking view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub position: Cell,
    #[serde(default, deserialize_with = "null_as_default")]
    pub callsign: String,
    #[serde(default)]
    pub fastest_lap: Cell,
    #[serde(default)]
    pub total_time: Cell,
    #[serde(default)]
    pub total_time_laps: Cell,
}
