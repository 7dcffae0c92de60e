//! Race summary assembler.
//!
//! Picks the last race out of the host's results and lays it out as a
//! [`Table`]: event name, round label, then the leaderboard with one column
//! per lap spliced in after the pilot column.
//!
//! "Last race" means: the class with the greatest id, the heat with the
//! greatest id, and that heat's last round. Ids are assumed to grow over time.
//!
//! # Example
//!
//! ```rust
//! use last_race_exporter::assembler::assemble_last_race;
//! use last_race_exporter::config::ExportConfig;
//! use last_race_exporter::host::StaticHost;
//!
//! let host = StaticHost::empty();
//! assert!(assemble_last_race(&host, &ExportConfig::new()).is_none());
//! ```

use std::collections::HashMap;

use log::{debug, error};

use crate::config::{DNF, ExportConfig};
use crate::error::{ExportError, Result};
use crate::host::{HostTranslator, RaceHost};
use crate::leaderboard::{CALLSIGN_COLUMN, build_leaderboard};
use crate::results::Round;
use crate::table::{Cell, Table};

/// Column where lap time columns are inserted, right after the pilot.
pub const FIRST_LAP_COLUMN: usize = 2;

/// Valid lap times per pilot, in arrival order.
#[derive(Debug, Default)]
pub struct LapTimes {
    by_callsign: HashMap<String, Vec<String>>,
    max_laps: usize,
}

impl LapTimes {
    /// Collects non-deleted laps from every node of a round.
    ///
    /// Nodes without a pilot count toward `max_laps` but are not looked up.
    pub fn from_round(round: &Round) -> Self {
        let mut lap_times = Self::default();

        for node in &round.nodes {
            let times: Vec<String> = node
                .valid_laps()
                .map(|lap| lap.lap_time_formatted.clone())
                .collect();

            // Laps on an unassigned seat still widen the table.
            lap_times.max_laps = lap_times.max_laps.max(times.len());

            let Some(callsign) = node.callsign.as_deref() else {
                debug!("Node without pilot in round {} has {} laps", round.id, times.len());
                continue;
            };
            lap_times.by_callsign.insert(callsign.to_string(), times);
        }

        lap_times
    }

    /// Greatest number of valid laps any pilot completed.
    pub fn max_laps(&self) -> usize {
        self.max_laps
    }

    /// Lap times for one pilot; empty if the pilot has no node in this round.
    pub fn for_pilot(&self, callsign: &str) -> &[String] {
        self.by_callsign
            .get(callsign)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// One cell per lap index up to `max_laps`, padded with [`DNF`].
    pub fn cells_for(&self, callsign: &str) -> impl Iterator<Item = Cell> + '_ {
        let times = self.for_pilot(callsign);
        (0..self.max_laps).map(move |i| match times.get(i) {
            Some(time) => Cell::text(time.as_str()),
            None => Cell::text(DNF),
        })
    }
}

/// Assembles the last race table, or `None` if there is nothing to export.
///
/// Failures are logged; nothing is raised across the host boundary.
pub fn assemble_last_race(host: &dyn RaceHost, config: &ExportConfig) -> Option<Table> {
    match try_assemble_last_race(host, config) {
        Ok(table) => Some(table),
        Err(e) => {
            error!("{e}");
            None
        }
    }
}

/// Fallible core of [`assemble_last_race`].
pub fn try_assemble_last_race(host: &dyn RaceHost, config: &ExportConfig) -> Result<Table> {
    let results = host.results().ok_or(ExportError::MissingResults)?;

    let (_, last_class) = results.last_class().ok_or(ExportError::NoClasses)?;
    let (last_heat_id, last_heat) = results.last_heat().ok_or(ExportError::NoHeats)?;
    let last_round = last_heat.last_round().ok_or(ExportError::NoRounds {
        heat_id: last_heat_id,
    })?;

    let mut table = Table::new();
    table.push_row(vec![Cell::text(host.event_name())]);
    table.push_row(vec![Cell::text(format!(
        "{} {} {} {}",
        last_class.name,
        last_heat.displayname,
        host.translate("Round"),
        last_round.id
    ))]);

    let lap_times = LapTimes::from_round(last_round);
    let max_laps = lap_times.max_laps();

    let tr = HostTranslator(host);
    let mut rows = build_leaderboard(
        last_round.leaderboard.as_ref(),
        &tr,
        config.primary_leaderboard.as_deref(),
    )?
    .ok_or(ExportError::MissingLeaderboard {
        round_id: last_round.id,
    })?
    .into_iter();

    if let Some(mut header) = rows.next() {
        let lap_label = host.translate("Lap");
        header.splice(
            FIRST_LAP_COLUMN..FIRST_LAP_COLUMN,
            (0..max_laps).map(|i| Cell::text(format!("{lap_label} {i}"))),
        );
        table.push_row(header);
    }

    for mut row in rows {
        let callsign = row
            .get(CALLSIGN_COLUMN)
            .map(ToString::to_string)
            .unwrap_or_default();
        row.splice(
            FIRST_LAP_COLUMN..FIRST_LAP_COLUMN,
            lap_times.cells_for(&callsign),
        );
        table.push_row(row);
    }

    debug!(
        "Assembled round {} with {} pilots and {} lap columns",
        last_round.id,
        table.data_rows().len(),
        max_laps
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{StaticHost, Translations};
    use crate::results::Results;

    const RESULTS: &str = r#"{
        "classes": {"1": {"name": "Open"}},
        "heats": {"1": {"displayname": "Heat 1", "rounds": [{
            "id": 1,
            "nodes": [{"callsign": "A", "laps": [{"lap_time_formatted": "0:10.0", "deleted": false}]}],
            "leaderboard": {
                "meta": {"primary_leaderboard": "by_race_time", "start_behavior": 1},
                "by_race_time": [{"position": 1, "callsign": "A", "fastest_lap": "0:10.0", "total_time": "0:10.0"}]
            }
        }]}}
    }"#;

    fn host(json: &str) -> StaticHost {
        StaticHost::from_results_json(json)
            .unwrap()
            .with_event_name("Test Event")
    }

    #[test]
    fn test_single_pilot_scenario() {
        let table = try_assemble_last_race(&host(RESULTS), &ExportConfig::new()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.rows()[0], vec![Cell::text("Test Event")]);
        assert_eq!(table.rows()[1], vec![Cell::text("Open Heat 1 Round 1")]);
        assert_eq!(
            table.rows()[2],
            vec![
                Cell::text("Rank"),
                Cell::text("Pilot"),
                Cell::text("Lap 0"),
                Cell::text("Fastest"),
                Cell::text("Total"),
            ]
        );
        assert_eq!(
            table.rows()[3],
            vec![
                Cell::Integer(1),
                Cell::text("A"),
                Cell::text("0:10.0"),
                Cell::text("0:10.0"),
                Cell::text("0:10.0"),
            ]
        );
    }

    #[test]
    fn test_missing_results() {
        let host = StaticHost::empty();
        let err = try_assemble_last_race(&host, &ExportConfig::new()).unwrap_err();
        assert!(err.is_missing_results());
        assert!(assemble_last_race(&host, &ExportConfig::new()).is_none());
    }

    #[test]
    fn test_no_classes() {
        let host = StaticHost::new(Results::default());
        let err = try_assemble_last_race(&host, &ExportConfig::new()).unwrap_err();
        assert!(matches!(err, ExportError::NoClasses));
    }

    #[test]
    fn test_heat_without_rounds() {
        let host = host(
            r#"{"classes": {"1": {"name": "Open"}}, "heats": {"4": {"displayname": "Heat 4", "rounds": []}}}"#,
        );
        let err = try_assemble_last_race(&host, &ExportConfig::new()).unwrap_err();
        assert!(matches!(err, ExportError::NoRounds { heat_id: 4 }));
    }

    #[test]
    fn test_round_without_leaderboard_is_skipped() {
        let host = host(
            r#"{"classes": {"1": {"name": "Open"}},
                "heats": {"1": {"displayname": "Heat 1", "rounds": [{"id": 2, "nodes": []}]}}}"#,
        );
        let err = try_assemble_last_race(&host, &ExportConfig::new()).unwrap_err();
        assert!(matches!(err, ExportError::MissingLeaderboard { round_id: 2 }));
        assert!(assemble_last_race(&host, &ExportConfig::new()).is_none());
    }

    #[test]
    fn test_pilot_without_node_gets_dnf() {
        let host = host(
            r#"{"classes": {"1": {"name": "Open"}},
                "heats": {"1": {"displayname": "Heat 1", "rounds": [{
                    "id": 1,
                    "nodes": [{"callsign": "A", "laps": [
                        {"lap_time_formatted": "0:03.0"},
                        {"lap_time_formatted": "0:11.0"}
                    ]}],
                    "leaderboard": {
                        "meta": {"primary_leaderboard": "by_race_time"},
                        "by_race_time": [
                            {"position": 1, "callsign": "A", "fastest_lap": "0:11.0", "total_time": "0:14.0"},
                            {"position": null, "callsign": "Ghost", "fastest_lap": null, "total_time": null}
                        ]
                    }
                }]}}}"#,
        );
        let table = try_assemble_last_race(&host, &ExportConfig::new()).unwrap();

        let ghost = &table.data_rows()[1];
        assert_eq!(ghost[1], Cell::text("Ghost"));
        assert_eq!(&ghost[2..4], &[Cell::text(DNF), Cell::text(DNF)]);
        assert!(ghost[0].is_empty());
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_localized_labels() {
        let translations = Translations::new()
            .with("Round", "Lauf")
            .with("Lap", "Runde")
            .with("Pilot", "Pilot:in");
        let host = host(RESULTS).with_translations(translations);
        let table = try_assemble_last_race(&host, &ExportConfig::new()).unwrap();

        assert_eq!(table.subtitle(), Some(&Cell::text("Open Heat 1 Lauf 1")));
        let header = table.header().unwrap();
        assert_eq!(header[1], Cell::text("Pilot:in"));
        assert_eq!(header[2], Cell::text("Runde 0"));
    }

    #[test]
    fn test_lap_times_ignore_deleted() {
        let round: Round = serde_json::from_str(
            r#"{"id": 1, "nodes": [
                {"callsign": "A", "laps": [
                    {"lap_time_formatted": "0:01.0", "deleted": true},
                    {"lap_time_formatted": "0:02.0", "deleted": true}
                ]},
                {"callsign": "B", "laps": [{"lap_time_formatted": "0:05.0"}]}
            ]}"#,
        )
        .unwrap();
        let laps = LapTimes::from_round(&round);

        assert_eq!(laps.max_laps(), 1);
        assert!(laps.for_pilot("A").is_empty());
        assert_eq!(laps.for_pilot("B"), &["0:05.0".to_string()]);
        assert_eq!(laps.cells_for("A").collect::<Vec<_>>(), vec![Cell::text(DNF)]);
    }

    #[test]
    fn test_unassigned_node_laps_count_toward_columns() {
        let round: Round = serde_json::from_str(
            r#"{"id": 1, "nodes": [
                {"callsign": "A", "laps": [{"lap_time_formatted": "0:05.0"}]},
                {"callsign": null, "laps": [
                    {"lap_time_formatted": "0:04.0"},
                    {"lap_time_formatted": "0:19.0"}
                ]}
            ]}"#,
        )
        .unwrap();
        let laps = LapTimes::from_round(&round);

        assert_eq!(laps.max_laps(), 2);
        assert_eq!(
            laps.cells_for("A").collect::<Vec<_>>(),
            vec![Cell::text("0:05.0"), Cell::text(DNF)]
        );
    }
}
