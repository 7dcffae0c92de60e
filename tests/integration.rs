//! Integration tests for assembling the last race from host results.

use last_race_exporter::prelude::*;

/// Results with two classes, two heats, and a three-pilot final round.
const MULTI_HEAT: &str = r#"{
  "classes": {
    "1": {"name": "Open"},
    "2": {"name": "Pro"}
  },
  "heats": {
    "1": {"displayname": "Heat 1", "rounds": [
      {"id": 1, "nodes": [], "leaderboard": {
        "meta": {"primary_leaderboard": "by_race_time", "start_behavior": 0},
        "by_race_time": [{"position": 1, "callsign": "Old", "fastest_lap": "0:30.000", "total_time": "1:30.000"}]
      }}
    ]},
    "2": {"displayname": "Final", "rounds": [
      {"id": 1, "nodes": [], "leaderboard": {
        "meta": {"primary_leaderboard": "by_race_time", "start_behavior": 0},
        "by_race_time": []
      }},
      {"id": 2,
       "nodes": [
         {"callsign": "Ace", "laps": [
           {"lap_time_formatted": "0:04.100", "deleted": false},
           {"lap_time_formatted": "0:21.300", "deleted": false},
           {"lap_time_formatted": "0:01.200", "deleted": true},
           {"lap_time_formatted": "0:20.800", "deleted": false}
         ]},
         {"callsign": "Bolt", "laps": [
           {"lap_time_formatted": "0:05.000", "deleted": false},
           {"lap_time_formatted": "0:24.900", "deleted": false}
         ]},
         {"callsign": null, "laps": []}
       ],
       "leaderboard": {
         "meta": {"primary_leaderboard": "by_race_time", "start_behavior": 2},
         "by_race_time": [
           {"position": 1, "callsign": "Ace", "fastest_lap": "0:20.800", "total_time": "0:46.200", "total_time_laps": "0:42.100"},
           {"position": 2, "callsign": "Bolt", "fastest_lap": "0:24.900", "total_time": "0:29.900", "total_time_laps": "0:24.900"},
           {"position": 3, "callsign": "Comet", "fastest_lap": null, "total_time": "0:00.000", "total_time_laps": "0:00.000"}
         ],
         "by_fastest_lap": [
           {"position": 1, "callsign": "Ace", "fastest_lap": "0:20.800", "total_time": "0:46.200", "total_time_laps": "0:42.100"},
           {"position": 2, "callsign": "Bolt", "fastest_lap": "0:24.900", "total_time": "0:29.900", "total_time_laps": "0:24.900"}
         ]
       }}
    ]}
  }
}"#;

fn host() -> StaticHost {
    StaticHost::from_results_json(MULTI_HEAT)
        .unwrap()
        .with_event_name("Spring Cup")
}

fn text(s: &str) -> Cell {
    Cell::text(s)
}

#[test]
fn test_selects_last_class_heat_and_round() {
    let table = try_assemble_last_race(&host(), &ExportConfig::new()).unwrap();

    assert_eq!(table.title(), Some(&text("Spring Cup")));
    assert_eq!(table.subtitle(), Some(&text("Pro Final Round 2")));
}

#[test]
fn test_lap_columns_and_dnf_padding() {
    let table = try_assemble_last_race(&host(), &ExportConfig::new()).unwrap();

    assert_eq!(
        table.header().unwrap(),
        &vec![
            text("Rank"),
            text("Pilot"),
            text("Lap 0"),
            text("Lap 1"),
            text("Lap 2"),
            text("Fastest"),
            text("Laps Total"),
        ]
    );

    let rows = table.data_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        vec![
            Cell::Integer(1),
            text("Ace"),
            text("0:04.100"),
            text("0:21.300"),
            text("0:20.800"),
            text("0:20.800"),
            text("0:42.100"),
        ]
    );
    assert_eq!(&rows[1][2..5], &[text("0:05.000"), text("0:24.900"), text(DNF)]);
    // Comet is ranked but has no node in this round
    assert_eq!(&rows[2][2..5], &[text(DNF), text(DNF), text(DNF)]);
    assert!(rows[2][5].is_empty());
    assert!(table.is_rectangular());
}

#[test]
fn test_deleted_laps_never_exported() {
    let table = try_assemble_last_race(&host(), &ExportConfig::new()).unwrap();

    let mut all_cells = table.rows().iter().flatten();
    assert!(all_cells.all(|c| c != &text("0:01.200")));
}

#[test]
fn test_primary_leaderboard_override() {
    let config = ExportConfig::new().with_primary_leaderboard("by_fastest_lap");
    let table = try_assemble_last_race(&host(), &config).unwrap();

    let pilots: Vec<_> = table.data_rows().iter().map(|r| r[1].clone()).collect();
    assert_eq!(pilots, vec![text("Ace"), text("Bolt")]);
}

#[test]
fn test_selection_ignores_other_ids() {
    // Renumbering an earlier heat must not change which round is selected.
    let renumbered = MULTI_HEAT.replacen(r#""1": {"displayname": "Heat 1""#, r#""0": {"displayname": "Heat 1""#, 1);
    let host = StaticHost::from_results_json(&renumbered).unwrap();
    let table = try_assemble_last_race(&host, &ExportConfig::new()).unwrap();

    assert_eq!(table.subtitle(), Some(&text("Pro Final Round 2")));
}

#[test]
fn test_numeric_not_lexicographic_max() {
    let json = r#"{
        "classes": {"9": {"name": "Nine"}, "10": {"name": "Ten"}},
        "heats": {
            "9": {"displayname": "Heat 9", "rounds": [{"id": 1, "nodes": [], "leaderboard": {
                "meta": {"primary_leaderboard": "by_race_time"}, "by_race_time": []}}]},
            "10": {"displayname": "Heat 10", "rounds": [{"id": 4, "nodes": [], "leaderboard": {
                "meta": {"primary_leaderboard": "by_race_time"}, "by_race_time": []}}]}
        }
    }"#;
    let host = StaticHost::from_results_json(json).unwrap();
    let table = try_assemble_last_race(&host, &ExportConfig::new()).unwrap();

    assert_eq!(table.subtitle(), Some(&text("Ten Heat 10 Round 4")));
    // No pilots: header only, no lap columns
    assert_eq!(table.header().map(Vec::len), Some(4));
    assert!(table.data_rows().is_empty());
}

#[test]
fn test_missing_results_yields_nothing() {
    assert!(assemble_last_race(&StaticHost::empty(), &ExportConfig::new()).is_none());
}

#[test]
fn test_registry_exports_both_formats() {
    let mut events = EventManager::new();
    initialize(&mut events);
    let registry = ExporterRegistry::initialize(&events);
    let host = host();

    for format in ExportFormat::all() {
        let exporter = registry.find(*format).unwrap();
        let payload = exporter
            .export(&host, &ExportConfig::new())
            .unwrap()
            .unwrap();

        assert_eq!(payload.extension, format.extension());
        assert_eq!(payload.mime_type, format.mime_type());
        assert!(!payload.is_empty());
    }
}

#[test]
fn test_results_round_trip_through_serde() {
    let results = Results::from_json(MULTI_HEAT).unwrap();
    let json = serde_json::to_string(&results).unwrap();
    let reparsed = Results::from_json(&json).unwrap();

    assert_eq!(results, reparsed);
}

#[test]
fn test_null_class_name_and_unassigned_pilot() {
    let json = r#"{
        "classes": {"1": {"name": null}},
        "heats": {"1": {"displayname": "Heat 1", "rounds": [{
            "id": 1,
            "nodes": [{"callsign": "Ace", "laps": [{"lap_time_formatted": "0:05.000"}]}],
            "leaderboard": {
                "meta": {"primary_leaderboard": "by_race_time"},
                "by_race_time": [
                    {"position": 1, "callsign": "Ace", "fastest_lap": null, "total_time": "0:05.000"},
                    {"position": 2, "callsign": null, "fastest_lap": null, "total_time": null}
                ]
            }
        }]}}
    }"#;
    let host = StaticHost::from_results_json(json).unwrap();
    let table = try_assemble_last_race(&host, &ExportConfig::new()).unwrap();

    assert_eq!(table.subtitle(), Some(&text(" Heat 1 Round 1")));
    let unassigned = &table.data_rows()[1];
    assert_eq!(unassigned[1], text(""));
    assert_eq!(unassigned[2], text(DNF));
}
