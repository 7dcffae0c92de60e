//! Synthetic results generator for exercising last-race-exporter.
//!
//! Usage: cargo run --features gen-results --bin gen_results -- [pilots] [laps] [output] [heats]
//! Example: cargo run --features gen-results --bin gen_results -- 8 5 results.json 3

use std::collections::BTreeMap;
use std::env;
use std::fs;

use rand::Rng;
use rand::seq::SliceRandom;

use last_race_exporter::results::{
    Heat, Lap, Leaderboard, LeaderboardEntry, LeaderboardMeta, Node, RaceClass, Results, Round,
    STAGGERED_START,
};
use last_race_exporter::table::Cell;

const CALLSIGNS: &[&str] = &[
    "Ace", "Bolt", "Comet", "Drift", "Echo", "Flux", "Ghost", "Hawk", "Ion", "Jinx", "Karma",
    "Loop", "Mako", "Nova", "Orbit", "Pixel",
];

const CLASSES: &[&str] = &["Open", "Spec", "Whoop", "Pro"];

fn main() {
    let args: Vec<String> = env::args().collect();

    let pilots: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);
    let laps: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(4);
    let output = args.get(3).map(|s| s.as_str()).unwrap_or("results.json");
    let heats: u64 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(2);

    println!("🧪 Results Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Pilots:   {}", pilots);
    println!("   Laps:     {}", laps);
    println!("   Heats:    {}", heats);
    println!("   Output:   {}", output);
    println!();

    let mut rng = rand::thread_rng();
    let results = generate_results(&mut rng, pilots.min(CALLSIGNS.len()), laps, heats.max(1));

    let json = serde_json::to_string_pretty(&results).expect("Failed to serialize results");
    fs::write(output, &json).expect("Failed to write output file");

    println!("✅ Done!");
    println!("   Size: {:.2} KB", json.len() as f64 / 1000.0);
}

fn generate_results(rng: &mut impl Rng, pilots: usize, laps: usize, heats: u64) -> Results {
    let mut classes = BTreeMap::new();
    for (i, name) in CLASSES.iter().enumerate().take(rng.gen_range(1..=CLASSES.len())) {
        classes.insert(i as u64 + 1, RaceClass {
            name: (*name).to_string(),
        });
    }

    let mut heat_map = BTreeMap::new();
    for heat_id in 1..=heats {
        let rounds = (1..=rng.gen_range(1..=3))
            .map(|round_id| generate_round(rng, round_id, pilots, laps))
            .collect();
        heat_map.insert(heat_id, Heat {
            displayname: format!("Heat {}", heat_id),
            rounds,
        });
    }

    Results {
        classes,
        heats: heat_map,
    }
}

fn generate_round(rng: &mut impl Rng, id: u64, pilots: usize, laps: usize) -> Round {
    let mut callsigns: Vec<&str> = CALLSIGNS.to_vec();
    callsigns.shuffle(rng);
    callsigns.truncate(pilots);

    let mut nodes = Vec::with_capacity(pilots);
    // (callsign, valid laps, total ms, fastest ms, holeshot ms)
    let mut standings = Vec::with_capacity(pilots);

    for callsign in &callsigns {
        // Some pilots crash out early
        let completed = if rng.gen_bool(0.2) {
            rng.gen_range(0..=laps)
        } else {
            laps
        };

        let mut node_laps = Vec::new();
        let mut valid_times = Vec::new();
        for lap in 0..=completed {
            let ms = if lap == 0 {
                rng.gen_range(2_000..6_000)
            } else {
                rng.gen_range(18_000..35_000)
            };
            // Occasionally a false pass that the race director deleted
            if lap > 0 && rng.gen_bool(0.1) {
                node_laps.push(Lap::new(format_ms(rng.gen_range(500..3_000))).deleted());
            }
            node_laps.push(Lap::new(format_ms(ms)));
            valid_times.push(ms);
        }

        let total: u64 = valid_times.iter().sum();
        let holeshot = valid_times.first().copied().unwrap_or(0);
        let fastest = valid_times.iter().skip(1).min().copied();
        standings.push((*callsign, valid_times.len(), total, fastest, holeshot));

        nodes.push(Node {
            callsign: Some((*callsign).to_string()),
            laps: node_laps,
        });
    }

    // Empty receiver seat
    if rng.gen_bool(0.3) {
        nodes.push(Node::default());
    }

    standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let by_race_time = standings
        .iter()
        .enumerate()
        .map(|(i, (callsign, _, total, fastest, holeshot))| LeaderboardEntry {
            position: Cell::Integer(i as i64 + 1),
            callsign: (*callsign).to_string(),
            fastest_lap: fastest.map_or(Cell::Empty, |ms| Cell::text(format_ms(ms))),
            total_time: Cell::text(format_ms(*total)),
            total_time_laps: Cell::text(format_ms(total - holeshot)),
        })
        .collect();

    let mut views = BTreeMap::new();
    views.insert("by_race_time".to_string(), by_race_time);

    let start_behavior = if rng.gen_bool(0.5) { STAGGERED_START } else { 0 };

    Round {
        id,
        nodes,
        leaderboard: Some(Leaderboard {
            meta: LeaderboardMeta {
                primary_leaderboard: "by_race_time".to_string(),
                start_behavior,
            },
            views,
        }),
    }
}

fn format_ms(ms: u64) -> String {
    format!("{}:{:02}.{:03}", ms / 60_000, (ms / 1000) % 60, ms % 1000)
}
