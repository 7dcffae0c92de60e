//! Benchmarks for assembling and serializing the last race.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench assemble -- xlsx`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use last_race_exporter::output::{to_csv, write_xlsx};
use last_race_exporter::prelude::*;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_results_json(pilots: usize, laps: usize) -> String {
    let mut nodes = Vec::with_capacity(pilots);
    let mut entries = Vec::with_capacity(pilots);

    for p in 0..pilots {
        let lap_json: Vec<String> = (0..laps)
            .map(|l| {
                format!(
                    r#"{{"lap_time_formatted": "0:{:02}.{:03}", "deleted": {}}}"#,
                    20 + (p + l) % 30,
                    (p * 37 + l * 11) % 1000,
                    l % 7 == 6
                )
            })
            .collect();
        nodes.push(format!(
            r#"{{"callsign": "Pilot{}", "laps": [{}]}}"#,
            p,
            lap_json.join(",")
        ));
        entries.push(format!(
            r#"{{"position": {}, "callsign": "Pilot{}", "fastest_lap": "0:20.000", "total_time": "2:00.000", "total_time_laps": "1:55.000"}}"#,
            p + 1,
            p
        ));
    }

    format!(
        r#"{{"classes": {{"1": {{"name": "Open"}}}}, "heats": {{"1": {{"displayname": "Heat 1", "rounds": [{{
            "id": 1,
            "nodes": [{}],
            "leaderboard": {{
                "meta": {{"primary_leaderboard": "by_race_time", "start_behavior": 0}},
                "by_race_time": [{}]
            }}
        }}]}}}}}}"#,
        nodes.join(","),
        entries.join(",")
    )
}

fn host_for(pilots: usize, laps: usize) -> StaticHost {
    StaticHost::from_results_json(&generate_results_json(pilots, laps))
        .unwrap()
        .with_event_name("Bench Cup")
}

const SIZES: &[(usize, usize)] = &[(4, 5), (16, 20), (64, 100)];

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_results");

    for &(pilots, laps) in SIZES {
        let json = generate_results_json(pilots, laps);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("pilots_laps", format!("{pilots}x{laps}")),
            &json,
            |b, json| b.iter(|| Results::from_json(black_box(json)).unwrap()),
        );
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let config = ExportConfig::new();

    for &(pilots, laps) in SIZES {
        let host = host_for(pilots, laps);
        group.throughput(Throughput::Elements((pilots * laps) as u64));
        group.bench_with_input(
            BenchmarkId::new("pilots_laps", format!("{pilots}x{laps}")),
            &host,
            |b, host| b.iter(|| try_assemble_last_race(black_box(host), &config).unwrap()),
        );
    }

    group.finish();
}

fn bench_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv");
    let config = ExportConfig::new();

    for &(pilots, laps) in SIZES {
        let table = try_assemble_last_race(&host_for(pilots, laps), &config).unwrap();
        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("pilots_laps", format!("{pilots}x{laps}")),
            &table,
            |b, table| b.iter(|| to_csv(black_box(table), &config).unwrap()),
        );
    }

    group.finish();
}

fn bench_xlsx(c: &mut Criterion) {
    let mut group = c.benchmark_group("xlsx");
    group.sample_size(20);
    let config = ExportConfig::new();

    for &(pilots, laps) in SIZES {
        let table = try_assemble_last_race(&host_for(pilots, laps), &config).unwrap();
        group.throughput(Throughput::Elements(table.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("pilots_laps", format!("{pilots}x{laps}")),
            &table,
            |b, table| b.iter(|| write_xlsx(black_box(table), &config).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_results, bench_assemble, bench_csv, bench_xlsx);
criterion_main!(benches);
