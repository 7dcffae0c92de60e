//! # last-race-exporter CLI
//!
//! Command-line interface for the last-race-exporter library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use log::info;

use last_race_exporter::assembler::try_assemble_last_race;
use last_race_exporter::cli::Args;
use last_race_exporter::exporter::{EventManager, ExporterRegistry, initialize};
use last_race_exporter::format::ExportFormat;
use last_race_exporter::host::{StaticHost, Translations};
use last_race_exporter::ExportError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ExportError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let format: ExportFormat = match args.format {
        Some(format) => format.into(),
        None => ExportFormat::from_path(&args.output)?,
    };
    let output_path = adjust_output_extension(&args.output, format);

    println!("🏁 last-race-exporter v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    if let Some(view) = &args.primary_leaderboard {
        println!("🏆 View:    {}", view);
    }
    println!();

    let mut host = StaticHost::from_results_file(&args.input)?;
    if let Some(name) = &args.event_name {
        host = host.with_event_name(name.clone());
    }
    if let Some(path) = &args.translations {
        let translations = Translations::from_file(path)?;
        info!("Loaded {} translations from {}", translations.len(), path);
        host = host.with_translations(translations);
    }

    let mut events = EventManager::new();
    initialize(&mut events);
    let registry = ExporterRegistry::initialize(&events);
    let exporter = registry.find(format).ok_or_else(|| {
        ExportError::invalid_format(format!("No exporter registered for {}", format))
    })?;

    println!("⏳ {}...", exporter.name);
    let config = args.export_config();
    let table = try_assemble_last_race(&host, &config)?;
    println!(
        "   {} pilots, {} columns",
        table.data_rows().len(),
        table.header().map_or(0, Vec::len)
    );
    let payload = (exporter.formatter)(&table, &config)?;

    payload.save(&output_path)?;

    println!("✅ Done! {} bytes saved to {}", payload.len(), output_path);
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: ExportFormat) -> String {
    if output != "last_race.csv" {
        return output.to_string();
    }
    format!("last_race.{}", format.extension())
}
