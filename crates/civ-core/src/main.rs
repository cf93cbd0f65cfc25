//! Evolvera Simulation
//!
//! Runs a seeded civilization simulation, printing a turn table and writing
//! the turn log, chronicle, and final snapshot to the output directory.

use clap::Parser;
use std::path::PathBuf;

use evolvera::config::{default_config_toml, SimConfig};
use evolvera::error::Result;
use evolvera::output::{
    format_chronicle, format_turn_line, write_snapshot, EventLogger, TurnLogWriter,
};
use evolvera::{AgeTriggerMode, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "evolvera_sim")]
#[command(about = "A seeded civilization progression simulation")]
struct Args {
    /// Number of turns to simulate; values below 1 run a single turn
    #[arg(long, allow_negative_numbers = true)]
    turns: Option<i64>,

    /// Random seed for reproducibility; negative seeds are accepted
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for run.csv, events.jsonl, and the snapshot
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Age trigger mode
    #[arg(long, value_parser = parse_mode)]
    mode: Option<AgeTriggerMode>,

    /// Write the default configuration to this path and exit
    #[arg(long)]
    write_default_config: Option<PathBuf>,
}

fn parse_mode(s: &str) -> std::result::Result<AgeTriggerMode, String> {
    match s {
        "legacy" => Ok(AgeTriggerMode::Legacy),
        "single" => Ok(AgeTriggerMode::Single),
        other => Err(format!("unknown mode '{}', expected legacy or single", other)),
    }
}

/// Layers command line values over the loaded config.
fn apply_overrides(config: &mut SimConfig, args: Args) {
    if let Some(turns) = args.turns {
        config.run.turns = u32::try_from(turns.max(1)).unwrap_or(u32::MAX);
    }
    if let Some(seed) = args.seed {
        // Two's complement keeps every negative seed distinct
        config.run.seed = seed as u64;
    }
    if let Some(dir) = args.output_dir {
        config.output.dir = dir;
    }
    if let Some(mode) = args.mode {
        config.ages.mode = mode;
    }
    config.run.turns = config.run.turns.max(1);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("evolvera=warn")),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        std::fs::write(path, default_config_toml()).map_err(evolvera::ConfigError::Io)?;
        println!("Wrote default config -> {}", path.display());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    apply_overrides(&mut config, args);

    tracing::info!(
        turns = config.run.turns,
        seed = config.run.seed,
        "Starting simulation"
    );
    println!(
        "== Evolvera Sim (turns={}, seed={}) ==",
        config.run.turns, config.run.seed
    );

    let mut csv = TurnLogWriter::create(config.output.csv_path())?;
    let mut logger = EventLogger::new(config.output.events_path())?;
    let output = config.output.clone();
    let turns = config.run.turns;

    let mut sim = Simulation::new(config);
    for _ in 0..turns {
        let outcome = sim.step();

        for event in &outcome.chronicle {
            println!("{}", format_chronicle(event));
        }
        logger.log_batch(&outcome.chronicle)?;
        csv.write_record(&outcome.record)?;
        println!("{}", format_turn_line(&outcome.record));
    }

    csv.flush()?;
    logger.flush()?;

    let snapshot_path = output.snapshot_path();
    write_snapshot(sim.civilization(), &snapshot_path)?;
    println!("Saved -> {}", snapshot_path.display());

    let civ = sim.civilization();
    tracing::info!(
        ages = civ.age_history.len(),
        capabilities = civ.capabilities.len(),
        events_logged = logger.event_count(),
        "Simulation complete"
    );

    Ok(())
}
