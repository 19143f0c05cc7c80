//! Round simulator CLI: plays practice rounds against a scripted recognizer
//! on a virtual clock and reports per-symbol accuracy.

mod metrics;
mod output;
mod simulator;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fingerspell::{EngineConfig, RoundSession, SymbolCatalog};
use metrics::SimulationSummary;
use output::OutputWriter;
use rand::Rng;
use simulator::{ScriptedRecognizer, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "round-simulator")]
#[command(about = "Virtual-time fingerspelling round simulator")]
struct Args {
    /// Number of rounds to play
    #[arg(short, long, default_value = "26")]
    rounds: u32,

    /// Probability that a reported label matches the target
    #[arg(long, default_value = "0.8")]
    accuracy: f64,

    /// Probability that the recognizer reports nothing for a round
    #[arg(long, default_value = "0.1")]
    dropout: f64,

    /// Seed for the scripted recognizer (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Countdown length in ticks
    #[arg(long, default_value = "3")]
    countdown: u32,

    /// Symbol to start on
    #[arg(long)]
    start_at: Option<String>,

    /// Write JSON Lines results to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "round_simulator=debug,fingerspell=debug"
    } else {
        "round_simulator=info,fingerspell=warn"
    };
    if args.json_logs {
        fingerspell::telemetry::init_tracing(filter);
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    for (name, value) in [("accuracy", args.accuracy), ("dropout", args.dropout)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("--{name} must be within [0, 1], got {value}").into());
        }
    }

    let config = EngineConfig::default().with_countdown(args.countdown);
    config.validate()?;

    let catalog = Arc::new(SymbolCatalog::standard());
    let mut session = RoundSession::new(catalog.clone(), config);
    if let Some(name) = args.start_at.as_deref() {
        if catalog.find(name).is_none() {
            warn!(name, "Start symbol not in catalog; starting at the first entry");
        }
        session = session.with_target(name);
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        rounds = args.rounds,
        accuracy = args.accuracy,
        dropout = args.dropout,
        seed,
        "Starting round simulator"
    );

    let recognizer = ScriptedRecognizer::new(seed, args.accuracy, args.dropout);
    let (records, session) = Simulator::new(session, recognizer).run(args.rounds);
    let summary = SimulationSummary::from_records(&records);

    info!(
        rounds = summary.rounds,
        correct = summary.correct,
        incorrect = summary.incorrect,
        inconclusive = summary.inconclusive,
        accuracy = %format!("{:.1}%", summary.accuracy() * 100.0),
        final_target = %session.target(),
        "Simulation complete"
    );

    if let Some(path) = args.output {
        let mut writer = OutputWriter::create(&path)?;
        for record in &records {
            writer.write_round(record)?;
        }
        let path = writer.path().to_path_buf();
        writer.finish(&summary, seed)?;
        info!("Results written to: {}", path.display());
    }

    Ok(())
}
