//! # LKAS Control Unit: replay host
//!
//! Loads a controller configuration, replays a JSON-lines trace of
//! recorded cycles through the command sequencer and writes the ordered
//! outbound messages of every cycle as JSON lines.
//!
//! Logs go to stderr so stdout can carry the output stream.

use clap::Parser;
use lkas_common::config::{ConfigError, LogLevel};
use lkas_control_unit::config::{LoadedConfig, load_config};
use lkas_control_unit::replay::ReplaySession;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// LKAS Control Unit: steering and cruise-button sequencer replay
#[derive(Parser, Debug)]
#[command(name = "lkas_control_unit")]
#[command(version)]
#[command(about = "Replay recorded control cycles through the LKAS command sequencer")]
struct Args {
    /// Path to the controller configuration TOML.
    #[arg(default_value = "config/lkas.toml")]
    config: PathBuf,

    /// JSON-lines input trace (default: stdin).
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON-lines output file (default: stdout).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    let loaded = load_config(&args.config);
    let configured_level = loaded
        .as_ref()
        .map(|l| l.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, configured_level);

    info!("LKAS Control Unit v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = loaded
        .map_err(|e| config_error(&args, e))
        .and_then(|loaded| run(&args, loaded));
    if let Err(e) = result {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("LKAS Control Unit shutdown complete");
}

fn config_error(args: &Args, e: ConfigError) -> Box<dyn std::error::Error> {
    format!("config {}: {e}", args.config.display()).into()
}

fn run(args: &Args, loaded: LoadedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let torque = &loaded.params.torque;
    info!(
        "Config OK: service={}, max_torque={}, rate={}/cycle",
        loaded.shared.service_name, torque.max_torque, torque.max_rate_per_cycle,
    );

    let mut session = ReplaySession::new(loaded.sequencer);

    let stats = match (&args.input, &args.output) {
        (Some(input), Some(output)) => session.run(
            BufReader::new(File::open(input)?),
            BufWriter::new(File::create(output)?),
        )?,
        (Some(input), None) => session.run(BufReader::new(File::open(input)?), io::stdout().lock())?,
        (None, Some(output)) => session.run(io::stdin().lock(), BufWriter::new(File::create(output)?))?,
        (None, None) => session.run(io::stdin().lock(), io::stdout().lock())?,
    };

    info!(
        "Replayed {} cycles ({:?} of drive): steering={}, cancel={}, resume={}, alert={}, cancel_held={}, override={}, peak_torque={}",
        stats.cycles,
        stats.simulated_duration(),
        stats.steering,
        stats.cancels,
        stats.resumes,
        stats.alerts,
        stats.cancels_held,
        stats.override_cycles,
        stats.peak_abs_torque,
    );

    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and the configured level.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(args.verbose, configured, rust_log.as_deref());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}

/// `--verbose` wins, then a non-empty `RUST_LOG`, then the configured level.
fn log_filter(verbose: bool, configured: LogLevel, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(Level::DEBUG.as_str());
    }
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(Level::from(configured).as_str())),
        None => EnvFilter::new(Level::from(configured).as_str()),
    }
}
