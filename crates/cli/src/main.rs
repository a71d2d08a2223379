//! Instruction-level parallelism model CLI.
//!
//! This binary evaluates a trace in one of two ways:
//! 1. **Critical path:** With only a trace given, prints the completion time on an
//!    unconstrained machine.
//! 2. **Scheduling:** With a fetch width and/or execution-unit count, prints the cycle
//!    count from the cycle-by-cycle simulation.
//!
//! Only the result integer goes to stdout. Logs and the optional statistics report go to
//! stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ilpsim_core::common::SimError;
use ilpsim_core::config::{Bound, Config, IssueModel};
use ilpsim_core::sim::{Simulator, loader};
use ilpsim_core::stats::SimStats;

#[derive(Parser, Debug)]
#[command(
    name = "ilpsim",
    author,
    version,
    about = "Instruction-level parallelism model: critical path and resource-constrained scheduling",
    long_about = "Reads a trace of `D=S1,S2:L` instructions and prints the number of cycles needed to complete it.\n\nWith no bounds the result is the critical path of the dependency graph. Supplying a fetch width and/or an execution-unit count runs the cycle scheduler instead. A bound of `unbounded`, `inf` or -1 means no limit.\n\nExamples:\n  ilpsim trace.txt\n  ilpsim trace.txt 4\n  ilpsim trace.txt 4 2\n  ilpsim trace.txt -1 2 --stats"
)]
struct Cli {
    /// Trace file, one `D=S1,S2:L` instruction per non-blank line.
    trace: PathBuf,

    /// Maximum instructions fetched but not yet dispatched.
    #[arg(allow_negative_numbers = true, value_parser = parse_fetch_width)]
    fetch_size: Option<Bound>,

    /// Maximum instructions executing at once.
    #[arg(allow_negative_numbers = true, value_parser = parse_execution_units)]
    num_execution_units: Option<Bound>,

    /// JSON machine configuration; positional bounds and --model override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scheduler issue model.
    #[arg(short, long, value_enum)]
    model: Option<ModelArg>,

    /// Print the statistics report to stderr.
    #[arg(long)]
    stats: bool,

    /// Write the statistics as JSON to this file.
    #[arg(long, value_name = "FILE")]
    stats_json: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelArg {
    /// Fetch into a bounded window, then dispatch to execution units.
    Windowed,
    /// Start ready instructions directly; fetch width caps starts per cycle.
    Direct,
}

impl From<ModelArg> for IssueModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Windowed => Self::Windowed,
            ModelArg::Direct => Self::Direct,
        }
    }
}

fn parse_fetch_width(s: &str) -> Result<Bound, String> {
    Bound::parse_for(s, "fetch_size").map_err(|e| e.to_string())
}

fn parse_execution_units(s: &str) -> Result<Bound, String> {
    Bound::parse_for(s, "num_execution_units").map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(cycles) => {
            println!("{cycles}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber. `-v` flags take precedence over `RUST_LOG`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves the configuration, evaluates the trace and emits any requested reports.
fn run(cli: &Cli) -> Result<u64, SimError> {
    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => Config::default(),
    };
    if let Some(bound) = cli.fetch_size {
        config.fetch_width = bound;
    }
    if let Some(bound) = cli.num_execution_units {
        config.execution_units = bound;
    }
    if let Some(model) = cli.model {
        config.model = model.into();
    }
    info!(
        trace = %cli.trace.display(),
        fetch_width = %config.fetch_width,
        execution_units = %config.execution_units,
        model = %config.model,
        "configuration resolved"
    );

    let mut sim = Simulator::from_file(&cli.trace, config)?;
    let stats = sim.run();

    if cli.stats {
        eprintln!("{stats}");
    }
    if let Some(path) = &cli.stats_json {
        write_stats_json(path, &stats)?;
    }
    Ok(stats.cycles)
}

fn write_stats_json(path: &Path, stats: &SimStats) -> Result<(), SimError> {
    let io_err = |source: std::io::Error| SimError::Io {
        path: path.to_path_buf(),
        source,
    };
    let json = serde_json::to_string_pretty(stats).map_err(|e| io_err(e.into()))?;
    fs::write(path, json + "\n").map_err(io_err)
}
