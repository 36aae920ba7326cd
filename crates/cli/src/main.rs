//! Virtual memory simulator CLI.
//!
//! This binary runs one address trace through the simulator. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON config file, then positional overrides.
//! 2. **Translation:** One output line per address: address, signed byte value, frame, frame content.
//! 3. **Summary:** Page fault and TLB statistics, as text or JSON.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use memsim_core::config::{Config, PageReplacementAlgorithm};
use memsim_core::memory::FileBackingStore;
use memsim_core::sim::{ReferenceTrace, Simulator};
use memsim_core::SimError;

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    author,
    version,
    about = "Virtual memory simulator with TLB and FIFO/LRU/OPT page replacement",
    long_about = "Translate every logical address in a reference file to a physical frame.\n\nWith only an input file, 256 frames and FIFO replacement are used.\n\nExamples:\n  memsim addresses.txt\n  memsim addresses.txt 10 LRU\n  memsim addresses.txt 5 OPT --backing-store BACKING_STORE.bin"
)]
struct Cli {
    /// Reference file: one decimal logical address per line.
    input: PathBuf,

    /// Number of physical frames (1-256).
    #[arg(requires = "policy")]
    frames: Option<usize>,

    /// Page replacement algorithm: FIFO, LRU or OPT.
    policy: Option<PageReplacementAlgorithm>,

    /// Backing store image (256 pages of 256 bytes).
    #[arg(long, value_name = "PATH")]
    backing_store: Option<PathBuf>,

    /// JSON configuration file; positional arguments override it.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Reject address lines that do not start with an integer.
    #[arg(long)]
    strict: bool,

    /// Print the summary as a JSON object.
    #[arg(long)]
    stats_json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Resolves the effective configuration from the command line.
fn build_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    if let (Some(frames), Some(policy)) = (cli.frames, cli.policy) {
        config.frames = frames;
        config.policy = policy;
    }
    if let Some(path) = &cli.backing_store {
        config.backing_store.clone_from(path);
    }
    config.strict |= cli.strict;
    config.validate()?;
    Ok(config)
}

/// Runs the whole simulation, writing records and the summary to `out`.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), SimError> {
    let config = build_config(cli)?;
    tracing::debug!(?config, "effective configuration");

    let trace = ReferenceTrace::from_path(&cli.input, config.strict)?;
    let store = FileBackingStore::open(&config.backing_store)?;
    let mut sim = Simulator::new(&config, trace, store)?;

    let stats = sim.run(out)?;
    if cli.stats_json {
        stats.write_json(out)?;
    } else {
        stats.write_summary(out)?;
    }
    out.flush()?;
    Ok(())
}
