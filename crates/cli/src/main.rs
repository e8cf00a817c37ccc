//! Memory hierarchy simulator CLI.
//!
//! This binary replays a trace of virtual addresses through a `MemorySystem`. It performs:
//! 1. **Setup:** Loads an optional JSON config and installs the tracing subscriber.
//! 2. **Replay:** Translates and reads each address, printing `vaddr -> paddr -> byte`.
//! 3. **Report:** Prints resolution statistics at the end.
//!
//! Rejected addresses are reported and counted; the replay continues.

mod trace;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use memsim_core::common::VirtAddr;
use memsim_core::config::{Config, ConfigError};
use memsim_core::stats::STATS_SECTIONS;
use memsim_core::MemorySystem;

use crate::trace::{TraceError, read_trace};

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    author,
    version,
    about = "Replay a virtual address trace through a TLB, page table and data cache",
    long_about = "Each line of TRACE is a virtual address (decimal or 0x hex). '-' reads stdin.\n\nExamples:\n  memsim trace.txt\n  memsim --config sim.json --trace --stats cache trace.txt"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every resolution event (same as `general.trace_events`).
    #[arg(long)]
    trace: bool,

    /// Statistics sections to print (summary, translation, cache). Default: all.
    #[arg(long = "stats", value_parser = clap::builder::PossibleValuesParser::new(STATS_SECTIONS.iter().copied()))]
    stats: Vec<String>,

    /// Trace file, or '-' for stdin.
    trace_file: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("[!] {e}");
        process::exit(1);
    }
}

/// Loads config and trace, then replays every address.
fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    init_tracing(cli.trace || config.general.trace_events);

    let addrs = if cli.trace_file == "-" {
        read_trace(io::stdin().lock())?
    } else {
        let file = File::open(&cli.trace_file).map_err(|source| CliError::Open {
            path: cli.trace_file.clone(),
            source,
        })?;
        read_trace(BufReader::new(file))?
    };
    tracing::info!(
        addresses = addrs.len(),
        first_frame = config.memory.first_frame,
        "replaying trace"
    );

    let mut system = MemorySystem::from_config(&config);
    for raw in addrs {
        match system.load(VirtAddr::new(raw)) {
            Ok(access) => println!("{} -> {} -> {:#04x}", access.vaddr, access.paddr, access.byte),
            Err(e) => println!("{raw:#x} -> error: {e}"),
        }
    }

    system.stats.print_sections(&cli.stats);
    Ok(())
}

/// Installs the global `fmt` subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(trace_events: bool) {
    let default = if trace_events { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
