//! `um` - run a Universal Machine boot image against stdin/stdout

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use um_runtime::{Machine, MachineConfig};
use um_spec::Program;

/// Universal Machine emulator
#[derive(Debug, Parser)]
#[command(name = "um", version, about)]
struct Args {
    /// Boot image: big-endian 32-bit words, no header
    program: PathBuf,

    /// Abort after this many instructions (debugging guard)
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let bytes = fs::read(&args.program)
        .with_context(|| format!("failed to read {}", args.program.display()))?;
    let program = Program::from_bytes(&bytes)
        .with_context(|| format!("invalid boot image {}", args.program.display()))?;

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let config = MachineConfig {
        max_steps: args.max_steps,
    };
    let result = Machine::with_config(program, stdin, stdout, config)
        .run()
        .context("machine aborted")?;

    tracing::debug!(steps = result.steps, "clean halt");
    Ok(())
}
