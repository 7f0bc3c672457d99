//! Writes tables of partition numbers, Stirling numbers and factorials.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bitnum::combinatorics::write_table;
use bitnum::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Table generator CLI: writes `m x m` recurrence tables as text files.
#[derive(Debug, Parser)]
#[command(
    name = "bitnum-tables",
    about = "Write partition, Stirling and factorial tables computed with bit-vector integers",
    version
)]
struct Args {
    /// Size m of the m x m tables; prompted for on stdin when omitted
    #[arg(short = 'm', long)]
    size: Option<usize>,

    /// Directory the table files are written to
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Skip the introductory banner
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Shows that `BigInt` keeps going where `i32` stops.
fn print_banner() {
    let max = BigInt::from(i32::MAX);
    let mut next = max.clone();
    next.increment();
    println!("Fun fact: the largest number an i32 can hold is {max}");
    println!("Let's add one to that number:                   {next}");
}

fn prompt_size() -> Result<usize> {
    print!("Please input the size (m x m) of your table: ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read table size")?;
    let line = line.trim();
    if line.is_empty() {
        bail!("no table size given");
    }
    line.parse()
        .with_context(|| format!("invalid table size {line:?}"))
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if !args.quiet {
        print_banner();
    }

    let size = match args.size {
        Some(size) => size,
        None => prompt_size()?,
    };

    for kind in TableKind::ALL {
        let _span = tracing::info_span!("table", file = kind.file_name()).entered();
        tracing::info!(%kind, size, "creating table");

        let path = write_table(&args.out_dir, kind, size)
            .with_context(|| format!("failed to write table of {kind}"))?;
        tracing::info!(path = %path.display(), "done");
    }

    Ok(())
}
