//! textprof - POS-tag feature profiling CLI
//!
//! Computes deterministic numeric feature vectors from tagged text and
//! drives the external parser pipeline for batch CoNLL-U conversion.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use textprof::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence; --log-level is the fallback.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
