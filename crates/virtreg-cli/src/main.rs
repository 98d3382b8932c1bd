use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use virtreg_cli::{Args, run};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "starting");

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    run(&args, stdin.lock(), io::stdout().lock(), interactive)
}
