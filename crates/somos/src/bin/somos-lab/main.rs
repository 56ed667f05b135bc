//! `somos-lab`: print Somos terms, Hankel ranks and non-singular minors.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Terms { from, to } => commands::terms::run(cli.dual, from, to),
        Commands::Rank { size, kind } => commands::rank::run(cli.dual, size, kind),
        Commands::Minors {
            size,
            kind,
            minor_size,
            max_attempts,
            seed,
        } => commands::minors::run(cli.dual, size, kind, minor_size, max_attempts, seed),
    }
}
