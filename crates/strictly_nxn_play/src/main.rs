//! Strictly NxN - terminal front end
//!
//! Plays first-to-three matches of N×N tic-tac-toe against the computer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod controller;
mod display;
mod settings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::Console;
use settings::Settings;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    let env_filter = EnvFilter::try_from_default_env();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter.unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "Parsed command line");

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    }
    .overridden_by(&cli);

    info!(?settings, "Starting strictly_nxn");

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), settings.clears_screen());
    controller::run(&mut console, &settings)
}
