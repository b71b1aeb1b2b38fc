//! Command-line interface for strictly_nxn.

use clap::Parser;
use std::path::PathBuf;
use strictly_nxn::{BoardSize, Player};

/// Strictly NxN - tic-tac-toe on 3x3, 5x5 and 9x9 boards
#[derive(Parser, Debug)]
#[command(name = "strictly_nxn")]
#[command(about = "Play N×N tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size: 3, 5 or 9. Asked for at match start when omitted.
    #[arg(short, long)]
    pub size: Option<BoardSize>,

    /// Who moves first: human or computer. Asked for when omitted.
    #[arg(short, long)]
    pub first: Option<Player>,

    /// Round wins needed to take the match
    #[arg(short, long)]
    pub target: Option<u32>,

    /// Seed for the computer's random fallback moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file with default settings (flags take precedence)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep previous turns on screen instead of clearing it
    #[arg(long)]
    pub no_clear: bool,
}
