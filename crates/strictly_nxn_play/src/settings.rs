//! Player settings from a TOML file and command-line flags.
//!
//! Any setting left unset is asked for interactively at match start.

use crate::cli::Cli;
use anyhow::{Context, Result};
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;
use strictly_nxn::{BoardSize, DEFAULT_TARGET_WINS, Player};
use tracing::{debug, info, instrument};

/// Match settings before interactive choices are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Board size, or ask.
    board_size: Option<BoardSize>,
    /// First mover, or ask.
    first_player: Option<Player>,
    /// Round wins needed to take the match.
    target_wins: Option<u32>,
    /// Seed for the computer.
    seed: Option<u64>,
    /// Whether to clear the screen between turns.
    clear_screen: Option<bool>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        debug!("Loading settings from file");
        let path = path.as_ref();
        let shown = path.display();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {shown}"))?;

        let settings: Self = toml::from_str(&content).context("Invalid settings file")?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Applies command-line flags on top of file values.
    pub fn overridden_by(self, cli: &Cli) -> Self {
        Self {
            board_size: cli.size.or(self.board_size),
            first_player: cli.first.or(self.first_player),
            target_wins: cli.target.or(self.target_wins),
            seed: cli.seed.or(self.seed),
            clear_screen: cli.no_clear.then_some(false).or(self.clear_screen),
        }
    }

    /// Round wins needed, falling back to the standard target.
    pub fn target_or_default(&self) -> u32 {
        self.target_wins.unwrap_or(DEFAULT_TARGET_WINS)
    }

    /// Whether to clear the screen, on unless disabled.
    pub fn clears_screen(&self) -> bool {
        self.clear_screen.unwrap_or(true)
    }
}
