//! Round outcomes.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no completed line.
    Tie,
}

impl RoundResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundResult::Winner(player) => Some(*player),
            RoundResult::Tie => None,
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Winner(player) => write!(f, "{} won", player),
            RoundResult::Tie => write!(f, "Tie"),
        }
    }
}

/// State of a round after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// The round is decided.
    Finished(RoundResult),
}

impl RoundStatus {
    /// Returns the result once the round is decided.
    pub fn result(&self) -> Option<RoundResult> {
        match self {
            RoundStatus::InProgress => None,
            RoundStatus::Finished(result) => Some(*result),
        }
    }

    /// Returns true once the round is decided.
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundStatus::Finished(_))
    }
}
