//! Error types for board configuration and move validation.

use crate::{Player, Slot};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The slot is not on the board.
    #[display("Square {} is out of range (must be 1-{})", slot, max)]
    OutOfRange {
        /// The rejected slot.
        slot: Slot,
        /// Highest valid slot for the board.
        max: usize,
    },

    /// The square at the slot is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Slot),

    /// No empty square is left to play.
    #[display("Board is full")]
    BoardFull,

    /// The round has already been decided.
    #[display("Round is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}

/// What went wrong while building a board or match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Board dimension outside the supported set.
    #[display("unsupported board size {} (expected 3, 5 or 9)", _0)]
    UnsupportedBoardSize(usize),

    /// Board size text that is not a number.
    #[display("board size {:?} is not a number", _0)]
    Unparseable(String),

    /// A match that can never be won.
    #[display("target wins must be at least 1")]
    ZeroTarget,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What was rejected.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns what was rejected.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
