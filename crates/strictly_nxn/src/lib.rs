//! Strictly NxN - rules and strategy for N×N tic-tac-toe.
//!
//! Boards come in three sizes, each with its own winning run length:
//!
//! | Board | Run to win |
//! |-------|------------|
//! | 3x3   | 3          |
//! | 5x5   | 4          |
//! | 9x9   | 5          |
//!
//! # Architecture
//!
//! - **Board**: grid of [`Square`]s addressed by 1-based [`Slot`] numbers
//! - **Lines**: every winning window, generated once per [`BoardSize`]
//! - **Rules**: win and tie detection over a board and its lines
//! - **Strategy**: the computer's ordered rule list (win, block, centre, random)
//! - **Round / Match**: turn order, history and first-to-N scoring
//!
//! The crate performs no I/O; front ends drive it through [`Round`] and
//! [`Match`].
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{BoardSize, ComputerPlayer, Player, Round, Slot};
//!
//! let mut round = Round::new(BoardSize::Five, Player::Human);
//! round.play(Slot::new(1)).unwrap();
//!
//! let mut computer = ComputerPlayer::seeded(42);
//! let reply = round.play_computer(&mut computer).unwrap();
//! assert_eq!(reply, Slot::new(13));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod computer;
mod error;
mod lines;
mod match_play;
mod outcome;
mod round;
mod slot;
mod types;

pub mod rules;
pub mod strategy;

// Crate-level exports - Domain types
pub use action::Move;
pub use outcome::{RoundResult, RoundStatus};
pub use slot::{Coordinate, Slot};
pub use types::{Board, BoardSize, Player, Square};

// Crate-level exports - Errors
pub use error::{ConfigError, ConfigErrorKind, MoveError};

// Crate-level exports - Lines and rules
pub use lines::{Line, LineFamily, LineSet, generate_lines};
pub use rules::{check_winner, is_full, round_status, winning_line};

// Crate-level exports - Computer player
pub use computer::ComputerPlayer;
pub use strategy::{Decision, Rule};

// Crate-level exports - Round and match control
pub use match_play::{DEFAULT_TARGET_WINS, Match, MatchConfig, MatchScore};
pub use round::Round;
