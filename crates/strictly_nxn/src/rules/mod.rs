//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions evaluating a board against its winning lines. Rules are
//! kept apart from board storage so the round controller and the computer
//! heuristic share one definition of "won" and "full".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use crate::{Board, LineSet, RoundResult, RoundStatus};
use tracing::instrument;

/// Decides whether the round is won, tied or still going.
#[instrument(skip_all, fields(size = %board.size()))]
pub fn round_status(board: &Board, lines: &LineSet) -> RoundStatus {
    if let Some(winner) = check_winner(board, lines) {
        RoundStatus::Finished(RoundResult::Winner(winner))
    } else if is_full(board) {
        RoundStatus::Finished(RoundResult::Tie)
    } else {
        RoundStatus::InProgress
    }
}
