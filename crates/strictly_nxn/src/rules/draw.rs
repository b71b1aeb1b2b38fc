//! Tie detection.

use super::win::check_winner;
use crate::{Board, LineSet};
use tracing::instrument;

/// Checks if every square is marked.
#[instrument(skip_all)]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| s.owner().is_some())
}

/// A full board with no winner.
pub fn is_draw(board: &Board, lines: &LineSet) -> bool {
    is_full(board) && check_winner(board, lines).is_none()
}
