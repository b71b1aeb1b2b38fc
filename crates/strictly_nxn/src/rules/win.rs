//! Win detection.

use crate::{Board, Line, LineSet, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first fully owned line in generation order.
/// Under alternating play two players can never both own a line.
#[instrument(skip_all)]
pub fn check_winner(board: &Board, lines: &LineSet) -> Option<Player> {
    winning_line(board, lines).and_then(|l| l.owner(board))
}

/// Returns the first fully owned line, for highlighting.
pub fn winning_line<'a>(board: &Board, lines: &'a LineSet) -> Option<&'a Line> {
    debug_assert_eq!(board.size(), lines.size(), "lines built for another size");
    lines.iter().find(|line| line.owner(board).is_some())
}
