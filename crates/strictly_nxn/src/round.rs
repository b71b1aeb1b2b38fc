//! A single round: one board from empty to win or tie.

use crate::rules::round_status;
use crate::{
    Board, BoardSize, ComputerPlayer, LineSet, Move, MoveError, Player, RoundResult, RoundStatus,
    Slot,
};
use rand::Rng;
use tracing::{info, instrument, warn};

/// One round in progress or finished.
///
/// Owns the board for the round's lifetime and tracks whose turn it is.
/// Lines are the shared set for the board size.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    lines: &'static LineSet,
    to_move: Player,
    history: Vec<Move>,
    status: RoundStatus,
}

impl Round {
    /// Starts a round on a fresh board.
    #[instrument]
    pub fn new(size: BoardSize, first_player: Player) -> Self {
        Self {
            board: Board::new(size),
            lines: LineSet::for_size(size),
            to_move: first_player,
            history: Vec::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the winning lines for this board.
    pub fn lines(&self) -> &'static LineSet {
        self.lines
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the result once the round is decided.
    pub fn result(&self) -> Option<RoundResult> {
        self.status.result()
    }

    /// Legal slots for the player to move.
    pub fn empty_slots(&self) -> Vec<Slot> {
        self.board.empty_slots()
    }

    /// Marks `slot` for the player to move and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the round is decided, or the
    /// board's placement error for a bad slot. A rejected move changes
    /// nothing.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, slot: Slot) -> Result<RoundStatus, MoveError> {
        if self.status.is_finished() {
            warn!("Move after round end");
            return Err(MoveError::GameOver);
        }

        if let Err(e) = self.board.place(slot, self.to_move) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }
        self.history.push(Move::new(self.to_move, slot));

        self.status = round_status(&self.board, self.lines);
        match self.status {
            RoundStatus::InProgress => self.to_move = self.to_move.opponent(),
            RoundStatus::Finished(result) => {
                info!(%result, moves = self.history.len(), "Round over")
            }
        }
        Ok(self.status)
    }

    /// Lets the computer pick and play its square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::WrongPlayer`] when it is the human's turn and
    /// [`MoveError::GameOver`] once the round is decided.
    pub fn play_computer<R: Rng>(
        &mut self,
        computer: &mut ComputerPlayer<R>,
    ) -> Result<Slot, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != Player::Computer {
            return Err(MoveError::WrongPlayer(Player::Computer));
        }
        let slot = computer.choose_move(&self.board, self.lines)?;
        self.play(slot)?;
        Ok(slot)
    }
}
