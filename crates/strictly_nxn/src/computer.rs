//! The computer opponent.

use crate::strategy::{self, Decision};
use crate::{Board, LineSet, MoveError, Player, Slot};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::instrument;

/// Heuristic player marking squares as [`Player::Computer`].
///
/// Owns its random source so a seeded player replays the same game.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R = StdRng> {
    rng: R,
}

impl ComputerPlayer<StdRng> {
    /// Creates a player seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a player with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, otherwise from the operating system.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for ComputerPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a player around any random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the computer's next square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::BoardFull`] when no empty square is left.
    #[instrument(skip_all)]
    pub fn choose_move(&mut self, board: &Board, lines: &LineSet) -> Result<Slot, MoveError> {
        strategy::choose_move(board, lines, Player::Computer, &mut self.rng)
    }

    /// Picks the next square and reports which rule chose it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::BoardFull`] when no empty square is left.
    pub fn explain(&mut self, board: &Board, lines: &LineSet) -> Result<Decision, MoveError> {
        strategy::decide(board, lines, Player::Computer, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, strategy::Rule};

    #[test]
    fn test_opening_move_is_center() {
        let mut ai = ComputerPlayer::seeded(7);
        let board = Board::new(BoardSize::Three);
        let lines = LineSet::for_size(BoardSize::Three);
        assert_eq!(ai.choose_move(&board, lines), Ok(Slot::new(5)));
    }

    #[test]
    fn test_explain_reports_rule() {
        let mut ai = ComputerPlayer::seeded(7);
        let mut board = Board::new(BoardSize::Three);
        board.place(Slot::new(5), Player::Human).unwrap();
        let lines = LineSet::for_size(BoardSize::Three);
        let decision = ai.explain(&board, lines).unwrap();
        assert_eq!(decision.rule, Rule::Random);
        assert!(board.is_empty(decision.slot));
    }

    #[test]
    fn test_injected_rng_drives_random_rule() {
        // Centre taken and no threats, so only the random rule can fire
        let mut board = Board::new(BoardSize::Five);
        board.place(Slot::new(13), Player::Human).unwrap();
        let lines = LineSet::for_size(BoardSize::Five);

        let mut ai = ComputerPlayer::with_rng(StdRng::seed_from_u64(31));
        let mut same = StdRng::seed_from_u64(31);
        for _ in 0..5 {
            let decision = ai.explain(&board, lines).unwrap();
            assert_eq!(decision.rule, Rule::Random);
            let expected = strategy::random_slot(&board, &mut same);
            assert_eq!(Some(decision.slot), expected);
        }
    }

    #[test]
    fn test_seeded_players_agree() {
        let mut board = Board::new(BoardSize::Nine);
        board.place(Slot::new(41), Player::Human).unwrap();
        let lines = LineSet::for_size(BoardSize::Nine);

        let mut a = ComputerPlayer::seeded(2024);
        let mut b = ComputerPlayer::from_seed(Some(2024));
        for _ in 0..10 {
            assert_eq!(a.choose_move(&board, lines), b.choose_move(&board, lines));
        }
    }
}
