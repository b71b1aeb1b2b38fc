//! Computer move selection.
//!
//! The computer plays a one-ply heuristic expressed as an ordered list of
//! rules. Each rule looks at the board and either proposes a slot or
//! passes; the first proposal wins:
//!
//! 1. [`Rule::WinNow`] completes one of our own lines.
//! 2. [`Rule::Block`] fills the gap in an opponent line one short of a win.
//! 3. [`Rule::Center`] takes the centre square.
//! 4. [`Rule::Random`] picks uniformly among empty squares.
//!
//! Only the last rule consumes randomness, so the first three are fully
//! deterministic for a given board.

use crate::{Board, LineSet, MoveError, Player, Slot};
use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One step of the computer's priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Rule {
    /// Complete a line we already hold all but one square of.
    #[display("win")]
    WinNow,
    /// Take the missing square of an opponent's near-complete line.
    #[display("block")]
    Block,
    /// Take the centre square.
    #[display("center")]
    Center,
    /// Pick any empty square.
    #[display("random")]
    Random,
}

impl Rule {
    /// Rules in the order they are tried.
    pub const PRIORITY: [Rule; 4] = [Rule::WinNow, Rule::Block, Rule::Center, Rule::Random];

    /// Proposes a slot for `me`, or `None` if the rule does not apply.
    pub fn propose<R: Rng>(
        self,
        board: &Board,
        lines: &LineSet,
        me: Player,
        rng: &mut R,
    ) -> Option<Slot> {
        match self {
            Rule::WinNow => completing_slot(board, lines, me),
            Rule::Block => completing_slot(board, lines, me.opponent()),
            Rule::Center => center_slot(board),
            Rule::Random => random_slot(board, rng),
        }
    }
}

/// A chosen slot and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Rule that fired.
    pub rule: Rule,
    /// Slot to play.
    pub slot: Slot,
}

/// First empty square that would give `player` a complete line.
///
/// Scans lines in generation order and returns the empty square of the
/// first line holding exactly `winning_length - 1` of `player`'s marks.
pub fn completing_slot(board: &Board, lines: &LineSet, player: Player) -> Option<Slot> {
    let needed = board.size().winning_length() - 1;
    lines.iter().find_map(|line| {
        let (marks, empties) = line.tally(board, player);
        if marks == needed {
            empties.first().copied()
        } else {
            None
        }
    })
}

/// The centre slot if it is still empty.
pub fn center_slot(board: &Board) -> Option<Slot> {
    let size = board.size();
    size.center()
        .to_slot(size)
        .filter(|&slot| board.is_empty(slot))
}

/// A uniformly random empty slot.
pub fn random_slot<R: Rng>(board: &Board, rng: &mut R) -> Option<Slot> {
    let empties = board.empty_slots();
    if empties.is_empty() {
        return None;
    }
    Some(empties[rng.random_range(0..empties.len())])
}

/// Runs the rule list for `me` and reports which rule decided.
///
/// # Errors
///
/// Returns [`MoveError::BoardFull`] when no empty square is left.
#[instrument(skip(board, lines, rng), fields(size = %board.size()))]
pub fn decide<R: Rng>(
    board: &Board,
    lines: &LineSet,
    me: Player,
    rng: &mut R,
) -> Result<Decision, MoveError> {
    let decision = Rule::PRIORITY
        .iter()
        .find_map(|&rule| {
            rule.propose(board, lines, me, &mut *rng)
                .map(|slot| Decision { rule, slot })
        })
        .ok_or(MoveError::BoardFull)?;

    debug!(rule = %decision.rule, slot = %decision.slot, "Heuristic chose square");
    Ok(decision)
}

/// Picks a slot for `me` using the rule list.
///
/// # Errors
///
/// Returns [`MoveError::BoardFull`] when no empty square is left.
pub fn choose_move<R: Rng>(
    board: &Board,
    lines: &LineSet,
    me: Player,
    rng: &mut R,
) -> Result<Slot, MoveError> {
    decide(board, lines, me, rng).map(|decision| decision.slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(size: BoardSize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(s, player) in marks {
            board.place(Slot::new(s), player).unwrap();
        }
        board
    }

    #[test]
    fn test_win_now_takes_missing_square() {
        let board = board_with(
            BoardSize::Three,
            &[
                (1, Player::Computer),
                (2, Player::Computer),
                (4, Player::Human),
            ],
        );
        let lines = LineSet::for_size(BoardSize::Three);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Rule::WinNow.propose(&board, lines, Player::Computer, &mut rng),
            Some(Slot::new(3))
        );
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Computer threatens 7-8-9, human threatens 1-2-3
        let board = board_with(
            BoardSize::Three,
            &[
                (1, Player::Human),
                (2, Player::Human),
                (7, Player::Computer),
                (8, Player::Computer),
            ],
        );
        let lines = LineSet::for_size(BoardSize::Three);
        let mut rng = StdRng::seed_from_u64(1);
        let decision = decide(&board, lines, Player::Computer, &mut rng).unwrap();
        assert_eq!(decision.rule, Rule::WinNow);
        assert_eq!(decision.slot, Slot::new(9));
    }

    #[test]
    fn test_block_when_no_win() {
        let board = board_with(
            BoardSize::Three,
            &[
                (1, Player::Human),
                (5, Player::Computer),
                (9, Player::Human),
                (3, Player::Human),
            ],
        );
        // Human threatens 1-2-3 (row) before 3-6-9 (column) in scan order
        let lines = LineSet::for_size(BoardSize::Three);
        let mut rng = StdRng::seed_from_u64(2);
        let decision = decide(&board, lines, Player::Computer, &mut rng).unwrap();
        assert_eq!(decision.rule, Rule::Block);
        assert_eq!(decision.slot, Slot::new(2));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        // Human holds 1 and 2 but the computer already sits on 3
        let board = board_with(
            BoardSize::Three,
            &[
                (1, Player::Human),
                (2, Player::Human),
                (3, Player::Computer),
            ],
        );
        let lines = LineSet::for_size(BoardSize::Three);
        assert_eq!(completing_slot(&board, lines, Player::Human), None);
    }

    #[test]
    fn test_center_on_quiet_board() {
        let board = board_with(BoardSize::Five, &[(1, Player::Human)]);
        let lines = LineSet::for_size(BoardSize::Five);
        let mut rng = StdRng::seed_from_u64(3);
        let decision = decide(&board, lines, Player::Computer, &mut rng).unwrap();
        assert_eq!(decision.rule, Rule::Center);
        assert_eq!(decision.slot, Slot::new(13));
    }

    #[test]
    fn test_random_stays_on_empty_squares() {
        let marks = [(5, Player::Human), (1, Player::Computer)];
        let board = board_with(BoardSize::Three, &marks);
        let empties = board.empty_slots();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let slot = random_slot(&board, &mut rng).unwrap();
            assert!(empties.contains(&slot));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = board_with(BoardSize::Nine, &[(41, Player::Human)]);
        let lines = LineSet::for_size(BoardSize::Nine);
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        let a = choose_move(&board, lines, Player::Computer, &mut first).unwrap();
        let b = choose_move(&board, lines, Player::Computer, &mut second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_board_errors() {
        use Player::{Computer as O, Human as X};
        let marks = [X, O, X, O, X, X, O, X, O];
        let placed: Vec<(usize, Player)> = (1..).zip(marks).collect();
        let board = board_with(BoardSize::Three, &placed);
        let lines = LineSet::for_size(BoardSize::Three);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            choose_move(&board, lines, Player::Computer, &mut rng),
            Err(MoveError::BoardFull)
        );
    }
}
