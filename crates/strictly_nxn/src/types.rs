//! Core domain types for N×N tic-tac-toe.

use crate::error::{ConfigError, ConfigErrorKind, MoveError};
use crate::slot::{Coordinate, Slot};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// The person at the keyboard.
    #[strum(serialize = "human", serialize = "user", serialize = "u")]
    Human,
    /// The built-in heuristic player.
    #[strum(serialize = "computer", serialize = "c")]
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// Supported board dimensions.
///
/// The winning run length is derived from the size and is never
/// configured on its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// Classic 3x3, three in a row.
    #[display("3x3")]
    Three,
    /// 5x5, four in a row.
    #[display("5x5")]
    Five,
    /// 9x9, five in a row.
    #[display("9x9")]
    Nine,
}

impl BoardSize {
    /// Number of rows (and columns).
    pub const fn dimension(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 5,
            BoardSize::Nine => 9,
        }
    }

    /// Consecutive marks needed to win.
    pub const fn winning_length(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 4,
            BoardSize::Nine => 5,
        }
    }

    /// Total number of squares.
    pub const fn square_count(self) -> usize {
        self.dimension() * self.dimension()
    }

    /// The single centre square. All supported sizes are odd.
    pub const fn center(self) -> Coordinate {
        let mid = (self.dimension() - 1) / 2;
        Coordinate::new(mid, mid)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(dimension: usize) -> Result<Self, Self::Error> {
        match dimension {
            3 => Ok(BoardSize::Three),
            5 => Ok(BoardSize::Five),
            9 => Ok(BoardSize::Nine),
            other => {
                let kind = ConfigErrorKind::UnsupportedBoardSize(other);
                Err(ConfigError::new(kind))
            }
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.dimension()
    }
}

impl FromStr for BoardSize {
    type Err = ConfigError;

    /// Accepts `"5"` as well as `"5x5"`.
    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let head = trimmed
            .split_once(['x', 'X'])
            .map_or(trimmed, |(rows, _)| rows);
        let Ok(dimension) = head.parse::<usize>() else {
            let kind = ConfigErrorKind::Unparseable(s.to_string());
            return Err(ConfigError::new(kind));
        };
        Self::try_from(dimension)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square, carrying its own slot number.
    Empty(Slot),
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the owner if the square is marked.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Occupied(player) => Some(player),
            Square::Empty(_) => None,
        }
    }

    /// Returns the slot number if the square is empty.
    pub fn empty_slot(self) -> Option<Slot> {
        match self {
            Square::Empty(slot) => Some(slot),
            Square::Occupied(_) => None,
        }
    }
}

/// N×N tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a board with every square empty.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let squares = (1..=size.square_count())
            .map(|number| Square::Empty(Slot::new(number)))
            .collect();
        Self { size, squares }
    }

    /// Creates a board from a raw dimension, rejecting unsupported sizes.
    #[track_caller]
    pub fn with_dimension(dimension: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(BoardSize::try_from(dimension)?))
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square for a slot, or `None` when off the board.
    pub fn get(&self, slot: Slot) -> Option<Square> {
        slot.index(self.size).map(|i| self.squares[i])
    }

    /// Gets the square at a coordinate, or `None` when off the board.
    pub fn square_at(&self, coord: Coordinate) -> Option<Square> {
        coord.index(self.size).map(|i| self.squares[i])
    }

    /// Checks if a slot is on the board and unmarked.
    pub fn is_empty(&self, slot: Slot) -> bool {
        matches!(self.get(slot), Some(Square::Empty(_)))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Slot numbers of every empty square, ascending.
    pub fn empty_slots(&self) -> Vec<Slot> {
        self.squares.iter().filter_map(|s| s.empty_slot()).collect()
    }

    /// Number of squares marked by `player`.
    pub fn marks_of(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| s.owner() == Some(player))
            .count()
    }

    /// Number of marked squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.owner().is_some()).count()
    }

    /// Marks a slot for a player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for a slot outside `1..=n²` and
    /// [`MoveError::SquareOccupied`] for a marked square. The board is
    /// left untouched on error.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn place(&mut self, slot: Slot, player: Player) -> Result<(), MoveError> {
        let index = slot.index(self.size).ok_or(MoveError::OutOfRange {
            slot,
            max: self.size.square_count(),
        })?;

        match self.squares[index] {
            Square::Empty(_) => {
                self.squares[index] = Square::Occupied(player);
                Ok(())
            }
            Square::Occupied(_) => Err(MoveError::SquareOccupied(slot)),
        }
    }
}
