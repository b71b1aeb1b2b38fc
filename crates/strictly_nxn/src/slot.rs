//! Slot numbers and grid coordinates.
//!
//! Slots are the 1-based, row-major square numbers shown to the human
//! player. Coordinates are the 0-based `(row, col)` pairs used by the
//! line generator. The two convert losslessly for a given board size.

use crate::BoardSize;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A 1-based, row-major square number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct Slot(usize);

impl Slot {
    /// Wraps a raw slot number. Range is checked against a board on use.
    pub const fn new(number: usize) -> Self {
        Self(number)
    }

    /// Returns the raw slot number.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Converts to a grid coordinate, or `None` when the slot is off the board.
    pub fn to_coordinate(self, size: BoardSize) -> Option<Coordinate> {
        let n = size.dimension();
        if self.0 == 0 || self.0 > size.square_count() {
            return None;
        }
        let index = self.0 - 1;
        Some(Coordinate::new(index / n, index % n))
    }

    /// Zero-based index into a row-major square vector.
    pub(crate) fn index(self, size: BoardSize) -> Option<usize> {
        let on_board = (1..=size.square_count()).contains(&self.0);
        on_board.then(|| self.0 - 1)
    }
}

/// A zero-based `(row, col)` position on the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("({}, {})", row, col)]
pub struct Coordinate {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts back to the slot number, or `None` when off the board.
    pub fn to_slot(self, size: BoardSize) -> Option<Slot> {
        self.index(size).map(|i| Slot(i + 1))
    }

    pub(crate) fn index(self, size: BoardSize) -> Option<usize> {
        let n = size.dimension();
        let on_board = self.row < n && self.col < n;
        on_board.then(|| self.row * n + self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn at(number: usize, size: BoardSize) -> Option<Coordinate> {
        Slot::new(number).to_coordinate(size)
    }

    #[test]
    fn test_first_and_last_slot() {
        assert_eq!(at(1, BoardSize::Three), Some(Coordinate::new(0, 0)));
        assert_eq!(at(9, BoardSize::Three), Some(Coordinate::new(2, 2)));
        assert_eq!(at(81, BoardSize::Nine), Some(Coordinate::new(8, 8)));
    }

    #[test]
    fn test_row_major_layout() {
        // 5x5: slot 7 is second row, second column
        assert_eq!(at(7, BoardSize::Five), Some(Coordinate::new(1, 1)));
        assert_eq!(at(41, BoardSize::Nine), Some(Coordinate::new(4, 4)));
    }

    #[test]
    fn test_out_of_range_slots() {
        assert_eq!(Slot::new(0).to_coordinate(BoardSize::Three), None);
        assert_eq!(Slot::new(10).to_coordinate(BoardSize::Three), None);
        assert_eq!(Slot::new(26).to_coordinate(BoardSize::Five), None);
        assert_eq!(Coordinate::new(3, 0).to_slot(BoardSize::Three), None);
    }

    #[test]
    fn test_bijection_every_size() {
        for size in BoardSize::iter() {
            for number in 1..=size.square_count() {
                let slot = Slot::new(number);
                let coord = slot.to_coordinate(size).expect("slot on board");
                assert_eq!(coord.to_slot(size), Some(slot));
                assert_eq!(number, coord.row * size.dimension() + coord.col + 1);
            }
        }
    }
}
