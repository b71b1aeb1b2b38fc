//! Winning-line generation.
//!
//! A line is any window of `winning_length` consecutive squares along a
//! row, a column or either diagonal direction. Windows slide along every
//! row, column and diagonal long enough to hold one, so a run shorter than
//! the board (four on 5x5, five on 9x9) is found anywhere on the grid.
//!
//! The set of lines depends only on the board size, so each size is
//! generated once per process and shared read-only.

use crate::{Board, BoardSize, Coordinate, Player, Slot, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Direction a line runs in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum LineFamily {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (↘).
    DiagonalDown,
    /// Bottom-left to top-right (↗), stored from its top-right end.
    DiagonalUp,
}

/// One window of consecutive squares that wins when fully owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    family: LineFamily,
    cells: Vec<Coordinate>,
}

impl Line {
    /// Walks `length` squares from `start` in the family's direction.
    ///
    /// `DiagonalUp` walks down and to the left, so `start.col` must be at
    /// least `length - 1`.
    fn walk(family: LineFamily, start: Coordinate, length: usize) -> Self {
        let cells = (0..length)
            .map(|i| match family {
                LineFamily::Horizontal => Coordinate::new(start.row, start.col + i),
                LineFamily::Vertical => Coordinate::new(start.row + i, start.col),
                LineFamily::DiagonalDown => Coordinate::new(start.row + i, start.col + i),
                LineFamily::DiagonalUp => Coordinate::new(start.row + i, start.col - i),
            })
            .collect();
        Self { family, cells }
    }

    /// Direction of the line.
    pub fn family(&self) -> LineFamily {
        self.family
    }

    /// Coordinates along the line, in walking order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of squares in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-length line, which the generator never emits.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The player owning every square of the line, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let mut squares = self.cells.iter().map(|&c| board.square_at(c));
        let first = squares.next()??.owner()?;
        squares
            .all(|sq| sq == Some(Square::Occupied(first)))
            .then_some(first)
    }

    /// Count of `player`'s marks and the empty slots left on the line.
    pub fn tally(&self, board: &Board, player: Player) -> (usize, Vec<Slot>) {
        let mut marks = 0;
        let mut empties = Vec::new();
        for square in self.cells.iter().filter_map(|&c| board.square_at(c)) {
            match square {
                Square::Occupied(p) if p == player => marks += 1,
                Square::Occupied(_) => {}
                Square::Empty(slot) => empties.push(slot),
            }
        }
        (marks, empties)
    }
}

/// All winning lines for one board size, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    size: BoardSize,
    lines: Vec<Line>,
}

impl LineSet {
    /// Returns the shared line set for `size`, generating it on first use.
    pub fn for_size(size: BoardSize) -> &'static LineSet {
        static THREE: OnceLock<LineSet> = OnceLock::new();
        static FIVE: OnceLock<LineSet> = OnceLock::new();
        static NINE: OnceLock<LineSet> = OnceLock::new();

        let cell = match size {
            BoardSize::Three => &THREE,
            BoardSize::Five => &FIVE,
            BoardSize::Nine => &NINE,
        };
        cell.get_or_init(|| generate_lines(size))
    }

    /// Board size the lines were generated for.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Lines in generation order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Iterates lines in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no lines were generated.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Generates every winning line for `size`.
///
/// Order is fixed: horizontal windows row by row, vertical windows column
/// by column, then ↘ and ↗ windows by starting row and column. Win and
/// threat scans report the first match in this order.
#[instrument]
pub fn generate_lines(size: BoardSize) -> LineSet {
    let n = size.dimension();
    let w = size.winning_length();
    let span = n - w + 1;

    let mut lines = Vec::with_capacity(2 * n * span + 2 * span * span);

    for row in 0..n {
        for col in 0..span {
            let start = Coordinate::new(row, col);
            lines.push(Line::walk(LineFamily::Horizontal, start, w));
        }
    }

    for col in 0..n {
        for row in 0..span {
            let start = Coordinate::new(row, col);
            lines.push(Line::walk(LineFamily::Vertical, start, w));
        }
    }

    for row in 0..span {
        for col in 0..span {
            let start = Coordinate::new(row, col);
            lines.push(Line::walk(LineFamily::DiagonalDown, start, w));
        }
    }

    for row in 0..span {
        for col in (w - 1)..n {
            let start = Coordinate::new(row, col);
            lines.push(Line::walk(LineFamily::DiagonalUp, start, w));
        }
    }

    debug!(count = lines.len(), "Generated winning lines");
    LineSet { size, lines }
}
