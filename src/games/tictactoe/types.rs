//! Core domain types for tic-tac-toe.

use super::action::InvalidMoveError;
use super::cell::Cell;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Moves first, plays `X`.
    First,
    /// Moves second, plays `O`.
    Second,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Board symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "First (X)"),
            Side::Second => write!(f, "Second (O)"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square marked by a side.
    Occupied(Side),
}

/// 3x3 tic-tac-toe board.
///
/// A board is a plain value: applying a move returns a new board and leaves
/// the old one untouched, so sibling branches of a search never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board with `First` to move.
    pub fn empty() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board directly from squares.
    ///
    /// No reachability checks are made; see [`Board::from_str`](std::str::FromStr)
    /// for a validated constructor.
    pub(crate) fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks placed by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(side))
            .count()
    }

    /// Side entitled to the next mark.
    ///
    /// Derived from the mark counts: `First` always opens, so equal counts
    /// mean it is `First`'s turn.
    pub fn to_move(&self) -> Side {
        if self.count(Side::First) == self.count(Side::Second) {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|cell| self.is_empty(*cell))
    }

    /// Current verdict for this board.
    pub fn verdict(&self) -> Verdict {
        rules::verdict(self)
    }

    /// Returns the board that results from `side` marking `cell`.
    ///
    /// # Errors
    ///
    /// - [`InvalidMoveError::GameOver`] if the board is already won or tied.
    /// - [`InvalidMoveError::OutOfTurn`] if `side` is not the side to move.
    /// - [`InvalidMoveError::SquareOccupied`] if `cell` is already marked.
    #[instrument(skip(self), fields(board = %self))]
    pub fn after_move(&self, cell: Cell, side: Side) -> Result<Board, InvalidMoveError> {
        if self.verdict() != Verdict::InProgress {
            return Err(InvalidMoveError::GameOver);
        }
        if side != self.to_move() {
            return Err(InvalidMoveError::OutOfTurn(side));
        }
        if !self.is_empty(cell) {
            return Err(InvalidMoveError::SquareOccupied(cell));
        }

        let mut next = *self;
        next.squares[cell.index()] = Square::Occupied(side);
        debug!(%cell, ?side, next = %next, "Move applied");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(&next);

        Ok(next)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(side) => side.symbol(),
                };
                result.push(' ');
                result.push(symbol);
                result.push(' ');
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A side completed a line.
    Won {
        /// The winning side.
        side: Side,
        /// The completed line, in canonical order.
        line: [Cell; 3],
    },
    /// The board is full with no line completed.
    Tied,
}

impl Verdict {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Verdict::Won { side, .. } => Some(*side),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "In progress"),
            Verdict::Won { side, line } => write!(
                f,
                "{} wins via {}, {}, {}",
                side,
                line[0].label(),
                line[1].label(),
                line[2].label()
            ),
            Verdict::Tied => write!(f, "Tied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.to_move(), Side::First);
        assert_eq!(board.empty_cells().count(), 9);
        assert_eq!(board.verdict(), Verdict::InProgress);
    }

    #[test]
    fn test_after_move_flips_side_and_keeps_original() {
        let board = Board::empty();
        let next = board.after_move(Cell::Center, Side::First).unwrap();

        assert_eq!(next.get(Cell::Center), Square::Occupied(Side::First));
        assert_eq!(next.to_move(), Side::Second);
        assert_eq!(board, Board::empty());
        assert_eq!(next.empty_cells().count(), 8);
    }

    #[test]
    fn test_after_move_rejects_occupied() {
        let board = Board::empty()
            .after_move(Cell::Center, Side::First)
            .unwrap();
        let snapshot = board;

        let result = board.after_move(Cell::Center, Side::Second);
        assert_eq!(result, Err(InvalidMoveError::SquareOccupied(Cell::Center)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_after_move_rejects_out_of_turn() {
        let result = Board::empty().after_move(Cell::Center, Side::Second);
        assert_eq!(result, Err(InvalidMoveError::OutOfTurn(Side::Second)));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::empty()
            .after_move(Cell::TopLeft, Side::First)
            .unwrap();
        let text = board.display();
        assert!(text.starts_with(" X | 2 | 3 "));
        assert!(text.ends_with(" 7 | 8 | 9 "));
    }
}
