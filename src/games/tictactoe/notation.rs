//! Compact text notation for boards.
//!
//! Nine symbols in row-major order: `X` for First, `O` for Second and `.`,
//! `-` or `_` for an empty square. Whitespace and `|`/`/` separators are
//! ignored, so `"XO./.X./..O"` and `"XO. .X. ..O"` name the same board.

use super::invariants::{BoardInvariants, InvariantSet};
use super::{Board, Side, Square};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// Failure to parse a board from notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character that is not a mark, an empty square or a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(#[error(not(source))] char),

    /// The notation did not contain exactly 9 squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// The board cannot arise from legal play.
    #[display("Unreachable board: {}", _0)]
    Unreachable(#[error(not(source))] String),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Side::First),
                'O' | 'o' => Square::Occupied(Side::Second),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::UnexpectedChar(c)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        let board = Board::from_squares(squares);

        BoardInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ParseBoardError::Unreachable(descriptions)
        })?;

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares().iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(side) => side.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Parses a board that is known to be valid.
#[cfg(test)]
pub(crate) fn board(s: &str) -> Board {
    s.parse().unwrap_or_else(|e| panic!("bad test board {:?}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    #[test]
    fn test_parse_and_display() {
        let b: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(b.get(Cell::TopLeft), Square::Occupied(Side::First));
        assert_eq!(b.get(Cell::TopCenter), Square::Occupied(Side::Second));
        assert_eq!(b.get(Cell::BottomRight), Square::Occupied(Side::Second));
        assert_eq!(b.to_string(), "XO./.X./..O");
        assert_eq!(b.to_string().parse::<Board>().unwrap(), b);
    }

    #[test]
    fn test_parse_accepts_alternate_empties() {
        let a: Board = "x-_|---|---".parse().unwrap();
        let b: Board = "X........".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(ParseBoardError::WrongLength(3))
        );
        assert_eq!(
            "..........".parse::<Board>(),
            Err(ParseBoardError::WrongLength(10))
        );
    }

    #[test]
    fn test_parse_unexpected_char() {
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar('Z'))
        );
    }

    #[test]
    fn test_parse_rejects_unbalanced() {
        let err = "OO.......".parse::<Board>().unwrap_err();
        assert!(matches!(err, ParseBoardError::Unreachable(_)));
        assert!(err.to_string().contains("alternate"));
    }
}
