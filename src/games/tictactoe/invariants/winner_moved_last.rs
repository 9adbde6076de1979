//! Winner moved last invariant: a winning line ends the game.

use super::super::{Board, Side, rules};
use super::Invariant;

/// Invariant: if a side holds a line, that side made the last move.
///
/// A First win leaves First one mark ahead; a Second win leaves the counts
/// equal. Anything else means play continued past a finished game.
pub struct WinnerMovedLastInvariant;

impl Invariant<Board> for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        match rules::winner(board) {
            None => true,
            // The side that just moved is the opponent of the side to move.
            Some((side, _)) => board.to_move() == side.opponent(),
        }
    }

    fn description() -> &'static str {
        "The winning side made the last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::notation::board;
    use crate::games::tictactoe::{Cell, Square};

    #[test]
    fn test_first_win_holds() {
        assert!(WinnerMovedLastInvariant::holds(&board("XXX OO. ...")));
    }

    #[test]
    fn test_second_win_holds() {
        assert!(WinnerMovedLastInvariant::holds(&board("XX. OOO X..")));
    }

    #[test]
    fn test_play_after_first_win_violates() {
        // X completed the top row, then O kept playing.
        let mut squares = [Square::Empty; 9];
        for cell in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight] {
            squares[cell.index()] = Square::Occupied(Side::First);
        }
        for cell in [Cell::MiddleLeft, Cell::Center, Cell::BottomRight] {
            squares[cell.index()] = Square::Occupied(Side::Second);
        }
        assert!(!WinnerMovedLastInvariant::holds(&Board::from_squares(squares)));
    }
}
