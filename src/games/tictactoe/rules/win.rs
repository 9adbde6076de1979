//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Side, Square};

/// All eight lines in canonical order.
///
/// Rows top to bottom (left to right within each), columns left to right
/// (top to bottom within each), then the main diagonal from the top-left and
/// the anti-diagonal from the top-right.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning side and the first completed line in [`LINES`] order,
/// or `None` if no side has three in a row. On reachable boards at most one
/// side can hold a line.
pub fn winner(board: &Board) -> Option<(Side, [Cell; 3])> {
    LINES
        .into_iter()
        .find_map(|line| line_owner(board, line).map(|side| (side, line)))
}

/// Side holding all three cells of `line`, if any.
pub(crate) fn line_owner(board: &Board, [a, b, c]: [Cell; 3]) -> Option<Side> {
    match board.get(a) {
        Square::Occupied(side) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(side)
        }
        _ => None,
    }
}
