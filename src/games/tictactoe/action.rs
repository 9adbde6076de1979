//! Move records and move validation errors.

use super::{Cell, Side};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a cell.
///
/// The engine itself only needs the [`Cell`]; the side is recorded so a
/// game history can be replayed and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The cell the side marks.
    pub cell: Cell,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side.symbol(), self.cell)
    }
}

/// A move that cannot be applied to a board.
///
/// This signals a caller bug rather than a runtime condition: a front end
/// should only offer empty cells of an unfinished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    /// The cell is already marked.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Cell),

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// The side is not the one to move.
    #[display("It is not {}'s turn", _0)]
    OutOfTurn(#[error(not(source))] Side),
}
