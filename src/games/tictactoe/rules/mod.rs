//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules. Rules
//! are kept apart from board storage so the search and the session can
//! share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winner};

use super::{Board, Verdict};

/// Classifies a board as won, tied or still in progress.
///
/// A completed line takes precedence over a full board, so a last move that
/// both fills the board and completes a line is a win.
pub fn verdict(board: &Board) -> Verdict {
    if let Some((side, line)) = winner(board) {
        Verdict::Won { side, line }
    } else if is_full(board) {
        Verdict::Tied
    } else {
        Verdict::InProgress
    }
}
