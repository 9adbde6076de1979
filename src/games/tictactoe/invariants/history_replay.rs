//! History replay invariant: the move list reproduces the session's boards.

use super::super::Board;
use super::Invariant;
use crate::session::Game;

/// Invariant: replaying the history from the empty board yields every
/// stored board and ends on the current one.
///
/// Undo relies on this: each stored board is exactly the board before the
/// matching history entry.
pub struct HistoryReplayInvariant;

impl Invariant<Game> for HistoryReplayInvariant {
    fn holds(game: &Game) -> bool {
        if game.previous().len() != game.history().len() {
            return false;
        }

        let mut board = Board::empty();
        for (mv, before) in game.history().iter().zip(game.previous()) {
            if board != *before {
                return false;
            }
            board = match board.after_move(mv.cell, mv.side) {
                Ok(next) => next,
                Err(_) => return false,
            };
        }

        board == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}
