//! Tic-tac-toe rules and perfect-play search.

mod action;
mod cell;
pub mod invariants;
mod notation;
pub mod rules;
pub mod search;
mod types;

pub use action::{InvalidMoveError, Move};
pub use cell::Cell;
pub use notation::ParseBoardError;
pub use rules::verdict;
pub use search::{Outcome, analyze, best_move, evaluate};
pub use types::{Board, Side, Square, Verdict};

/// Alias matching the board's vocabulary: a side's mark on a square.
pub type Mark = Side;
