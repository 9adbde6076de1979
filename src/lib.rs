//! Strictly Minimax library - perfect-play tic-tac-toe
//!
//! An exhaustive minimax engine for 3x3 tic-tac-toe plus the thin terminal
//! front end that plays it.
//!
//! # Architecture
//!
//! - **Engine**: immutable [`Board`] values, terminal tests ([`verdict`]) and
//!   the search ([`best_move`])
//! - **Session**: one game's history with undo and reset ([`Game`])
//! - **Players**: human and engine players driven by the [`Orchestrator`]
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Cell, Side, Verdict, best_move};
//!
//! let board = Board::empty().after_move(Cell::Center, Side::First)?;
//! assert_eq!(board.verdict(), Verdict::InProgress);
//!
//! // Perfect play answers a center opening in a corner.
//! assert_eq!(best_move(&board, Side::Second), Some(Cell::TopLeft));
//! # Ok::<(), strictly_minimax::InvalidMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;
mod report;
mod session;
mod ui;

// Crate-level exports - Engine
pub use games::tictactoe::{
    Board, Cell, InvalidMoveError, Mark, Move, Outcome, ParseBoardError, Side, Square, Verdict,
    analyze, best_move, evaluate, verdict,
};

// Crate-level exports - Engine internals exposed for testing and tooling
pub use games::tictactoe::invariants::{
    BoardInvariants, HistoryReplayInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, SingleWinnerInvariant, WinnerMovedLastInvariant,
};
pub use games::tictactoe::rules::{LINES, is_full, winner};

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Session and play
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{Action, EnginePlayer, HumanPlayer, Player};
pub use report::{Analysis, MoveAnalysis};
pub use session::Game;
pub use ui::render;
