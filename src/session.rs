//! Game session: the current board plus everything needed to take moves back.

use crate::games::tictactoe::invariants::{HistoryReplayInvariant, Invariant};
use crate::games::tictactoe::{Board, Cell, InvalidMoveError, Move, Side, Verdict};
use tracing::{debug, info, instrument};

/// A single game in progress or finished.
///
/// Boards are values, so the session keeps every earlier board as-is for
/// undo instead of reversing moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    previous: Vec<Board>,
}

impl Game {
    /// Creates a game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            history: Vec::new(),
            previous: Vec::new(),
        }
    }

    /// Rebuilds a game from a move list.
    ///
    /// # Errors
    ///
    /// Fails on the first move that is illegal in sequence.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, InvalidMoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.apply(*mv)?;
        }
        Ok(game)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Side to move next.
    pub fn to_move(&self) -> Side {
        self.board.to_move()
    }

    /// Verdict of the current board.
    pub fn verdict(&self) -> Verdict {
        self.board.verdict()
    }

    /// Plays `cell` for the side to move.
    ///
    /// Returns the verdict after the move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] if the cell is taken or the game is over;
    /// the session is unchanged in that case.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn play(&mut self, cell: Cell) -> Result<Verdict, InvalidMoveError> {
        let mv = Move::new(self.to_move(), cell);
        self.apply(mv)?;
        Ok(self.verdict())
    }

    fn apply(&mut self, mv: Move) -> Result<(), InvalidMoveError> {
        let next = self.board.after_move(mv.cell, mv.side)?;
        self.previous.push(self.board);
        self.history.push(mv);
        self.board = next;
        debug!(%mv, board = %self.board, "Move recorded");

        debug_assert!(
            HistoryReplayInvariant::holds(self),
            "{}",
            HistoryReplayInvariant::description()
        );
        Ok(())
    }

    /// Takes back the last move.
    ///
    /// Returns the move removed, or `None` at the start of the game.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let board = self.previous.pop()?;
        let mv = self.history.pop();
        self.board = board;
        debug!(?mv, board = %self.board, "Move taken back");
        mv
    }

    /// Starts over on the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Game reset");
        *self = Self::new();
    }

    /// Boards before each move, oldest first.
    pub(crate) fn previous(&self) -> &[Board] {
        &self.previous
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
