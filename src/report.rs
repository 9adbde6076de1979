//! Position analysis report for the `best` command.

use crate::games::tictactoe::{Board, Cell, Outcome, Side, Verdict, analyze, best_move};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Value of a single candidate move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveAnalysis {
    /// The candidate cell.
    cell: Cell,
    /// Result of playing it, with perfect play afterwards.
    outcome: Outcome,
}

/// Everything the engine knows about a board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    board: String,
    /// Side to move.
    to_move: Side,
    /// Current verdict.
    verdict: Verdict,
    /// Optimal move, if the game is not over.
    best_move: Option<Cell>,
    /// Value of every legal move, in row-major order.
    moves: Vec<MoveAnalysis>,
}

impl Analysis {
    /// Analyzes `board` for its side to move.
    #[instrument(skip(board), fields(board = %board))]
    pub fn of(board: &Board) -> Self {
        let to_move = board.to_move();
        Self {
            board: board.to_string(),
            to_move,
            verdict: board.verdict(),
            best_move: best_move(board, to_move),
            moves: analyze(board)
                .into_iter()
                .map(|(cell, outcome)| MoveAnalysis { cell, outcome })
                .collect(),
        }
    }

    /// Renders the report as text.
    pub fn to_text(&self, board: &Board) -> String {
        let mut out = format!("{}\n\n", board.display());
        out.push_str(&format!("Verdict: {}\n", self.verdict));
        if !self.verdict.is_terminal() {
            out.push_str(&format!("To move: {}\n", self.to_move));
        }
        if let Some(cell) = self.best_move {
            out.push_str(&format!("Best move: {}\n", cell));
        }
        for m in &self.moves {
            out.push_str(&format!("  {:<24} {}\n", m.cell.to_string(), m.outcome));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_of_empty_board() {
        let analysis = Analysis::of(&Board::empty());
        assert_eq!(analysis.to_move(), &Side::First);
        assert_eq!(analysis.verdict(), &Verdict::InProgress);
        assert_eq!(analysis.best_move(), &Some(Cell::TopLeft));
        assert_eq!(analysis.moves().len(), 9);
        assert!(analysis.moves().iter().all(|m| m.outcome() == &Outcome::Draw));
    }

    #[test]
    fn test_analysis_of_finished_board() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let analysis = Analysis::of(&board);
        assert_eq!(analysis.best_move(), &None);
        assert!(analysis.moves().is_empty());
        assert!(analysis.to_text(&board).contains("Verdict: First (X) wins"));
    }

    #[test]
    fn test_analysis_serializes() {
        let board: Board = "OO. .X. X..".parse().unwrap();
        let json = serde_json::to_value(Analysis::of(&board)).unwrap();
        assert_eq!(json["board"], "OO./.X./X..");
        assert_eq!(json["to_move"], "first");
        assert_eq!(json["best_move"], "TopRight");
        assert_eq!(json["verdict"], "InProgress");
        assert_eq!(json["moves"][0]["cell"], "TopRight");
        assert_eq!(json["moves"][0]["outcome"], "FirstWins");
    }
}
