//! Exhaustive minimax search.
//!
//! The whole game tree below any 3x3 position is small enough to walk
//! completely (about 550,000 nodes from the empty board), so the search
//! uses no pruning, no move ordering and no evaluation heuristic. Every
//! value it returns is the exact game-theoretic result.
//!
//! Utility is scored globally: `+1` when First has won, `-1` when Second has
//! won, `0` for a tie. Nodes where First moves maximize and nodes where
//! Second moves minimize.

use super::{Board, Cell, Side, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic outcome of a position under perfect play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// First can force a win.
    FirstWins,
    /// Neither side can force a win.
    Draw,
    /// Second can force a win.
    SecondWins,
}

impl Outcome {
    fn from_utility(utility: i8) -> Self {
        match utility {
            u if u > 0 => Outcome::FirstWins,
            u if u < 0 => Outcome::SecondWins,
            _ => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::FirstWins => write!(f, "X wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::SecondWins => write!(f, "O wins"),
        }
    }
}

/// Returns an optimal move for `side` on `board`.
///
/// Returns `None` when the board is already won or tied. Among equally good
/// moves the first one in row-major order is chosen, so the result is fully
/// deterministic.
///
/// `side` is normally `board.to_move()`; the search places `side`'s mark
/// first and alternates from there either way.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, side: Side) -> Option<Cell> {
    let mut search = Minimax::default();
    let (utility, cell) = search.node(board, side);
    debug!(
        ?cell,
        outcome = %Outcome::from_utility(utility),
        nodes = search.nodes,
        "Search complete"
    );
    cell
}

/// Outcome of `board` with its side to move playing next.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    let (utility, _) = Minimax::default().node(board, board.to_move());
    Outcome::from_utility(utility)
}

/// Outcome of every legal move for the side to move, in row-major order.
///
/// Empty when the board is terminal.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Vec<(Cell, Outcome)> {
    if board.verdict().is_terminal() {
        return Vec::new();
    }

    let side = board.to_move();
    let mut search = Minimax::default();
    board
        .empty_cells()
        .filter_map(|cell| {
            let child = board.after_move(cell, side).ok()?;
            let (utility, _) = search.node(&child, side.opponent());
            Some((cell, Outcome::from_utility(utility)))
        })
        .collect()
}

/// Recursive minimax over board values.
#[derive(Debug, Default)]
struct Minimax {
    /// Nodes visited, for logging.
    nodes: u64,
}

impl Minimax {
    /// Returns the utility of `board` with `side` to move and the move
    /// achieving it (`None` at terminal nodes).
    fn node(&mut self, board: &Board, side: Side) -> (i8, Option<Cell>) {
        self.nodes += 1;

        match board.verdict() {
            Verdict::Won { side: Side::First, .. } => return (1, None),
            Verdict::Won { side: Side::Second, .. } => return (-1, None),
            Verdict::Tied => return (0, None),
            Verdict::InProgress => {}
        }

        let maximizing = side == Side::First;
        // Outside the utility range so the first legal move always replaces it.
        let mut best: (i8, Option<Cell>) = if maximizing { (-2, None) } else { (2, None) };

        for cell in board.empty_cells() {
            let child = place(board, cell, side);
            let (value, _) = self.node(&child, side.opponent());
            let better = if maximizing {
                value > best.0
            } else {
                value < best.0
            };
            if better {
                best = (value, Some(cell));
            }
        }

        best
    }
}

/// Marks `cell` for `side` without turn checks.
///
/// `best_move` accepts any side, which may disagree with the board's own
/// turn order, so children are built directly rather than through
/// [`Board::after_move`].
fn place(board: &Board, cell: Cell, side: Side) -> Board {
    let mut squares = *board.squares();
    squares[cell.index()] = super::Square::Occupied(side);
    Board::from_squares(squares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::notation::board;

    #[test]
    fn test_terminal_board_has_no_move() {
        assert_eq!(best_move(&board("XXX OO. ..."), Side::Second), None);
        assert_eq!(best_move(&board("XOX XOO OXX"), Side::First), None);
    }

    #[test]
    fn test_empty_board_picks_first_cell() {
        // Every opening draws, so the row-major tie-break picks the corner.
        assert_eq!(best_move(&Board::empty(), Side::First), Some(Cell::TopLeft));
    }

    #[test]
    fn test_completes_anti_diagonal() {
        // O O .
        // . X .
        // X . .
        let b = board("OO. .X. X..");
        assert_eq!(best_move(&b, Side::First), Some(Cell::TopRight));
    }

    #[test]
    fn test_blocks_open_row() {
        // X X .
        // . O .
        // . . .
        let b = board("XX. .O. ...");
        assert_eq!(best_move(&b, Side::Second), Some(Cell::TopRight));
    }

    #[test]
    fn test_reply_to_center_is_corner() {
        let b = board("... .X. ...");
        assert_eq!(best_move(&b, Side::Second), Some(Cell::TopLeft));
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(&Board::empty()), Outcome::Draw);
        assert_eq!(evaluate(&board("OO. .X. X..")), Outcome::FirstWins);
        // Edge reply to a center opening loses for O.
        assert_eq!(evaluate(&board(".O. .X. ...")), Outcome::FirstWins);
        assert_eq!(evaluate(&board("XXX OO. ...")), Outcome::FirstWins);
        assert_eq!(evaluate(&board("XOX XOO OXX")), Outcome::Draw);
    }

    #[test]
    fn test_analyze_center_opening() {
        let moves = analyze(&board("... .X. ..."));
        assert_eq!(moves.len(), 8);
        for (cell, outcome) in moves {
            let corner = matches!(
                cell,
                Cell::TopLeft | Cell::TopRight | Cell::BottomLeft | Cell::BottomRight
            );
            let expected = if corner { Outcome::Draw } else { Outcome::FirstWins };
            assert_eq!(outcome, expected, "{}", cell);
        }
    }

    #[test]
    fn test_analyze_terminal_is_empty() {
        assert!(analyze(&board("XXX OO. ...")).is_empty());
    }

    #[test]
    fn test_node_count_from_empty_board() {
        let mut search = Minimax::default();
        search.node(&Board::empty(), Side::First);
        // Every node of the full tic-tac-toe game tree, root included.
        assert_eq!(search.nodes, 549_946);
    }
}
