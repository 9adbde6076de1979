//! Single winner invariant: both sides never hold a line at once.

use super::super::rules::{LINES, win::line_owner};
use super::super::{Board, Side};
use super::Invariant;

/// Invariant: at most one side has three in a row.
///
/// The game stops at the first completed line, so a board where both sides
/// hold one cannot be reached.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let owners = LINES.into_iter().filter_map(|line| line_owner(board, line));
        let mut first = false;
        let mut second = false;
        for side in owners {
            match side {
                Side::First => first = true,
                Side::Second => second = true,
            }
        }
        !(first && second)
    }

    fn description() -> &'static str {
        "At most one side has three in a row"
    }
}
