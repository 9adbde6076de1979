//! Mark balance invariant: sides alternate starting with First.

use super::super::{Board, Side};
use super::Invariant;

/// Invariant: First has as many marks as Second, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let first = board.count(Side::First);
        let second = board.count(Side::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Sides alternate starting with First (X count - O count is 0 or 1)"
    }
}
