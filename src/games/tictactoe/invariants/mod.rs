//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties every reachable board satisfies. They
//! gate board parsing, back debug assertions after each move, and are
//! testable on their own.

mod history_replay;
mod mark_balance;
mod single_winner;
mod winner_moved_last;

pub use history_replay::HistoryReplayInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use winner_moved_last::WinnerMovedLastInvariant;

use super::Board;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not only the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariants of every board reachable from the empty board.
pub type BoardInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    WinnerMovedLastInvariant,
);

/// Asserts that the board invariants hold (panics on violation in debug builds).
pub fn assert_invariants(board: &Board) {
    let result = BoardInvariants::check_all(board);
    if let Err(violations) = &result {
        for v in violations {
            warn!(board = %board, violation = %v.description, "Board invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Board invariants violated: {:?}", result);
}
