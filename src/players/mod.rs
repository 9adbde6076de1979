//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::Cell;
use crate::session::Game;
use anyhow::Result;

/// What a player wants to do on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Mark a cell.
    Place(Cell),
    /// Take back the last move (and the reply to it).
    Undo,
    /// Start over on the empty board.
    Reset,
    /// Ask the engine for a recommendation.
    Hint,
    /// Leave the game.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses an action for the current turn.
    async fn choose(&mut self, game: &Game) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a person is behind this player.
    ///
    /// Interactive players get prompts, hints, and the choice to play again
    /// when a game ends.
    fn interactive(&self) -> bool {
        false
    }
}
