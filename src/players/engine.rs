//! Engine player backed by the minimax search.

use super::{Action, Player};
use crate::games::tictactoe::best_move;
use crate::session::Game;
use anyhow::{Context, Result};
use tracing::debug;

/// Player that always makes the optimal move.
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for EnginePlayer {
    async fn choose(&mut self, game: &Game) -> Result<Action> {
        let board = *game.board();
        let side = game.to_move();
        debug!(engine = %self.name, %board, ?side, "Engine thinking");

        // The search is CPU-bound; keep it off the async workers.
        let cell = tokio::task::spawn_blocking(move || best_move(&board, side))
            .await
            .context("Search task failed")?
            .context("No move available on a finished board")?;

        debug!(engine = %self.name, %cell, "Engine chose move");
        Ok(Action::Place(cell))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
