//! Game orchestration between players.

use crate::games::tictactoe::{Board, Cell, InvalidMoveError, Move, Side, Verdict, best_move};
use crate::players::{Action, Player};
use crate::session::Game;
use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the orchestrator to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh game began.
    Started {
        /// The starting board.
        board: Board,
    },
    /// Waiting for a person to act.
    AwaitingInput {
        /// Player being asked.
        name: String,
        /// Side that player controls.
        side: Side,
    },
    /// The engine is searching.
    Thinking {
        /// Engine player's name.
        name: String,
    },
    /// A move was applied.
    MoveMade {
        /// Player who moved.
        name: String,
        /// The move.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// A move was refused.
    Rejected(InvalidMoveError),
    /// Input could not be understood.
    Unrecognized(String),
    /// The engine's recommendation for the side to move.
    Hint(Cell),
    /// Moves were taken back.
    TookBack {
        /// Number of moves removed.
        moves: usize,
        /// Board after taking them back.
        board: Board,
    },
    /// The game was won or tied.
    GameOver {
        /// Final verdict.
        verdict: Verdict,
        /// Winning player's name.
        winner: Option<String>,
    },
    /// A player left.
    Quit,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    first: Box<dyn Player>,
    second: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    show_hints: bool,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// `first` plays X and moves first; `second` plays O.
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            first,
            second,
            event_tx,
            show_hints: false,
        }
    }

    /// Sends a hint before every interactive turn.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// The session being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::First => self.first.as_ref(),
            Side::Second => self.second.as_ref(),
        }
    }

    async fn choose(&mut self, side: Side) -> Result<Action> {
        let player = match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        };
        player.choose(&self.game).await
    }

    fn send(&self, event: GameEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .context("Display channel closed")
    }

    /// Runs the game loop.
    ///
    /// Returns the verdict of the board when play stops: after a finished
    /// game if no player is interactive, otherwise when a player quits.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Verdict> {
        info!(
            first = self.first.name(),
            second = self.second.name(),
            "Starting game orchestration"
        );
        self.send(GameEvent::Started {
            board: *self.game.board(),
        })?;

        loop {
            let verdict = self.game.verdict();
            if verdict.is_terminal() {
                let winner = verdict
                    .winner()
                    .map(|side| self.player(side).name().to_string());
                info!(%verdict, ?winner, "Game over");
                self.send(GameEvent::GameOver { verdict, winner })?;

                if !self.handle_game_over().await? {
                    return Ok(verdict);
                }
                continue;
            }

            let side = self.game.to_move();
            let name = self.player(side).name().to_string();
            let interactive = self.player(side).interactive();

            if interactive {
                if self.show_hints {
                    self.hint().await?;
                }
                self.send(GameEvent::AwaitingInput {
                    name: name.clone(),
                    side,
                })?;
            } else {
                self.send(GameEvent::Thinking { name: name.clone() })?;
            }

            debug!(player = %name, ?side, "Waiting for action");
            let action = self.choose(side).await?;

            match action {
                Action::Place(cell) => match self.game.play(cell) {
                    Ok(_) => self.send(GameEvent::MoveMade {
                        name,
                        mv: Move::new(side, cell),
                        board: *self.game.board(),
                    })?,
                    Err(e) => self.send(GameEvent::Rejected(e))?,
                },
                Action::Undo => self.undo()?,
                Action::Reset => self.reset()?,
                Action::Hint => self.hint().await?,
                Action::Unrecognized(input) => self.send(GameEvent::Unrecognized(input))?,
                Action::Quit => {
                    self.send(GameEvent::Quit)?;
                    return Ok(self.game.verdict());
                }
            }
        }
    }

    /// Lets an interactive player decide what happens after a finished game.
    ///
    /// Returns `false` when play should stop.
    async fn handle_game_over(&mut self) -> Result<bool> {
        let Some(side) = [Side::First, Side::Second]
            .into_iter()
            .find(|side| self.player(*side).interactive())
        else {
            return Ok(false);
        };

        loop {
            self.send(GameEvent::AwaitingInput {
                name: self.player(side).name().to_string(),
                side,
            })?;
            match self.choose(side).await? {
                Action::Reset => {
                    self.reset()?;
                    return Ok(true);
                }
                Action::Undo => {
                    self.undo()?;
                    return Ok(true);
                }
                Action::Quit => {
                    self.send(GameEvent::Quit)?;
                    return Ok(false);
                }
                Action::Place(_) | Action::Hint => {
                    self.send(GameEvent::Rejected(InvalidMoveError::GameOver))?
                }
                Action::Unrecognized(input) => self.send(GameEvent::Unrecognized(input))?,
            }
        }
    }

    /// Takes back moves until an interactive player is to move again.
    fn undo(&mut self) -> Result<()> {
        let mut moves = 0;
        while self.game.undo().is_some() {
            moves += 1;
            if self.player(self.game.to_move()).interactive() {
                break;
            }
        }
        debug!(moves, "Undo");
        self.send(GameEvent::TookBack {
            moves,
            board: *self.game.board(),
        })
    }

    fn reset(&mut self) -> Result<()> {
        self.game.reset();
        self.send(GameEvent::Started {
            board: *self.game.board(),
        })
    }

    async fn hint(&mut self) -> Result<()> {
        let board = *self.game.board();
        let side = self.game.to_move();
        let cell = tokio::task::spawn_blocking(move || best_move(&board, side))
            .await
            .context("Search task failed")?;
        match cell {
            Some(cell) => self.send(GameEvent::Hint(cell)),
            None => self.send(GameEvent::Rejected(InvalidMoveError::GameOver)),
        }
    }
}
