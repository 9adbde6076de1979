//! Human player reading commands line by line.

use super::{Action, Player};
use crate::games::tictactoe::Cell;
use crate::session::Game;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Human player fed by a channel of input lines.
///
/// The caller owns the actual input source (stdin in the binary, a plain
/// sender in tests) and forwards each line into the channel.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<String>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

/// Interprets one line of user input.
#[instrument]
pub fn parse_action(line: &str) -> Action {
    match line.trim().to_lowercase().as_str() {
        "u" | "undo" => Action::Undo,
        "r" | "reset" | "new" => Action::Reset,
        "h" | "hint" | "?" => Action::Hint,
        "q" | "quit" | "exit" => Action::Quit,
        other => match Cell::parse_input(other) {
            Some(cell) => Action::Place(cell),
            None => Action::Unrecognized(line.trim().to_string()),
        },
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose(&mut self, _game: &Game) -> Result<Action> {
        // Skip blank lines; a closed channel means input ended.
        while let Some(line) = self.input_rx.recv().await {
            if line.trim().is_empty() {
                continue;
            }
            let action = parse_action(&line);
            debug!(player = %self.name, ?action, "Human input");
            return Ok(action);
        }

        debug!(player = %self.name, "Input closed");
        Ok(Action::Quit)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_action("undo"), Action::Undo);
        assert_eq!(parse_action(" NEW "), Action::Reset);
        assert_eq!(parse_action("reset"), Action::Reset);
        assert_eq!(parse_action("?"), Action::Hint);
        assert_eq!(parse_action("quit"), Action::Quit);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_action("5"), Action::Place(Cell::Center));
        assert_eq!(parse_action("2,0"), Action::Place(Cell::TopRight));
        assert_eq!(parse_action("Bottom left"), Action::Place(Cell::BottomLeft));
        assert_eq!(
            parse_action("banana"),
            Action::Unrecognized("banana".to_string())
        );
    }

    #[tokio::test]
    async fn test_choose_skips_blank_lines_and_quits_on_close() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut player = HumanPlayer::new("You", rx);
        tx.send(String::new()).unwrap();
        tx.send("   ".to_string()).unwrap();
        tx.send("7".to_string()).unwrap();
        drop(tx);

        let game = Game::new();
        assert_eq!(player.choose(&game).await.unwrap(), Action::Place(Cell::BottomLeft));
        assert_eq!(player.choose(&game).await.unwrap(), Action::Quit);
    }
}
