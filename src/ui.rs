//! Plain-text rendering of game events.

use crate::games::tictactoe::Verdict;
use crate::orchestrator::GameEvent;

/// Renders one event as the text printed to the terminal.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::Started { board } => format!("New game.\n\n{}\n", board.display()),
        GameEvent::AwaitingInput { name, side } => format!(
            "{} ({}): enter 1-9, x,y or a cell name; undo, new, hint, quit",
            name,
            side.symbol()
        ),
        GameEvent::Thinking { name } => format!("{} is thinking...", name),
        GameEvent::MoveMade { name, mv, board } => {
            format!("{} played {}\n\n{}\n", name, mv.cell, board.display())
        }
        GameEvent::Rejected(e) => format!("Can't do that: {}", e),
        GameEvent::Unrecognized(input) => format!("Didn't understand {:?}", input),
        GameEvent::Hint(cell) => format!("Hint: {}", cell),
        GameEvent::TookBack { moves, board } => {
            format!("Took back {} move(s).\n\n{}\n", moves, board.display())
        }
        GameEvent::GameOver { verdict, winner } => match (verdict, winner) {
            (Verdict::Won { line, .. }, Some(name)) => format!(
                "{} won! ({}, {}, {})\nType new to play again or quit to exit.",
                name,
                line[0].label(),
                line[1].label(),
                line[2].label()
            ),
            _ => "It was a draw.\nType new to play again or quit to exit.".to_string(),
        },
        GameEvent::Quit => "Goodbye.".to_string(),
    }
}
