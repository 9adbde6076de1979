//! Strictly Minimax - Unified CLI
//!
//! Terminal front end for the perfect-play tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use strictly_minimax::{
    Analysis, Board, EnginePlayer, GameEvent, HumanPlayer, Orchestrator, PlayConfig, Player,
    Side, render,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            side,
            hints,
        } => {
            let config = PlayConfig::load(config.as_deref())?
                .with_overrides(side.map(Side::from), hints);
            init_tracing(config.log_level());
            run_play(config).await
        }
        Command::Best { board, json } => {
            init_tracing("warn");
            run_best(&board, json)
        }
        Command::Selfplay => {
            init_tracing("warn");
            run_selfplay().await
        }
    }
}

/// Installs the log subscriber; `RUST_LOG` wins over `fallback`.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play a human against the engine.
#[instrument(skip(config))]
async fn run_play(config: PlayConfig) -> Result<()> {
    info!(
        human_side = ?config.human_side(),
        engine_side = ?config.engine_side(),
        "Starting interactive game"
    );

    // Stdin is read on a plain thread so a pending read never holds up
    // runtime shutdown.
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });

    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", input_rx));
    let engine: Box<dyn Player> = Box::new(EnginePlayer::new("The engine"));
    let (first, second) = match config.human_side() {
        Side::First => (human, engine),
        Side::Second => (engine, human),
    };

    let (event_tx, printer) = spawn_printer();
    let orchestrator =
        Orchestrator::new(first, second, event_tx).with_hints(*config.show_hints());
    drive(orchestrator, printer).await
}

/// Let the engine play itself.
#[instrument]
async fn run_selfplay() -> Result<()> {
    let (event_tx, printer) = spawn_printer();
    let orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
        event_tx,
    );
    drive(orchestrator, printer).await
}

/// Print the analysis of one board.
#[instrument]
fn run_best(notation: &str, json: bool) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))?;
    let analysis = Analysis::of(&board);
    debug!(?analysis, "Analysis complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis.to_text(&board));
    }
    Ok(())
}

/// Spawns the task printing game events; returns its sender and handle.
fn spawn_printer() -> (mpsc::UnboundedSender<GameEvent>, JoinHandle<()>) {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
    let handle = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            println!("{}", render(&event));
        }
    });
    (event_tx, handle)
}

/// Runs the session, then lets the printer drain before returning.
async fn drive(mut orchestrator: Orchestrator, printer: JoinHandle<()>) -> Result<()> {
    let verdict = orchestrator.run().await?;
    // Dropping the orchestrator closes the event channel.
    drop(orchestrator);
    printer.await.context("Printer task failed")?;
    info!(%verdict, "Session finished");
    Ok(())
}
