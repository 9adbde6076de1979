//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_minimax::Side;

/// Strictly Minimax - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against an engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Side selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideArg {
    /// Play X and move first
    First,
    /// Play O and move second
    Second,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::First => Side::First,
            SideArg::Second => Side::Second,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side you play (overrides the config file)
        #[arg(short, long, value_enum)]
        side: Option<SideArg>,

        /// Show the engine's recommended move before each of your turns
        #[arg(long)]
        hints: bool,
    },

    /// Print the verdict and best move for a board
    Best {
        /// Board in row-major notation, e.g. "XO./.X./..."
        board: String,

        /// Emit the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides
    Selfplay,
}
