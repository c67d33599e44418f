//! Command-line interface for clever_tictactoe.

use clever_tictactoe::{Board, Player};
use clap::{Parser, Subcommand};

/// Clever Tic-Tac-Toe - exhaustive negamax analysis of 3x3 positions
///
/// Boards are nine symbols in row-major order: 0 empty, 1 and 2 for the
/// players, e.g. 121200000.
#[derive(Parser, Debug)]
#[command(name = "clever_tictactoe")]
#[command(about = "Score, analyse and play tic-tac-toe positions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the score (-1, 0 or 1) of a board for a player
    Score {
        /// Board in 9-symbol form
        board: Board,

        /// Player to move (1 or 2)
        #[arg(short, long)]
        player: Player,
    },

    /// Print the score of every empty cell for a player
    Analyse {
        /// Board in 9-symbol form
        board: Board,

        /// Player to move (1 or 2)
        #[arg(short, long)]
        player: Player,

        /// Print the scores as a JSON object instead of one line per cell
        #[arg(long)]
        json: bool,
    },

    /// Print the best cell for a player, or "none" on a full board
    Suggest {
        /// Board in 9-symbol form
        board: Board,

        /// Player to move (1 or 2)
        #[arg(short, long)]
        player: Player,
    },

    /// Print a board as a grid
    Render {
        /// Board in 9-symbol form
        board: Board,
    },

    /// Play against the computer on the terminal
    Play {
        /// Path to a TOML play configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side for the human (1 or 2), overriding the configuration
        #[arg(long)]
        human: Option<Player>,
    },
}
