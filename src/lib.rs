//! Clever Tic-Tac-Toe library - exhaustive game-tree search for 3x3 boards
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 position with validation, move application,
//!   line extraction and win/draw detection
//! - **Evaluator**: stateless negamax search that scores positions, ranks
//!   moves and suggests the best one
//! - **Players**: human and computer contestants for interactive play
//! - **Orchestrator**: runs a game between two contestants
//! - **Report**: text output for the command-line commands
//!
//! # Example
//!
//! ```
//! use clever_tictactoe::{Board, Player, suggest_next_move};
//!
//! # fn example() -> Result<(), clever_tictactoe::BoardError> {
//! let board = Board::from_text("012022011")?;
//! assert_eq!(suggest_next_move(&board, Player::One)?, Some(6));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

pub mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, BoardErrorKind, CELL_COUNT, Line, Outcome, Player, Position, Square,
    analyse_each_move, analyse_each_move_with, evaluate_score, suggest_next_move,
    suggest_next_move_from_text,
};

// Crate-level exports - Contestants
pub use players::{Contestant, HumanContestant, NegamaxContestant};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};
