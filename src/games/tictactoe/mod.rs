//! Tic-tac-toe board model and negamax evaluator.

mod board;
mod error;
mod evaluator;
mod position;
mod types;

pub use board::{Board, CELL_COUNT, Line};
pub use error::{BoardError, BoardErrorKind};
pub use evaluator::{
    Outcome, analyse_each_move, analyse_each_move_with, evaluate_score, suggest_next_move,
    suggest_next_move_from_text,
};
pub use position::Position;
pub use types::{Player, Square};
