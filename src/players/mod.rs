//! Contestant trait and implementations.

mod human;
mod negamax;

pub use human::HumanContestant;
pub use negamax::NegamaxContestant;

use crate::games::tictactoe::{Board, Player};
use anyhow::Result;

/// Anything that can choose moves in a game.
pub trait Contestant {
    /// Chooses a move for `player` on `board`.
    ///
    /// Returns the square index (0-8); it must be empty.
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
