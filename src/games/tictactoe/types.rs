//! Core domain types for tic-tac-toe.

use super::error::{BoardError, BoardErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
///
/// Numbered 1 and 2 in the text board format; player one moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(strum::EnumIter)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    /// Player one, symbol `1`, rendered as X.
    One,
    /// Player two, symbol `2`, rendered as O.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Converts a raw player number (1 or 2).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for any other number.
    #[track_caller]
    #[instrument]
    pub fn from_number(number: u8) -> Result<Self, BoardError> {
        match number {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(BoardError::new(BoardErrorKind::InvalidInput(format!(
                "player must be 1 or 2, got {}",
                other
            )))),
        }
    }

    /// Raw player number as used in the text format.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Symbol for this player in the text board format.
    pub fn symbol(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }

    /// Mark shown on the rendered grid.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for Player {
    type Error = BoardError;

    #[track_caller]
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

impl FromStr for Player {
    type Err = BoardError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.trim().parse::<u8>().map_err(|_| {
            BoardError::new(BoardErrorKind::InvalidInput(format!(
                "player must be 1 or 2, got {:?}",
                s
            )))
        })?;
        Self::from_number(number)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol for this square in the text board format.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '0',
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// Parses a single text-format symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Square::Empty),
            '1' => Some(Square::Occupied(Player::One)),
            '2' => Some(Square::Occupied(Player::Two)),
            _ => None,
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}
