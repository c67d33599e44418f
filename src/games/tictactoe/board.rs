//! Immutable 3x3 board.
//!
//! A [`Board`] is a value: every move produces a new board and leaves the
//! receiver untouched, so the evaluator can hold ancestor positions while
//! it recurses.

use super::error::{BoardError, BoardErrorKind};
use super::types::{Player, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, trace};

/// Number of squares on the board.
pub const CELL_COUNT: usize = 9;

/// Square indices of every line, scanned in this order by [`Board::find_winner`].
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

const ROWS: usize = 0;
const COLUMNS: usize = 3;
const DIAGONALS: usize = 6;

/// Three squares taken from one row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    squares: [Square; 3],
}

impl Line {
    /// Returns the three squares in board order.
    pub fn squares(&self) -> &[Square; 3] {
        &self.squares
    }

    /// Returns the player holding all three squares, if any.
    pub fn owner(&self) -> Option<Player> {
        let [a, b, c] = self.squares;
        if a == b && b == c {
            a.player()
        } else {
            None
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Parses the 9-symbol text form, e.g. `"120000000"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless the text is exactly nine symbols from
    /// `0`, `1` and `2`.
    #[track_caller]
    #[instrument]
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        let count = text.chars().count();
        if count != CELL_COUNT {
            return Err(BoardError::new(BoardErrorKind::InvalidInput(format!(
                "board must have {} cells, got {}",
                CELL_COUNT, count
            ))));
        }

        let mut squares = [Square::Empty; CELL_COUNT];
        for (slot, symbol) in squares.iter_mut().zip(text.chars()) {
            *slot = match Square::from_symbol(symbol) {
                Some(square) => square,
                None => {
                    return Err(BoardError::new(BoardErrorKind::InvalidInput(format!(
                        "invalid cell symbol {:?}",
                        symbol
                    ))));
                }
            };
        }

        Ok(Self { squares })
    }

    /// Returns the 9-symbol text form.
    pub fn to_text(&self) -> String {
        self.squares.iter().map(|square| square.symbol()).collect()
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Returns the opponent of `player`.
    pub fn opponent_of(&self, player: Player) -> Player {
        player.opponent()
    }

    /// Returns a new board with `player` placed at `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `index` is outside 0-8 and `CellOccupied`
    /// if the square is already taken.
    #[track_caller]
    pub fn apply_move(&self, player: Player, index: usize) -> Result<Self, BoardError> {
        match self.get(index) {
            None => Err(BoardError::new(BoardErrorKind::InvalidInput(format!(
                "cell index must be 0-8, got {}",
                index
            )))),
            Some(Square::Occupied(_)) => Err(BoardError::new(BoardErrorKind::CellOccupied(index))),
            Some(Square::Empty) => {
                let mut next = *self;
                next.squares[index] = Square::Occupied(player);
                trace!(index, player = %player, board = %next, "Applied move");
                Ok(next)
            }
        }
    }

    /// Checks if the square at `index` is empty. Out-of-range indices are not.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if no square has been played yet.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Checks if the board is full (all squares occupied).
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_cell_indices(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty_at(i)).collect()
    }

    /// Returns row `n` (0-2, top to bottom).
    #[track_caller]
    pub fn row(&self, n: usize) -> Result<Line, BoardError> {
        self.checked_line("row", n, 3, ROWS)
    }

    /// Returns column `n` (0-2, left to right).
    #[track_caller]
    pub fn column(&self, n: usize) -> Result<Line, BoardError> {
        self.checked_line("column", n, 3, COLUMNS)
    }

    /// Returns diagonal `n`: 0 runs top-left to bottom-right, 1 runs
    /// top-right to bottom-left.
    #[track_caller]
    pub fn diagonal(&self, n: usize) -> Result<Line, BoardError> {
        self.checked_line("diagonal", n, 2, DIAGONALS)
    }

    /// All eight lines: rows, then columns, then diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        LINES.iter().map(|indices| self.line(indices))
    }

    /// Checks if there is a winner on the board.
    ///
    /// Returns the owner of the first complete line in [`Board::lines`]
    /// order. A legally reached position has at most one.
    pub fn find_winner(&self) -> Option<Player> {
        self.lines().find_map(|line| line.owner())
    }

    /// Checks if the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.find_winner().is_none()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(player) => player.mark(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    fn line(&self, indices: &[usize; 3]) -> Line {
        Line {
            squares: indices.map(|i| self.squares[i]),
        }
    }

    #[track_caller]
    fn checked_line(
        &self,
        kind: &str,
        n: usize,
        count: usize,
        offset: usize,
    ) -> Result<Line, BoardError> {
        if n >= count {
            return Err(BoardError::new(BoardErrorKind::InvalidInput(format!(
                "{} must be 0-{}, got {}",
                kind,
                count - 1,
                n
            ))));
        }
        Ok(self.line(&LINES[offset + n]))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    #[track_caller]
    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_text(&text)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_text()
    }
}
