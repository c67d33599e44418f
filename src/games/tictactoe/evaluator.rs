//! Exhaustive negamax evaluation of tic-tac-toe positions.
//!
//! Every function here searches the full game tree below the given board:
//! no pruning and no transposition table. Scores are always from the
//! perspective of the player passed in, and a child position's score is the
//! negation of the opponent's score for it.
//!
//! Board errors raised while searching are returned unchanged.

use super::board::Board;
use super::error::BoardError;
use super::types::Player;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Neg;
use tracing::{debug, instrument};

/// Game-theoretic value of a position for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "i8")]
pub enum Outcome {
    /// The player loses against best play.
    Loss = -1,
    /// Best play from both sides ends in a draw.
    Draw = 0,
    /// The player wins against any defence.
    Win = 1,
}

impl Outcome {
    /// Signed score: -1, 0 or +1.
    pub fn score(self) -> i8 {
        self as i8
    }
}

impl Neg for Outcome {
    type Output = Outcome;

    fn neg(self) -> Self::Output {
        match self {
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Loss,
        }
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> Self {
        outcome.score()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.score())
    }
}

/// Scores `board` for `player`, assuming `player` moves next.
///
/// A won board scores `Win` for the winner and `Loss` for the other side, a
/// full board without a winner is a `Draw`, and anything else takes the best
/// move score over every empty square.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate_score(board: &Board, player: Player) -> Result<Outcome, BoardError> {
    let outcome = negamax(board, player)?;
    debug!(score = outcome.score(), "Evaluated position");
    Ok(outcome)
}

/// Scores every empty square for `player`, keyed by ascending index.
///
/// Returns an empty map for a full board.
pub fn analyse_each_move(
    board: &Board,
    player: Player,
) -> Result<BTreeMap<usize, Outcome>, BoardError> {
    analyse_each_move_with(board, player, |_, _| {})
}

/// Like [`analyse_each_move`], calling `visitor` with each `(index, score)`
/// pair as it is computed, in ascending index order.
///
/// The visitor runs exactly once per empty square, before this returns.
#[instrument(skip(board, visitor), fields(board = %board))]
pub fn analyse_each_move_with<F>(
    board: &Board,
    player: Player,
    mut visitor: F,
) -> Result<BTreeMap<usize, Outcome>, BoardError>
where
    F: FnMut(usize, Outcome),
{
    let mut scores = BTreeMap::new();
    for index in board.empty_cell_indices() {
        let outcome = move_score(board, player, index)?;
        debug!(index, score = outcome.score(), "Scored move");
        visitor(index, outcome);
        scores.insert(index, outcome);
    }
    Ok(scores)
}

/// Picks the best square for `player`, or `None` on a full board.
///
/// Ties go to the lowest index. With a single empty square that square is
/// returned without searching.
#[instrument(skip(board), fields(board = %board))]
pub fn suggest_next_move(board: &Board, player: Player) -> Result<Option<usize>, BoardError> {
    let empty = board.empty_cell_indices();
    match empty.as_slice() {
        [] => return Ok(None),
        [only] => return Ok(Some(*only)),
        _ => {}
    }

    let mut best: Option<(usize, Outcome)> = None;
    for (index, outcome) in analyse_each_move(board, player)? {
        match best {
            Some((_, top)) if outcome <= top => {}
            _ => best = Some((index, outcome)),
        }
    }

    let suggestion = best.map(|(index, _)| index);
    debug!(?suggestion, "Suggested move");
    Ok(suggestion)
}

/// Parses `text` as a board and delegates to [`suggest_next_move`].
///
/// # Errors
///
/// Returns `InvalidInput` if `text` is not a valid board.
#[track_caller]
pub fn suggest_next_move_from_text(
    text: &str,
    player: Player,
) -> Result<Option<usize>, BoardError> {
    let board = Board::from_text(text)?;
    suggest_next_move(&board, player)
}

fn negamax(board: &Board, player: Player) -> Result<Outcome, BoardError> {
    if let Some(winner) = board.find_winner() {
        return Ok(if winner == player {
            Outcome::Win
        } else {
            Outcome::Loss
        });
    }
    if board.is_full() {
        return Ok(Outcome::Draw);
    }

    let mut best = Outcome::Loss;
    for index in board.empty_cell_indices() {
        best = best.max(move_score(board, player, index)?);
    }
    Ok(best)
}

fn move_score(board: &Board, player: Player, index: usize) -> Result<Outcome, BoardError> {
    let next = board.apply_move(player, index)?;
    Ok(-negamax(&next, board.opponent_of(player))?)
}
