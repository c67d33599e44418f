//! Game orchestration between contestants.

use crate::games::tictactoe::{Board, Player};
use crate::players::Contestant;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Events reported while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A contestant is about to move.
    Turn {
        /// Name of the contestant to move.
        name: String,
        /// Side to move.
        player: Player,
    },
    /// Move was made.
    MoveMade {
        /// Side that moved.
        player: Player,
        /// Square index played.
        index: usize,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver {
        /// Winner, or `None` for a draw.
        winner: Option<Player>,
    },
}

/// Orchestrates gameplay between two contestants. Player one moves first.
pub struct Orchestrator {
    board: Board,
    player_one: Box<dyn Contestant>,
    player_two: Box<dyn Contestant>,
}

impl Orchestrator {
    /// Creates a new orchestrator on an empty board.
    pub fn new(player_one: Box<dyn Contestant>, player_two: Box<dyn Contestant>) -> Self {
        Self::from_board(Board::new(), player_one, player_two)
    }

    /// Creates an orchestrator that continues from `board`.
    ///
    /// The side to move is player one when both have played equally often,
    /// otherwise player two.
    pub fn from_board(
        board: Board,
        player_one: Box<dyn Contestant>,
        player_two: Box<dyn Contestant>,
    ) -> Self {
        Self {
            board,
            player_one,
            player_two,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until a win or a full board.
    ///
    /// Returns the winner, or `None` for a draw.
    #[instrument(skip_all, fields(board = %self.board))]
    pub fn run<F>(&mut self, mut on_event: F) -> Result<Option<Player>>
    where
        F: FnMut(&GameEvent) -> Result<()>,
    {
        info!("Starting game orchestration");

        loop {
            if let Some(winner) = self.board.find_winner() {
                on_event(&GameEvent::GameOver {
                    winner: Some(winner),
                })?;
                return Ok(Some(winner));
            }
            if self.board.is_full() {
                on_event(&GameEvent::GameOver { winner: None })?;
                return Ok(None);
            }

            let player = self.to_move();
            let contestant = match player {
                Player::One => &mut self.player_one,
                Player::Two => &mut self.player_two,
            };
            on_event(&GameEvent::Turn {
                name: contestant.name().to_string(),
                player,
            })?;

            debug!(player = %contestant.name(), "Waiting for move");
            let index = contestant.choose_move(&self.board, player)?;
            self.board = self.board.apply_move(player, index)?;

            on_event(&GameEvent::MoveMade {
                player,
                index,
                board: self.board,
            })?;
        }
    }

    fn to_move(&self) -> Player {
        let (ones, twos) = self
            .board
            .squares()
            .iter()
            .fold((0, 0), |(ones, twos), square| match square.player() {
                Some(Player::One) => (ones + 1, twos),
                Some(Player::Two) => (ones, twos + 1),
                None => (ones, twos),
            });
        if ones > twos {
            Player::Two
        } else {
            Player::One
        }
    }
}
