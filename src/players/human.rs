//! Human contestant reading moves from a line-based input.

use super::Contestant;
use crate::games::tictactoe::{Board, Player, Position};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player typing a cell number (0-8) or label such as `center`.
///
/// Unknown or occupied choices are reported and asked again.
pub struct HumanContestant<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanContestant<R, W> {
    /// Creates a human contestant over the given input and prompt output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Contestant for HumanContestant<R, W> {
    #[instrument(skip(self, board), fields(human = %self.name, board = %board))]
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        loop {
            write!(self.output, "{} ({}), your move: ", self.name, player.mark())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed");
            }

            match Position::from_label_or_number(&line) {
                Some(pos) if board.is_empty_at(pos.to_index()) => {
                    debug!(position = %pos, "Human chose position");
                    return Ok(pos.to_index());
                }
                Some(pos) => writeln!(self.output, "{} is already taken.", pos)?,
                None => writeln!(
                    self.output,
                    "Enter a cell number 0-8 or a name like \"center\"."
                )?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
