//! Computer contestant backed by the exhaustive evaluator.

use super::Contestant;
use crate::games::tictactoe::{Board, Player, analyse_each_move_with, suggest_next_move};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, instrument};

/// Plays the move [`suggest_next_move`] picks.
///
/// With a report sink attached, the per-move scores are written there
/// before each choice.
pub struct NegamaxContestant<W> {
    name: String,
    report: Option<W>,
}

impl NegamaxContestant<std::io::Sink> {
    /// Creates a silent computer contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            report: None,
        }
    }
}

impl<W: Write> NegamaxContestant<W> {
    /// Creates a computer contestant that writes its analysis to `report`.
    pub fn with_report(name: impl Into<String>, report: W) -> Self {
        Self {
            name: name.into(),
            report: Some(report),
        }
    }
}

impl<W: Write> Contestant for NegamaxContestant<W> {
    #[instrument(skip(self, board), fields(ai = %self.name, board = %board))]
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        if let Some(report) = self.report.as_mut() {
            let mut written = Ok(());
            analyse_each_move_with(board, player, |index, outcome| {
                if written.is_ok() {
                    written = writeln!(report, "  cell {}: {}", index, outcome);
                }
            })?;
            written?;
        }

        let index = suggest_next_move(board, player)?
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(ai = %self.name, position = index, "AI chose position");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
