//! Text output for the command-line commands.
//!
//! Each function writes one command's result to `out`, so the binary passes
//! stdout and tests pass a buffer.

use crate::games::tictactoe::{
    Board, Player, analyse_each_move, analyse_each_move_with, evaluate_score, suggest_next_move,
};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::instrument;

/// Writes the score of `board` for `player`: `-1`, `0` or `1`.
#[instrument(skip(out))]
pub fn write_score(out: &mut impl Write, board: &Board, player: Player) -> Result<()> {
    let outcome = evaluate_score(board, player)?;
    writeln!(out, "{}", outcome)?;
    Ok(())
}

/// Writes one `index: score` line per empty cell, each as soon as it is
/// scored. A full board writes nothing.
#[instrument(skip(out))]
pub fn write_analysis(out: &mut impl Write, board: &Board, player: Player) -> Result<()> {
    let mut written = Ok(());
    analyse_each_move_with(board, player, |index, outcome| {
        if written.is_ok() {
            written = writeln!(out, "{}: {}", index, outcome);
        }
    })?;
    written.context("Failed to write analysis")
}

/// Writes the per-cell scores as a single JSON object line, e.g.
/// `{"4":1,"5":0}`.
#[instrument(skip(out))]
pub fn write_analysis_json(out: &mut impl Write, board: &Board, player: Player) -> Result<()> {
    let scores = analyse_each_move(board, player)?;
    writeln!(out, "{}", serde_json::to_string(&scores)?)?;
    Ok(())
}

/// Writes the suggested cell index, or `none` on a full board.
#[instrument(skip(out))]
pub fn write_suggestion(out: &mut impl Write, board: &Board, player: Player) -> Result<()> {
    match suggest_next_move(board, player)? {
        Some(index) => writeln!(out, "{}", index)?,
        None => writeln!(out, "none")?,
    }
    Ok(())
}

/// Writes the human-readable grid.
pub fn write_grid(out: &mut impl Write, board: &Board) -> Result<()> {
    writeln!(out, "{}", board.grid())?;
    Ok(())
}
