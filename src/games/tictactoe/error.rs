//! Board error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong with a board operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// A structurally invalid argument: malformed board text, bad player
    /// number, or an out-of-range cell, row, column or diagonal index.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// A move targeted a square that is already taken.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BoardErrorKind {
        &self.kind
    }
}

impl PartialEq for BoardError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for BoardError {}
