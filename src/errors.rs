//! Errors used throughout the rules engine.
//!
//! The core operations (`make_move`, `undo_move` and the legal-move query)
//! never fail. Errors only arise at the guarded edges of the API: custom
//! position setup, the membership-checked `try_make_move` entry point,
//! square lookups coming from an input layer, and move-selection
//! collaborators that hand back something outside the legal list.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A move was offered that is not in the legal set of the current state.
    #[error("illegal move: {notation}")]
    IllegalMove { notation: String },

    /// No legal move connects the two squares.
    #[error("no legal move from {from} to {to}")]
    NoMoveAt { from: String, to: String },

    /// Setup placed no king for this color.
    #[error("position has no {0} king")]
    MissingKing(Color),

    /// Setup placed more than one king for this color.
    #[error("position has more than one {0} king")]
    DuplicateKing(Color),

    /// Coordinates outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    SquareOutOfBounds { row: u8, col: u8 },

    /// En-passant target that no double-step could have produced.
    #[error("invalid en-passant target: {0}")]
    InvalidEnPassantTarget(String),

    /// A move-selection collaborator failed or broke its contract.
    #[error("engine error: {0}")]
    Engine(String),

    #[error("worker thread panicked: {0}")]
    WorkerPanicked(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
