//! Errors used throughout the checkers engine.
//!
//! `CheckersErrors` is the single error type across the crate. Every variant
//! is an expected, recoverable condition: callers driving a game from user
//! input re-prompt, the automated opponent skips its turn, and configuration
//! or diagram loaders report the offending input.
//!
//! Grouping by how a caller usually reacts:
//! - invalid selections (`OutOfBounds`, `EmptyCell`, `NotSideToMove`,
//!   `CaptureRequiredElsewhere`): clear the pending selection and report
//!   failure.
//! - illegal destinations (`NoSelection`, `IllegalDestination`): the move is
//!   rejected, nothing on the board changes.
//! - `UnplayableCell`: a position was set up with a piece off the dark cells.
//! - `NoLegalMoves`: the search found nothing to play for the side to move.
//! - `InvalidDiagram`, `InvalidConfig`: malformed tooling input.

use thiserror::Error;

use crate::game_state::checkers_types::{BoardLocation, Color};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersErrors {
    /// A coordinate outside `0..8` on either axis.
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Tried to select a cell with no piece on it.
    #[error("no piece at {0}")]
    EmptyCell(BoardLocation),

    /// Tried to select a piece belonging to the side not on move.
    #[error("piece at {location} belongs to {owner}, but {to_move} is to move")]
    NotSideToMove {
        location: BoardLocation,
        owner: Color,
        to_move: Color,
    },

    /// The piece has no capture while another piece of the same side does.
    #[error("piece at {0} cannot capture while a capture is mandatory")]
    CaptureRequiredElsewhere(BoardLocation),

    /// A destination was submitted with no piece selected.
    #[error("no piece is selected")]
    NoSelection,

    /// The destination is not in the selected piece's legal move map.
    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination {
        from: BoardLocation,
        to: BoardLocation,
    },

    /// A piece was placed on a cell where `(row + col)` is even.
    #[error("{0} is not a playable cell")]
    UnplayableCell(BoardLocation),

    /// The side to move has nothing to play.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type CheckersResult<T> = Result<T, CheckersErrors>;
