//! Errors used throughout the draughts engine.
//!
//! `CheckersError` is the single error type for input parsing, board
//! construction and the turn driver. Move legality itself is not an error:
//! the validator reports it as a `MoveClass` value, and only the turn driver
//! lifts a rejected move into `CheckersError::IllegalMove` so that callers
//! can re-prompt.

use crate::game_state::checkers_types::{IllegalMove, Player, Square};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Column outside `A..=H` or row outside `1..=8`.
    #[error("invalid coordinate: column {column:?}, row {row}")]
    InvalidCoordinate { column: char, row: i32 },

    /// Text that is not of the form `<column letter><row number>`.
    #[error("malformed coordinate {0:?}, expected a column letter followed by a row number")]
    MalformedCoordinate(String),

    /// Square index outside `0..=63`.
    #[error("square index {0} is out of range")]
    SquareOutOfRange(Square),

    /// Masks given to `BoardState::from_masks` share squares.
    #[error("black and white pieces overlap on mask {0:#018x}")]
    OverlappingPieces(u64),

    /// King flags on squares that hold no piece.
    #[error("king flags set on empty squares {0:#018x}")]
    OrphanKings(u64),

    #[error("illegal move from {start} to {end}: {reason}")]
    IllegalMove {
        start: Square,
        end: Square,
        reason: IllegalMove,
    },

    /// A pending capture chain only accepts further jumps.
    #[error("the piece on {start} must keep capturing; {end} is not a jump")]
    ChainRequiresCapture { start: Square, end: Square },

    #[error("a capture chain from square {0} must be finished first")]
    ChainPending(Square),

    #[error("no capture chain is pending")]
    NoChainPending,

    #[error("the game is over, {0} won")]
    GameOver(Player),
}

pub type CheckersResult<T> = Result<T, CheckersError>;
