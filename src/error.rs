//! Error types for the rules engine
//!
//! Rejected moves, board-placement parsing failures and unknown difficulty
//! names. None of these are I/O errors: every failure is a logical rejection and
//! leaves the game state untouched.

use crate::game_repr::{Color, Square};
use thiserror::Error;

/// Reasons a move request is turned down
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the 8x8 grid
    #[error("Square ({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },

    /// Nothing to move on the source square
    #[error("No piece at source square {square}")]
    EmptySquare { square: Square },

    /// The piece on the source square belongs to the side not on move
    #[error("Piece at square {square} belongs to {owner:?}, but {to_move:?} is on move")]
    NotYourTurn {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    /// The piece cannot geometrically reach the destination
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// The move would leave the mover's own king attacked
    #[error("Move from {from} to {to} leaves the {color:?} king in check")]
    LeavesKingInCheck {
        from: Square,
        to: Square,
        color: Color,
    },

    /// Checkmate or stalemate was reached; start a new game or undo
    #[error("Game is over")]
    GameOver,
}

/// Errors while parsing the piece-placement field of a FEN string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("Expected 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("Rank {rank} describes {width} files instead of 8")]
    RankWidth { rank: usize, width: usize },

    #[error("Invalid piece character '{ch}'")]
    InvalidPiece { ch: char },
}

/// Unknown difficulty name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

/// Result type alias for move operations
pub type MoveResult<T> = Result<T, MoveError>;
