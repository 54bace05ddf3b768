//! Player trait and associated types for move sources.
//!
//! A "player" is anything that can be asked for a move for one side on a given
//! board: the automated [`GreedyPlayer`](crate::agent::GreedyPlayer), a scripted
//! sequence in a test, or a random mover in the demo binary. Human input does
//! not go through this trait; it reaches the engine through the orchestrator's
//! move and selection calls.
//!
//! # Synchronous Design
//!
//! `get_move()` is synchronous. The orchestrator decides *when* to ask (the
//! deferred reply timer); the player only decides *what* to play.

use crate::game_repr::{Board, CheckStatus, Color, Move};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// The side to move has no legal move but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Interpret the check status of the side to move.
    ///
    /// `None` while that side still has a legal move.
    pub fn from_status(to_move: Color, status: CheckStatus) -> Option<Self> {
        if status.is_checkmate() {
            Some(Self::from_winner(to_move.opposite()))
        } else if status.is_stalemate() {
            Some(GameResult::Stalemate)
        } else {
            None
        }
    }
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented.
pub trait Player {
    /// Request the next move for `color` on `board`.
    ///
    /// - `Some(Move)`: the chosen move, expected to be safe on `board`
    /// - `None`: no move available (or the player gives up)
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Notification that the game reached a terminal state
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Display name
    fn name(&self) -> &str {
        "Player"
    }
}
