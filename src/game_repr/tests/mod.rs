use super::*;
use crate::error::MoveError;

// ==================== HELPER FUNCTIONS ====================

/// Shorthand for a square
pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

/// Shorthand for a move between two (row, col) pairs
pub fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::new(sq(from.0, from.1), sq(to.0, to.1))
}

/// Helper function to create an empty board
pub fn empty_board() -> Board {
    Board::empty()
}

/// Helper function to place a piece
pub fn place_piece(board: &mut Board, row: u8, col: u8, color: Color, piece_type: Type) {
    board.set(sq(row, col), Some(Piece::new(color, piece_type)));
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: (u8, u8), to: (u8, u8)) -> bool {
    moves.iter().any(|m| *m == mv(from, to))
}

// ==================== TEST MODULES ====================

mod piece_movement;
mod king_movement;
mod promotion;
