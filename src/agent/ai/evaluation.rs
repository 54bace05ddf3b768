// Material evaluation.
// Positive scores favour Black, the side the automated opponent plays by default.

use crate::game_repr::{Board, Color};

/// Material balance: Black's pieces count positively, White's negatively.
///
/// Values are Pawn 1, Knight 3, Bishop 3, Rook 5, Queen 9, King 1000.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::Black => piece.piece_type.value(),
            Color::White => -piece.piece_type.value(),
        })
        .sum()
}

/// Score from `color`'s point of view. For Black this is exactly [`evaluate`].
pub fn score_for(board: &Board, color: Color) -> i32 {
    match color {
        Color::Black => evaluate(board),
        Color::White => -evaluate(board),
    }
}
