//! Per-piece move geometry.
//!
//! Each piece type answers "can this piece travel from `from` to `to` on the
//! current board", ignoring whether the move exposes its own king. The
//! dispatcher [`Board::is_legal`] rejects same-color destinations up front so
//! the per-piece rules never have to.

pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::{Board, Move, Square, Type};

impl Board {
    /// Geometric/positional legality of `mv` for the piece on `mv.from`.
    ///
    /// Self-check is not considered; see [`Board::is_safe_move`].
    pub fn is_legal(&self, mv: Move) -> bool {
        let Some(piece) = self.piece_at(mv.from) else {
            return false;
        };

        // Can't capture own pieces
        if let Some(target) = self.piece_at(mv.to) {
            if target.color == piece.color {
                return false;
            }
        }

        match piece.piece_type {
            Type::Pawn => self.pawn_reaches(mv.from, mv.to, piece.color),
            Type::Knight => self.knight_reaches(mv.from, mv.to),
            Type::Bishop => self.bishop_reaches(mv.from, mv.to),
            Type::Rook => self.rook_reaches(mv.from, mv.to),
            Type::Queen => self.queen_reaches(mv.from, mv.to),
            Type::King => self.king_reaches(mv.from, mv.to, piece.color),
        }
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful for straight or diagonal lines.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.offset_to(to);
        let (step_r, step_c) = (dr.signum(), dc.signum());

        let mut current = from;
        loop {
            current = match current.shifted(step_r, step_c) {
                Some(sq) => sq,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}
