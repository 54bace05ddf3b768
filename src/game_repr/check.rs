use smallvec::SmallVec;

use super::{Board, Color, Move, Square};

/*
 * CHECK, SAFETY AND "ANY MOVE LEFT" QUERIES.
 * ALL OF THEM READ THE BOARD; HYPOTHETICAL MOVES ARE PLAYED ON COPIES.
 */

impl Board {
    /// Whether `color`'s king is attacked by any opposing piece.
    ///
    /// A board without a king of that color is reported as not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            log::warn!("check query for {:?} on a board without that king", color);
            return false;
        };

        self.pieces_of(color.opposite())
            .any(|(sq, _)| self.is_legal(Move::new(sq, king)))
    }

    /// Legal for the piece on `mv.from` and does not leave `color` in check.
    pub fn is_safe_move(&self, mv: Move, color: Color) -> bool {
        self.is_legal(mv) && !self.with_move(mv).is_in_check(color)
    }

    /// Every (own piece, any square) pair, row-major over both coordinates.
    ///
    /// This is the enumeration order the selector's tie-breaking relies on.
    pub fn candidate_moves(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        self.pieces_of(color)
            .flat_map(|(from, _)| Square::all().map(move |to| Move::new(from, to)))
    }

    /// All safe moves for `color`, in enumeration order
    pub fn safe_moves(&self, color: Color) -> SmallVec<[Move; 64]> {
        self.candidate_moves(color)
            .filter(|&mv| self.is_safe_move(mv, color))
            .collect()
    }

    /// True when `color` has no safe move at all.
    ///
    /// This fires for both checkmate and stalemate; tell them apart with
    /// [`Board::is_in_check`].
    pub fn has_no_legal_moves(&self, color: Color) -> bool {
        !self
            .candidate_moves(color)
            .any(|mv| self.is_safe_move(mv, color))
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.has_no_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && self.has_no_legal_moves(color)
    }
}
