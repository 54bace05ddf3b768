use super::super::{Board, Color, Piece, Square, Type};

impl Board {
    /// One step in any direction, or a two-column castling step.
    pub(crate) fn king_reaches(&self, from: Square, to: Square, color: Color) -> bool {
        let (dr, dc) = from.offset_to(to);
        if dr.abs() <= 1 && dc.abs() <= 1 {
            return true;
        }

        dr == 0 && dc.abs() == 2 && self.can_castle(to, color)
    }

    /// Castling is inferred from the current occupancy only: no record of
    /// earlier king or rook moves exists, and the squares the king crosses are
    /// not tested for attacks.
    fn can_castle(&self, to: Square, color: Color) -> bool {
        // Destination emptiness goes first. It keeps the check test below from
        // recursing when this is asked on behalf of `is_in_check`, whose target
        // square always holds a king.
        if !self.is_empty(to) {
            return false;
        }

        let home = color.home_rank();
        let rook = Some(Piece::new(color, Type::Rook));
        let empty = |col: u8| self.is_empty(Square::new(home, col));

        let side_clear = match to.col() {
            6 => self.piece_at(Square::new(home, 7)) == rook && empty(5) && empty(6),
            2 => self.piece_at(Square::new(home, 0)) == rook && empty(1) && empty(2) && empty(3),
            _ => false,
        };

        side_clear && !self.is_in_check(color)
    }
}
