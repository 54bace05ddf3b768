use super::super::{Board, Color, Square};

impl Board {
    /// Pawns step forward onto empty squares (two steps from the starting rank)
    /// and capture one square diagonally forward. No en-passant, no promotion.
    pub(crate) fn pawn_reaches(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let (dr, dc) = from.offset_to(to);
        let dest_empty = self.is_empty(to);

        // single push
        if dc == 0 && dr == dir && dest_empty {
            return true;
        }

        // double push from the starting rank, both squares empty
        if dc == 0 && dr == 2 * dir && from.row() == color.pawn_rank() && dest_empty {
            return from
                .shifted(dir, 0)
                .map_or(false, |middle| self.is_empty(middle));
        }

        // diagonal capture
        dc.abs() == 1 && dr == dir && !dest_empty
    }
}
