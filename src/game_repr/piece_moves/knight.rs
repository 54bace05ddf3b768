use super::super::{Board, Square};

impl Board {
    pub(crate) fn knight_reaches(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.offset_to(to);
        matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
    }
}
