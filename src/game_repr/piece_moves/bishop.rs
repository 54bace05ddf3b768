use super::super::{Board, Square};

impl Board {
    pub(crate) fn bishop_reaches(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.offset_to(to);
        dr != 0 && dr.abs() == dc.abs() && self.path_clear(from, to)
    }
}
