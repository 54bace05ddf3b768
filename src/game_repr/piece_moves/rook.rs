use super::super::{Board, Square};

impl Board {
    pub(crate) fn rook_reaches(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.offset_to(to);
        (dr == 0) != (dc == 0) && self.path_clear(from, to)
    }
}
