use super::super::{Board, Square};

impl Board {
    pub(crate) fn queen_reaches(&self, from: Square, to: Square) -> bool {
        self.rook_reaches(from, to) || self.bishop_reaches(from, to)
    }
}
