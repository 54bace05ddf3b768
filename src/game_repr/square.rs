use std::fmt;

use crate::error::MoveError;

/// A cell of the 8x8 grid.
///
/// Row 0 is Black's back rank and row 7 is White's; columns run 0..=7 from the
/// queen's side to the king's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 7. Use `Square::try_from` for
    /// coordinates coming from outside the engine.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of bounds");
        Self { row, col }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Signed (row, col) distance from `self` to `other`
    pub fn offset_to(&self, other: Square) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }

    /// Square reached by stepping `(dr, dc)`, if it is still on the board
    pub fn shifted(&self, dr: i32, dc: i32) -> Option<Square> {
        Square::try_from((self.row as i32 + dr, self.col as i32 + dc)).ok()
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = MoveError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(MoveError::OffBoard { row, col })
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
