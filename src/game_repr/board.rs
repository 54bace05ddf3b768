use std::fmt;

use super::{Color, Move, Piece, Square, Type};
use crate::error::FenError;

/*
 * MODULE IS RESPONSIBLE FOR
 * THE RAW 8x8 GRID: NO RULES LIVE HERE
 */

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Mailbox board. `Copy`, so every snapshot and simulation is a full independent
/// copy of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard initial position, Black on rows 0-1 and White on rows 6-7
    pub fn standard() -> Self {
        const BACK: [Type; 8] = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];

        let mut board = Self::empty();
        for (col, piece_type) in BACK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Black, *piece_type));
            board.cells[1][col] = Some(Piece::new(Color::Black, Type::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, Type::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, *piece_type));
        }
        board
    }

    /// Build a board from the piece-placement field of a FEN string.
    ///
    /// The first rank in the string is row 0. Any trailing fields (side to move,
    /// castling, ...) are ignored since the engine does not track them.
    pub fn from_fen(fen_str: &str) -> Result<Board, FenError> {
        let placement = fen_str.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                match c {
                    '1'..='8' => col += c as usize - '0' as usize,
                    _ => {
                        let piece = Piece::from_char(c)?;
                        if col < 8 {
                            board.cells[row][col] = Some(piece);
                        }
                        col += 1;
                    }
                }
            }
            if col != 8 {
                return Err(FenError::RankWidth { rank: row, width: col });
            }
        }
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.cells[row][col] {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Move whatever stands on `mv.from` to `mv.to`, clearing the source.
    ///
    /// No legality test here. Returns the piece that stood on the destination.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.piece_at(mv.from);
        let captured = self.piece_at(mv.to);
        self.set(mv.to, moving);
        self.set(mv.from, None);
        captured
    }

    /// Copy of the board with `mv` applied; `self` is left alone
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply(mv);
        next
    }

    /// Every occupied square with its piece, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.is(color))
    }

    /// First square holding `color`'s king, scanning row-major
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.piece_type == Type::King)
            .map(|(sq, _)| sq)
    }

    /// Same layout with every piece's color swapped
    pub fn color_swapped(&self) -> Board {
        let mut swapped = *self;
        for row in swapped.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.map(|p| p.flipped());
            }
        }
        swapped
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let c = match self.piece_at(Square::new(row, col)) {
                    Some(piece) => piece.glyph(),
                    None => '·',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
