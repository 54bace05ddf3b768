use crate::error::FenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Material value used by the evaluator
    pub fn value(&self) -> i32 {
        match self {
            Type::Pawn => 1,
            Type::Knight => 3,
            Type::Bishop => 3,
            Type::Rook => 5,
            Type::Queen => 9,
            Type::King => 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a forward pawn step. White marches toward row 0.
    pub fn pawn_direction(&self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row the pawns of this color start on
    pub fn pawn_rank(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Back rank holding this color's king and rooks at the start
    pub fn home_rank(&self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub fn from_char(c: char) -> Result<Self, FenError> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return Err(FenError::InvalidPiece { ch: c }),
        };
        Ok(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Unicode chess symbol for text rendering
    pub fn glyph(&self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, Type::Pawn) => '♙',
            (Color::White, Type::Rook) => '♖',
            (Color::White, Type::Knight) => '♘',
            (Color::White, Type::Bishop) => '♗',
            (Color::White, Type::Queen) => '♕',
            (Color::White, Type::King) => '♔',
            (Color::Black, Type::Pawn) => '♟',
            (Color::Black, Type::Rook) => '♜',
            (Color::Black, Type::Knight) => '♞',
            (Color::Black, Type::Bishop) => '♝',
            (Color::Black, Type::Queen) => '♛',
            (Color::Black, Type::King) => '♚',
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    /// Same piece type, other side
    pub fn flipped(&self) -> Self {
        Self {
            color: self.color.opposite(),
            piece_type: self.piece_type,
        }
    }
}
