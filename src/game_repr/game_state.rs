use super::{Board, Color, Move, Piece};
use crate::error::{MoveError, MoveResult};

/// What an accepted move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

/// Answer to "how is `color` doing", consumed after every move.
///
/// The two flags are independent facts; [`CheckStatus::is_checkmate`] and
/// [`CheckStatus::is_stalemate`] are the caller-side interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckStatus {
    pub in_check: bool,
    pub no_legal_moves: bool,
}

impl CheckStatus {
    pub fn is_checkmate(&self) -> bool {
        self.in_check && self.no_legal_moves
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check && self.no_legal_moves
    }
}

/// Live board, side to move and the undo history.
///
/// Every history entry is a full copy of the board taken right before the move
/// that replaced it, so popping entries walks back through every prior board
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    history: Vec<Board>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard initial position, White to move
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Validate and commit a move for the side to move.
    ///
    /// On success the pre-move board is pushed onto the history and the turn
    /// passes to the opponent. On failure the board is exactly as before.
    pub fn try_move(&mut self, mv: Move) -> MoveResult<MoveRecord> {
        let moved = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { square: mv.from })?;

        if moved.color != self.turn {
            return Err(MoveError::NotYourTurn {
                square: mv.from,
                owner: moved.color,
                to_move: self.turn,
            });
        }

        if !self.board.is_legal(mv) {
            log::debug!("rejected {} for {:?}: illegal", mv, moved);
            return Err(MoveError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        let snapshot = self.board;
        let captured = self.board.apply(mv);

        if self.board.is_in_check(moved.color) {
            self.board = snapshot;
            log::debug!("rejected {} for {:?}: leaves king in check", mv, moved);
            return Err(MoveError::LeavesKingInCheck {
                from: mv.from,
                to: mv.to,
                color: moved.color,
            });
        }

        self.history.push(snapshot);
        self.turn = self.turn.opposite();
        log::debug!("{:?} {} (captured: {:?})", moved, mv, captured);

        Ok(MoveRecord {
            mv,
            moved,
            captured,
        })
    }

    /// Step back one move. Returns the restored board, or `None` when there is
    /// nothing to undo (state untouched).
    pub fn undo(&mut self) -> Option<Board> {
        let previous = self.history.pop()?;
        self.board = previous;
        self.turn = self.turn.opposite();
        Some(previous)
    }

    /// Back to the initial position with an empty history and White to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn check_status(&self, color: Color) -> CheckStatus {
        CheckStatus {
            in_check: self.board.is_in_check(color),
            no_legal_moves: self.board.has_no_legal_moves(color),
        }
    }
}
