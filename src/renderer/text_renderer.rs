//! Plain-text renderer.
//!
//! Writes the board with Unicode glyphs, cue names and the final result to any
//! `io::Write`. Used by the demo binary; write errors are logged and dropped
//! since a broken terminal must not stop the game.

use std::io::{self, Write};

use super::{Cue, Renderer};
use crate::agent::player::GameResult;
use crate::game_repr::{Board, Color, Square};

pub struct TextRenderer<W: Write> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            log::warn!("text renderer write failed: {}", err);
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_board(&mut self, board: &Board, selected: Option<Square>, turn: Color) {
        let mut text = board.to_string();
        if let Some(square) = selected {
            text.push_str(&format!("selected: {}\n", square));
        }
        text.push_str(&format!("Turn: {:?}\n", turn));
        self.emit(&text);
    }

    fn play_cue(&mut self, cue: Cue) {
        self.emit(&format!("[{:?}]\n", cue));
    }

    fn announce(&mut self, result: GameResult) {
        let text = match result {
            GameResult::WhiteWins => "White wins by checkmate!\n",
            GameResult::BlackWins => "Black wins by checkmate!\n",
            GameResult::Stalemate => "Game over! Stalemate.\n",
        };
        self.emit(text);
    }
}
