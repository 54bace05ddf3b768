use crate::agent::player::GameResult;
use crate::game_repr::{Board, Color, Square};

pub mod text_renderer;
pub use text_renderer::TextRenderer;

/// Short feedback signals the front end turns into sounds or effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A move landed on an empty square
    Move,
    /// A move took an opposing piece
    Capture,
    /// The side now to move is in check
    Check,
}

/// Trait for the presentation side of the game.
///
/// The engine never draws or plays anything itself; it calls into this trait
/// after state changes. Mapping screen input to squares is also the front end's
/// job, so there is no input method here.
pub trait Renderer {
    /// Draw the current board
    ///
    /// # Arguments
    /// * `board` - The board to show
    /// * `selected` - Square the human has picked up, if any
    /// * `turn` - Side to move
    fn draw_board(&mut self, board: &Board, selected: Option<Square>, turn: Color);

    /// Play a feedback cue
    fn play_cue(&mut self, cue: Cue);

    /// Announce the end of the game
    fn announce(&mut self, result: GameResult);
}

/// Renderer that ignores everything, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_board(&mut self, _board: &Board, _selected: Option<Square>, _turn: Color) {}
    fn play_cue(&mut self, _cue: Cue) {}
    fn announce(&mut self, _result: GameResult) {}
}
