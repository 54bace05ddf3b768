//! Game configuration.
//!
//! A [`GameConfig`] says who plays each side, how strong the automated side is,
//! how long it "thinks" before replying and, optionally, a seed that makes its
//! random choices reproducible.

use std::time::Duration;

use crate::agent::ai::Difficulty;
use crate::game_repr::Color;

/// Pause before the automated side replies to a human move
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(300);

/// Configuration for a single side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Moves arrive through `attempt_move` / `select_square`
    Human,
    /// Automated side with the given difficulty
    AI { difficulty: Difficulty },
}

/// Game mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player - two humans on one board
    PvP,
    /// Player vs AI - one human, one automated side
    PvAI,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub white_player: PlayerConfig,
    pub black_player: PlayerConfig,
    /// Delay between a human move and the automated reply
    pub reply_delay: Duration,
    /// Seed for the automated side's random choices; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    /// Human White against a Medium automated Black
    fn default() -> Self {
        Self::pvai(Color::White, Difficulty::default())
    }
}

impl GameConfig {
    /// Create a PvP game configuration.
    pub fn pvp() -> Self {
        Self {
            mode: GameMode::PvP,
            white_player: PlayerConfig::Human,
            black_player: PlayerConfig::Human,
            reply_delay: DEFAULT_REPLY_DELAY,
            seed: None,
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `user_color` - The color the human player will play as
    /// * `ai_difficulty` - The difficulty level for the automated opponent
    pub fn pvai(user_color: Color, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::AI {
            difficulty: ai_difficulty,
        };
        let (white_player, black_player) = match user_color {
            Color::White => (PlayerConfig::Human, ai),
            Color::Black => (ai, PlayerConfig::Human),
        };

        Self {
            mode: GameMode::PvAI,
            white_player,
            black_player,
            reply_delay: DEFAULT_REPLY_DELAY,
            seed: None,
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }

    /// The side played by the engine, if any
    pub fn automated_color(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&c| matches!(self.player(c), PlayerConfig::AI { .. }))
    }

    /// Difficulty of the automated side, if any
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.automated_color().and_then(|c| match self.player(c) {
            PlayerConfig::AI { difficulty } => Some(difficulty),
            PlayerConfig::Human => None,
        })
    }

    /// Change the automated side's difficulty; no effect in PvP
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        for slot in [&mut self.white_player, &mut self.black_player] {
            if let PlayerConfig::AI { .. } = slot {
                *slot = PlayerConfig::AI { difficulty };
            }
        }
    }
}
