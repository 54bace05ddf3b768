//! GreedyPlayer - the automated opponent
//!
//! Wraps [`select_move`](super::select_move) with a difficulty level and its own
//! random number generator so it can sit behind the [`Player`] trait next to
//! any other move source.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{select_move, Difficulty};
use crate::agent::player::Player;
use crate::game_repr::{Board, Color, Move};

pub struct GreedyPlayer {
    difficulty: Difficulty,
    rng: StdRng,
    name: String,
}

impl GreedyPlayer {
    /// Create a player seeded from system entropy
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_rng(difficulty, StdRng::from_entropy())
    }

    /// Create a player whose random choices are reproducible
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn from_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            rng,
            name: format!("AI ({})", difficulty.name()),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.name = format!("AI ({})", difficulty.name());
    }
}

impl Player for GreedyPlayer {
    fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        select_move(board, color, self.difficulty, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
