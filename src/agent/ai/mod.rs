// Automated opponent: material evaluation plus a one-ply, difficulty-driven
// move picker.
//
// Key features:
// - Pure selection: the board is only read, candidate moves are tried on copies
// - Easy picks at random, Medium and Hard pick the best material outcome
// - Randomness is injected, so tests can seed it

mod difficulty;
mod evaluation;
mod greedy_player;
mod selector;

#[cfg(test)]
mod tests;

pub use difficulty::Difficulty;
pub use evaluation::{evaluate, score_for};
pub use greedy_player::GreedyPlayer;
pub use selector::{candidates, select_move, Candidate};
