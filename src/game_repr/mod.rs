mod board;
mod check;
mod game_state;
mod moves;
mod piece;
mod piece_moves;
mod square;

#[cfg(test)]
mod tests;

pub use board::*;
pub use game_state::*;
pub use moves::*;
pub use piece::*;
pub use square::*;
