// Single-ply move selection.
//
// Candidates are the safe moves of the selecting side in enumeration order
// (source square row-major, then destination row-major), each scored on the
// board it produces. The difficulty picks one of them.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use super::evaluation::score_for;
use super::Difficulty;
use crate::game_repr::{Board, Color, Move};

/// A safe move and the score of the position it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub mv: Move,
    pub score: i32,
}

/// Every safe move for `color`, scored from `color`'s point of view.
///
/// Each move is tried on a private copy of `board`.
pub fn candidates(board: &Board, color: Color) -> SmallVec<[Candidate; 64]> {
    board
        .candidate_moves(color)
        .filter(|&mv| board.is_legal(mv))
        .filter_map(|mv| {
            let next = board.with_move(mv);
            if next.is_in_check(color) {
                None
            } else {
                Some(Candidate {
                    mv,
                    score: score_for(&next, color),
                })
            }
        })
        .collect()
}

/// Pick a move for `color` according to `difficulty`.
///
/// Returns `None` when `color` has no safe move.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let candidates = candidates(board, color);

    let chosen = match difficulty {
        Difficulty::Easy => candidates.choose(rng).copied(),
        Difficulty::Medium => first_best(&candidates),
        Difficulty::Hard => last_best(&candidates),
    };

    match chosen {
        Some(c) => {
            log::debug!(
                "{:?} ({}) picked {} scoring {} out of {} candidates",
                color,
                difficulty,
                c.mv,
                c.score,
                candidates.len()
            );
            Some(c.mv)
        }
        None => {
            log::debug!("{:?} has no candidate move", color);
            None
        }
    }
}

/// Highest score; among equals the earliest enumerated
fn first_best(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.iter().copied().fold(None, |best, c| match best {
        Some(b) if b.score >= c.score => Some(b),
        _ => Some(c),
    })
}

/// Highest score; among equals the latest enumerated
fn last_best(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.iter().copied().fold(None, |best, c| match best {
        Some(b) if b.score > c.score => Some(b),
        _ => Some(c),
    })
}
