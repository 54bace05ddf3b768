// Tests for candidate generation and difficulty policies

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::ai::{candidates, evaluate, select_move, Difficulty};
use crate::game_repr::{Board, Color, Move, Square};

fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::new(Square::new(from.0, from.1), Square::new(to.0, to.1))
}

/// Black queen on d5 can take either a white rook (a5) or a white knight (d2)
fn capture_choice() -> Board {
    Board::from_fen("4k3/8/8/R2q4/8/8/3N4/4K3").unwrap()
}

#[test]
fn test_candidates_are_safe_and_scored() {
    let board = capture_choice();
    let list = candidates(&board, Color::Black);

    assert!(!list.is_empty());
    for c in &list {
        assert!(board.is_safe_move(c.mv, Color::Black), "{} is not safe", c.mv);
        assert_eq!(c.score, evaluate(&board.with_move(c.mv)));
    }
    assert_eq!(list.len(), board.safe_moves(Color::Black).len());
}

#[test]
fn test_medium_and_hard_take_the_rook() {
    let board = capture_choice();
    let mut rng = StdRng::seed_from_u64(7);

    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        for _ in 0..5 {
            assert_eq!(
                select_move(&board, Color::Black, difficulty, &mut rng),
                Some(mv((3, 3), (3, 0))),
                "{} should grab the rook",
                difficulty
            );
        }
    }
}

#[test]
fn test_greedy_selection_is_maximal() {
    let board = capture_choice();
    let best = candidates(&board, Color::Black)
        .iter()
        .map(|c| c.score)
        .max()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let chosen = select_move(&board, Color::Black, Difficulty::Medium, &mut rng).unwrap();
    assert_eq!(evaluate(&board.with_move(chosen)), best);
}

#[test]
fn test_tie_breaking_by_enumeration_order() {
    // Every opening move keeps material level, so all 20 candidates tie
    let board = Board::standard();
    let list = candidates(&board, Color::Black);
    assert_eq!(list.len(), 20);
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        select_move(&board, Color::Black, Difficulty::Medium, &mut rng),
        Some(list[0].mv)
    );
    assert_eq!(
        select_move(&board, Color::Black, Difficulty::Hard, &mut rng),
        Some(list[list.len() - 1].mv)
    );
    // Knight b8 is the first black piece found with a move
    assert_eq!(list[0].mv, mv((0, 1), (2, 0)));
}

#[test]
fn test_easy_is_random() {
    let board = capture_choice();
    let mut rng = StdRng::seed_from_u64(1234);

    let picks: HashSet<Move> = (0..200)
        .filter_map(|_| select_move(&board, Color::Black, Difficulty::Easy, &mut rng))
        .collect();

    assert!(picks.len() > 1, "easy should not always pick the same move");
    let legal = board.safe_moves(Color::Black);
    assert!(picks.iter().all(|m| legal.contains(m)));
}

#[test]
fn test_no_candidate_means_none() {
    // Black is stalemated
    let board = Board::from_fen("k7/8/1Q6/8/8/8/8/7K").unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    for &difficulty in Difficulty::all() {
        assert_eq!(select_move(&board, Color::Black, difficulty, &mut rng), None);
    }
}

#[test]
fn test_selector_avoids_self_check() {
    // The black rook on e7 is pinned against its king
    let board = Board::from_fen("4k3/4r3/8/8/8/8/8/4R2K").unwrap();
    let list = candidates(&board, Color::Black);

    assert!(list.iter().all(|c| c.mv.from != Square::new(1, 4) || c.mv.to.col() == 4));
}

#[test]
fn test_selector_plays_white_too() {
    let board = Board::from_fen("4k3/8/8/8/3r4/8/8/3QK3").unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        select_move(&board, Color::White, Difficulty::Hard, &mut rng),
        Some(mv((7, 3), (4, 3)))
    );
}
