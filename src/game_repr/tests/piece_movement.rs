use super::*;

// ==================== SLIDER AND KNIGHT TESTS ====================

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::standard();

    assert!(board.is_legal(mv((7, 1), (5, 2))));
    assert!(board.is_legal(mv((7, 1), (5, 0))));
    assert!(!board.is_legal(mv((7, 1), (6, 3))), "own pawn on the destination");
    assert!(!board.is_legal(mv((7, 1), (5, 1))), "not an L shape");
}

#[test]
fn test_knight_all_offsets() {
    let mut board = empty_board();
    place_piece(&mut board, 4, 4, Color::Black, Type::Knight);

    let moves = board.safe_moves(Color::Black);
    assert_eq!(moves.len(), 8);
    for (dr, dc) in [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)] {
        let to = ((4 + dr) as u8, (4 + dc) as u8);
        assert!(has_move(&moves, (4, 4), to), "missing knight offset ({}, {})", dr, dc);
    }
}

#[test]
fn test_rook_lines_and_blockers() {
    let mut board = empty_board();
    place_piece(&mut board, 4, 4, Color::White, Type::Rook);
    place_piece(&mut board, 4, 2, Color::Black, Type::Pawn);
    place_piece(&mut board, 1, 4, Color::White, Type::Pawn);

    assert!(board.is_legal(mv((4, 4), (4, 7))));
    assert!(board.is_legal(mv((4, 4), (7, 4))));
    assert!(board.is_legal(mv((4, 4), (4, 2))), "capture the blocker");
    assert!(!board.is_legal(mv((4, 4), (4, 1))), "path blocked");
    assert!(board.is_legal(mv((4, 4), (2, 4))));
    assert!(!board.is_legal(mv((4, 4), (1, 4))), "own piece");
    assert!(!board.is_legal(mv((4, 4), (0, 4))), "path blocked by own piece");
    assert!(!board.is_legal(mv((4, 4), (3, 3))), "rooks don't move diagonally");
}

#[test]
fn test_rook_blocked_in_starting_position() {
    let board = Board::standard();
    assert!(!board.is_legal(mv((7, 0), (5, 0))));
    assert!(!board.is_legal(mv((0, 7), (0, 5))));
}

#[test]
fn test_bishop_diagonals() {
    let mut board = empty_board();
    place_piece(&mut board, 4, 4, Color::Black, Type::Bishop);
    place_piece(&mut board, 6, 6, Color::White, Type::Knight);

    assert!(board.is_legal(mv((4, 4), (1, 1))));
    assert!(board.is_legal(mv((4, 4), (7, 1))));
    assert!(board.is_legal(mv((4, 4), (6, 6))), "capture");
    assert!(!board.is_legal(mv((4, 4), (7, 7))), "behind the knight");
    assert!(!board.is_legal(mv((4, 4), (4, 6))), "bishops don't move sideways");
    assert!(!board.is_legal(mv((4, 4), (2, 5))), "not a diagonal");
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let mut board = empty_board();
    place_piece(&mut board, 3, 3, Color::White, Type::Queen);

    assert!(board.is_legal(mv((3, 3), (3, 7))));
    assert!(board.is_legal(mv((3, 3), (0, 3))));
    assert!(board.is_legal(mv((3, 3), (0, 0))));
    assert!(board.is_legal(mv((3, 3), (7, 7))));
    assert!(!board.is_legal(mv((3, 3), (5, 4))), "knight jump");

    // 7 + 7 straight, 13 diagonal squares from d5
    assert_eq!(board.safe_moves(Color::White).len(), 27);
}

#[test]
fn test_never_legal_onto_own_piece() {
    let mut midgame = Board::standard();
    midgame.apply(mv((6, 4), (4, 4)));
    midgame.apply(mv((1, 3), (3, 3)));
    midgame.apply(mv((7, 6), (5, 5)));
    midgame.apply(mv((0, 2), (4, 6)));

    for board in [Board::standard(), midgame] {
        for (from, piece) in board.pieces() {
            for to in Square::all() {
                if board.piece_at(to).map_or(false, |p| p.is(piece.color)) {
                    assert!(
                        !board.is_legal(Move::new(from, to)),
                        "{:?} on {} may not land on own piece at {}",
                        piece,
                        from,
                        to
                    );
                }
            }
        }
    }
}

#[test]
fn test_empty_source_is_never_legal() {
    let board = Board::standard();
    assert!(!board.is_legal(mv((4, 4), (3, 4))));
}

#[test]
fn test_twenty_moves_in_starting_position() {
    let board = Board::standard();
    assert_eq!(board.safe_moves(Color::White).len(), 20);
    assert_eq!(board.safe_moves(Color::Black).len(), 20);
}
